/// The two networks the core knows how to address transactions for.
///
/// Regtest/devnet prefixes are a matter of node configuration, not of this
/// core; callers that need a third prefix can still drive `AddressCodec`
/// directly with a raw prefix string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Network {
    Mainnet,
    Testnet,
}

impl Network {
    pub fn address_prefix(self) -> &'static str {
        match self {
            Network::Mainnet => "hoosat",
            Network::Testnet => "hoosattest",
        }
    }
}
