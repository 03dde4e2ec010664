//! Public facade for the client-side wallet core: everything a spender
//! needs to turn an owned private key plus a set of unspent outputs into a
//! signed, network-acceptable transaction, with no RPC transport or
//! persistent storage of its own.
//!
//! The heavy lifting lives in the `wallet-*` library crates this re-exports;
//! this crate's own code is the two RPC-shaped collaborator traits a caller
//! implements to hand the estimator and builder live chain data.

pub use wallet_codec::address::{decode_address, encode_address};
pub use wallet_codec::bech32;
pub use wallet_crypto::signer::{sign_input, SignatureKind};
pub use wallet_crypto::KeyPair;
pub use wallet_fees::{calculate_mass, min_fee, FeeEstimator, FeeRecommendations, MempoolEntry, Priority};
pub use wallet_tx::{transaction_id, SighashEngine, TxBuilder};
pub use wallet_types::{
    AddressVersion, Network, Outpoint, ScriptPublicKey, SigHashType, SighashReusedValues, Transaction, TxInput,
    TxOutput, UtxoForSigning, WalletError,
};
pub use wallet_utils::{base_units_to_coins, coins_to_base_units, is_valid_address, is_valid_txid_hex, truncate_hex};

/// Fetches the unspent outputs an address set controls. Implemented by the
/// embedding application against its own RPC client; this core never makes
/// a network call.
pub trait UtxoSource {
    fn get_utxos_by_addresses(&self, addresses: &[String]) -> Result<Vec<UtxoForSigning>, WalletError>;
}

/// Fetches the mempool sample the fee-rate estimator works from.
pub trait MempoolSource {
    fn get_mempool_entries(&self) -> Result<Vec<MempoolEntry>, WalletError>;
}
