use serde::{Deserialize, Serialize};

/// Number of bytes in a transaction id / script hash.
pub const HASH_SIZE: usize = 32;

/// Number of bytes in a subnetwork id.
pub const SUBNETWORK_ID_SIZE: usize = 20;

/// The native, coin-transfer subnetwork. A non-empty payload is only valid
/// once the transaction targets a different lane.
pub const SUBNETWORK_ID_NATIVE: [u8; SUBNETWORK_ID_SIZE] = [0u8; SUBNETWORK_ID_SIZE];

/// Identifies a previously created output. Serialized byte-reversed inside
/// the transaction-id preimage (§4.4 Mode A) but byte-as-is inside the
/// sighash preimage (§4.5) -- this asymmetry is deliberate, see DESIGN.md.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Outpoint {
    pub transaction_id: [u8; HASH_SIZE],
    pub index: u32,
}

impl Outpoint {
    pub fn new(transaction_id: [u8; HASH_SIZE], index: u32) -> Self {
        Self { transaction_id, index }
    }
}

/// The three script-public-key shapes this core recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AddressVersion {
    Schnorr = 0x00,
    Ecdsa = 0x01,
    ScriptHash = 0x08,
}

impl AddressVersion {
    pub fn from_byte(byte: u8) -> Option<AddressVersion> {
        match byte {
            0x00 => Some(AddressVersion::Schnorr),
            0x01 => Some(AddressVersion::Ecdsa),
            0x08 => Some(AddressVersion::ScriptHash),
            _ => None,
        }
    }

    pub fn to_byte(self) -> u8 {
        self as u8
    }

    /// Length, in bytes, of the payload this version admits.
    pub fn payload_len(self) -> usize {
        match self {
            AddressVersion::Schnorr => 32,
            AddressVersion::Ecdsa => 33,
            AddressVersion::ScriptHash => 32,
        }
    }
}

/// A script-public-key: a version tag plus opaque script bytes. The version
/// is not the same concept as `AddressVersion` -- it is the wire field
/// carried with every output and utxo entry (currently always `0`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScriptPublicKey {
    pub version: u16,
    pub script: Vec<u8>,
}

impl ScriptPublicKey {
    pub fn new(version: u16, script: Vec<u8>) -> Self {
        Self { version, script }
    }

    /// `[0x20][32-byte x-only pubkey][0xAC]`
    pub fn schnorr_p2pk(x_only_pubkey: &[u8; 32]) -> Self {
        let mut script = Vec::with_capacity(34);
        script.push(0x20);
        script.extend_from_slice(x_only_pubkey);
        script.push(0xAC);
        Self::new(0, script)
    }

    /// `[0x21][33-byte compressed pubkey][0xAB]`
    pub fn ecdsa_p2pk(compressed_pubkey: &[u8; 33]) -> Self {
        let mut script = Vec::with_capacity(35);
        script.push(0x21);
        script.extend_from_slice(compressed_pubkey);
        script.push(0xAB);
        Self::new(0, script)
    }

    /// `[0xAA][0x20][32-byte script hash][0x87]`
    pub fn p2sh(script_hash: &[u8; 32]) -> Self {
        let mut script = Vec::with_capacity(35);
        script.push(0xAA);
        script.push(0x20);
        script.extend_from_slice(script_hash);
        script.push(0x87);
        Self::new(0, script)
    }
}

/// A transaction input. `signature_script` starts empty and is written
/// exactly once, by the Signer, during `TxBuilder::sign`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxInput {
    pub previous_outpoint: Outpoint,
    pub signature_script: Vec<u8>,
    pub sequence: u64,
    pub sig_op_count: u8,
}

impl TxInput {
    pub fn new(previous_outpoint: Outpoint, sequence: u64, sig_op_count: u8) -> Self {
        Self { previous_outpoint, signature_script: Vec::new(), sequence, sig_op_count }
    }
}

/// A transaction output: an amount in base units plus the script that locks it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxOutput {
    pub amount: u64,
    pub script_public_key: ScriptPublicKey,
}

impl TxOutput {
    pub fn new(amount: u64, script_public_key: ScriptPublicKey) -> Self {
        Self { amount, script_public_key }
    }
}

/// The in-memory transaction shape, mirroring the wire layout of §4.4.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub version: u16,
    pub inputs: Vec<TxInput>,
    pub outputs: Vec<TxOutput>,
    pub lock_time: u64,
    pub subnetwork_id: [u8; SUBNETWORK_ID_SIZE],
    pub gas: u64,
    pub payload: Vec<u8>,
}

impl Transaction {
    pub fn new(version: u16) -> Self {
        Self {
            version,
            inputs: Vec::new(),
            outputs: Vec::new(),
            lock_time: 0,
            subnetwork_id: SUBNETWORK_ID_NATIVE,
            gas: 0,
            payload: Vec::new(),
        }
    }

    pub fn is_native_subnetwork(&self) -> bool {
        self.subnetwork_id == SUBNETWORK_ID_NATIVE
    }
}

/// The spent-output view the sighash engine needs for one input: the amount
/// and script-public-key are the most commonly forgotten fields when
/// assembling this struct by hand (§3).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UtxoForSigning {
    pub outpoint: Outpoint,
    pub amount: u64,
    pub script_public_key: ScriptPublicKey,
    pub block_daa_score: u64,
    pub is_coinbase: bool,
}

impl UtxoForSigning {
    pub fn new(
        outpoint: Outpoint,
        amount: u64,
        script_public_key: ScriptPublicKey,
        block_daa_score: u64,
        is_coinbase: bool,
    ) -> Self {
        Self { outpoint, amount, script_public_key, block_daa_score, is_coinbase }
    }
}

/// Cache of the four reusable sub-hashes plus the payload hash for one
/// signing pass over a single transaction. Never shared across transactions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SighashReusedValues {
    pub previous_outputs_hash: Option<[u8; HASH_SIZE]>,
    pub sequences_hash: Option<[u8; HASH_SIZE]>,
    pub sig_op_counts_hash: Option<[u8; HASH_SIZE]>,
    pub outputs_hash: Option<[u8; HASH_SIZE]>,
    pub payload_hash: Option<[u8; HASH_SIZE]>,
}

impl SighashReusedValues {
    pub fn new() -> Self {
        Self::default()
    }
}
