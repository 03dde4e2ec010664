//! Shared value types for the wallet core: the in-memory transaction shape,
//! the sighash cache, and the union error type every other crate in the
//! workspace converts into at its boundary.

mod error;
mod network;
mod sighash_type;
mod tx;

pub use error::WalletError;
pub use network::Network;
pub use sighash_type::{SigHashType, SIG_HASH_ALL, SIG_HASH_ANYONECANPAY, SIG_HASH_NONE, SIG_HASH_SINGLE};
pub use tx::{
    AddressVersion, Outpoint, ScriptPublicKey, SighashReusedValues, Transaction, TxInput, TxOutput,
    UtxoForSigning, HASH_SIZE, SUBNETWORK_ID_NATIVE, SUBNETWORK_ID_SIZE,
};

/// One coin, expressed in base units.
pub const BASE_UNITS_PER_COIN: u64 = 100_000_000;
