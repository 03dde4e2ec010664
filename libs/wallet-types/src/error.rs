use thiserror::Error;

/// Union error type returned across every public crate boundary of the
/// wallet core. Crate-local errors (`CodecError`, `CryptoError`, `TxError`)
/// convert into this via hand-written `impl From<_> for WalletError` blocks
/// in each crate's `lib.rs`, so `?` still works at the boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WalletError {
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    #[error("invalid key: {0}")]
    InvalidKey(String),

    #[error("invalid transaction: {0}")]
    InvalidTransaction(String),

    #[error("insufficient funds: have {available}, need {required}")]
    InsufficientFunds { available: u64, required: u64 },

    #[error("too many recipients: {count} exceeds the cap of {cap}")]
    TooManyRecipients { count: usize, cap: usize },

    #[error("serialization error: {0}")]
    SerializationError(String),

    #[error("signing error: {0}")]
    SigningError(String),
}
