//! Canonical serialization, the sighash construction, and the stateful
//! transaction builder.
//!
//! [`serializer`] holds the shared little-endian primitive writer and the
//! Mode-A (transaction-id) layout; [`sighash`] builds the Mode-B digest
//! per input; [`builder`] is the only stateful piece -- everything else in
//! this crate is pure functions over byte buffers.

pub mod builder;
pub mod serializer;
pub mod sighash;
pub mod txid;

pub use builder::TxBuilder;
pub use sighash::SighashEngine;
pub use txid::transaction_id;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TxError {
    #[error("invalid transaction: {0}")]
    InvalidTransaction(String),

    #[error("insufficient funds: have {available}, need {required}")]
    InsufficientFunds { available: u64, required: u64 },

    #[error("too many recipients: {count} exceeds the cap of {cap}")]
    TooManyRecipients { count: usize, cap: usize },

    #[error("serialization error: {0}")]
    SerializationError(String),
}

pub type Result<T> = std::result::Result<T, TxError>;

impl From<TxError> for wallet_types::WalletError {
    fn from(err: TxError) -> Self {
        match err {
            TxError::InvalidTransaction(m) => wallet_types::WalletError::InvalidTransaction(m),
            TxError::InsufficientFunds { available, required } => {
                wallet_types::WalletError::InsufficientFunds { available, required }
            }
            TxError::TooManyRecipients { count, cap } => wallet_types::WalletError::TooManyRecipients { count, cap },
            TxError::SerializationError(m) => wallet_types::WalletError::SerializationError(m),
        }
    }
}

impl From<wallet_codec::CodecError> for TxError {
    fn from(err: wallet_codec::CodecError) -> Self {
        TxError::InvalidTransaction(err.to_string())
    }
}

impl From<wallet_crypto::CryptoError> for TxError {
    fn from(err: wallet_crypto::CryptoError) -> Self {
        match err {
            wallet_crypto::CryptoError::InvalidKey(m) => TxError::InvalidTransaction(m),
            wallet_crypto::CryptoError::SigningError(m) => TxError::SerializationError(m),
        }
    }
}
