//! Chain-specific bech32 address codec.
//!
//! Two layers: [`bech32`] implements the raw 5-bit alphabet, polymod
//! checksum, and bit-width conversion; [`address`] builds human-readable
//! addresses and script-public-keys on top of it.

pub mod address;
pub mod bech32;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("invalid format: {0}")]
    InvalidFormat(String),

    #[error("invalid address: {0}")]
    InvalidAddress(String),
}

pub type Result<T> = std::result::Result<T, CodecError>;

impl From<CodecError> for wallet_types::WalletError {
    fn from(err: CodecError) -> Self {
        wallet_types::WalletError::InvalidAddress(err.to_string())
    }
}
