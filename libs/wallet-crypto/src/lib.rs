//! Key management and signing over secp256k1.
//!
//! [`keypair`] validates and derives the two public-key forms the chain's
//! script templates use; [`signer`] turns a digest into the signature-script
//! bytes a `TxInput` carries on the wire.

pub mod keypair;
pub mod signer;

pub use keypair::KeyPair;
pub use signer::sign_input;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CryptoError {
    #[error("invalid key: {0}")]
    InvalidKey(String),

    #[error("signing error: {0}")]
    SigningError(String),
}

pub type Result<T> = std::result::Result<T, CryptoError>;

impl From<CryptoError> for wallet_types::WalletError {
    fn from(err: CryptoError) -> Self {
        match err {
            CryptoError::InvalidKey(msg) => wallet_types::WalletError::InvalidKey(msg),
            CryptoError::SigningError(msg) => wallet_types::WalletError::SigningError(msg),
        }
    }
}
