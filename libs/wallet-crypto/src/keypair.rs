use crate::{CryptoError, Result};
use rand::rngs::OsRng;
use rand::RngCore;
use secp256k1::{PublicKey, Secp256k1, SecretKey};
use zeroize::{Zeroize, Zeroizing};

/// A validated secp256k1 keypair plus its two derived public-key forms.
///
/// The secret scalar is kept in a [`Zeroizing`] buffer so it is wiped on
/// drop, and is never included in `Debug` output -- only the two public
/// forms are printed, and even those go through `wallet-utils`'s truncation
/// helper at the application layer.
pub struct KeyPair {
    secret: Zeroizing<[u8; 32]>,
    compressed_public_key: [u8; 33],
    x_only_public_key: [u8; 32],
}

impl KeyPair {
    fn from_secret(secret: SecretKey) -> Self {
        let secp = Secp256k1::new();
        let compressed_public_key = PublicKey::from_secret_key(&secp, &secret).serialize();
        let (x_only, _parity) = secret.x_only_public_key(&secp);
        Self {
            secret: Zeroizing::new(secret.secret_bytes()),
            compressed_public_key,
            x_only_public_key: x_only.serialize(),
        }
    }

    /// Draws 32 cryptographically random bytes, redrawing until the scalar
    /// lies in `(0, n)`, and derives both public-key forms.
    pub fn generate() -> Self {
        let mut rng = OsRng;
        loop {
            let mut candidate = [0u8; 32];
            rng.fill_bytes(&mut candidate);
            if let Ok(secret) = SecretKey::from_slice(&candidate) {
                candidate.zeroize();
                return Self::from_secret(secret);
            }
        }
    }

    /// Validates a raw 32-byte scalar and derives both public-key forms.
    /// Fails with `InvalidKey` when the scalar is zero or `>= n`.
    pub fn import(secret_bytes: &[u8]) -> Result<Self> {
        let secret = SecretKey::from_slice(secret_bytes)
            .map_err(|e| CryptoError::InvalidKey(format!("secret scalar out of range: {e}")))?;
        Ok(Self::from_secret(secret))
    }

    pub fn compressed_public_key(&self) -> [u8; 33] {
        self.compressed_public_key
    }

    pub fn x_only_public_key(&self) -> [u8; 32] {
        self.x_only_public_key
    }

    pub(crate) fn secret_key(&self) -> SecretKey {
        SecretKey::from_slice(&*self.secret).expect("scalar was validated at construction")
    }
}

impl std::fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyPair")
            .field("compressed_public_key", &hex::encode(self.compressed_public_key))
            .field("x_only_public_key", &hex::encode(self.x_only_public_key))
            .finish()
    }
}
