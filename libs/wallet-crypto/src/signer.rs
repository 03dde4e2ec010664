use crate::{CryptoError, KeyPair, Result};
use secp256k1::{Keypair, Message, Secp256k1};
use wallet_types::SigHashType;

/// Which of the two signature algorithms to apply. The caller picks this
/// based on the script-public-key template of the spent utxo -- the Signer
/// itself has no opinion about which one is "correct" for a given input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignatureKind {
    Schnorr,
    Ecdsa,
}

/// Signs `digest` (the sighash for one input) and assembles the
/// signature-script: `0x41 || sig(64) || sighash-type(1)`, 66 bytes total.
/// No public key is appended -- the spent script-public-key already
/// supplies it.
pub fn sign_input(keypair: &KeyPair, digest: &[u8; 32], sighash_type: SigHashType, kind: SignatureKind) -> Result<Vec<u8>> {
    let secp = Secp256k1::new();
    let message = Message::from_digest_slice(digest).map_err(|e| CryptoError::SigningError(e.to_string()))?;

    let signature: [u8; 64] = match kind {
        SignatureKind::Ecdsa => {
            let mut sig = secp
                .sign_ecdsa(&message, &keypair.secret_key());
            sig.normalize_s();
            sig.serialize_compact()
        }
        SignatureKind::Schnorr => {
            let full_keypair = Keypair::from_secret_key(&secp, &keypair.secret_key());
            let sig = secp.sign_schnorr(&message, &full_keypair);
            *sig.as_ref()
        }
    };

    let mut script = Vec::with_capacity(66);
    script.push(0x41);
    script.extend_from_slice(&signature);
    script.push(sighash_type.to_u8());
    Ok(script)
}
