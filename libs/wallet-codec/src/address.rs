//! Builds human-readable addresses from public keys and decodes them back
//! into the script-public-key a spender would need to pay into.

use crate::{bech32, CodecError, Result};
use wallet_types::{AddressVersion, Network, ScriptPublicKey};

/// Encodes a public key as an address on `network`.
///
/// Dispatches on key length: 32 bytes is a Schnorr x-only key, 33 bytes is
/// a compressed ECDSA key. Any other length is rejected before the codec
/// is even invoked.
pub fn encode_address(public_key: &[u8], network: Network) -> Result<String> {
    let version = match public_key.len() {
        32 => AddressVersion::Schnorr,
        33 => AddressVersion::Ecdsa,
        other => return Err(CodecError::InvalidAddress(format!("unsupported public key length {other}"))),
    };
    bech32::encode(network.address_prefix(), version.to_byte(), public_key)
}

/// Decodes an address into its version and the script-public-key it locks.
pub fn decode_address(address: &str) -> Result<(AddressVersion, ScriptPublicKey)> {
    let (_prefix, version_byte, payload) = bech32::decode(address)?;
    let version = AddressVersion::from_byte(version_byte)
        .ok_or_else(|| CodecError::InvalidAddress(format!("unknown version byte 0x{version_byte:02x}")))?;

    if payload.len() != version.payload_len() {
        return Err(CodecError::InvalidAddress(format!(
            "payload length {} does not match version 0x{:02x}",
            payload.len(),
            version_byte
        )));
    }

    let script_public_key = match version {
        AddressVersion::Schnorr => {
            let mut key = [0u8; 32];
            key.copy_from_slice(&payload);
            ScriptPublicKey::schnorr_p2pk(&key)
        }
        AddressVersion::Ecdsa => {
            let mut key = [0u8; 33];
            key.copy_from_slice(&payload);
            ScriptPublicKey::ecdsa_p2pk(&key)
        }
        AddressVersion::ScriptHash => {
            let mut hash = [0u8; 32];
            hash.copy_from_slice(&payload);
            ScriptPublicKey::p2sh(&hash)
        }
    };

    Ok((version, script_public_key))
}
