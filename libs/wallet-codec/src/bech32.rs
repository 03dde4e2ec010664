//! The chain's bech32 variant. Shares the data alphabet with standard
//! bech32/bech32m but uses its own 35-bit polymod generator and an
//! 8-character checksum, so it is neither bech32 nor bech32m: encode and
//! decode must both run through this module, never the generic `bech32`
//! crate.

use crate::{CodecError, Result};

pub const CHARSET: &[u8; 32] = b"qpzry9x8gf2tvdw0s3jn54khce6mua7l";
pub const CHECKSUM_LENGTH: usize = 8;

const GENERATOR: [u64; 5] = [0x98_f2bc_8e61, 0x79_b76d_99e2, 0xf3_3e5f_b3c4, 0xae_2eab_e2a8, 0x1e_4f43_e470];

fn charset_index(c: u8) -> Option<u8> {
    CHARSET.iter().position(|&x| x == c).map(|i| i as u8)
}

fn prefix_to_5bit(prefix: &str) -> Vec<u8> {
    prefix.bytes().map(|b| b & 0x1f).collect()
}

fn polymod(values: &[u8]) -> u64 {
    let mut checksum: u64 = 1;
    for &d in values {
        let top = (checksum >> 35) as u8;
        checksum = ((checksum & 0x07_ffff_ffff) << 5) ^ u64::from(d);
        for (i, gen) in GENERATOR.iter().enumerate() {
            if top & (1 << i) != 0 {
                checksum ^= gen;
            }
        }
    }
    checksum ^ 1
}

fn checksum_digits(prefix: &str, data: &[u8]) -> [u8; CHECKSUM_LENGTH] {
    let mut values = prefix_to_5bit(prefix);
    values.push(0);
    values.extend_from_slice(data);
    values.extend_from_slice(&[0u8; CHECKSUM_LENGTH]);

    let checksum = polymod(&values);
    let mut digits = [0u8; CHECKSUM_LENGTH];
    for (i, digit) in digits.iter_mut().enumerate() {
        let shift = 5 * (CHECKSUM_LENGTH - 1 - i);
        *digit = ((checksum >> shift) & 0x1f) as u8;
    }
    digits
}

/// Repacks `data` from `from_bits`-wide groups into `to_bits`-wide groups.
/// When `pad` is true, the final partial group is zero-padded and kept;
/// when false, a non-zero partial group is rejected as malformed padding.
pub fn convert_bits(data: &[u8], from_bits: u32, to_bits: u32, pad: bool) -> Result<Vec<u8>> {
    let mut acc: u32 = 0;
    let mut bits: u32 = 0;
    let max_out_value = (1u32 << to_bits) - 1;
    let mut out = Vec::with_capacity(data.len() * from_bits as usize / to_bits as usize + 1);

    for &value in data {
        let value = u32::from(value);
        if value >> from_bits != 0 {
            return Err(CodecError::InvalidFormat("input value exceeds declared bit width".into()));
        }
        acc = (acc << from_bits) | value;
        bits += from_bits;
        while bits >= to_bits {
            bits -= to_bits;
            out.push(((acc >> bits) & max_out_value) as u8);
        }
    }

    if pad {
        if bits > 0 {
            out.push(((acc << (to_bits - bits)) & max_out_value) as u8);
        }
    } else if bits >= from_bits || ((acc << (to_bits - bits)) & max_out_value) != 0 {
        return Err(CodecError::InvalidFormat("trailing non-zero padding bits".into()));
    }

    Ok(out)
}

/// Encodes `prefix:version||payload` as a human-readable address string.
pub fn encode(prefix: &str, version: u8, payload: &[u8]) -> Result<String> {
    if prefix.is_empty() || !prefix.bytes().all(|b| b.is_ascii_lowercase()) {
        return Err(CodecError::InvalidFormat("prefix must be non-empty lowercase ascii".into()));
    }

    let mut versioned_payload = Vec::with_capacity(payload.len() + 1);
    versioned_payload.push(version);
    versioned_payload.extend_from_slice(payload);

    let five_bit = convert_bits(&versioned_payload, 8, 5, true)?;
    let checksum = checksum_digits(prefix, &five_bit);

    let mut out = String::with_capacity(prefix.len() + 1 + five_bit.len() + CHECKSUM_LENGTH);
    out.push_str(prefix);
    out.push(':');
    for &v in &five_bit {
        out.push(CHARSET[v as usize] as char);
    }
    for &v in &checksum {
        out.push(CHARSET[v as usize] as char);
    }
    Ok(out)
}

/// Decodes a `prefix:data` address string into `(version, payload)`.
pub fn decode(address: &str) -> Result<(String, u8, Vec<u8>)> {
    let (prefix, data) = address
        .split_once(':')
        .ok_or_else(|| CodecError::InvalidFormat("missing ':' prefix separator".into()))?;

    if prefix.is_empty() {
        return Err(CodecError::InvalidFormat("missing prefix".into()));
    }
    if data.len() < CHECKSUM_LENGTH {
        return Err(CodecError::InvalidFormat("data too short to contain a checksum".into()));
    }
    if data.bytes().any(|b| b.is_ascii_uppercase()) {
        return Err(CodecError::InvalidFormat("address must be lowercase".into()));
    }

    let mut five_bit = Vec::with_capacity(data.len());
    for b in data.bytes() {
        five_bit.push(charset_index(b).ok_or_else(|| CodecError::InvalidFormat(format!("unknown character '{}'", b as char)))?);
    }

    let (payload_digits, checksum_digits_actual) = five_bit.split_at(five_bit.len() - CHECKSUM_LENGTH);

    let mut check_input = prefix_to_5bit(prefix);
    check_input.push(0);
    check_input.extend_from_slice(payload_digits);
    check_input.extend_from_slice(checksum_digits_actual);
    if polymod(&check_input) != 0 {
        return Err(CodecError::InvalidFormat("checksum mismatch".into()));
    }

    let versioned_payload = convert_bits(payload_digits, 5, 8, false)?;
    let (version, payload) = versioned_payload
        .split_first()
        .ok_or_else(|| CodecError::InvalidFormat("empty payload".into()))?;

    Ok((prefix.to_string(), *version, payload.to_vec()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn round_trip_schnorr_payload() {
        let payload = [0x42u8; 32];
        let encoded = encode("hoosat", 0x00, &payload).unwrap();
        assert!(encoded.starts_with("hoosat:"));
        let (prefix, version, decoded_payload) = decode(&encoded).unwrap();
        assert_eq!(prefix, "hoosat");
        assert_eq!(version, 0x00);
        assert_eq!(decoded_payload, payload);
    }

    #[test]
    fn round_trip_ecdsa_payload() {
        let payload = [0x07u8; 33];
        let encoded = encode("hoosattest", 0x01, &payload).unwrap();
        let (_, version, decoded_payload) = decode(&encoded).unwrap();
        assert_eq!(version, 0x01);
        assert_eq!(decoded_payload, payload);
    }

    #[test]
    fn rejects_unknown_character() {
        let payload = [0u8; 32];
        let encoded = encode("hoosat", 0x00, &payload).unwrap();
        let mangled = format!("{}1", encoded); // '1' is not in the data charset
        assert!(decode(&mangled).is_err());
    }

    #[test]
    fn rejects_bit_flip_in_checksum() {
        let payload = [0xAAu8; 32];
        let mut encoded = encode("hoosat", 0x00, &payload).unwrap();
        let last = encoded.pop().unwrap();
        let replacement = if last == 'q' { 'p' } else { 'q' };
        encoded.push(replacement);
        assert!(decode(&encoded).is_err());
    }

    #[test]
    fn rejects_missing_prefix() {
        assert!(decode("qqqqqqqq").is_err());
    }

    #[test]
    fn convert_bits_rejects_nonzero_padding() {
        // 0b11111_000 with 3 leftover non-zero bits when unpadding 5->8.
        let five_bit = vec![0b11111, 0b00001];
        assert!(convert_bits(&five_bit, 5, 8, false).is_err());
    }

    proptest! {
        /// Any lowercase prefix and arbitrary payload survives an
        /// encode/decode round trip unchanged, for every version byte.
        #[test]
        fn encode_decode_round_trips(
            version: u8,
            payload in prop::collection::vec(any::<u8>(), 1..64),
        ) {
            let encoded = encode("hoosat", version, &payload).unwrap();
            let (prefix, decoded_version, decoded_payload) = decode(&encoded).unwrap();
            prop_assert_eq!(prefix, "hoosat");
            prop_assert_eq!(decoded_version, version);
            prop_assert_eq!(decoded_payload, payload);
        }
    }
}
