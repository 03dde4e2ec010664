//! Amount conversion and lightweight validators built on top of
//! [`wallet_codec`]. Nothing here touches a private key.

use thiserror::Error;
use wallet_types::{Network, BASE_UNITS_PER_COIN};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UtilsError {
    #[error("invalid coin amount: {0}")]
    InvalidAmount(String),

    #[error("amount overflowed base units")]
    AmountOverflow,
}

pub type Result<T> = std::result::Result<T, UtilsError>;

impl From<UtilsError> for wallet_types::WalletError {
    fn from(err: UtilsError) -> Self {
        wallet_types::WalletError::InvalidTransaction(err.to_string())
    }
}

/// Parses a decimal coin amount (e.g. `"1.5"`) into base units, rounding to
/// the nearest base unit. Rejects negative amounts, empty strings, and
/// anything with a non-digit character outside a single decimal point.
pub fn coins_to_base_units(decimal_str: &str) -> Result<u64> {
    let s = decimal_str.trim();
    if s.is_empty() || s.starts_with('-') {
        return Err(UtilsError::InvalidAmount(decimal_str.to_string()));
    }

    let (int_part, frac_part) = s.split_once('.').unwrap_or((s, ""));
    let int_part = if int_part.is_empty() { "0" } else { int_part };

    if int_part.is_empty() || !int_part.bytes().all(|b| b.is_ascii_digit()) || !frac_part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(UtilsError::InvalidAmount(decimal_str.to_string()));
    }

    let int_value: u64 = int_part.parse().map_err(|_| UtilsError::AmountOverflow)?;

    // Keep the 8 significant fractional digits plus one guard digit for
    // rounding; anything shorter is zero-padded.
    let mut digits: Vec<u32> = frac_part.chars().map(|c| c.to_digit(10).expect("validated above")).collect();
    digits.resize(9, 0);

    let mut frac_value: u64 = digits[..8].iter().fold(0u64, |acc, d| acc * 10 + *d as u64);
    if digits[8] >= 5 {
        frac_value += 1;
    }

    int_value
        .checked_mul(BASE_UNITS_PER_COIN)
        .and_then(|whole| whole.checked_add(frac_value))
        .ok_or(UtilsError::AmountOverflow)
}

/// Renders base units as a decimal coin string with exactly 8 fractional
/// digits, trailing zeros included.
pub fn base_units_to_coins(base_units: u64) -> String {
    let whole = base_units / BASE_UNITS_PER_COIN;
    let frac = base_units % BASE_UNITS_PER_COIN;
    format!("{whole}.{frac:08}")
}

/// Swallows `AddressCodec`'s error into a bool, for callers that only need
/// a yes/no answer.
pub fn is_valid_address(address: &str, _network: Network) -> bool {
    wallet_codec::address::decode_address(address).is_ok()
}

/// 64 lowercase hex characters, nothing else.
pub fn is_valid_txid_hex(txid: &str) -> bool {
    txid.len() == 64 && txid.bytes().all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
}

/// Renders the first `keep` bytes as hex followed by an ellipsis, for
/// `Debug` impls that must show a public key without dumping it in full.
pub fn truncate_hex(bytes: &[u8], keep: usize) -> String {
    let keep = keep.min(bytes.len());
    if keep == bytes.len() {
        return hex::encode(bytes);
    }
    format!("{}..", hex::encode(&bytes[..keep]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn coins_to_base_units_handles_whole_numbers() {
        assert_eq!(coins_to_base_units("5").unwrap(), 500_000_000);
    }

    #[test]
    fn coins_to_base_units_handles_fractions() {
        assert_eq!(coins_to_base_units("1.5").unwrap(), 150_000_000);
        assert_eq!(coins_to_base_units("0.00000001").unwrap(), 1);
    }

    #[test]
    fn coins_to_base_units_rounds_to_nearest() {
        assert_eq!(coins_to_base_units("1.123456785").unwrap(), 112_345_679);
        assert_eq!(coins_to_base_units("1.123456784").unwrap(), 112_345_678);
    }

    #[test]
    fn coins_to_base_units_rejects_negative() {
        assert!(coins_to_base_units("-1").is_err());
    }

    #[test]
    fn coins_to_base_units_rejects_garbage() {
        assert!(coins_to_base_units("abc").is_err());
        assert!(coins_to_base_units("").is_err());
    }

    #[test]
    fn base_units_to_coins_round_trips_whole_and_fractional() {
        assert_eq!(base_units_to_coins(500_000_000), "5.00000000");
        assert_eq!(base_units_to_coins(1), "0.00000001");
    }

    #[test]
    fn is_valid_txid_hex_checks_length_and_charset() {
        assert!(is_valid_txid_hex(&"a".repeat(64)));
        assert!(!is_valid_txid_hex(&"A".repeat(64)));
        assert!(!is_valid_txid_hex("abc"));
    }

    #[test]
    fn truncate_hex_shortens_long_buffers() {
        let bytes = [0xAB; 33];
        let truncated = truncate_hex(&bytes, 4);
        assert_eq!(truncated, "abababab..");
    }

    #[test]
    fn truncate_hex_leaves_short_buffers_untouched() {
        let bytes = [0x11; 4];
        assert_eq!(truncate_hex(&bytes, 8), "11111111");
    }

    proptest! {
        /// Every base-unit amount renders to a decimal string that parses
        /// back to the exact same amount -- `base_units_to_coins` never
        /// drops precision `coins_to_base_units` can't recover.
        #[test]
        fn base_units_round_trip_through_coins(base_units: u64) {
            let rendered = base_units_to_coins(base_units);
            let parsed = coins_to_base_units(&rendered).unwrap();
            prop_assert_eq!(parsed, base_units);
        }
    }
}
