// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! General purpose utilities.

use alloy::primitives::{utils::format_units, U256};

use crate::Result;

pub mod color;

/// Renders a wei amount as a human-readable ether string.
///
/// Trailing zeros are trimmed, matching the formatting operators are used to
/// seeing from other deployment tooling: `0.01`, `5.0`, `0.0`.
pub fn format_ether(wei: U256) -> String {
    let Ok(text) = format_units(wei, "ether") else {
        return wei.to_string();
    };
    let trimmed = text.trim_end_matches('0');
    match trimmed.strip_suffix('.') {
        Some(_) => format!("{trimmed}0"),
        None => trimmed.to_string(),
    }
}

/// Decodes a hex string, with or without the `0x` prefix.
pub fn decode0x(text: impl AsRef<str>) -> Result<Vec<u8>, hex::FromHexError> {
    let text = text.as_ref().trim();
    let text = text.strip_prefix("0x").unwrap_or(text);
    hex::decode(text)
}

#[cfg(test)]
mod tests {
    use alloy::primitives::utils::parse_ether;

    use super::*;

    #[test]
    fn format_ether_trims_trailing_zeros() {
        assert_eq!(format_ether(parse_ether("0.01").unwrap()), "0.01");
        assert_eq!(format_ether(parse_ether("5").unwrap()), "5.0");
        assert_eq!(format_ether(U256::ZERO), "0.0");
        assert_eq!(format_ether(U256::from(1u64)), "0.000000000000000001");
    }

    #[test]
    fn decode0x_accepts_both_prefixes() {
        assert_eq!(decode0x("0xdeadbeef").unwrap(), vec![0xde, 0xad, 0xbe, 0xef]);
        assert_eq!(decode0x("deadbeef").unwrap(), vec![0xde, 0xad, 0xbe, 0xef]);
        assert!(decode0x("0xzz").is_err());
    }
}
