//! Shared helpers: address parsing and rent accounting.

use solana_sdk::pubkey::Pubkey;
use std::str::FromStr;

use crate::constants::{ LAMPORTS_PER_SOL, TOKEN_ACCOUNT_RENT_LAMPORTS };
use crate::errors::ReclaimError;

/// Parse a base58 address, failing with `InvalidAddress` on malformed input.
///
/// Both core operations call this before touching the network.
pub fn parse_address(address: &str) -> Result<Pubkey, ReclaimError> {
    Pubkey::from_str(address).map_err(|e| ReclaimError::invalid_address(address, e.to_string()))
}

/// Rent reclaimable by closing `count` standard token accounts, in lamports
pub fn reclaimable_rent_lamports(count: usize) -> u64 {
    (count as u64) * TOKEN_ACCOUNT_RENT_LAMPORTS
}

pub fn lamports_to_sol(lamports: u64) -> f64 {
    (lamports as f64) / (LAMPORTS_PER_SOL as f64)
}

/// First eight characters of an address for log output.
///
/// Endpoint-supplied strings are not guaranteed to be full-length pubkeys,
/// so the truncation is checked; short input comes back unchanged.
pub fn short_id(address: &str) -> &str {
    address.get(..8).unwrap_or(address)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_address() {
        let parsed = parse_address("TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA");
        assert!(parsed.is_ok());
    }

    #[test]
    fn rejects_malformed_address() {
        let err = parse_address("not-a-base58-address").unwrap_err();
        assert!(matches!(err, ReclaimError::InvalidAddress { .. }));
    }

    #[test]
    fn rejects_wrong_length_address() {
        // Valid base58 but too short to be a 32-byte key
        let err = parse_address("abc").unwrap_err();
        assert!(matches!(err, ReclaimError::InvalidAddress { .. }));
    }

    #[test]
    fn short_id_truncates_full_addresses() {
        assert_eq!(short_id("TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA"), "Tokenkeg");
    }

    #[test]
    fn short_id_passes_short_or_odd_input_through() {
        // An endpoint handing back a short or malformed id must not panic
        assert_eq!(short_id("abc"), "abc");
        assert_eq!(short_id(""), "");
        // Byte 8 splits the euro sign; the cut must fall back to the full string
        assert_eq!(short_id("ααα€xyz"), "ααα€xyz");
    }

    #[test]
    fn rent_estimate_scales_with_count() {
        assert_eq!(reclaimable_rent_lamports(0), 0);
        assert_eq!(reclaimable_rent_lamports(3), 3 * TOKEN_ACCOUNT_RENT_LAMPORTS);
        let sol = lamports_to_sol(reclaimable_rent_lamports(1));
        assert!((sol - 0.00203928).abs() < 1e-12);
    }
}
