//! GS1 identifier shape checks

use once_cell::sync::Lazy;
use regex::Regex;

/// Number of digits in a GTIN-14
pub const GTIN_LEN: usize = 14;

/// Number of digits in an SSCC
pub const SSCC_LEN: usize = 18;

// ASCII digits only (`\d` is Unicode-aware in the regex crate)
static GTIN_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{14}$").unwrap());

static SSCC_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{18}$").unwrap());

/// Validate a Global Trade Item Number: exactly 14 ASCII digits
pub fn is_valid_gtin(gtin: &str) -> bool {
    GTIN_REGEX.is_match(gtin)
}

/// Validate a Serial Shipping Container Code: exactly 18 ASCII digits
pub fn is_valid_sscc(sscc: &str) -> bool {
    SSCC_REGEX.is_match(sscc)
}
