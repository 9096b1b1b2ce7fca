//! Validated GS1 field types with the form rules embedded
//!
//! Each type wraps a raw form value and can only be constructed when the
//! value satisfies the same predicate the form validator applies. A
//! `PalletForm` holding an [`Sscc`] therefore never needs re-checking.
//!
//! # WASM Compatibility
//!
//! All types work in WebAssembly environments:
//! - Serializable/deserializable with serde (deserialization validates)
//! - Validation happens at construction time
//! - Same types on server and client
//!
//! # Example
//!
//! ```rust,ignore
//! use gs1_forms_types::{Gtin, Quantity};
//!
//! let gtin = Gtin::try_new("12345678901234".to_string())?;  // ✓
//! let bad = Gtin::try_new("123".to_string());                // ✗
//!
//! let qty = Quantity::from_field("12 boxes");                // Some(12)
//! ```

use gs1_forms_validation as rules;
use nutype::nutype;

// =============================================================================
// Identifier Types
// =============================================================================

/// Global Trade Item Number (14 ASCII digits)
#[nutype(
    validate(predicate = is_gtin),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        AsRef,
        TryFrom,
        Into,
        Deref,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct Gtin(String);

/// Serial Shipping Container Code (18 ASCII digits)
#[nutype(
    validate(predicate = is_sscc),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        AsRef,
        TryFrom,
        Into,
        Deref,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct Sscc(String);

// =============================================================================
// Date Types
// =============================================================================

/// Expiry date in `DD/MM/YYYY` shape
///
/// **Rule**: digit layout only. "31/02/2023" is a valid `ExpiryDate`; code
/// that needs a real calendar date (GS1 AI 17 encoding) must parse it with
/// `gs1_forms_validation::parse_calendar_date`.
#[nutype(
    validate(predicate = is_date_shape),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        AsRef,
        TryFrom,
        Into,
        Deref,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct ExpiryDate(String);

// =============================================================================
// Numeric Types
// =============================================================================

/// Units per case, or cases per pallet (>= 1)
#[nutype(
    validate(greater_or_equal = 1),
    derive(
        Debug,
        Clone,
        Copy,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        Hash,
        AsRef,
        TryFrom,
        Into,
        Deref,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct Quantity(i64);

impl Quantity {
    /// Builds a quantity from a raw form value using its leading integer
    pub fn from_field(value: &str) -> Option<Self> {
        rules::parse_leading_int(value).and_then(|n| Self::try_new(n).ok())
    }
}

// -----------------------------------------------------------------------------
// Predicates
// -----------------------------------------------------------------------------

fn is_gtin(s: &str) -> bool {
    rules::is_valid_gtin(s)
}

fn is_sscc(s: &str) -> bool {
    rules::is_valid_sscc(s)
}

fn is_date_shape(s: &str) -> bool {
    rules::is_date_shape(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gtin() {
        assert!(Gtin::try_new("12345678901234".to_string()).is_ok());
        assert!(Gtin::try_new("123".to_string()).is_err());
        assert!(Gtin::try_new("1234567890123x".to_string()).is_err());
    }

    #[test]
    fn test_sscc() {
        assert!(Sscc::try_new("123456789012345678".to_string()).is_ok());
        assert!(Sscc::try_new("bad".to_string()).is_err());
    }

    #[test]
    fn test_expiry_date_is_shape_only() {
        assert!(ExpiryDate::try_new("01/01/2024".to_string()).is_ok());
        assert!(ExpiryDate::try_new("99/99/9999".to_string()).is_ok());
        assert!(ExpiryDate::try_new("2024-01-01".to_string()).is_err());
    }

    #[test]
    fn test_quantity() {
        assert!(Quantity::try_new(1).is_ok());
        assert!(Quantity::try_new(0).is_err());
        assert!(Quantity::try_new(-3).is_err());
    }

    #[test]
    fn test_quantity_from_field() {
        assert_eq!(Quantity::from_field("5").map(Quantity::into_inner), Some(5));
        assert_eq!(Quantity::from_field("12 boxes").map(Quantity::into_inner), Some(12));
        assert!(Quantity::from_field("0").is_none());
        assert!(Quantity::from_field("abc").is_none());
        assert!(Quantity::from_field("").is_none());
    }

    #[test]
    fn test_display_is_raw_value() {
        let gtin = Gtin::try_new("00012345678905".to_string()).unwrap();
        assert_eq!(gtin.to_string(), "00012345678905");
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: Result<Sscc, _> = serde_json::from_str("\"123456789012345678\"");
        assert!(ok.is_ok());

        let bad: Result<Sscc, _> = serde_json::from_str("\"12345\"");
        assert!(bad.is_err());

        let qty: Result<Quantity, _> = serde_json::from_str("0");
        assert!(qty.is_err());
    }
}
