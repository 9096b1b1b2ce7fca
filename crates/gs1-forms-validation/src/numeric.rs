//! Numeric validation functions

/// Smallest quantity a case or pallet form accepts
pub const MIN_QUANTITY: i64 = 1;

/// Parses the leading integer of a string
///
/// Leading whitespace is skipped, an optional `+`/`-` sign is read, then as
/// many digits as follow. A `0x`/`0X` prefix after the sign switches to
/// hexadecimal digits, so `"0x10"` is `16`. Anything after the digits is
/// ignored, so `"12 boxes"` parses as `12`. Returns `None` when no digit
/// follows the sign or the hex prefix. Values beyond `i64` saturate.
pub fn parse_leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let (radix, digits) = match rest.get(..2) {
        Some("0x" | "0X") => (16, &rest[2..]),
        _ => (10, rest),
    };

    let mut value: i64 = 0;
    let mut seen = false;
    for d in digits.chars().map_while(|c| c.to_digit(radix)) {
        seen = true;
        let d = i64::from(d);
        let shifted = value.saturating_mul(i64::from(radix));
        value = if negative {
            shifted.saturating_sub(d)
        } else {
            shifted.saturating_add(d)
        };
    }

    seen.then_some(value)
}

/// Validates minimum value for numeric types
pub fn validate_min<T: PartialOrd + core::fmt::Display>(value: T, min: T) -> Result<(), String> {
    if value >= min {
        Ok(())
    } else {
        Err(format!("Must be at least {}", min))
    }
}

/// Validates a quantity field: leading integer must parse and be at least 1
///
/// A value with no leading integer ("abc", "") is rejected.
pub fn is_valid_quantity(s: &str) -> bool {
    parse_leading_int(s).is_some_and(|n| validate_min(n, MIN_QUANTITY).is_ok())
}
