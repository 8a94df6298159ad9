//! Money parsing and display formatting.
//!
//! The backend serializes prices as decimal strings (e.g. `"1299.00"`).
//! All cart arithmetic happens on `f64` after going through
//! [`parse_amount`], which applies an explicit zero-on-failure policy: a
//! malformed price string contributes nothing to a total instead of
//! poisoning the whole cart view.

/// Parse a decimal price string from the backend.
///
/// Returns `0.0` for anything that does not parse as a finite number.
/// This is a deliberate policy, not an accident: one malformed row must
/// not take down totals for the rest of the cart. Callers that need to
/// distinguish "free" from "broken" should inspect the raw string.
#[must_use]
pub fn parse_amount(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

/// Format an amount with exactly two decimal places (e.g. `"249.99"`).
#[must_use]
pub fn format_amount(amount: f64) -> String {
    format!("{amount:.2}")
}

/// Format an amount for display with the shop currency (e.g. `"ksh 249.99"`).
#[must_use]
pub fn display_ksh(amount: f64) -> String {
    format!("ksh {amount:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount_valid() {
        assert!((parse_amount("100.00") - 100.0).abs() < f64::EPSILON);
        assert!((parse_amount("49.99") - 49.99).abs() < f64::EPSILON);
        assert!((parse_amount(" 12.5 ") - 12.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_amount_malformed_is_zero() {
        assert!(parse_amount("").abs() < f64::EPSILON);
        assert!(parse_amount("free").abs() < f64::EPSILON);
        assert!(parse_amount("12,99").abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_amount_non_finite_is_zero() {
        assert!(parse_amount("NaN").abs() < f64::EPSILON);
        assert!(parse_amount("inf").abs() < f64::EPSILON);
    }

    #[test]
    fn test_format_amount_two_decimals() {
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(249.99), "249.99");
        assert_eq!(format_amount(100.0), "100.00");
    }

    #[test]
    fn test_display_ksh() {
        assert_eq!(display_ksh(1299.0), "ksh 1299.00");
    }
}
