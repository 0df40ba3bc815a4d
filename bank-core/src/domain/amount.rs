//! Monetary amount rules
//!
//! Amounts are exact base-10 decimals, so the two-decimal-place rule is a
//! scale check rather than a floating point tolerance.

use rust_decimal::Decimal;

use super::result::{Error, Result};

/// Maximum number of fractional digits an amount may carry
pub const MAX_DECIMAL_PLACES: u32 = 2;

/// Check whether an amount is non-negative with at most two decimal places
///
/// Trailing zeros do not count: `10.500` is the same amount as `10.50`.
pub fn is_amount_valid(amount: Decimal) -> bool {
    if amount.is_sign_negative() && !amount.is_zero() {
        return false;
    }
    amount.normalize().scale() <= MAX_DECIMAL_PLACES
}

/// Parse user input into an amount
///
/// Only the syntax is checked here; validity is enforced by the account
/// operations the amount is handed to.
pub fn parse_amount(text: &str) -> Result<Decimal> {
    let trimmed = text.trim();
    trimmed
        .parse::<Decimal>()
        .map_err(|_| Error::invalid_amount(format!("\"{}\"", trimmed)))
}

/// Render an amount with exactly two decimal places
pub fn format_amount(amount: Decimal) -> String {
    format!("{:.2}", amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_valid_amounts() {
        assert!(is_amount_valid(dec("200")));
        assert!(is_amount_valid(Decimal::ZERO));
        assert!(is_amount_valid(dec("0.1")));
        assert!(is_amount_valid(dec("0.99")));
        assert!(is_amount_valid(dec("200.25")));
    }

    #[test]
    fn test_too_many_decimal_places() {
        assert!(!is_amount_valid(dec("200.999")));
        assert!(!is_amount_valid(dec("0.001")));
        assert!(!is_amount_valid(dec("10.999")));
    }

    #[test]
    fn test_trailing_zeros_are_ignored() {
        assert!(is_amount_valid(dec("10.500")));
        assert!(is_amount_valid(dec("7.0000")));
        assert!(!is_amount_valid(dec("7.0010")));
    }

    #[test]
    fn test_negative_amounts() {
        assert!(!is_amount_valid(dec("-50")));
        assert!(!is_amount_valid(dec("-0.01")));
        assert!(!is_amount_valid(dec("-432.10")));
        // "-0" parses with the sign bit set but is still zero
        assert!(is_amount_valid(dec("-0")));
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount(" 12.34 ").unwrap(), dec("12.34"));
        assert_eq!(parse_amount("-20").unwrap(), dec("-20"));

        let err = parse_amount("twelve").unwrap_err();
        assert!(err.is_invalid_argument());
        assert_eq!(err.to_string(), "Invalid amount: \"twelve\"");
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(dec("150")), "150.00");
        assert_eq!(format_amount(dec("0.5")), "0.50");
        assert_eq!(format_amount(dec("99.99")), "99.99");
    }
}
