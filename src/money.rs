//! Fixed-point money in micro-units.
//!
//! Amounts are parsed through `rust_decimal` so that decimal strings convert
//! exactly, then scaled into an `i64` count of micro-units.

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised while converting text or floats into [`Money`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AmountError {
    #[error("'{0}' is not a decimal number")]
    NotNumeric(String),

    #[error("'{0}' is negative")]
    Negative(String),

    #[error("'{0}' does not fit in micro-units")]
    OutOfRange(String),
}

/// A non-negative amount of the ledger currency, in micro-units.
///
/// One unit is `1_000_000` micro-units. The backing `i64` caps a single
/// value (and any aggregated sum) at `i64::MAX` micro-units, roughly
/// 9.22 trillion units; sums that would pass it fail through
/// [`Money::checked_add`] instead of wrapping.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use personal_ledger::Money;
///
/// let amount = Money::from_str("6,002.94").unwrap();
/// assert_eq!(amount.micros(), 6_002_940_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(i64);

impl Money {
    /// Micro-units per currency unit.
    pub const MICROS_PER_UNIT: i64 = 1_000_000;

    /// Zero value.
    pub const ZERO: Self = Money(0);

    /// Wraps a raw micro-unit count. Negative counts are rejected.
    pub fn from_micros(micros: i64) -> Result<Self, AmountError> {
        if micros < 0 {
            return Err(AmountError::Negative(micros.to_string()));
        }
        Ok(Money(micros))
    }

    /// Converts a float amount of units, truncating toward zero after scaling.
    pub fn from_f64(units: f64) -> Result<Self, AmountError> {
        let decimal = Decimal::from_f64(units)
            .ok_or_else(|| AmountError::OutOfRange(units.to_string()))?;
        Self::from_decimal(decimal, &units.to_string())
    }

    /// Parses a statement field. A blank field is zero.
    pub fn parse_field(field: &str) -> Result<Self, AmountError> {
        if field.trim().is_empty() {
            return Ok(Money::ZERO);
        }
        field.parse()
    }

    pub fn micros(&self) -> i64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Adds two amounts, returning `None` on overflow.
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Money)
    }

    fn from_decimal(decimal: Decimal, input: &str) -> Result<Self, AmountError> {
        if decimal.is_sign_negative() && !decimal.is_zero() {
            return Err(AmountError::Negative(input.to_string()));
        }

        decimal
            .checked_mul(Decimal::from(Self::MICROS_PER_UNIT))
            .and_then(|scaled| scaled.trunc().to_i64())
            .map(Money)
            .ok_or_else(|| AmountError::OutOfRange(input.to_string()))
    }
}

impl FromStr for Money {
    type Err = AmountError;

    /// Parses a decimal string with optional thousands separators.
    ///
    /// Digits past the sixth decimal place are dropped before parsing, so
    /// long fractions truncate instead of rounding.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let not_numeric = || AmountError::NotNumeric(s.to_string());

        let trimmed = s.trim();
        let (sign, unsigned) = match trimmed.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };
        let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, ""));

        if int_part.is_empty() && frac_part.is_empty() {
            return Err(not_numeric());
        }
        if !is_grouped_integer(int_part) || !frac_part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(not_numeric());
        }

        let int_digits: String = int_part.chars().filter(|c| *c != ',').collect();
        let frac_digits = &frac_part[..frac_part.len().min(6)];
        let normalized = format!("{}0{}.{}0", sign, int_digits, frac_digits);

        let decimal = Decimal::from_str(&normalized)
            .map_err(|_| AmountError::OutOfRange(s.to_string()))?;
        Self::from_decimal(decimal, s)
    }
}

/// Digits, optionally grouped by commas into a 1-3 digit head and 3 digit groups.
fn is_grouped_integer(digits: &str) -> bool {
    if !digits.contains(',') {
        return digits.bytes().all(|b| b.is_ascii_digit());
    }

    digits.split(',').enumerate().all(|(idx, group)| {
        let width_ok = if idx == 0 {
            (1..=3).contains(&group.len())
        } else {
            group.len() == 3
        };
        width_ok && group.bytes().all(|b| b.is_ascii_digit())
    })
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Decimal::new(self.0, 6))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_decimal() {
        assert_eq!(Money::from_str("2.94").unwrap().micros(), 2_940_000);
        assert_eq!(Money::from_str("  4.5 ").unwrap().micros(), 4_500_000);
        assert_eq!(Money::from_str("100").unwrap().micros(), 100_000_000);
    }

    #[test]
    fn test_parse_thousands_separators() {
        assert_eq!(Money::from_str("6,002.94").unwrap().micros(), 6_002_940_000);
        assert_eq!(
            Money::from_str("3,000,000").unwrap().micros(),
            3_000_000_000_000
        );
    }

    #[test]
    fn test_parse_truncates_below_micro() {
        assert_eq!(Money::from_str("0.0000019").unwrap().micros(), 1);
    }

    #[test]
    fn test_parse_truncates_long_fraction() {
        let nines = "0.99999999999999999999999999999";
        assert_eq!(Money::from_str(nines).unwrap().micros(), 999_999);
        assert_eq!(Money::from_str(".5").unwrap().micros(), 500_000);
        assert_eq!(Money::from_str("7.").unwrap().micros(), 7_000_000);
    }

    #[test]
    fn test_parse_rejects_malformed_digits() {
        for bad in ["1_000", "1,2,3", "12,34.5", ",100", "1e3", ".", "-"] {
            assert_eq!(
                Money::from_str(bad),
                Err(AmountError::NotNumeric(bad.to_string())),
                "accepted {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_blank_field_is_zero() {
        assert_eq!(Money::parse_field("").unwrap(), Money::ZERO);
        assert_eq!(Money::parse_field("   ").unwrap(), Money::ZERO);
    }

    #[test]
    fn test_non_numeric_is_error() {
        assert_eq!(
            Money::parse_field("abc"),
            Err(AmountError::NotNumeric("abc".to_string()))
        );
        assert!(Money::from_str("").is_err());
    }

    #[test]
    fn test_negative_rejected() {
        assert!(matches!(
            Money::from_str("-1.00"),
            Err(AmountError::Negative(_))
        ));
        assert!(Money::from_micros(-1).is_err());
    }

    #[test]
    fn test_from_f64() {
        assert_eq!(Money::from_f64(4.5).unwrap().micros(), 4_500_000);
        assert!(Money::from_f64(f64::NAN).is_err());
    }

    #[test]
    fn test_checked_add_overflow() {
        let max = Money::from_micros(i64::MAX).unwrap();
        assert_eq!(max.checked_add(Money::ZERO), Some(max));
        assert_eq!(max.checked_add(Money::from_micros(1).unwrap()), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_str("4.5").unwrap().to_string(), "4.500000");
        assert_eq!(Money::ZERO.to_string(), "0.000000");
    }
}
