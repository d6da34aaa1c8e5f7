//! Money type for representing expense amounts
//!
//! Internally stores amounts in cents (i64) so that totals are exact sums
//! rather than accumulated floating-point approximations.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign};
use thiserror::Error;

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Largest accepted amount in whole units (one trillion)
    pub const MAX_UNITS: i64 = 1_000_000_000_000;

    /// Largest accepted amount, `1000000000000.00`
    ///
    /// Keeping single amounts this far below `i64::MAX` leaves room to total
    /// tens of thousands of maximum-size expenses exactly.
    pub const MAX: Money = Money(Self::MAX_UNITS * 100);

    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use expense_tracker::models::Money;
    /// let amount = Money::from_cents(1050); // 10.50
    /// assert_eq!(amount.to_string(), "10.50");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole units portion (truncated toward zero)
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Parse a decimal amount
    ///
    /// Accepts "10.50", "-10.50", "+3", "10", "10.5", ".5" and "10.". At most two
    /// fractional digits are allowed; anything finer cannot be represented in
    /// cents and is rejected rather than silently rounded.
    ///
    /// Exponent notation ("1e2", "1.5E1", "125e-2") is accepted when the value
    /// lands on a whole cent. Magnitudes above [`Money::MAX`] are rejected with
    /// [`MoneyParseError::Overflow`].
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(MoneyParseError::Empty);
        }
        let invalid = || MoneyParseError::InvalidFormat(trimmed.to_string());
        let overflow = || MoneyParseError::Overflow(trimmed.to_string());
        let too_precise = || MoneyParseError::TooPrecise(trimmed.to_string());

        let (negative, body) = match trimmed.as_bytes()[0] {
            b'-' => (true, &trimmed[1..]),
            b'+' => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };

        let (mantissa, exponent) = match body.find(['e', 'E']) {
            Some(pos) => {
                let exponent_text = &body[pos + 1..];
                let exponent_digits = exponent_text.trim_start_matches(['+', '-']);
                if exponent_digits.is_empty()
                    || exponent_text.len() - exponent_digits.len() > 1
                    || !exponent_digits.bytes().all(|b| b.is_ascii_digit())
                {
                    return Err(invalid());
                }
                let exponent: i64 = exponent_text.parse().map_err(|_| overflow())?;
                (&body[..pos], Some(exponent))
            }
            None => (body, None),
        };

        let (whole, fraction) = match mantissa.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (mantissa, ""),
        };

        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if (whole.is_empty() && fraction.is_empty()) || !all_digits(whole) || !all_digits(fraction)
        {
            return Err(invalid());
        }

        if exponent.is_none() && fraction.len() > 2 {
            return Err(too_precise());
        }

        // All mantissa digits as one integer, scaled by 10^shift to get cents
        let digits = format!("{}{}", whole, fraction);
        let digits = digits.trim_start_matches('0');
        let shift = exponent
            .unwrap_or(0)
            .checked_add(2 - fraction.len() as i64)
            .ok_or_else(overflow)?;

        let kept = if shift < 0 {
            let dropped = usize::try_from(shift.unsigned_abs()).unwrap_or(usize::MAX);
            let split = digits.len().saturating_sub(dropped);
            if !digits[split..].bytes().all(|b| b == b'0') {
                return Err(too_precise());
            }
            &digits[..split]
        } else {
            digits
        };

        let cents = if kept.is_empty() {
            0
        } else {
            let value: u128 = kept.parse().map_err(|_| overflow())?;
            let scale = u32::try_from(shift.max(0))
                .ok()
                .and_then(|shift| 10u128.checked_pow(shift))
                .ok_or_else(overflow)?;
            value.checked_mul(scale).ok_or_else(overflow)?
        };

        if cents > Self::MAX.0 as u128 {
            return Err(overflow());
        }
        let cents = cents as i64;

        Ok(Self(if negative { -cents } else { cents }))
    }

    /// Format with a currency symbol, e.g. `Rs 10.50`
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if symbol.is_empty() {
            self.to_string()
        } else {
            format!("{} {}", symbol, self)
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-{}.{:02}", self.units().abs(), self.cents_part())
        } else {
            write!(f, "{}.{:02}", self.units(), self.cents_part())
        }
    }
}

/// Addition saturates at the `i64` bounds instead of wrapping
impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        let cents: i128 = iter.map(|m| i128::from(m.0)).sum();
        Self(cents.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyParseError {
    #[error("Amount is empty")]
    Empty,
    #[error("Invalid money format: {0}")]
    InvalidFormat(String),
    #[error("Amount has more than two decimal places: {0}")]
    TooPrecise(String),
    #[error("Amount is too large: {0}")]
    Overflow(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let m = Money::from_cents(1050);
        assert_eq!(m.cents(), 1050);
        assert_eq!(m.units(), 10);
        assert_eq!(m.cents_part(), 50);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1050)), "10.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "0.00");
        assert_eq!(format!("{}", Money::from_cents(-1050)), "-10.50");
        assert_eq!(format!("{}", Money::from_cents(5)), "0.05");
    }

    #[test]
    fn test_format_with_symbol() {
        assert_eq!(Money::from_cents(450).format_with_symbol("Rs"), "Rs 4.50");
        assert_eq!(Money::from_cents(450).format_with_symbol(""), "4.50");
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse(" 4.50 ").unwrap().cents(), 450);
        assert_eq!(Money::parse("-10.50").unwrap().cents(), -1050);
        assert_eq!(Money::parse("+3").unwrap().cents(), 300);
        assert_eq!(Money::parse("10").unwrap().cents(), 1000);
        assert_eq!(Money::parse("10.5").unwrap().cents(), 1050);
        assert_eq!(Money::parse("0.05").unwrap().cents(), 5);
        assert_eq!(Money::parse(".5").unwrap().cents(), 50);
        assert_eq!(Money::parse("10.").unwrap().cents(), 1000);
        assert_eq!(Money::parse("-0.50").unwrap().cents(), -50);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(Money::parse(""), Err(MoneyParseError::Empty));
        assert_eq!(Money::parse("   "), Err(MoneyParseError::Empty));
        assert!(matches!(Money::parse("abc"), Err(MoneyParseError::InvalidFormat(_))));
        assert!(matches!(Money::parse("."), Err(MoneyParseError::InvalidFormat(_))));
        assert!(matches!(Money::parse("e3"), Err(MoneyParseError::InvalidFormat(_))));
        assert!(matches!(Money::parse("1e"), Err(MoneyParseError::InvalidFormat(_))));
        assert!(matches!(Money::parse("1e+-2"), Err(MoneyParseError::InvalidFormat(_))));
        assert!(matches!(Money::parse("1e2.5"), Err(MoneyParseError::InvalidFormat(_))));
        assert!(matches!(Money::parse("1,000"), Err(MoneyParseError::InvalidFormat(_))));
        assert!(matches!(Money::parse("1.2.3"), Err(MoneyParseError::InvalidFormat(_))));
        assert!(matches!(Money::parse("--1"), Err(MoneyParseError::InvalidFormat(_))));
        assert!(matches!(Money::parse("10.505"), Err(MoneyParseError::TooPrecise(_))));
        assert!(matches!(
            Money::parse("99999999999999999999"),
            Err(MoneyParseError::Overflow(_))
        ));
    }

    #[test]
    fn test_parse_exponent() {
        assert_eq!(Money::parse("1e2").unwrap().cents(), 10000);
        assert_eq!(Money::parse("1E3").unwrap().cents(), 100000);
        assert_eq!(Money::parse("1.5e1").unwrap().cents(), 1500);
        assert_eq!(Money::parse("125e-2").unwrap().cents(), 125);
        assert_eq!(Money::parse("4.5e+0").unwrap().cents(), 450);
        assert_eq!(Money::parse("-2e1").unwrap().cents(), -2000);
        assert_eq!(Money::parse("1200e-3").unwrap().cents(), 120);
        assert!(matches!(Money::parse("1e-3"), Err(MoneyParseError::TooPrecise(_))));
        assert_eq!(Money::parse("1.234e1").unwrap().cents(), 1234);
        assert!(matches!(Money::parse("1.2345e1"), Err(MoneyParseError::TooPrecise(_))));
        assert!(matches!(Money::parse("1e13"), Err(MoneyParseError::Overflow(_))));
        assert!(matches!(Money::parse("1e400"), Err(MoneyParseError::Overflow(_))));
    }

    #[test]
    fn test_parse_max_amount() {
        assert_eq!(Money::parse("1000000000000").unwrap(), Money::MAX);
        assert_eq!(Money::parse("1000000000000.00").unwrap(), Money::MAX);
        assert_eq!(Money::parse("1e12").unwrap(), Money::MAX);
        assert_eq!(Money::MAX.to_string(), "1000000000000.00");

        assert!(matches!(
            Money::parse("1000000000000.01"),
            Err(MoneyParseError::Overflow(_))
        ));
        assert!(matches!(
            Money::parse("90000000000000000"),
            Err(MoneyParseError::Overflow(_))
        ));
        assert!(matches!(
            Money::parse("-1000000000000.01"),
            Err(MoneyParseError::Overflow(_))
        ));
    }

    #[test]
    fn test_addition_does_not_wrap() {
        let near_max = Money::from_cents(i64::MAX - 1);
        assert_eq!(near_max + Money::from_cents(5), Money::from_cents(i64::MAX));

        let mut total = Money::from_cents(i64::MAX);
        total += Money::MAX;
        assert_eq!(total, Money::from_cents(i64::MAX));
        assert!(total.is_positive());
    }

    #[test]
    fn test_sum_of_many_max_amounts() {
        let total: Money = std::iter::repeat(Money::MAX).take(1000).sum();
        assert_eq!(total.cents(), 1000 * Money::MAX.cents());
        assert_eq!(total.to_string(), "1000000000000000.00");

        let saturated: Money = std::iter::repeat(Money::from_cents(i64::MAX)).take(3).sum();
        assert_eq!(saturated, Money::from_cents(i64::MAX));
    }

    #[test]
    fn test_sum_is_exact() {
        let amounts = [Money::from_cents(1050), Money::from_cents(2025)];
        let total: Money = amounts.iter().sum();
        assert_eq!(total, Money::from_cents(3075));
        assert_eq!(total.to_string(), "30.75");

        let float_drift: f64 = [0.1, 0.2].iter().sum();
        assert_ne!(float_drift, 0.3);
        let exact: Money = [Money::parse("0.1").unwrap(), Money::parse("0.2").unwrap()]
            .into_iter()
            .sum();
        assert_eq!(exact, Money::parse("0.3").unwrap());
    }

    #[test]
    fn test_serialization() {
        let m = Money::from_cents(1050);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "1050");

        let deserialized: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, deserialized);
    }
}
