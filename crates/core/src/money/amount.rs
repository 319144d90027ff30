//! Decimal amount with an explicit not-a-number sentinel.

use std::fmt;

use moneta_shared::{MoneyError, MoneyResult};
use rust_decimal::Decimal;
use tracing::debug;

use super::parse::parse_decimal;
use crate::currency::Currency;

/// A decimal amount, or the sentinel left behind by unparseable input.
///
/// Construction never fails. Anything that needs the number calls
/// [`Amount::value`], which turns the sentinel into `InvalidAmount`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Amount {
    /// An exact decimal value.
    Number(Decimal),
    /// Input that could not be read as a number.
    NotANumber,
}

impl Amount {
    /// Zero.
    pub const ZERO: Self = Self::Number(Decimal::ZERO);

    /// Parses a plain or symbol-decorated amount such as `"1"`, `"$1"`,
    /// `"-€ 4.50"` or `"1 €"`.
    ///
    /// Returns [`Amount::NotANumber`] instead of failing.
    ///
    /// ```
    /// use moneta_core::Amount;
    /// use rust_decimal_macros::dec;
    ///
    /// assert_eq!(Amount::parse("$1.50"), Amount::Number(dec!(1.50)));
    /// assert_eq!(Amount::parse("1,50 €"), Amount::NotANumber);
    /// ```
    #[must_use]
    pub fn parse(input: &str) -> Self {
        Self::from_parsed(input, parse_decimal(input, None))
    }

    /// Parses an amount meant for `currency`.
    ///
    /// Like [`Amount::parse`], except that a symbol or code belonging to
    /// another currency yields [`Amount::NotANumber`].
    ///
    /// ```
    /// use moneta_core::{Amount, lookup_by_code};
    /// use rust_decimal_macros::dec;
    ///
    /// let usd = lookup_by_code("USD").unwrap();
    /// assert_eq!(Amount::parse_in("$1.50", usd), Amount::Number(dec!(1.50)));
    /// assert_eq!(Amount::parse_in("12.5 EUR", usd), Amount::NotANumber);
    /// ```
    #[must_use]
    pub fn parse_in(input: &str, currency: &Currency) -> Self {
        Self::from_parsed(input, parse_decimal(input, Some(currency)))
    }

    fn from_parsed(input: &str, parsed: Option<Decimal>) -> Self {
        parsed.map_or_else(
            || {
                debug!(input, "amount is not a number");
                Self::NotANumber
            },
            Self::Number,
        )
    }

    /// Returns `false` for the sentinel.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Number(_))
    }

    /// The decimal value.
    ///
    /// # Errors
    ///
    /// `InvalidAmount` for the sentinel.
    pub fn value(self) -> MoneyResult<Decimal> {
        match self {
            Self::Number(value) => Ok(value),
            Self::NotANumber => Err(MoneyError::InvalidAmount),
        }
    }

    /// The decimal value, if any.
    #[must_use]
    pub const fn as_decimal(self) -> Option<Decimal> {
        match self {
            Self::Number(value) => Some(value),
            Self::NotANumber => None,
        }
    }
}

impl Default for Amount {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => fmt::Display::fmt(value, f),
            Self::NotANumber => f.write_str("NaN"),
        }
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for Amount {
    fn from(value: i64) -> Self {
        Self::Number(Decimal::from(value))
    }
}

impl From<i32> for Amount {
    fn from(value: i32) -> Self {
        Self::Number(Decimal::from(value))
    }
}

impl From<u32> for Amount {
    fn from(value: u32) -> Self {
        Self::Number(Decimal::from(value))
    }
}

impl From<&str> for Amount {
    fn from(input: &str) -> Self {
        Self::parse(input)
    }
}

impl From<&String> for Amount {
    fn from(input: &String) -> Self {
        Self::parse(input)
    }
}

/// Anything `Money` can be built from.
///
/// Numbers convert as they are. Strings are read with [`Amount::parse_in`]
/// against the currency of the money being built.
pub trait IntoAmount {
    /// Converts into an amount of `currency`.
    fn into_amount(self, currency: &Currency) -> Amount;
}

impl IntoAmount for Amount {
    fn into_amount(self, _currency: &Currency) -> Amount {
        self
    }
}

macro_rules! numeric_into_amount {
    ($($ty:ty),*) => {
        $(
            impl IntoAmount for $ty {
                fn into_amount(self, _currency: &Currency) -> Amount {
                    Amount::from(self)
                }
            }
        )*
    };
}

numeric_into_amount!(Decimal, i64, i32, u32);

impl IntoAmount for &str {
    fn into_amount(self, currency: &Currency) -> Amount {
        Amount::parse_in(self, currency)
    }
}

impl IntoAmount for &String {
    fn into_amount(self, currency: &Currency) -> Amount {
        Amount::parse_in(self, currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currency::lookup_by_code;
    use rust_decimal_macros::dec;

    #[test]
    fn test_default_is_zero() {
        assert_eq!(Amount::default(), Amount::Number(Decimal::ZERO));
    }

    #[test]
    fn test_value() {
        assert_eq!(Amount::from(dec!(4.23)).value(), Ok(dec!(4.23)));
        assert_eq!(Amount::NotANumber.value(), Err(MoneyError::InvalidAmount));
    }

    #[test]
    fn test_as_decimal() {
        assert_eq!(Amount::from(7).as_decimal(), Some(dec!(7)));
        assert_eq!(Amount::NotANumber.as_decimal(), None);
    }

    #[test]
    fn test_is_valid() {
        assert!(Amount::from("12.0").is_valid());
        assert!(!Amount::from("Random &^Ugjh2 string").is_valid());
    }

    #[test]
    fn test_equality_is_numeric() {
        assert_eq!(Amount::from("0.0"), Amount::from(0));
        assert_eq!(Amount::from("2.50"), Amount::from(dec!(2.5)));
        assert_eq!(Amount::NotANumber, Amount::NotANumber);
        assert_ne!(Amount::NotANumber, Amount::ZERO);
    }

    #[test]
    fn test_display() {
        assert_eq!(Amount::from(dec!(0.05)).to_string(), "0.05");
        assert_eq!(Amount::NotANumber.to_string(), "NaN");
    }

    #[test]
    fn test_parse_in_checks_decoration() {
        let usd = lookup_by_code("USD").unwrap();
        let eur = lookup_by_code("EUR").unwrap();
        assert_eq!(Amount::parse_in("USD 12.5", usd), Amount::from(dec!(12.5)));
        assert_eq!(Amount::parse_in("12.5 EUR", eur), Amount::from(dec!(12.5)));
        assert_eq!(Amount::parse_in("12.5 EUR", usd), Amount::NotANumber);
        assert_eq!(Amount::parse("12.5 EUR"), Amount::from(dec!(12.5)));
    }

    #[test]
    fn test_into_amount() {
        let usd = lookup_by_code("USD").unwrap();
        assert_eq!(dec!(4.23).into_amount(usd), Amount::from(dec!(4.23)));
        assert_eq!(7_i64.into_amount(usd), Amount::from(7));
        assert_eq!(Amount::NotANumber.into_amount(usd), Amount::NotANumber);
        assert_eq!("€1".into_amount(usd), Amount::NotANumber);
        assert_eq!((&String::from("$1")).into_amount(usd), Amount::from(1));
    }
}
