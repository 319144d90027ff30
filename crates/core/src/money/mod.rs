//! Money type with decimal precision and currency.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! Amounts are `rust_decimal::Decimal` values, or the not-a-number sentinel
//! left behind by unparseable input.

mod amount;
mod arithmetic;
pub(crate) mod parse;

use std::fmt;

use moneta_shared::{MoneyError, MoneyResult, Rounding};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::currency::{self, Currency};

pub use amount::{Amount, IntoAmount};

/// Represents a monetary amount with currency.
///
/// Immutable: every operation returns a new `Money`. Equality and hashing
/// compare amount and currency by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Money {
    amount: Amount,
    currency: &'static Currency,
}

impl Money {
    /// Creates a new Money instance.
    ///
    /// `amount` may be a `Decimal`, an integer, or a string such as `"4.23"`
    /// or `"1 €"`. Unparseable strings, and strings decorated with another
    /// currency's symbol or code, yield a not-a-number amount.
    pub fn new(amount: impl IntoAmount, currency: &'static Currency) -> Self {
        Self {
            amount: amount.into_amount(currency),
            currency,
        }
    }

    /// Creates Money in the default currency.
    pub fn from_amount(amount: impl IntoAmount) -> Self {
        Self::new(amount, Self::default_currency())
    }

    /// Creates a zero amount in the specified currency.
    #[must_use]
    pub fn zero(currency: &'static Currency) -> Self {
        Self::new(Amount::ZERO, currency)
    }

    /// Creates Money from a count of the currency's smallest unit.
    ///
    /// `from_subunits(423, usd)` is 4.23 USD.
    #[must_use]
    pub fn from_subunits(subunits: i64, currency: &'static Currency) -> Self {
        Self::new(
            Decimal::new(subunits, currency.subunit_exponent()),
            currency,
        )
    }

    /// The currency used when none is given: USD.
    #[must_use]
    pub fn default_currency() -> &'static Currency {
        currency::default_currency()
    }

    /// The amount, possibly the not-a-number sentinel.
    #[must_use]
    pub const fn amount(&self) -> Amount {
        self.amount
    }

    /// The decimal amount.
    ///
    /// # Errors
    ///
    /// `InvalidAmount` for the not-a-number sentinel.
    pub fn value(&self) -> MoneyResult<Decimal> {
        self.amount.value()
    }

    /// The currency.
    #[must_use]
    pub const fn currency(&self) -> &'static Currency {
        self.currency
    }

    /// Returns true unless the amount is the not-a-number sentinel.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.amount.is_valid()
    }

    /// Returns true if the amount is zero. False for not-a-number.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        matches!(self.amount, Amount::Number(value) if value.is_zero())
    }

    /// Returns true if the amount is above zero. False for not-a-number.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        matches!(self.amount, Amount::Number(value) if value > Decimal::ZERO)
    }

    /// Returns true if the amount is below zero. False for not-a-number.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        matches!(self.amount, Amount::Number(value) if value < Decimal::ZERO)
    }

    /// Same currency, non-negative magnitude.
    pub fn absolute_amount(&self) -> MoneyResult<Self> {
        Ok(Self::new(self.value()?.abs(), self.currency))
    }

    /// The amount counted in subunits, rounded half-up.
    ///
    /// 4.23 USD is 423.
    ///
    /// # Errors
    ///
    /// `InvalidAmount` for not-a-number, `Overflow` beyond `i64`.
    pub fn amount_in_subunits(&self) -> MoneyResult<i64> {
        self.value()?
            .checked_mul(self.currency.subunits_per_unit())
            .ok_or(MoneyError::Overflow)?
            .round_dp_with_strategy(0, Rounding::HalfUp.strategy())
            .to_i64()
            .ok_or(MoneyError::Overflow)
    }

    /// Smallest representable unit of the currency (0.01 for cents).
    #[must_use]
    pub fn one_subunit(&self) -> Decimal {
        self.currency.one_subunit()
    }

    /// Rounds the amount to whole subunits.
    pub fn round_to_subunit(&self, rounding: Rounding) -> MoneyResult<Self> {
        let rounded = self
            .value()?
            .round_dp_with_strategy(self.currency.subunit_exponent(), rounding.strategy());
        Ok(Self::new(rounded, self.currency))
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero(Self::default_currency())
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}

#[cfg(test)]
#[path = "money_tests.rs"]
mod tests;
