//! Comparison and arithmetic on Money.
//!
//! Operations between two Money values require identical currencies and
//! never convert implicitly. Results keep full decimal precision; rounding
//! to subunits only happens in conversion, allocation and
//! [`Money::round_to_subunit`].

use std::cmp::Ordering;

use moneta_shared::{MoneyError, MoneyResult};
use rust_decimal::Decimal;

use super::Money;
use crate::currency::Currency;

impl Money {
    /// Value equality: same amount and same currency.
    #[must_use]
    pub fn equals(&self, other: &Self) -> bool {
        self == other
    }

    fn ensure_same_currency(&self, other: &Self) -> MoneyResult<()> {
        if self.currency() == other.currency() {
            Ok(())
        } else {
            Err(MoneyError::mismatch(
                self.currency().code(),
                other.currency().code(),
            ))
        }
    }

    /// Orders two amounts in the same currency.
    ///
    /// # Errors
    ///
    /// `CurrencyMismatch` across currencies, `InvalidAmount` if either side
    /// is not a number.
    pub fn compare_to(&self, other: &Self) -> MoneyResult<Ordering> {
        self.ensure_same_currency(other)?;
        Ok(self.value()?.cmp(&other.value()?))
    }

    /// Adds money in the same currency.
    pub fn add_money(&self, other: &Self) -> MoneyResult<Self> {
        self.ensure_same_currency(other)?;
        self.add_amount(other.value()?)
    }

    /// Subtracts money in the same currency.
    pub fn subtract_money(&self, other: &Self) -> MoneyResult<Self> {
        self.ensure_same_currency(other)?;
        self.subtract_amount(other.value()?)
    }

    /// Adds a raw amount, keeping the currency.
    pub fn add_amount(&self, amount: Decimal) -> MoneyResult<Self> {
        self.map_value(|value| value.checked_add(amount))
    }

    /// Subtracts a raw amount, keeping the currency.
    pub fn subtract_amount(&self, amount: Decimal) -> MoneyResult<Self> {
        self.map_value(|value| value.checked_sub(amount))
    }

    /// Multiplies the amount by `factor`, keeping the currency.
    pub fn multiply(&self, factor: Decimal) -> MoneyResult<Self> {
        self.map_value(|value| value.checked_mul(factor))
    }

    /// Unary minus.
    pub fn negate(&self) -> MoneyResult<Self> {
        self.multiply(Decimal::NEGATIVE_ONE)
    }

    /// Totals `items`, all of which must be in `currency`.
    ///
    /// An empty input sums to zero.
    pub fn sum<'a>(
        currency: &'static Currency,
        items: impl IntoIterator<Item = &'a Self>,
    ) -> MoneyResult<Self> {
        items
            .into_iter()
            .try_fold(Self::zero(currency), |total, item| total.add_money(item))
    }

    fn map_value(&self, op: impl FnOnce(Decimal) -> Option<Decimal>) -> MoneyResult<Self> {
        let result = op(self.value()?).ok_or(MoneyError::Overflow)?;
        Ok(Self::new(result, self.currency()))
    }
}

impl PartialOrd for Money {
    /// `None` across currencies or when a not-a-number amount is involved.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            return Some(Ordering::Equal);
        }
        self.compare_to(other).ok()
    }
}
