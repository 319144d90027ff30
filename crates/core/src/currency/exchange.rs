//! Exchange rate between two registered currencies.

use moneta_shared::{ConversionFault, MoneyError, MoneyResult};
use rust_decimal::Decimal;

use super::Currency;
use crate::money::Money;

/// Exchange rate between two currencies (1 `from` = `rate` `to`).
///
/// Construction enforces the same preconditions as [`Money::convert_to`],
/// so a held rate can always be applied to money in `from`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExchangeRate {
    from: &'static Currency,
    to: &'static Currency,
    rate: Decimal,
}

impl ExchangeRate {
    /// Creates a new exchange rate.
    ///
    /// # Errors
    ///
    /// `InvalidConversion` for identical currencies or a non-positive rate.
    pub fn new(from: &'static Currency, to: &'static Currency, rate: Decimal) -> MoneyResult<Self> {
        if from == to {
            return Err(ConversionFault::SameCurrency.into());
        }
        if rate <= Decimal::ZERO {
            return Err(ConversionFault::NonPositiveRate.into());
        }
        Ok(Self { from, to, rate })
    }

    /// Source currency.
    #[must_use]
    pub const fn source(&self) -> &'static Currency {
        self.from
    }

    /// Target currency.
    #[must_use]
    pub const fn target(&self) -> &'static Currency {
        self.to
    }

    /// Units of `to` per unit of `from`.
    #[must_use]
    pub const fn rate(&self) -> Decimal {
        self.rate
    }

    /// Returns the inverse rate.
    pub fn inverse(&self) -> MoneyResult<Self> {
        let rate = Decimal::ONE
            .checked_div(self.rate)
            .ok_or(MoneyError::Overflow)?;
        Ok(Self {
            from: self.to,
            to: self.from,
            rate,
        })
    }

    /// Converts money held in `from` into `to`, rounding half-up.
    ///
    /// # Errors
    ///
    /// `CurrencyMismatch` when `money` is not in `from`.
    pub fn convert(&self, money: &Money) -> MoneyResult<Money> {
        if money.currency() != self.from {
            return Err(MoneyError::mismatch(self.from.code(), money.currency().code()));
        }
        money.convert_to(self.to, self.rate)
    }
}
