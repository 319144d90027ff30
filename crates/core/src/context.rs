//! Configured defaults for creating and converting money.

use moneta_shared::{MoneyConfig, MoneyResult, Rounding};
use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::currency::{self, Currency};
use crate::money::{IntoAmount, Money};

/// Application-level defaults resolved from [`MoneyConfig`].
///
/// [`Money::default_currency`] always stays USD; a context lets an
/// application pick its own default without changing that contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoneyContext {
    default_currency: &'static Currency,
    conversion_rounding: Rounding,
}

impl MoneyContext {
    /// Resolves a loaded configuration against the currency registry.
    ///
    /// # Errors
    ///
    /// `UnknownCurrency` when the configured default is not registered.
    pub fn from_config(config: &MoneyConfig) -> MoneyResult<Self> {
        let default_currency = Currency::from_code(&config.default_currency).inspect_err(|_| {
            warn!(
                code = %config.default_currency,
                "configured default currency is not registered"
            );
        })?;

        info!(
            default_currency = %default_currency,
            rounding = ?config.conversion_rounding,
            "money context ready"
        );

        Ok(Self {
            default_currency,
            conversion_rounding: config.conversion_rounding,
        })
    }

    /// Currency for money created through this context.
    #[must_use]
    pub const fn default_currency(&self) -> &'static Currency {
        self.default_currency
    }

    /// Rounding applied by [`MoneyContext::convert`].
    #[must_use]
    pub const fn conversion_rounding(&self) -> Rounding {
        self.conversion_rounding
    }

    /// Money in the context's default currency.
    pub fn money(&self, amount: impl IntoAmount) -> Money {
        Money::new(amount, self.default_currency)
    }

    /// Zero in the context's default currency.
    #[must_use]
    pub fn zero(&self) -> Money {
        Money::zero(self.default_currency)
    }

    /// Converts with the configured rounding mode.
    pub fn convert(
        &self,
        money: &Money,
        target: &'static Currency,
        rate: Decimal,
    ) -> MoneyResult<Money> {
        money.convert_to_with_rounding(target, rate, self.conversion_rounding)
    }
}

impl Default for MoneyContext {
    fn default() -> Self {
        Self {
            default_currency: currency::default_currency(),
            conversion_rounding: Rounding::default(),
        }
    }
}
