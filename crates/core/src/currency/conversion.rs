//! Currency conversion logic.
//!
//! The rate is applied with full decimal precision and the product is then
//! rounded once, to the target currency's subunit exponent. Round-half-up is
//! the default; banker's rounding and truncation are available on request.

use moneta_shared::{ConversionFault, MoneyError, MoneyResult, Rounding};
use rust_decimal::Decimal;
use tracing::debug;

use super::Currency;
use crate::money::Money;

/// Converts an amount using the given exchange rate.
///
/// # Errors
///
/// `Overflow` when the product leaves the decimal range.
pub fn convert_amount(
    amount: Decimal,
    rate: Decimal,
    decimal_places: u32,
    rounding: Rounding,
) -> MoneyResult<Decimal> {
    let converted = amount.checked_mul(rate).ok_or(MoneyError::Overflow)?;
    Ok(converted.round_dp_with_strategy(decimal_places, rounding.strategy()))
}

impl Money {
    /// Converts into `target` at `rate`, rounding half-up to the target's
    /// subunit.
    ///
    /// ```
    /// use moneta_core::{Money, currency::lookup_by_code};
    /// use rust_decimal_macros::dec;
    ///
    /// let eur = lookup_by_code("EUR").unwrap();
    /// let usd = lookup_by_code("USD").unwrap();
    /// let dollars = Money::new(dec!(20), eur).convert_to(usd, dec!(1.1234)).unwrap();
    /// assert_eq!(dollars, Money::new(dec!(22.47), usd));
    /// ```
    ///
    /// # Errors
    ///
    /// `InvalidConversion` when `target` is this money's currency or `rate`
    /// is not positive, `InvalidAmount` for the not-a-number sentinel.
    pub fn convert_to(&self, target: &'static Currency, rate: Decimal) -> MoneyResult<Self> {
        self.convert_to_with_rounding(target, rate, Rounding::HalfUp)
    }

    /// Same as [`Money::convert_to`] with an explicit rounding mode.
    pub fn convert_to_with_rounding(
        &self,
        target: &'static Currency,
        rate: Decimal,
        rounding: Rounding,
    ) -> MoneyResult<Self> {
        if target == self.currency() {
            return Err(ConversionFault::SameCurrency.into());
        }
        if rate <= Decimal::ZERO {
            return Err(ConversionFault::NonPositiveRate.into());
        }

        let converted = convert_amount(self.value()?, rate, target.subunit_exponent(), rounding)?;

        debug!(
            from = %self.currency(),
            to = %target,
            %rate,
            %converted,
            "converted amount"
        );

        Ok(Self::new(converted, target))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currency::lookup_by_code;
    use rust_decimal_macros::dec;

    fn currency(code: &str) -> &'static Currency {
        lookup_by_code(code).unwrap()
    }

    #[test]
    fn test_convert_amount() {
        // 100 USD * 15000 = 1,500,000 IDR
        let result = convert_amount(dec!(100), dec!(15000), 2, Rounding::HalfUp).unwrap();
        assert_eq!(result, dec!(1500000));
    }

    #[test]
    fn test_convert_amount_half_up() {
        // 20 * 1.1234 = 22.468 -> 22.47
        let result = convert_amount(dec!(20), dec!(1.1234), 2, Rounding::HalfUp).unwrap();
        assert_eq!(result, dec!(22.47));

        let midpoint = convert_amount(dec!(1), dec!(2.5), 0, Rounding::HalfUp).unwrap();
        assert_eq!(midpoint, dec!(3));
    }

    #[test]
    fn test_convert_amount_bankers_rounding() {
        // 2.5 rounds to 2, 3.5 rounds to 4
        let result1 = convert_amount(dec!(1), dec!(2.5), 0, Rounding::HalfEven).unwrap();
        assert_eq!(result1, dec!(2));

        let result2 = convert_amount(dec!(1), dec!(3.5), 0, Rounding::HalfEven).unwrap();
        assert_eq!(result2, dec!(4));
    }

    #[test]
    fn test_convert_amount_down() {
        let result = convert_amount(dec!(1), dec!(2.999), 2, Rounding::Down).unwrap();
        assert_eq!(result, dec!(2.99));
    }

    #[test]
    fn test_convert_amount_overflow() {
        assert_eq!(
            convert_amount(Decimal::MAX, dec!(2), 2, Rounding::HalfUp),
            Err(MoneyError::Overflow)
        );
    }

    #[test]
    fn test_convert_euros_to_dollars() {
        let euros = Money::new(dec!(20), currency("EUR"));
        let dollars = euros.convert_to(currency("USD"), dec!(1.1234)).unwrap();
        assert_eq!(dollars.value().unwrap(), dec!(22.47));
        assert_eq!(dollars.currency().code(), "USD");
    }

    #[test]
    fn test_convert_rounds_to_target_exponent() {
        let dollars = Money::new(dec!(10.50), currency("USD"));

        let yen = dollars.convert_to(currency("JPY"), dec!(149.37)).unwrap();
        assert_eq!(yen.value().unwrap(), dec!(1568));

        let dinars = dollars.convert_to(currency("TND"), dec!(3.11456)).unwrap();
        assert_eq!(dinars.value().unwrap(), dec!(32.703));
    }

    #[test]
    fn test_convert_negative_amount_rounds_away_from_zero() {
        let refund = Money::new(dec!(-20), currency("EUR"));
        let dollars = refund.convert_to(currency("USD"), dec!(1.12345)).unwrap();
        // -22.469 -> -22.47
        assert_eq!(dollars.value().unwrap(), dec!(-22.47));
    }

    #[test]
    fn test_convert_to_same_currency_fails() {
        let euros = Money::new(dec!(20), currency("EUR"));
        assert_eq!(
            euros.convert_to(currency("EUR"), dec!(1)),
            Err(MoneyError::InvalidConversion(ConversionFault::SameCurrency))
        );
    }

    #[test]
    fn test_convert_with_non_positive_rate_fails() {
        let euros = Money::new(dec!(20), currency("EUR"));
        for rate in [dec!(0), dec!(-1.1234)] {
            assert_eq!(
                euros.convert_to(currency("USD"), rate),
                Err(MoneyError::InvalidConversion(ConversionFault::NonPositiveRate))
            );
        }
    }

    #[test]
    fn test_convert_invalid_amount_fails() {
        let broken = Money::new("€ twenty", currency("EUR"));
        assert_eq!(
            broken.convert_to(currency("USD"), dec!(1.1)),
            Err(MoneyError::InvalidAmount)
        );
    }

    #[test]
    fn test_convert_leaves_source_untouched() {
        let euros = Money::new(dec!(20), currency("EUR"));
        let _ = euros.convert_to(currency("USD"), dec!(1.1234)).unwrap();
        assert_eq!(euros, Money::new(dec!(20), currency("EUR")));
    }
}
