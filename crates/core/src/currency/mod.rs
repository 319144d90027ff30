//! Currencies, the registry that hands them out, and exchange rates.

pub mod allocation;
pub mod conversion;
pub mod exchange;
pub mod locale;
pub mod registry;

#[cfg(test)]
mod props;

use std::fmt;

use moneta_shared::{MoneyError, MoneyResult};
use rust_decimal::Decimal;

pub use allocation::AllocationUtil;
pub use conversion::convert_amount;
pub use exchange::ExchangeRate;
pub use locale::lookup_by_locale;
pub use registry::{all, default_currency, lookup_by_code, lookup_by_symbol};

/// ISO 4217 currency descriptor.
///
/// Instances only exist inside the registry; callers receive
/// `&'static Currency` references from the lookup functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Currency {
    code: &'static str,
    numeric_code: u16,
    name: &'static str,
    symbol: &'static str,
    subunit_exponent: u32,
}

impl Currency {
    pub(crate) const fn new(
        code: &'static str,
        numeric_code: u16,
        name: &'static str,
        symbol: &'static str,
        subunit_exponent: u32,
    ) -> Self {
        Self {
            code,
            numeric_code,
            name,
            symbol,
            subunit_exponent,
        }
    }

    /// Resolves a registered currency, ignoring ASCII case.
    ///
    /// Unlike [`lookup_by_code`], an unknown code is an error.
    pub fn from_code(code: &str) -> MoneyResult<&'static Self> {
        lookup_by_code(&code.trim().to_ascii_uppercase())
            .ok_or_else(|| MoneyError::UnknownCurrency(code.to_string()))
    }

    /// Three-letter ISO 4217 code, e.g. "USD".
    #[must_use]
    pub const fn code(&self) -> &'static str {
        self.code
    }

    /// ISO 4217 numeric code, e.g. 840 for USD.
    #[must_use]
    pub const fn numeric_code(&self) -> u16 {
        self.numeric_code
    }

    /// English currency name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Display glyph, e.g. "$". Only used to strip decoration from input.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        self.symbol
    }

    /// Number of decimal places of the minor unit (2 for cents, 0 for yen).
    #[must_use]
    pub const fn subunit_exponent(&self) -> u32 {
        self.subunit_exponent
    }

    /// Smallest representable unit: `10^-exponent`.
    #[must_use]
    pub fn one_subunit(&self) -> Decimal {
        Decimal::new(1, self.subunit_exponent)
    }

    /// Subunits per major unit: `10^exponent`.
    #[must_use]
    pub fn subunits_per_unit(&self) -> Decimal {
        Decimal::from(10_u64.pow(self.subunit_exponent))
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}
