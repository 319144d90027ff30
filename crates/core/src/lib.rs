//! Money value type for Moneta.
//!
//! Immutable amount-plus-currency values with exact decimal arithmetic,
//! subunit-exact allocation, checked currency conversion and strict
//! currency-mismatch detection.
//!
//! # Modules
//!
//! - `currency` - Currency registry, locale lookup, allocation, conversion
//! - `money` - The `Money` value and its `Amount`
//! - `context` - Configured defaults applied on top of the registry

pub mod context;
pub mod currency;
pub mod money;

pub use context::MoneyContext;
pub use currency::{Currency, ExchangeRate, default_currency, lookup_by_code, lookup_by_locale};
pub use money::{Amount, IntoAmount, Money};
pub use moneta_shared::{ConversionFault, MoneyConfig, MoneyError, MoneyResult, Rounding};
pub use rust_decimal::Decimal;
