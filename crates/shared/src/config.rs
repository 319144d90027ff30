//! Money configuration management.

use rust_decimal::RoundingStrategy;
use serde::Deserialize;

/// Money configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MoneyConfig {
    /// ISO 4217 code used for amounts created without a currency.
    #[serde(default = "default_currency")]
    pub default_currency: String,
    /// Rounding applied when converting between currencies.
    #[serde(default)]
    pub conversion_rounding: Rounding,
}

fn default_currency() -> String {
    "USD".to_string()
}

impl Default for MoneyConfig {
    fn default() -> Self {
        Self {
            default_currency: default_currency(),
            conversion_rounding: Rounding::default(),
        }
    }
}

/// Rounding mode for values snapped to a currency's subunit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rounding {
    /// Midpoints round away from zero (22.465 -> 22.47).
    #[default]
    HalfUp,
    /// Banker's rounding: midpoints round to the even neighbour.
    HalfEven,
    /// Truncate toward zero.
    Down,
}

impl Rounding {
    /// Returns the matching `rust_decimal` strategy.
    #[must_use]
    pub const fn strategy(self) -> RoundingStrategy {
        match self {
            Self::HalfUp => RoundingStrategy::MidpointAwayFromZero,
            Self::HalfEven => RoundingStrategy::MidpointNearestEven,
            Self::Down => RoundingStrategy::ToZero,
        }
    }
}

impl MoneyConfig {
    /// Loads configuration from `.env`, config files and the environment.
    ///
    /// Sources, later ones overriding earlier ones: `config/default`,
    /// `config/{RUN_MODE}`, then `MONETA_*` environment variables
    /// (e.g. `MONETA_DEFAULT_CURRENCY=EUR`).
    ///
    /// # Errors
    ///
    /// Returns an error if a source is malformed or a value has the wrong type.
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();

        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix("MONETA")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        config.try_deserialize()
    }
}
