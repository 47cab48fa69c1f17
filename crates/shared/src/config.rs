//! Application configuration management.

use serde::Deserialize;

use crate::types::{CurrencyCode, RoundingRule};

/// Largest number of fraction digits a `Decimal` can carry.
pub const DECIMAL_SCALE_LIMIT: u32 = 28;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Currency defaults for new entities.
    #[serde(default)]
    pub currency: CurrencyConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Currency defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct CurrencyConfig {
    /// Reporting currency for a freshly seeded entity.
    #[serde(default = "default_base_currency")]
    pub base_currency: CurrencyCode,
    /// Rounding rule applied when a currency form leaves it unset.
    #[serde(default)]
    pub default_rounding_rule: RoundingRule,
    /// Upper bound accepted for a currency's decimal places.
    #[serde(default = "default_max_decimal_places")]
    pub max_decimal_places: u32,
}

fn default_base_currency() -> CurrencyCode {
    CurrencyCode::USD
}

fn default_max_decimal_places() -> u32 {
    8
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        Self {
            base_currency: default_base_currency(),
            default_rounding_rule: RoundingRule::default(),
            max_decimal_places: default_max_decimal_places(),
        }
    }
}

impl CurrencyConfig {
    /// Returns the configured decimal place ceiling, clamped to what
    /// `Decimal` can represent.
    #[must_use]
    pub fn effective_max_decimal_places(&self) -> u32 {
        self.max_decimal_places.min(DECIMAL_SCALE_LIMIT)
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_filter")]
    pub filter: String,
    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
}

fn default_filter() -> String {
    "meridian=info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            json: false,
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Sources, later ones winning: `config/default`, `config/{RUN_MODE}`,
    /// then `MERIDIAN__SECTION__KEY` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix("MERIDIAN")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
