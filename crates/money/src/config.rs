//! Application configuration management.

use serde::Deserialize;

use crate::types::{Currency, Money};

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Money defaults.
    #[serde(default)]
    pub money: MoneyConfig,
    /// Logging configuration.
    #[serde(default)]
    pub log: LogConfig,
}

/// Money defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MoneyConfig {
    /// Currency used when an amount is created without one.
    #[serde(default)]
    pub default_currency: Currency,
}

impl MoneyConfig {
    /// Creates an amount in the configured default currency.
    #[must_use]
    pub fn money(&self, amount: i64) -> Money {
        Money::new(amount, self.default_currency.clone())
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// `tracing` filter directive, used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

fn default_log_filter() -> String {
    "coinpurse=info".to_string()
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("COINPURSE").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
