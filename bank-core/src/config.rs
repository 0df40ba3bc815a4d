//! Configuration management
//!
//! Settings live in `settings.json` inside the bank directory:
//! ```json
//! {
//!   "currencySymbol": "$",
//!   "maxTransaction": "5000",
//!   "logLevel": "warn"
//! }
//! ```
//! Keys this crate does not know about are kept when saving.

use std::collections::HashMap;
use std::path::Path;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::is_amount_valid;
use crate::domain::result::{Error, Result};

const SETTINGS_FILE: &str = "settings.json";

const DEFAULT_CURRENCY_SYMBOL: &str = "$";
const DEFAULT_LOG_LEVEL: &str = "warn";

/// Raw settings.json structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    currency_symbol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    max_transaction: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    log_level: Option<String>,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

/// The fields this crate manages, each absent unless set by its source
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct ManagedValues {
    currency_symbol: Option<String>,
    max_transaction: Option<Decimal>,
    log_level: Option<String>,
}

/// Bank configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Symbol printed in front of amounts
    pub currency_symbol: String,
    /// Upper bound on a single deposit, withdrawal or transfer
    pub max_transaction: Option<Decimal>,
    /// Default log filter when `BANK_LOG` is unset
    pub log_level: String,
    // What settings.json held, and what the environment replaced it with.
    // Overrides still in effect are never written back.
    _file_values: ManagedValues,
    _env_overrides: ManagedValues,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            max_transaction: None,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            _file_values: ManagedValues::default(),
            _env_overrides: ManagedValues::default(),
        }
    }
}

impl Config {
    /// Load config from the bank directory
    ///
    /// A missing or unreadable settings file yields the defaults. Environment
    /// variables `BANK_CURRENCY_SYMBOL`, `BANK_MAX_TRANSACTION` and `BANK_LOG`
    /// override the file for this process only.
    pub fn load(bank_dir: &Path) -> Result<Self> {
        Self::load_with_env(bank_dir, |key| std::env::var(key).ok())
    }

    fn load_with_env(bank_dir: &Path, var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let settings_path = bank_dir.join(SETTINGS_FILE);

        let raw: SettingsFile = if settings_path.exists() {
            let content = std::fs::read_to_string(&settings_path)?;
            serde_json::from_str(&content).unwrap_or_default()
        } else {
            SettingsFile::default()
        };

        let mut config = Self::from_settings(raw);
        config.apply_env(var)?;
        Ok(config)
    }

    /// Save config to the bank directory, preserving unmanaged keys
    ///
    /// A field still holding its environment override keeps the value the
    /// file had; fields changed since loading are written as they are now.
    pub fn save(&self, bank_dir: &Path) -> Result<()> {
        let settings_path = bank_dir.join(SETTINGS_FILE);

        let mut settings = if settings_path.exists() {
            let content = std::fs::read_to_string(&settings_path)?;
            serde_json::from_str::<SettingsFile>(&content).unwrap_or_default()
        } else {
            SettingsFile::default()
        };

        let file = &self._file_values;
        let env = &self._env_overrides;

        settings.currency_symbol = if env.currency_symbol.as_ref() == Some(&self.currency_symbol) {
            file.currency_symbol.clone()
        } else {
            Some(self.currency_symbol.clone())
        };
        settings.max_transaction =
            if env.max_transaction.is_some() && env.max_transaction == self.max_transaction {
                file.max_transaction
            } else {
                self.max_transaction
            };
        settings.log_level = if env.log_level.as_ref() == Some(&self.log_level) {
            file.log_level.clone()
        } else {
            Some(self.log_level.clone())
        };

        let content = serde_json::to_string_pretty(&settings)?;
        std::fs::write(&settings_path, content)?;
        Ok(())
    }

    /// Set the per-operation limit, rejecting amounts that are not valid
    pub fn set_max_transaction(&mut self, limit: Option<Decimal>) -> Result<()> {
        if let Some(limit) = limit {
            if !is_amount_valid(limit) {
                return Err(Error::config(format!("invalid maxTransaction: {}", limit)));
            }
        }
        self.max_transaction = limit;
        Ok(())
    }

    fn from_settings(raw: SettingsFile) -> Self {
        let defaults = Self::default();
        let file_values = ManagedValues {
            currency_symbol: raw.currency_symbol,
            max_transaction: raw.max_transaction.filter(|m| is_amount_valid(*m)),
            log_level: raw.log_level,
        };
        Self {
            currency_symbol: file_values
                .currency_symbol
                .clone()
                .unwrap_or(defaults.currency_symbol),
            max_transaction: file_values.max_transaction,
            log_level: file_values.log_level.clone().unwrap_or(defaults.log_level),
            _file_values: file_values,
            _env_overrides: ManagedValues::default(),
        }
    }

    fn apply_env(&mut self, var: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(symbol) = var("BANK_CURRENCY_SYMBOL") {
            self.currency_symbol = symbol.clone();
            self._env_overrides.currency_symbol = Some(symbol);
        }
        if let Some(limit) = var("BANK_MAX_TRANSACTION") {
            let parsed = limit.trim().parse::<Decimal>().map_err(|_| {
                Error::config(format!("BANK_MAX_TRANSACTION is not a number: {}", limit))
            })?;
            self.set_max_transaction(Some(parsed))?;
            self._env_overrides.max_transaction = Some(parsed);
        }
        if let Some(level) = var("BANK_LOG") {
            self.log_level = level.clone();
            self._env_overrides.log_level = Some(level);
        }
        Ok(())
    }
}
