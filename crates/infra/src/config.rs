//! Configuration loading and representation.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use fieldservice_observability::LogFormat;

pub const ENV_LANG: &str = "FIELDSERVICE_LANG";
pub const ENV_RECURRING_PREFIX: &str = "FIELDSERVICE_RECURRING_PREFIX";
pub const ENV_RECURRING_PADDING: &str = "FIELDSERVICE_RECURRING_PADDING";
pub const ENV_CATALOG: &str = "FIELDSERVICE_CATALOG";
pub const ENV_LOG_FORMAT: &str = "FIELDSERVICE_LOG_FORMAT";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var}: {message}")]
    Invalid { var: &'static str, message: String },
}

/// Runtime settings for the field service components.
///
/// | Env Var                           | Default  |
/// |-----------------------------------|----------|
/// | `FIELDSERVICE_LANG`               | `en_US`  |
/// | `FIELDSERVICE_RECURRING_PREFIX`   | `RO`     |
/// | `FIELDSERVICE_RECURRING_PADDING`  | `5`      |
/// | `FIELDSERVICE_CATALOG`            | unset    |
/// | `FIELDSERVICE_LOG_FORMAT`         | `json`   |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldServiceConfig {
    /// Language audit messages are translated into.
    pub lang: String,
    /// Display name prefix of new recurring orders.
    pub recurring_prefix: String,
    /// Digits of the recurring order counter.
    pub recurring_padding: usize,
    /// Translation catalog (JSON) to load, if any.
    pub catalog_path: Option<PathBuf>,
    pub log_format: LogFormat,
}

impl Default for FieldServiceConfig {
    fn default() -> Self {
        Self {
            lang: "en_US".to_string(),
            recurring_prefix: "RO".to_string(),
            recurring_padding: 5,
            catalog_path: None,
            log_format: LogFormat::Json,
        }
    }
}

impl FieldServiceConfig {
    /// Load from process environment variables, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load using `lookup` to resolve variables (empty values count as unset).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(lang) = get(ENV_LANG) {
            config.lang = lang.trim().to_string();
        }
        if let Some(prefix) = get(ENV_RECURRING_PREFIX) {
            config.recurring_prefix = prefix;
        }
        if let Some(padding) = get(ENV_RECURRING_PADDING) {
            config.recurring_padding = padding.trim().parse().map_err(|e| ConfigError::Invalid {
                var: ENV_RECURRING_PADDING,
                message: format!("{e}"),
            })?;
        }
        if let Some(path) = get(ENV_CATALOG) {
            config.catalog_path = Some(PathBuf::from(path));
        }
        if let Some(format) = get(ENV_LOG_FORMAT) {
            config.log_format = format.parse().map_err(|e| ConfigError::Invalid {
                var: ENV_LOG_FORMAT,
                message: format!("{e}"),
            })?;
        }

        if config.recurring_padding > 12 {
            return Err(ConfigError::Invalid {
                var: ENV_RECURRING_PADDING,
                message: format!("must be at most 12, got {}", config.recurring_padding),
            });
        }

        Ok(config)
    }

    /// Install the process-wide tracing subscriber in the configured format.
    ///
    /// Only the first subscriber installed in a process takes effect.
    pub fn init_observability(&self) {
        fieldservice_observability::init_with(self.log_format);
    }
}
