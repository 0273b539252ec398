//! Log subscriber settings.

use crate::errors::ConfigError;
use serde::Deserialize;
use tracing_subscriber::{fmt, EnvFilter};

/// `RUST_LOG` takes precedence over `level`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// `pretty` or `json`.
    pub format: String,
}

impl LoggingConfig {
    fn env_filter(&self) -> Result<EnvFilter, ConfigError> {
        if let Ok(from_env) = EnvFilter::try_from_default_env() {
            return Ok(from_env);
        }
        EnvFilter::try_new(&self.level).map_err(|e| ConfigError::InvalidValue {
            field: "logging.level",
            reason: e.to_string(),
        })
    }

    /// Installs the global subscriber; fails if one is already set.
    pub fn init(&self) -> Result<(), ConfigError> {
        let filter = self.env_filter()?;

        let installed = match self.format.as_str() {
            "json" => fmt().json().with_env_filter(filter).try_init(),
            "pretty" => fmt().with_env_filter(filter).try_init(),
            other => {
                return Err(ConfigError::InvalidValue {
                    field: "logging.format",
                    reason: format!("unknown format '{other}', expected 'pretty' or 'json'"),
                })
            }
        };
        installed.map_err(ConfigError::Logging)
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: "pretty".into(),
        }
    }
}
