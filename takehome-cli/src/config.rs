//! `takehome.toml` application settings.
//!
//! Every section and key is optional; a missing file yields
//! [`AppConfig::default`].
//!
//! ```toml
//! [defaults]
//! filing_status = "married_joint"
//! state_code = "NY"
//!
//! [cache]
//! max_entries = 100
//! max_age_secs = 86400
//!
//! [logging]
//! level = "info"
//! file = "takehome.log"
//! ```

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use chrono::Duration;
use serde::Deserialize;
use takehome_core::FilingStatus;
use tracing_subscriber::EnvFilter;

pub const DEFAULT_CONFIG_FILE: &str = "takehome.toml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: Box<toml::de::Error>,
    },

    #[error("invalid config value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub defaults: DefaultsConfig,
    pub cache: CacheConfig,
    pub logging: LoggingConfig,
}

/// Values used when the command line leaves them out.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DefaultsConfig {
    pub filing_status: FilingStatus,
    pub state_code: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            filing_status: FilingStatus::Single,
            state_code: "TX".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CacheConfig {
    pub max_entries: usize,
    pub max_age_secs: i64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_entries: 100,
            max_age_secs: 24 * 60 * 60,
        }
    }
}

impl CacheConfig {
    pub fn max_age(&self) -> Duration {
        Duration::seconds(self.max_age_secs)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// A level or any `RUST_LOG`-style directive.
    pub level: String,
    /// Log records are appended here in addition to stderr.
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            file: None,
        }
    }
}

impl AppConfig {
    /// Reads and validates `path`. A file that does not exist gives the
    /// defaults; any other read failure is an error.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let config: Self = toml::from_str(&text).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: Box::new(e),
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let state_code = self.defaults.state_code.trim();
        if state_code.len() != 2 || !state_code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ConfigError::Invalid {
                key: "defaults.state_code",
                reason: format!("expected a two-letter code, got '{}'", self.defaults.state_code),
            });
        }
        if self.cache.max_entries == 0 {
            return Err(ConfigError::Invalid {
                key: "cache.max_entries",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.cache.max_age_secs <= 0 {
            return Err(ConfigError::Invalid {
                key: "cache.max_age_secs",
                reason: format!("must be positive, got {}", self.cache.max_age_secs),
            });
        }
        if let Err(e) = EnvFilter::try_new(&self.logging.level) {
            return Err(ConfigError::Invalid {
                key: "logging.level",
                reason: e.to_string(),
            });
        }
        Ok(())
    }
}
