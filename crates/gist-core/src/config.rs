//! Gist configuration
//!
//! Loaded from TOML. Every key is optional:
//!
//! ```toml
//! max_turn_bytes = 262144
//!
//! [info]
//! title_max_chars = 35
//! min_line_count = 10
//!
//! [log]
//! filter = "info"
//! json = false
//! ```

use crate::error::{CoreError, Result};
use gist_directive::DEFAULT_MAX_TURN_BYTES;
use gist_render::InfoOptions;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Gist configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GistConfig {
    /// Upper bound on a buffered assistant turn
    pub max_turn_bytes: usize,
    /// Preview tuning
    pub info: InfoOptions,
    /// Logging setup for the binary
    pub log: LogConfig,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset
    pub filter: String,
    /// Emit JSON lines instead of text
    pub json: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            json: false,
        }
    }
}

impl Default for GistConfig {
    fn default() -> Self {
        Self {
            max_turn_bytes: DEFAULT_MAX_TURN_BYTES,
            info: InfoOptions::default(),
            log: LogConfig::default(),
        }
    }
}

impl GistConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With max turn size
    #[inline]
    #[must_use]
    pub fn with_max_turn_bytes(mut self, max: usize) -> Self {
        self.max_turn_bytes = max;
        self
    }

    /// With preview title limit
    #[inline]
    #[must_use]
    pub fn with_title_max_chars(mut self, max: usize) -> Self {
        self.info.title_max_chars = max;
        self
    }

    /// With preview line count floor
    #[inline]
    #[must_use]
    pub fn with_min_line_count(mut self, min: usize) -> Self {
        self.info.min_line_count = min;
        self
    }

    /// With log filter
    #[inline]
    #[must_use]
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log.filter = filter.into();
        self
    }

    /// With JSON log output
    #[inline]
    #[must_use]
    pub fn with_json_logs(mut self, json: bool) -> Self {
        self.log.json = json;
        self
    }

    /// Parse and validate configuration from TOML text
    ///
    /// # Errors
    /// Returns [`CoreError::Config`] on malformed TOML and
    /// [`CoreError::InvalidConfig`] on unusable values.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    ///
    /// # Errors
    /// Returns [`CoreError::Io`] if the file cannot be read, otherwise as
    /// [`GistConfig::from_toml_str`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| CoreError::io(path, e))?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Check values are usable
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidConfig`] naming the offending key.
    pub fn validate(&self) -> Result<()> {
        if self.max_turn_bytes == 0 {
            return Err(CoreError::InvalidConfig(
                "max_turn_bytes must be positive".to_string(),
            ));
        }
        if self.info.title_max_chars == 0 {
            return Err(CoreError::InvalidConfig(
                "info.title_max_chars must be positive".to_string(),
            ));
        }
        if self.log.filter.trim().is_empty() {
            return Err(CoreError::InvalidConfig("log.filter is empty".to_string()));
        }
        Ok(())
    }
}
