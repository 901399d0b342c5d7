//! Error types for gist sessions
//!
//! Turn processing itself never fails; these cover the edges around it:
//! loading configuration, restoring snapshots, and streamed turn limits.

use gist_directive::DirectiveError;
use gist_model::DocumentKind;
use std::path::PathBuf;

/// Main session error type
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Configuration file could not be read
    #[error("cannot read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration is not valid TOML of the expected shape
    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),

    /// Configuration parsed but holds an unusable value
    #[error("invalid config value: {0}")]
    InvalidConfig(String),

    /// Snapshot could not be encoded or decoded
    #[error("snapshot error: {0}")]
    Snapshot(#[from] serde_json::Error),

    /// Snapshot belongs to a different document kind
    #[error("snapshot holds a {found} document, expected {expected}")]
    KindMismatch {
        expected: DocumentKind,
        found: DocumentKind,
    },

    /// Streamed turn error
    #[error(transparent)]
    Directive(#[from] DirectiveError),
}

impl CoreError {
    /// Create config read error for path
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether the error came from configuration
    #[inline]
    #[must_use]
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Io { .. } | Self::Config(_) | Self::InvalidConfig(_))
    }
}

/// Result alias for session operations
pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_mismatch_display() {
        let err = CoreError::KindMismatch {
            expected: DocumentKind::Brief,
            found: DocumentKind::Ideation,
        };
        assert_eq!(
            err.to_string(),
            "snapshot holds a ideation document, expected brief"
        );
        assert!(!err.is_config());
    }

    #[test]
    fn io_error_names_path() {
        let err = CoreError::io(
            "/tmp/gist.toml",
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        );
        assert!(err.to_string().contains("/tmp/gist.toml"));
        assert!(err.is_config());
    }
}
