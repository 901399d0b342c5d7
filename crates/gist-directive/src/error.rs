//! Error types for directive extraction
//!
//! None of these reach the end user: the extractor logs them and degrades to
//! a `None` payload so the conversation keeps flowing.

/// Errors while locating or decoding a directive
#[derive(Debug, thiserror::Error)]
pub enum DirectiveError {
    /// JSON inside a located tag did not match the expected payload shape
    #[error("malformed <{tag}> payload: {source}")]
    MalformedPayload {
        tag: String,
        #[source]
        source: serde_json::Error,
    },

    /// Tag name could not be turned into a matcher
    #[error("invalid directive tag '{tag}': {source}")]
    InvalidTag {
        tag: String,
        #[source]
        source: regex::Error,
    },

    /// Streamed turn exceeded the configured size
    #[error("turn exceeds {limit} bytes (attempted {attempted})")]
    TurnTooLarge { limit: usize, attempted: usize },
}

impl DirectiveError {
    /// Create malformed payload error for tag
    pub fn malformed(tag: impl Into<String>, source: serde_json::Error) -> Self {
        Self::MalformedPayload {
            tag: tag.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_display_names_tag() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = DirectiveError::malformed("brief_update", source);
        assert!(err.to_string().starts_with("malformed <brief_update> payload"));
    }

    #[test]
    fn too_large_display() {
        let err = DirectiveError::TurnTooLarge {
            limit: 10,
            attempted: 12,
        };
        assert_eq!(err.to_string(), "turn exceeds 10 bytes (attempted 12)");
    }
}
