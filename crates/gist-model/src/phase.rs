//! Conversation phase
//!
//! Three of the documents carry the phase of the conversation that produced
//! them. Legal transitions between phases are not defined; merges overwrite
//! the phase like any other scalar.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{self, Display};

/// Conversation phase
///
/// Unknown phase names are preserved verbatim in [`Phase::Other`] so that a
/// novel value from the upstream model never fails a whole payload.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Gathering raw context
    Discovery,
    /// Broadening the option space
    Exploration,
    /// Narrowing and sharpening
    Refinement,
    /// Ready for design or presentation
    Ready,
    /// Any other phase name
    Other(String),
}

impl Phase {
    /// Wire name
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Discovery => "discovery",
            Self::Exploration => "exploration",
            Self::Refinement => "refinement",
            Self::Ready => "ready",
            Self::Other(name) => name,
        }
    }
}

impl From<&str> for Phase {
    fn from(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "discovery" => Self::Discovery,
            "exploration" => Self::Exploration,
            "refinement" => Self::Refinement,
            "ready" => Self::Ready,
            _ => Self::Other(value.to_string()),
        }
    }
}

impl Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Phase {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Phase {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from(raw.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_phases_parse_case_insensitively() {
        assert_eq!(Phase::from("Discovery"), Phase::Discovery);
        assert_eq!(Phase::from(" ready "), Phase::Ready);
    }

    #[test]
    fn unknown_phase_is_preserved() {
        let phase: Phase = serde_json::from_str(r#""rehearsal""#).unwrap();
        assert_eq!(phase, Phase::Other("rehearsal".to_string()));
        assert_eq!(serde_json::to_string(&phase).unwrap(), r#""rehearsal""#);
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Phase::Refinement).unwrap(), r#""refinement""#);
    }
}
