//! Pattern references
//!
//! A pattern is a catalogued interaction-design pattern, referenced by id.

use serde::{Deserialize, Serialize};

/// Pattern identified by the assistant in a single turn
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternReference {
    /// Catalogue id
    pub pattern_id: String,
    /// Why it applies
    pub reason: String,
}

/// Pattern recorded on a brief
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BriefPattern {
    /// Catalogue id
    pub pattern_id: String,
    /// Why it applies
    #[serde(default)]
    pub reason: String,
    /// Whether the user explicitly added it to the brief
    #[serde(default)]
    pub added_to_brief: bool,
}

impl From<PatternReference> for BriefPattern {
    fn from(reference: PatternReference) -> Self {
        Self {
            pattern_id: reference.pattern_id,
            reason: reference.reason,
            added_to_brief: true,
        }
    }
}
