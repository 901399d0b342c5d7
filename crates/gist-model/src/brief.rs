//! Design brief
//!
//! The primary document: a goal, the context behind it, decisions taken so
//! far, open questions, and patterns worth applying.

use crate::document::{Document, DocumentKind};
use crate::pattern::BriefPattern;
use serde::{Deserialize, Serialize};

/// Design brief
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Brief {
    /// What the design should achieve
    pub goal: Option<String>,
    /// Background facts, append-only
    pub context: Vec<String>,
    /// Decisions with rationale, append-only
    pub decisions: Vec<Decision>,
    /// Unresolved questions, append-only
    pub open_questions: Vec<String>,
    /// Patterns referenced by the brief
    pub patterns: Vec<BriefPattern>,
    /// Hand-off prompt once the brief is complete
    pub ready_to_design: Option<ReadyToDesign>,
}

impl Brief {
    /// Whether every field is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

impl Document for Brief {
    type Update = BriefUpdate;

    const KIND: DocumentKind = DocumentKind::Brief;
}

/// A decision and why it was taken
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Decision {
    /// The decision
    pub decision: String,
    /// Why
    #[serde(default)]
    pub rationale: String,
}

/// Design hand-off block
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReadyToDesign {
    /// Prompt to hand to a design tool or designer
    pub prompt: String,
    /// Items to confirm before starting
    pub checklist: Vec<String>,
}

/// Partial brief update carried by a `brief_update` directive
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BriefUpdate {
    #[serde(default, with = "crate::double_option", skip_serializing_if = "Option::is_none")]
    pub goal: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub context: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub decisions: Vec<Decision>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub open_questions: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub patterns: Vec<BriefPattern>,
    #[serde(default, with = "crate::double_option", skip_serializing_if = "Option::is_none")]
    pub ready_to_design: Option<Option<ReadyToDesign>>,
}
