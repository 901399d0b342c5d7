//! Stakeholder preparation
//!
//! Material for defending a design decision in front of stakeholders.

use crate::document::{Document, DocumentKind, Keyed};
use crate::phase::Phase;
use serde::{Deserialize, Serialize};

/// Stakeholder preparation document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StakeholderPrep {
    pub design_decision: Option<String>,
    pub context: Vec<String>,
    /// Objections keyed by id
    pub objections: Vec<Objection>,
    pub talking_points: Vec<String>,
    pub risk_mitigations: Vec<String>,
    pub current_phase: Option<Phase>,
}

impl Document for StakeholderPrep {
    type Update = StakeholderUpdate;

    const KIND: DocumentKind = DocumentKind::Stakeholder;
}

/// Anticipated objection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Objection {
    pub id: String,
    #[serde(default)]
    pub stakeholder: String,
    #[serde(default)]
    pub objection: String,
    #[serde(default)]
    pub counter_arguments: Vec<String>,
    #[serde(default)]
    pub evidence_needed: Vec<String>,
}

impl Keyed for Objection {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Partial objection, matched by id
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectionPatch {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stakeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub objection: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub counter_arguments: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub evidence_needed: Vec<String>,
}

/// Partial update carried by a `stakeholder_update` directive
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StakeholderUpdate {
    #[serde(default, with = "crate::double_option", skip_serializing_if = "Option::is_none")]
    pub design_decision: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub context: Vec<String>,
    #[serde(default, alias = "addObjections", skip_serializing_if = "Vec::is_empty")]
    pub new_objections: Vec<Objection>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub update_objections: Vec<ObjectionPatch>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub talking_points: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub risk_mitigations: Vec<String>,
    #[serde(default, with = "crate::double_option", skip_serializing_if = "Option::is_none")]
    pub current_phase: Option<Option<Phase>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_parses_phase_and_objections() {
        let update: StakeholderUpdate = serde_json::from_str(
            r#"{
                "currentPhase": "refinement",
                "newObjections": [{"id": "o1", "stakeholder": "CFO", "objection": "Too costly"}]
            }"#,
        )
        .unwrap();
        assert_eq!(update.current_phase, Some(Some(Phase::Refinement)));
        assert_eq!(update.new_objections[0].stakeholder, "CFO");
        assert!(update.new_objections[0].counter_arguments.is_empty());
    }
}
