//! Constraint map
//!
//! Constraints on a project, what they imply for the design, and the
//! opportunities they open up.

use crate::document::{Document, DocumentKind, Keyed};
use crate::phase::Phase;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// Constraint map
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConstraintMap {
    pub project_context: Option<String>,
    /// Constraints keyed by id
    pub constraints: Vec<Constraint>,
    /// Implications keyed by id
    pub design_implications: Vec<DesignImplication>,
    /// Append-only
    pub opportunities: Vec<String>,
    pub current_phase: Option<Phase>,
}

impl ConstraintMap {
    /// Find constraint by id
    #[inline]
    #[must_use]
    pub fn find_constraint(&self, id: &str) -> Option<&Constraint> {
        self.constraints.iter().find(|c| c.id == id)
    }

    /// Constraints in one category, in insertion order
    pub fn in_category(&self, category: ConstraintCategory) -> impl Iterator<Item = &Constraint> {
        self.constraints.iter().filter(move |c| c.category == category)
    }
}

impl Document for ConstraintMap {
    type Update = ConstraintsUpdate;

    const KIND: DocumentKind = DocumentKind::Constraints;
}

/// Constraint category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConstraintCategory {
    Technical,
    Timeline,
    Resource,
    Business,
    Regulatory,
}

impl ConstraintCategory {
    /// All categories, in render order
    pub const ALL: [Self; 5] = [
        Self::Technical,
        Self::Timeline,
        Self::Resource,
        Self::Business,
        Self::Regulatory,
    ];

    /// Heading label
    #[inline]
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Technical => "Technical",
            Self::Timeline => "Timeline",
            Self::Resource => "Resource",
            Self::Business => "Business",
            Self::Regulatory => "Regulatory",
        }
    }
}

impl Display for ConstraintCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single constraint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Constraint {
    pub id: String,
    pub category: ConstraintCategory,
    pub constraint: String,
    #[serde(default)]
    pub severity: String,
    /// Who or what imposes it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl Keyed for Constraint {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Partial constraint, matched by id
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConstraintPatch {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<ConstraintCategory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constraint: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,
    #[serde(default, with = "crate::double_option", skip_serializing_if = "Option::is_none")]
    pub source: Option<Option<String>>,
}

/// What a constraint means for the design
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignImplication {
    pub id: String,
    /// References [`Constraint::id`]; may dangle
    #[serde(default)]
    pub constraint_id: String,
    #[serde(default)]
    pub implication: String,
    #[serde(default)]
    pub design_response: String,
}

impl Keyed for DesignImplication {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Partial implication, matched by id
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImplicationPatch {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constraint_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub implication: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub design_response: Option<String>,
}

/// Partial update carried by a `constraints_update` directive
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConstraintsUpdate {
    #[serde(default, with = "crate::double_option", skip_serializing_if = "Option::is_none")]
    pub project_context: Option<Option<String>>,
    #[serde(default, alias = "addConstraints", skip_serializing_if = "Vec::is_empty")]
    pub new_constraints: Vec<Constraint>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub update_constraints: Vec<ConstraintPatch>,
    #[serde(default, alias = "addImplications", skip_serializing_if = "Vec::is_empty")]
    pub new_implications: Vec<DesignImplication>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub update_implications: Vec<ImplicationPatch>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub opportunities: Vec<String>,
    #[serde(default, with = "crate::double_option", skip_serializing_if = "Option::is_none")]
    pub current_phase: Option<Option<Phase>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_rejects_unknown_values() {
        let parsed: Result<ConstraintCategory, _> = serde_json::from_str(r#""legal""#);
        assert!(parsed.is_err());
    }

    #[test]
    fn update_constraints_parses_partial_entities() {
        let update: ConstraintsUpdate = serde_json::from_str(
            r#"{"updateConstraints": [{"id": "c1", "severity": "critical"}]}"#,
        )
        .unwrap();
        assert_eq!(update.update_constraints[0].id, "c1");
        assert_eq!(update.update_constraints[0].severity.as_deref(), Some("critical"));
        assert_eq!(update.update_constraints[0].constraint, None);
        assert_eq!(update.update_constraints[0].source, None);
    }

    #[test]
    fn in_category_filters() {
        let map: ConstraintMap = serde_json::from_str(
            r#"{"constraints": [
                {"id": "c1", "category": "technical", "constraint": "A", "severity": "low"},
                {"id": "c2", "category": "timeline", "constraint": "B", "severity": "low"},
                {"id": "c3", "category": "technical", "constraint": "C", "severity": "low"}
            ]}"#,
        )
        .unwrap();
        let ids: Vec<_> = map
            .in_category(ConstraintCategory::Technical)
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(ids, ["c1", "c3"]);
    }
}
