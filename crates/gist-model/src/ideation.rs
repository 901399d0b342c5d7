//! Solution options board
//!
//! Competing approaches to one problem statement, the criteria they are
//! judged by, and the eventual recommendation.

use crate::document::{Document, DocumentKind, Keyed};
use serde::{Deserialize, Deserializer, Serialize};

/// Solution options board
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Ideation {
    pub problem_statement: Option<String>,
    /// Approaches keyed by id
    pub approaches: Vec<Approach>,
    /// Criteria, append-only
    pub evaluation_criteria: Vec<EvaluationCriterion>,
    pub recommendation: Option<Recommendation>,
}

impl Ideation {
    /// Find approach by id
    #[inline]
    #[must_use]
    pub fn find_approach(&self, id: &str) -> Option<&Approach> {
        self.approaches.iter().find(|a| a.id == id)
    }
}

impl Document for Ideation {
    type Update = IdeationUpdate;

    const KIND: DocumentKind = DocumentKind::Ideation;
}

/// One candidate approach
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Approach {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub target_users: String,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub weaknesses: Vec<String>,
    /// Pattern ids the approach leans on
    #[serde(default)]
    pub patterns: Vec<String>,
    #[serde(default)]
    pub effort: String,
}

impl Keyed for Approach {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Partial approach, matched by id
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApproachPatch {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_users: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub strengths: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub weaknesses: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub patterns: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effort: Option<String>,
}

/// Criterion approaches are judged by
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationCriterion {
    pub criterion: String,
    /// Relative weight; numbers are kept in their textual form
    #[serde(default, deserialize_with = "string_or_number")]
    pub weight: String,
}

/// Recommended approach with next steps
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Recommendation {
    /// References [`Approach::id`]; may dangle
    pub approach_id: String,
    pub reasoning: String,
    pub next_steps: Vec<String>,
}

/// Partial update carried by an `ideation_update` directive
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdeationUpdate {
    #[serde(default, with = "crate::double_option", skip_serializing_if = "Option::is_none")]
    pub problem_statement: Option<Option<String>>,
    #[serde(default, alias = "addApproaches", skip_serializing_if = "Vec::is_empty")]
    pub new_approaches: Vec<Approach>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub update_approaches: Vec<ApproachPatch>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub evaluation_criteria: Vec<EvaluationCriterion>,
    #[serde(default, with = "crate::double_option", skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<Option<Recommendation>>,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Weight {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Weight::deserialize(deserializer)? {
        Weight::Text(text) => text,
        Weight::Number(number) => number.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weight_accepts_numbers_and_text() {
        let numeric: EvaluationCriterion =
            serde_json::from_str(r#"{"criterion": "Speed", "weight": 3}"#).unwrap();
        let textual: EvaluationCriterion =
            serde_json::from_str(r#"{"criterion": "Speed", "weight": "high"}"#).unwrap();
        assert_eq!(numeric.weight, "3");
        assert_eq!(textual.weight, "high");
    }

    #[test]
    fn add_alias_is_accepted() {
        let update: IdeationUpdate =
            serde_json::from_str(r#"{"addApproaches": [{"id": "a1", "title": "Wizard"}]}"#).unwrap();
        assert_eq!(update.new_approaches.len(), 1);
        assert_eq!(update.new_approaches[0].title, "Wizard");
        assert!(update.new_approaches[0].strengths.is_empty());
    }

    #[test]
    fn approach_requires_id() {
        let parsed: Result<Approach, _> = serde_json::from_str(r#"{"title": "No id"}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn find_approach_by_id() {
        let mut board = Ideation::default();
        board.approaches.push(Approach {
            id: "a1".to_string(),
            title: "Wizard".to_string(),
            description: String::new(),
            target_users: String::new(),
            strengths: Vec::new(),
            weaknesses: Vec::new(),
            patterns: Vec::new(),
            effort: String::new(),
        });
        assert!(board.find_approach("a1").is_some());
        assert!(board.find_approach("a2").is_none());
    }
}
