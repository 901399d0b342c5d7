//! Product design file
//!
//! Feature-based product design, the export target that the conversational
//! documents feed into. Every field is optional on the wire so that a design
//! file in progress loads without error.

use serde::{Deserialize, Serialize};

/// Product design file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GistDesignFile {
    pub product: ProductInfo,
    pub positioning: Positioning,
    pub context: ContextInfo,
    /// Features, in presentation order
    pub features: Vec<Feature>,
}

/// Product metadata
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductInfo {
    pub name: String,
    pub description: String,
    pub audience: String,
    pub ai_approach: String,
}

/// Market positioning
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Positioning {
    pub category: String,
    pub for_who: String,
    pub not_for_who: String,
    pub comparisons: Vec<String>,
}

impl Positioning {
    /// Whether nothing is filled in
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.category.is_empty()
            && self.for_who.is_empty()
            && self.not_for_who.is_empty()
            && self.comparisons.is_empty()
    }
}

/// Commercial and technical context
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContextInfo {
    pub pricing: String,
    pub integrates_with: Vec<String>,
    pub requires: Vec<String>,
    pub stage: String,
}

impl ContextInfo {
    /// Whether nothing is filled in
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pricing.is_empty()
            && self.integrates_with.is_empty()
            && self.requires.is_empty()
            && self.stage.is_empty()
    }
}

/// One product feature
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Feature {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub intent: Intent,
    pub interaction_model: InteractionModel,
    pub design_decisions: Vec<DesignDecision>,
    pub patterns_used: Vec<PatternUsage>,
    pub constraints: Vec<FeatureConstraint>,
    /// Explicit exclusions
    pub not_this: Vec<String>,
    pub open_questions: Vec<String>,
}

/// Why a feature exists
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Intent {
    pub goal: String,
    /// The worry the feature must defuse
    pub core_anxiety: String,
    pub not_trying_to: Vec<String>,
}

impl Intent {
    /// Whether nothing is filled in
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.goal.is_empty() && self.core_anxiety.is_empty() && self.not_trying_to.is_empty()
    }
}

/// How a user moves through a feature
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InteractionModel {
    /// Ordered steps
    pub primary_flow: Vec<String>,
    pub key_interactions: Vec<String>,
    pub error_handling: Vec<String>,
}

impl InteractionModel {
    /// Whether nothing is filled in
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.primary_flow.is_empty() && self.key_interactions.is_empty() && self.error_handling.is_empty()
    }
}

/// Chose X over Y because Z
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DesignDecision {
    pub chose: String,
    pub over: String,
    pub because: String,
}

/// Pattern applied within a feature
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PatternUsage {
    pub pattern_name: String,
    pub usage: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Constraint and the design's answer to it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FeatureConstraint {
    pub constraint: String,
    pub design_response: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sparse_file_loads() {
        let file: GistDesignFile = serde_json::from_str(
            r#"{"product": {"name": "Lumen"}, "features": [{"name": "Import", "notThis": ["sync"]}]}"#,
        )
        .unwrap();
        assert_eq!(file.product.name, "Lumen");
        assert_eq!(file.features[0].not_this, ["sync"]);
        assert!(file.features[0].intent.is_empty());
        assert!(file.positioning.is_empty());
        assert!(file.context.is_empty());
    }

    #[test]
    fn pattern_url_is_optional() {
        let usage: PatternUsage =
            serde_json::from_str(r#"{"patternName": "Undo", "usage": "After delete"}"#).unwrap();
        assert_eq!(usage.url, None);
        let json = serde_json::to_string(&usage).unwrap();
        assert!(!json.contains("url"));
    }
}
