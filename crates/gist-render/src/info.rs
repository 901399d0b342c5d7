//! Document previews
//!
//! A preview is a short title plus an approximate line count used to size
//! document cards. The count is a weighted estimate, not a render.

use crate::render::non_blank;
use gist_model::{
    Brief, ConstraintCategory, ConstraintMap, DocumentKind, GistDesignFile, Ideation,
    StakeholderPrep,
};
use serde::{Deserialize, Serialize};

/// Default title length limit, in characters
pub const DEFAULT_TITLE_MAX_CHARS: usize = 35;

/// Default lower bound on the estimated line count
pub const DEFAULT_MIN_LINE_COUNT: usize = 10;

const TRUNCATION_MARKER: &str = "...";

/// Preview tuning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InfoOptions {
    /// Characters kept before the title is cut
    pub title_max_chars: usize,
    /// Floor for [`DocumentInfo::line_count`]
    pub min_line_count: usize,
}

impl Default for InfoOptions {
    fn default() -> Self {
        Self {
            title_max_chars: DEFAULT_TITLE_MAX_CHARS,
            min_line_count: DEFAULT_MIN_LINE_COUNT,
        }
    }
}

impl InfoOptions {
    /// Set title limit
    #[must_use]
    pub fn with_title_max_chars(mut self, max: usize) -> Self {
        self.title_max_chars = max;
        self
    }

    /// Set line count floor
    #[must_use]
    pub fn with_min_line_count(mut self, min: usize) -> Self {
        self.min_line_count = min;
        self
    }
}

/// Lightweight preview of a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentInfo {
    /// Display title
    pub title: String,
    /// Estimated rendered length
    pub line_count: usize,
}

/// Document that can produce a preview
pub trait Summarize {
    /// Title and estimated size
    fn info(&self, options: &InfoOptions) -> DocumentInfo;
}

/// Cut `text` to `max` characters, marking the cut
fn truncate_title(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((end, _)) => format!("{}{TRUNCATION_MARKER}", &text[..end]),
        None => text.to_string(),
    }
}

fn title_or(source: Option<&str>, fallback: &str, options: &InfoOptions) -> String {
    match source.map(str::trim).filter(|s| !s.is_empty()) {
        Some(title) => truncate_title(title, options.title_max_chars),
        None => fallback.to_string(),
    }
}

/// Weighted line tally
///
/// Each populated section costs a heading plus a blank line, then its body.
#[derive(Debug)]
struct Tally(usize);

impl Tally {
    fn new() -> Self {
        // title line and trailing blank
        Self(2)
    }

    fn section(&mut self, populated: bool, body_lines: usize) -> &mut Self {
        if populated {
            self.0 += 2 + body_lines;
        }
        self
    }

    fn list(&mut self, len: usize) -> &mut Self {
        self.section(len > 0, len)
    }

    fn text(&mut self, value: Option<&String>) -> &mut Self {
        self.section(non_blank(value).is_some(), 1)
    }

    fn finish(&self, options: &InfoOptions) -> usize {
        self.0.max(options.min_line_count)
    }
}

impl Summarize for Brief {
    fn info(&self, options: &InfoOptions) -> DocumentInfo {
        let mut tally = Tally::new();
        tally
            .text(self.goal.as_ref())
            .list(self.context.len())
            .list(self.decisions.len())
            .list(self.open_questions.len())
            .list(self.patterns.len());
        if let Some(ready) = &self.ready_to_design {
            tally.section(true, 2 + ready.checklist.len());
        }
        DocumentInfo {
            title: title_or(self.goal.as_deref(), DocumentKind::Brief.label(), options),
            line_count: tally.finish(options),
        }
    }
}

impl Summarize for Ideation {
    fn info(&self, options: &InfoOptions) -> DocumentInfo {
        let approach_lines: usize = self
            .approaches
            .iter()
            .map(|a| 6 + a.strengths.len() + a.weaknesses.len())
            .sum();
        let mut tally = Tally::new();
        tally
            .text(self.problem_statement.as_ref())
            .section(!self.approaches.is_empty(), approach_lines)
            .list(self.evaluation_criteria.len());
        if let Some(rec) = &self.recommendation {
            tally.section(true, 4 + rec.next_steps.len());
        }
        DocumentInfo {
            title: title_or(
                self.problem_statement.as_deref(),
                DocumentKind::Ideation.label(),
                options,
            ),
            line_count: tally.finish(options),
        }
    }
}

impl Summarize for ConstraintMap {
    fn info(&self, options: &InfoOptions) -> DocumentInfo {
        let groups = ConstraintCategory::ALL
            .iter()
            .filter(|c| self.in_category(**c).next().is_some())
            .count();
        let mut tally = Tally::new();
        tally
            .section(self.current_phase.is_some(), 0)
            .text(self.project_context.as_ref())
            .section(!self.constraints.is_empty(), groups * 2 + self.constraints.len())
            .section(
                !self.design_implications.is_empty(),
                self.design_implications.len() * 6,
            )
            .list(self.opportunities.len());
        DocumentInfo {
            title: title_or(
                self.project_context.as_deref(),
                DocumentKind::Constraints.label(),
                options,
            ),
            line_count: tally.finish(options),
        }
    }
}

impl Summarize for StakeholderPrep {
    fn info(&self, options: &InfoOptions) -> DocumentInfo {
        let objection_lines: usize = self
            .objections
            .iter()
            .map(|o| 6 + o.counter_arguments.len() + o.evidence_needed.len())
            .sum();
        let mut tally = Tally::new();
        tally
            .section(self.current_phase.is_some(), 0)
            .text(self.design_decision.as_ref())
            .list(self.context.len())
            .section(!self.objections.is_empty(), objection_lines)
            .list(self.talking_points.len())
            .list(self.risk_mitigations.len());
        DocumentInfo {
            title: title_or(
                self.design_decision.as_deref(),
                DocumentKind::Stakeholder.label(),
                options,
            ),
            line_count: tally.finish(options),
        }
    }
}

impl Summarize for GistDesignFile {
    fn info(&self, options: &InfoOptions) -> DocumentInfo {
        let feature_lines: usize = self
            .features
            .iter()
            .map(|f| {
                let flow = &f.interaction_model;
                8 + f.intent.not_trying_to.len()
                    + flow.primary_flow.len()
                    + flow.key_interactions.len()
                    + flow.error_handling.len()
                    + f.design_decisions.len()
                    + f.patterns_used.len()
                    + f.constraints.len()
                    + f.not_this.len()
                    + f.open_questions.len()
            })
            .sum();
        let mut tally = Tally::new();
        tally
            .section(!self.product.description.trim().is_empty(), 0)
            .section(
                !(self.product.audience.trim().is_empty() && self.product.ai_approach.trim().is_empty()),
                2,
            )
            .section(!self.positioning.is_empty(), 4 + self.positioning.comparisons.len())
            .section(!self.context.is_empty(), 4)
            .section(!self.features.is_empty(), feature_lines);
        DocumentInfo {
            title: title_or(Some(self.product.name.as_str()), "Product Design", options),
            line_count: tally.finish(options),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gist_model::Decision;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_documents_use_default_titles_and_floor() {
        let options = InfoOptions::default();
        let cases = [
            (Brief::default().info(&options), "Design Brief"),
            (Ideation::default().info(&options), "Solution Options"),
            (ConstraintMap::default().info(&options), "Constraint Map"),
            (StakeholderPrep::default().info(&options), "Stakeholder Prep"),
            (GistDesignFile::default().info(&options), "Product Design"),
        ];
        for (info, title) in cases {
            assert_eq!(info.title, title);
            assert_eq!(info.line_count, DEFAULT_MIN_LINE_COUNT);
        }
    }

    #[test]
    fn long_title_is_truncated_on_char_boundary() {
        let brief = Brief {
            goal: Some("é".repeat(40)),
            ..Brief::default()
        };
        let info = brief.info(&InfoOptions::default());
        assert_eq!(info.title, format!("{}...", "é".repeat(35)));
    }

    #[test]
    fn title_at_limit_is_kept() {
        let goal = "x".repeat(35);
        let brief = Brief {
            goal: Some(goal.clone()),
            ..Brief::default()
        };
        assert_eq!(brief.info(&InfoOptions::default()).title, goal);
    }

    #[test]
    fn blank_title_source_falls_back() {
        let prep = StakeholderPrep {
            design_decision: Some("  ".to_string()),
            ..StakeholderPrep::default()
        };
        assert_eq!(prep.info(&InfoOptions::default()).title, "Stakeholder Prep");
    }

    #[test]
    fn line_count_grows_with_content() {
        let options = InfoOptions::default().with_min_line_count(0);
        let small = Brief::default().info(&options).line_count;
        let big = Brief {
            decisions: vec![
                Decision {
                    decision: "a".to_string(),
                    rationale: String::new(),
                };
                20
            ],
            ..Brief::default()
        }
        .info(&options)
        .line_count;
        assert_eq!(small, 2);
        assert_eq!(big, 24);
    }

    #[test]
    fn options_deserialize_with_defaults() {
        let options: InfoOptions = serde_json::from_str(r#"{"title_max_chars": 10}"#).unwrap();
        assert_eq!(options.title_max_chars, 10);
        assert_eq!(options.min_line_count, DEFAULT_MIN_LINE_COUNT);
    }
}
