//! Ideation renderer

use crate::markdown::{ListStyle, MarkdownWriter};
use crate::render::{non_blank, Render};
use gist_model::{Approach, Ideation};

/// Label for an approach: its title, or its id when untitled
fn approach_label(approach: &Approach) -> &str {
    let title = approach.title.trim();
    if title.is_empty() {
        &approach.id
    } else {
        title
    }
}

/// Resolve a recommendation target, falling back to the raw id
fn recommended_label(board: &Ideation, approach_id: &str) -> String {
    board
        .find_approach(approach_id)
        .map_or_else(|| approach_id.to_string(), |a| approach_label(a).to_string())
}

impl Render for Ideation {
    fn to_markdown(&self) -> String {
        let mut w = MarkdownWriter::new();
        w.heading(1, "Solution Options");

        w.section(2, "Problem Statement", |s| {
            if let Some(problem) = non_blank(self.problem_statement.as_ref()) {
                s.paragraph(problem);
            }
        });
        w.section(2, "Approaches", |s| {
            for approach in &self.approaches {
                s.heading(3, approach_label(approach));
                s.paragraph(&approach.description)
                    .field("Target users", &approach.target_users)
                    .field("Effort", &approach.effort)
                    .labeled_list("Strengths", ListStyle::Bullets, &approach.strengths)
                    .labeled_list("Weaknesses", ListStyle::Bullets, &approach.weaknesses)
                    .inline_list("Patterns", &approach.patterns);
            }
        });
        w.section(2, "Evaluation Criteria", |s| {
            let items: Vec<String> = self
                .evaluation_criteria
                .iter()
                .map(|c| {
                    if c.weight.trim().is_empty() {
                        c.criterion.clone()
                    } else {
                        format!("{} (weight: {})", c.criterion, c.weight.trim())
                    }
                })
                .collect();
            s.bullets(&items);
        });
        if let Some(recommendation) = &self.recommendation {
            w.section(2, "Recommendation", |s| {
                if !recommendation.approach_id.trim().is_empty() {
                    s.heading(
                        3,
                        &format!(
                            "Recommended Approach: {}",
                            recommended_label(self, &recommendation.approach_id)
                        ),
                    );
                }
                s.paragraph(&recommendation.reasoning).labeled_list(
                    "Next Steps",
                    ListStyle::Numbered,
                    &recommendation.next_steps,
                );
            });
        }

        w.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gist_model::{EvaluationCriterion, Recommendation};
    use pretty_assertions::assert_eq;

    fn approach(id: &str, title: &str) -> Approach {
        Approach {
            id: id.to_string(),
            title: title.to_string(),
            description: "Step-by-step setup".to_string(),
            target_users: String::new(),
            strengths: vec!["Guided".to_string()],
            weaknesses: Vec::new(),
            patterns: vec!["wizard".to_string(), "progress".to_string()],
            effort: "medium".to_string(),
        }
    }

    #[test]
    fn empty_board_is_title_only() {
        assert_eq!(Ideation::default().to_markdown(), "# Solution Options\n");
    }

    #[test]
    fn dangling_recommendation_uses_raw_id() {
        let board = Ideation {
            approaches: vec![approach("a1", "Wizard")],
            recommendation: Some(Recommendation {
                approach_id: "a9".to_string(),
                reasoning: String::new(),
                next_steps: Vec::new(),
            }),
            ..Ideation::default()
        };
        assert!(board.to_markdown().contains("Recommended Approach: a9"));
    }

    #[test]
    fn recommendation_resolves_title() {
        let board = Ideation {
            approaches: vec![approach("a1", "Wizard")],
            recommendation: Some(Recommendation {
                approach_id: "a1".to_string(),
                reasoning: "Lowest risk".to_string(),
                next_steps: vec!["Prototype".to_string(), "Test".to_string()],
            }),
            ..Ideation::default()
        };

        let expected = "\
# Solution Options

## Approaches

### Wizard

Step-by-step setup

**Effort:** medium

**Strengths:**

- Guided

**Patterns:** wizard, progress

## Recommendation

### Recommended Approach: Wizard

Lowest risk

**Next Steps:**

1. Prototype
2. Test
";
        assert_eq!(board.to_markdown(), expected);
    }

    #[test]
    fn untitled_approach_uses_id() {
        let board = Ideation {
            approaches: vec![approach("a3", "  ")],
            ..Ideation::default()
        };
        assert!(board.to_markdown().contains("### a3"));
    }

    #[test]
    fn criteria_show_weight() {
        let board = Ideation {
            evaluation_criteria: vec![
                EvaluationCriterion {
                    criterion: "Cost".to_string(),
                    weight: "3".to_string(),
                },
                EvaluationCriterion {
                    criterion: "Speed".to_string(),
                    weight: String::new(),
                },
            ],
            ..Ideation::default()
        };
        assert!(board.to_markdown().contains("- Cost (weight: 3)\n- Speed\n"));
    }
}
