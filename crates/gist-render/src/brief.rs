//! Brief renderer

use crate::markdown::MarkdownWriter;
use crate::render::{emphasis_item, non_blank, Render};
use gist_model::Brief;

impl Render for Brief {
    fn to_markdown(&self) -> String {
        let mut w = MarkdownWriter::new();
        w.heading(1, "Design Brief");

        w.section(2, "Goal", |s| {
            if let Some(goal) = non_blank(self.goal.as_ref()) {
                s.paragraph(goal);
            }
        });
        w.section(2, "Context", |s| {
            s.bullets(&self.context);
        });
        w.section(2, "Decisions", |s| {
            let items: Vec<String> = self
                .decisions
                .iter()
                .filter_map(|d| emphasis_item(&d.decision, &d.rationale))
                .collect();
            s.bullets(&items);
        });
        w.section(2, "Open Questions", |s| {
            s.checklist(&self.open_questions);
        });
        w.section(2, "Patterns", |s| {
            let items: Vec<String> = self
                .patterns
                .iter()
                .filter_map(|p| emphasis_item(&p.pattern_id, &p.reason))
                .collect();
            s.bullets(&items);
        });
        if let Some(ready) = &self.ready_to_design {
            w.section(2, "Ready to Design", |s| {
                s.paragraph(&ready.prompt).checklist(&ready.checklist);
            });
        }

        w.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gist_model::{Decision, ReadyToDesign};
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_brief_is_title_only() {
        assert_eq!(Brief::default().to_markdown(), "# Design Brief\n");
    }

    #[test]
    fn blank_goal_and_empty_ready_block_are_omitted() {
        let brief = Brief {
            goal: Some("   ".to_string()),
            ready_to_design: Some(ReadyToDesign::default()),
            ..Brief::default()
        };
        assert_eq!(brief.to_markdown(), "# Design Brief\n");
    }

    #[test]
    fn renders_sections_in_order() {
        let brief = Brief {
            goal: Some("Reduce signup friction".to_string()),
            context: vec!["B2B tool".to_string()],
            decisions: vec![Decision {
                decision: "Social login".to_string(),
                rationale: "Fewer fields".to_string(),
            }],
            open_questions: vec!["Verify email?".to_string()],
            ready_to_design: Some(ReadyToDesign {
                prompt: "Design a two-step signup".to_string(),
                checklist: vec!["Goal agreed".to_string()],
            }),
            ..Brief::default()
        };

        let expected = "\
# Design Brief

## Goal

Reduce signup friction

## Context

- B2B tool

## Decisions

- **Social login**: Fewer fields

## Open Questions

- [ ] Verify email?

## Ready to Design

Design a two-step signup

- [ ] Goal agreed
";
        assert_eq!(brief.to_markdown(), expected);
    }
}
