//! Constraint map renderer

use crate::markdown::MarkdownWriter;
use crate::render::{non_blank, Render};
use gist_model::{Constraint, ConstraintCategory, ConstraintMap};

fn constraint_item(c: &Constraint) -> Option<String> {
    let text = c.constraint.trim();
    if text.is_empty() {
        return None;
    }
    let mut item = match c.severity.trim() {
        "" => text.to_string(),
        severity => format!("**[{severity}]** {text}"),
    };
    if let Some(source) = non_blank(c.source.as_ref()) {
        item.push_str(&format!(" (source: {source})"));
    }
    Some(item)
}

impl Render for ConstraintMap {
    fn to_markdown(&self) -> String {
        let mut w = MarkdownWriter::new();
        w.heading(1, "Constraint Map");
        if let Some(phase) = &self.current_phase {
            w.field("Phase", phase.as_str());
        }

        w.section(2, "Project Context", |s| {
            if let Some(context) = non_blank(self.project_context.as_ref()) {
                s.paragraph(context);
            }
        });
        w.section(2, "Constraints", |s| {
            for category in ConstraintCategory::ALL {
                s.section(3, category.label(), |g| {
                    let items: Vec<String> =
                        self.in_category(category).filter_map(constraint_item).collect();
                    g.bullets(&items);
                });
            }
        });
        w.section(2, "Design Implications", |s| {
            for implication in &self.design_implications {
                let target = self
                    .find_constraint(&implication.constraint_id)
                    .map_or(implication.constraint_id.as_str(), |c| c.constraint.as_str());
                s.field("Constraint", target)
                    .paragraph(&implication.implication)
                    .field("Design response", &implication.design_response);
            }
        });
        w.section(2, "Opportunities", |s| {
            s.bullets(&self.opportunities);
        });

        w.finish()
    }
}
