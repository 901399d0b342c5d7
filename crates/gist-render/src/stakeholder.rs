//! Stakeholder prep renderer

use crate::markdown::{ListStyle, MarkdownWriter};
use crate::render::{non_blank, Render};
use gist_model::{Objection, StakeholderPrep};

fn objection_heading(o: &Objection) -> String {
    match (o.stakeholder.trim(), o.objection.trim()) {
        ("", "") => o.id.clone(),
        ("", objection) => objection.to_string(),
        (stakeholder, "") => stakeholder.to_string(),
        (stakeholder, objection) => format!("{stakeholder}: {objection}"),
    }
}

impl Render for StakeholderPrep {
    fn to_markdown(&self) -> String {
        let mut w = MarkdownWriter::new();
        w.heading(1, "Stakeholder Prep");
        if let Some(phase) = &self.current_phase {
            w.field("Phase", phase.as_str());
        }

        w.section(2, "Design Decision", |s| {
            if let Some(decision) = non_blank(self.design_decision.as_ref()) {
                s.paragraph(decision);
            }
        });
        w.section(2, "Context", |s| {
            s.bullets(&self.context);
        });
        w.section(2, "Objections", |s| {
            for objection in &self.objections {
                s.heading(3, &objection_heading(objection));
                s.labeled_list("Counter-arguments", ListStyle::Bullets, &objection.counter_arguments)
                    .labeled_list("Evidence needed", ListStyle::Checklist, &objection.evidence_needed);
            }
        });
        w.section(2, "Talking Points", |s| {
            s.numbered(&self.talking_points);
        });
        w.section(2, "Risk Mitigations", |s| {
            s.bullets(&self.risk_mitigations);
        });

        w.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_prep_is_title_only() {
        assert_eq!(StakeholderPrep::default().to_markdown(), "# Stakeholder Prep\n");
    }

    #[test]
    fn renders_objection_blocks() {
        let prep = StakeholderPrep {
            design_decision: Some("Ship the wizard".to_string()),
            objections: vec![Objection {
                id: "o1".to_string(),
                stakeholder: "CFO".to_string(),
                objection: "Too costly".to_string(),
                counter_arguments: vec!["Reuses the kit".to_string()],
                evidence_needed: vec!["Estimate".to_string()],
            }],
            talking_points: vec!["Lead with data".to_string(), "Show the demo".to_string()],
            ..StakeholderPrep::default()
        };

        let expected = "\
# Stakeholder Prep

## Design Decision

Ship the wizard

## Objections

### CFO: Too costly

**Counter-arguments:**

- Reuses the kit

**Evidence needed:**

- [ ] Estimate

## Talking Points

1. Lead with data
2. Show the demo
";
        assert_eq!(prep.to_markdown(), expected);
    }

    #[test]
    fn anonymous_objection_falls_back_to_id() {
        let prep = StakeholderPrep {
            objections: vec![Objection {
                id: "o9".to_string(),
                stakeholder: String::new(),
                objection: String::new(),
                counter_arguments: Vec::new(),
                evidence_needed: Vec::new(),
            }],
            ..StakeholderPrep::default()
        };
        assert!(prep.to_markdown().contains("### o9"));
    }
}
