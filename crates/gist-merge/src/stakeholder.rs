//! Stakeholder prep applier

use crate::merge::Merge;
use crate::policy::{append, merge_keyed, overwrite, overwrite_nullable, Patch};
use gist_model::{Objection, ObjectionPatch, StakeholderPrep, StakeholderUpdate};

impl Patch<Objection> for ObjectionPatch {
    fn target_id(&self) -> &str {
        &self.id
    }

    fn apply_to(&self, objection: &mut Objection) {
        overwrite(&mut objection.stakeholder, self.stakeholder.as_ref());
        overwrite(&mut objection.objection, self.objection.as_ref());
        append(&mut objection.counter_arguments, &self.counter_arguments);
        append(&mut objection.evidence_needed, &self.evidence_needed);
    }
}

impl Merge for StakeholderPrep {
    fn merge_in_place(&mut self, update: &StakeholderUpdate) {
        overwrite_nullable(&mut self.design_decision, &update.design_decision);
        append(&mut self.context, &update.context);
        merge_keyed(
            &mut self.objections,
            &update.new_objections,
            &update.update_objections,
        );
        append(&mut self.talking_points, &update.talking_points);
        append(&mut self.risk_mitigations, &update.risk_mitigations);
        overwrite_nullable(&mut self.current_phase, &update.current_phase);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn objection_patch_accumulates_arguments() {
        let prep = StakeholderPrep {
            objections: vec![Objection {
                id: "o1".to_string(),
                stakeholder: "Head of Sales".to_string(),
                objection: "Removes the demo request form".to_string(),
                counter_arguments: vec!["Self-serve converts better".to_string()],
                evidence_needed: Vec::new(),
            }],
            ..StakeholderPrep::default()
        };

        let merged = prep.merge(&StakeholderUpdate {
            update_objections: vec![
                ObjectionPatch {
                    id: "o1".to_string(),
                    counter_arguments: vec!["Demo link stays in footer".to_string()],
                    evidence_needed: vec!["Q3 funnel data".to_string()],
                    ..ObjectionPatch::default()
                },
                ObjectionPatch {
                    id: "o9".to_string(),
                    objection: Some("ghost".to_string()),
                    ..ObjectionPatch::default()
                },
            ],
            ..StakeholderUpdate::default()
        });

        assert_eq!(merged.objections.len(), 1);
        let o1 = &merged.objections[0];
        assert_eq!(o1.stakeholder, "Head of Sales");
        assert_eq!(
            o1.counter_arguments,
            ["Self-serve converts better", "Demo link stays in footer"]
        );
        assert_eq!(o1.evidence_needed, ["Q3 funnel data"]);
    }

    #[test]
    fn lists_append() {
        let prep = StakeholderPrep {
            talking_points: vec!["Lead with the metric".to_string()],
            ..StakeholderPrep::default()
        };
        let merged = prep.merge(&StakeholderUpdate {
            design_decision: Some(Some("Remove the demo gate".to_string())),
            talking_points: vec!["Show the prototype".to_string()],
            risk_mitigations: vec!["A/B test for two weeks".to_string()],
            context: vec!["Board meeting in May".to_string()],
            ..StakeholderUpdate::default()
        });
        assert_eq!(merged.design_decision.as_deref(), Some("Remove the demo gate"));
        assert_eq!(merged.talking_points.len(), 2);
        assert_eq!(merged.risk_mitigations.len(), 1);
        assert_eq!(merged.context.len(), 1);
    }
}
