//! Constraint map applier

use crate::merge::Merge;
use crate::policy::{append, merge_keyed, overwrite, overwrite_nullable, Patch};
use gist_model::{
    Constraint, ConstraintMap, ConstraintPatch, ConstraintsUpdate, DesignImplication,
    ImplicationPatch,
};

impl Patch<Constraint> for ConstraintPatch {
    fn target_id(&self) -> &str {
        &self.id
    }

    fn apply_to(&self, constraint: &mut Constraint) {
        overwrite(&mut constraint.category, self.category.as_ref());
        overwrite(&mut constraint.constraint, self.constraint.as_ref());
        overwrite(&mut constraint.severity, self.severity.as_ref());
        overwrite_nullable(&mut constraint.source, &self.source);
    }
}

impl Patch<DesignImplication> for ImplicationPatch {
    fn target_id(&self) -> &str {
        &self.id
    }

    fn apply_to(&self, implication: &mut DesignImplication) {
        overwrite(&mut implication.constraint_id, self.constraint_id.as_ref());
        overwrite(&mut implication.implication, self.implication.as_ref());
        overwrite(&mut implication.design_response, self.design_response.as_ref());
    }
}

impl Merge for ConstraintMap {
    fn merge_in_place(&mut self, update: &ConstraintsUpdate) {
        overwrite_nullable(&mut self.project_context, &update.project_context);
        merge_keyed(
            &mut self.constraints,
            &update.new_constraints,
            &update.update_constraints,
        );
        merge_keyed(
            &mut self.design_implications,
            &update.new_implications,
            &update.update_implications,
        );
        append(&mut self.opportunities, &update.opportunities);
        overwrite_nullable(&mut self.current_phase, &update.current_phase);
    }
}
