//! Ideation applier

use crate::merge::Merge;
use crate::policy::{append, merge_keyed, overwrite, overwrite_nullable, Patch};
use gist_model::{Approach, ApproachPatch, Ideation, IdeationUpdate};

impl Patch<Approach> for ApproachPatch {
    fn target_id(&self) -> &str {
        &self.id
    }

    fn apply_to(&self, approach: &mut Approach) {
        overwrite(&mut approach.title, self.title.as_ref());
        overwrite(&mut approach.description, self.description.as_ref());
        overwrite(&mut approach.target_users, self.target_users.as_ref());
        append(&mut approach.strengths, &self.strengths);
        append(&mut approach.weaknesses, &self.weaknesses);
        append(&mut approach.patterns, &self.patterns);
        overwrite(&mut approach.effort, self.effort.as_ref());
    }
}

impl Merge for Ideation {
    fn merge_in_place(&mut self, update: &IdeationUpdate) {
        overwrite_nullable(&mut self.problem_statement, &update.problem_statement);
        merge_keyed(
            &mut self.approaches,
            &update.new_approaches,
            &update.update_approaches,
        );
        append(&mut self.evaluation_criteria, &update.evaluation_criteria);
        overwrite_nullable(&mut self.recommendation, &update.recommendation);
    }
}
