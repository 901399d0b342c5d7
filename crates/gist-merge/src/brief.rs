//! Brief applier and pattern operations

use crate::merge::Merge;
use crate::policy::{append, overwrite_nullable};
use gist_model::{Brief, BriefPattern, BriefUpdate};

impl Merge for Brief {
    fn merge_in_place(&mut self, update: &BriefUpdate) {
        overwrite_nullable(&mut self.goal, &update.goal);
        append(&mut self.context, &update.context);
        append(&mut self.decisions, &update.decisions);
        append(&mut self.open_questions, &update.open_questions);
        append(&mut self.patterns, &update.patterns);
        overwrite_nullable(&mut self.ready_to_design, &update.ready_to_design);
    }
}

/// UI-driven pattern operations on a brief
///
/// Unlike directive merges, adding a pattern here is idempotent by
/// `pattern_id`.
pub trait BriefPatterns {
    /// Add a pattern unless one with the same id exists
    ///
    /// Returns `true` if the pattern was inserted.
    fn add_pattern(&mut self, pattern: impl Into<BriefPattern>) -> bool;

    /// Whether a pattern with this id is on the brief
    fn has_pattern(&self, pattern_id: &str) -> bool;

    /// Remove every pattern with this id
    ///
    /// Returns `true` if anything was removed.
    fn remove_pattern(&mut self, pattern_id: &str) -> bool;
}

impl BriefPatterns for Brief {
    fn add_pattern(&mut self, pattern: impl Into<BriefPattern>) -> bool {
        let pattern = pattern.into();
        if self.has_pattern(&pattern.pattern_id) {
            return false;
        }
        self.patterns.push(pattern);
        true
    }

    #[inline]
    fn has_pattern(&self, pattern_id: &str) -> bool {
        self.patterns.iter().any(|p| p.pattern_id == pattern_id)
    }

    fn remove_pattern(&mut self, pattern_id: &str) -> bool {
        let before = self.patterns.len();
        self.patterns.retain(|p| p.pattern_id != pattern_id);
        self.patterns.len() != before
    }
}
