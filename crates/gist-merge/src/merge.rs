//! Merge trait
//!
//! Provides [`Merge`], the pure combination of a document with one incoming
//! partial update.

use gist_model::Document;

/// Document that can absorb its own update payload
///
/// # Invariants
/// - `merge` never mutates `self`
/// - Append-only list fields never shrink
/// - Patches for unknown ids are no-ops
pub trait Merge: Document {
    /// Apply `update` to `self` in place
    fn merge_in_place(&mut self, update: &Self::Update);

    /// Produce the merged document, leaving `self` untouched
    #[must_use]
    fn merge(&self, update: &Self::Update) -> Self {
        let mut next = self.clone();
        next.merge_in_place(update);
        next
    }
}
