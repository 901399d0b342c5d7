//! Gist Document Model
//!
//! Accumulating design documents built up over a conversation, plus the
//! partial update payloads an assistant turn can carry.
//!
//! # Core Concepts
//!
//! - [`Document`]: Trait tying a document to its update payload and directive tag
//! - [`DocumentKind`]: The four conversational document kinds
//! - [`Brief`], [`Ideation`], [`ConstraintMap`], [`StakeholderPrep`]: Conversational documents
//! - [`GistDesignFile`]: Feature-based product design export target
//! - [`PatternReference`]: A catalogued interaction pattern identified in a turn
//!
//! # Update semantics
//!
//! Update payloads distinguish an absent scalar (keep current value) from an
//! explicit `null` (clear the value) through `Option<Option<T>>` fields; see
//! [`double_option`].
//!
//! # Example
//!
//! ```rust
//! use gist_model::{BriefUpdate, Document, Brief, DocumentKind};
//!
//! let update: BriefUpdate = serde_json::from_str(r#"{"goal": null}"#).unwrap();
//! assert_eq!(update.goal, Some(None));
//! assert_eq!(Brief::KIND, DocumentKind::Brief);
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
mod brief;
mod constraints;
mod design_file;
mod document;
mod ideation;
mod pattern;
mod phase;
mod stakeholder;

pub mod double_option;

// Re-exports
pub use brief::{Brief, BriefUpdate, Decision, ReadyToDesign};
pub use constraints::{
    Constraint, ConstraintCategory, ConstraintMap, ConstraintPatch, ConstraintsUpdate,
    DesignImplication, ImplicationPatch,
};
pub use design_file::{
    ContextInfo, DesignDecision, Feature, FeatureConstraint, GistDesignFile, Intent,
    InteractionModel, PatternUsage, Positioning, ProductInfo,
};
pub use document::{Document, DocumentKind, Keyed, UnknownKind};
pub use ideation::{Approach, ApproachPatch, EvaluationCriterion, Ideation, IdeationUpdate, Recommendation};
pub use pattern::{BriefPattern, PatternReference};
pub use phase::Phase;
pub use stakeholder::{Objection, ObjectionPatch, StakeholderPrep, StakeholderUpdate};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod integration_tests {
    use super::*;

    #[test]
    fn kinds_cover_every_document() {
        assert_eq!(Brief::KIND, DocumentKind::Brief);
        assert_eq!(Ideation::KIND, DocumentKind::Ideation);
        assert_eq!(ConstraintMap::KIND, DocumentKind::Constraints);
        assert_eq!(StakeholderPrep::KIND, DocumentKind::Stakeholder);
    }

    #[test]
    fn session_state_round_trips_as_json() {
        let mut map = ConstraintMap::default();
        map.project_context = Some("Checkout redesign".to_string());
        map.constraints.push(Constraint {
            id: "c1".to_string(),
            category: ConstraintCategory::Regulatory,
            constraint: "PCI scope must not grow".to_string(),
            severity: "high".to_string(),
            source: None,
        });
        map.current_phase = Some(Phase::Refinement);

        let json = serde_json::to_string(&map).unwrap();
        let back: ConstraintMap = serde_json::from_str(&json).unwrap();
        assert_eq!(back, map);
    }
}
