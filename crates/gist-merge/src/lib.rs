//! Gist Merge
//!
//! Combines accumulating documents with the partial updates extracted from
//! assistant turns.
//!
//! # Core Concepts
//!
//! - [`Merge`]: Pure `merge(current, update) -> next` per document kind
//! - [`policy`]: The field policies appliers are assembled from
//!   (overwrite, nullable overwrite, append, keyed add/patch)
//! - [`BriefPatterns`]: Idempotent, UI-driven pattern operations on a brief
//!
//! # Example
//!
//! ```rust
//! use gist_merge::Merge;
//! use gist_model::{Brief, BriefUpdate};
//!
//! let brief = Brief::default();
//! let update: BriefUpdate = serde_json::from_str(r#"{"goal": "Reduce signup friction"}"#).unwrap();
//! let next = brief.merge(&update);
//!
//! assert_eq!(next.goal.as_deref(), Some("Reduce signup friction"));
//! assert_eq!(brief.goal, None);
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

// Appliers
mod brief;
mod constraints;
mod ideation;
mod merge;
mod stakeholder;

pub mod policy;

// Re-exports
pub use brief::BriefPatterns;
pub use merge::Merge;
pub use policy::{KeyedOutcome, Patch};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
