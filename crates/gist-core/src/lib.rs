//! Gist Core - conversation sessions
//!
//! Ties the document model, directive extraction, merging and rendering
//! together behind a per-conversation [`Session`]:
//! - Applies each complete assistant turn as extract → merge
//! - Exports markdown and previews on demand
//! - Snapshots sessions to JSON for handoff between flows
//! - Loads [`GistConfig`] from TOML
//!
//! # Example
//!
//! ```rust
//! use gist_core::{GistConfig, Session};
//! use gist_model::Brief;
//!
//! let mut session: Session<Brief> = Session::new(&GistConfig::new());
//! let outcome = session.apply_turn(
//!     "Here's my analysis.\n<brief_update>{\"goal\":\"Reduce signup friction\"}</brief_update>\nDone.",
//! );
//!
//! assert_eq!(outcome.display_content, "Here's my analysis.\n\nDone.");
//! assert_eq!(session.info().title, "Reduce signup friction");
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
pub mod any_session;
pub mod config;
pub mod error;
pub mod session;

// Re-exports for convenience
pub use any_session::{extract_json, AnySession};
pub use config::{GistConfig, LogConfig};
pub use error::{CoreError, Result};
pub use session::{snapshot_kind, Session, SessionDocument, SessionId, TurnOutcome};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with gist sessions
    pub use crate::{AnySession, GistConfig, Session, TurnOutcome};
    pub use gist_merge::{BriefPatterns, Merge};
    pub use gist_model::{Brief, ConstraintMap, DocumentKind, Ideation, StakeholderPrep};
    pub use gist_render::{Render, Summarize};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
