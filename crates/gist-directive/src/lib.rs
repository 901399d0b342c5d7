//! Gist Directive Extraction
//!
//! The boundary between free-form assistant text and the typed document
//! updates the rest of the workspace works with.
//!
//! # Core Operations
//!
//! - **Buffer**: Collect a streamed turn until it is complete ([`TurnBuffer`])
//! - **Extract**: Strip directive tags and decode their payloads ([`extract_for`])
//!
//! # Architecture
//!
//! ```text
//! stream chunks → TurnBuffer → finish() → extract_for::<D>() → Extraction { display_content, update, pattern }
//! ```
//!
//! # Example
//!
//! ```rust
//! use gist_directive::extract_for;
//! use gist_model::Brief;
//!
//! let raw = "Noted.\n<brief_update>{\"context\": [\"B2B\"]}</brief_update>";
//! let out = extract_for::<Brief>(raw);
//!
//! assert_eq!(out.display_content, "Noted.");
//! assert_eq!(out.update.unwrap().context, ["B2B"]);
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

// Core modules
pub mod buffer;
pub mod error;
pub mod extract;

// Re-exports for convenience
pub use buffer::{TurnBuffer, DEFAULT_MAX_TURN_BYTES};
pub use error::DirectiveError;
pub use extract::{extract_for, extract_with_tag, parse_payload, strip_directives, Extraction, PATTERN_TAG};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
