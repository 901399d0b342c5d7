//! Gist Document Rendering
//!
//! Markdown export and lightweight previews for every document kind.
//!
//! # Core Concepts
//!
//! - [`Render`]: Full CommonMark export of a document
//! - [`render_design_file`]: Design file export in [`RenderMode::Full`] or [`RenderMode::Summary`]
//! - [`Summarize`]: Title and estimated size for preview cards
//! - [`MarkdownWriter`]: Block builder shared by all renderers
//!
//! Output uses heading levels 1-3 only, never contains raw HTML, and omits
//! any section whose backing data is empty.
//!
//! # Example
//!
//! ```rust
//! use gist_model::Brief;
//! use gist_render::Render;
//!
//! let brief = Brief {
//!     goal: Some("Reduce signup friction".to_string()),
//!     ..Brief::default()
//! };
//! assert_eq!(brief.to_markdown(), "# Design Brief\n\n## Goal\n\nReduce signup friction\n");
//! ```

#![warn(unreachable_pub)]

// Renderers
mod brief;
mod constraints;
mod design_file;
mod ideation;
mod stakeholder;

mod info;
mod render;

pub mod markdown;

// Re-exports
pub use design_file::{render_design_file, RenderMode};
pub use info::{DocumentInfo, InfoOptions, Summarize, DEFAULT_MIN_LINE_COUNT, DEFAULT_TITLE_MAX_CHARS};
pub use markdown::{ListStyle, MarkdownWriter};
pub use render::Render;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
