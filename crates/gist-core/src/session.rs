//! Conversation sessions
//!
//! A [`Session`] owns one accumulating document for the lifetime of a
//! conversation. Each complete assistant turn flows through
//! extract → merge; nothing else mutates the document.
//!
//! Turns are applied strictly in arrival order, one at a time. A streamed
//! turn is collected in a [`TurnBuffer`] and only extracted once complete;
//! cancelling the buffer discards the turn without touching the document.

use crate::config::GistConfig;
use crate::error::{CoreError, Result};
use gist_directive::{extract_for, TurnBuffer};
use gist_merge::{BriefPatterns, Merge};
use gist_model::{Brief, DocumentKind, PatternReference};
use gist_render::{DocumentInfo, InfoOptions, Render, Summarize};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use uuid::Uuid;

/// Document a session can drive end to end
pub trait SessionDocument: Merge + Render + Summarize {}

impl<D: Merge + Render + Summarize> SessionDocument for D {}

/// Session identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Generate a fresh id
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get inner UUID
    #[inline]
    #[must_use]
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What one assistant turn produced
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TurnOutcome<U> {
    /// Text to show the user, directives removed
    pub display_content: String,
    /// Update that was merged, if any
    pub update: Option<U>,
    /// Pattern the assistant pointed at, not yet accepted
    pub pattern: Option<PatternReference>,
}

impl<U> TurnOutcome<U> {
    /// Whether the turn changed the document
    #[inline]
    #[must_use]
    pub fn applied(&self) -> bool {
        self.update.is_some()
    }
}

/// Persisted session handoff shape
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Snapshot<D> {
    id: SessionId,
    kind: DocumentKind,
    turns: u64,
    document: D,
}

/// One conversation's accumulating document
#[derive(Debug, Clone)]
pub struct Session<D> {
    id: SessionId,
    document: D,
    turns: u64,
    max_turn_bytes: usize,
    info_options: InfoOptions,
}

impl<D: SessionDocument> Session<D> {
    /// Start a session from an empty document
    #[must_use]
    pub fn new(config: &GistConfig) -> Self {
        Self::from_document(D::default(), config)
    }

    /// Start a session from an initial template
    #[must_use]
    pub fn from_document(document: D, config: &GistConfig) -> Self {
        let id = SessionId::new();
        tracing::debug!("Starting {} session {}", D::KIND, id);
        Self {
            id,
            document,
            turns: 0,
            max_turn_bytes: config.max_turn_bytes,
            info_options: config.info,
        }
    }

    /// Session id
    #[inline]
    #[must_use]
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// Document kind
    #[inline]
    #[must_use]
    pub fn kind(&self) -> DocumentKind {
        D::KIND
    }

    /// Current document
    #[inline]
    #[must_use]
    pub fn document(&self) -> &D {
        &self.document
    }

    /// Completed turns
    #[inline]
    #[must_use]
    pub fn turns(&self) -> u64 {
        self.turns
    }

    /// Apply one complete assistant turn
    ///
    /// Extraction never fails: a malformed directive is logged and the
    /// document is left as it was.
    pub fn apply_turn(&mut self, raw: &str) -> TurnOutcome<D::Update> {
        let extraction = extract_for::<D>(raw);
        self.turns += 1;

        if let Some(update) = &extraction.update {
            self.document.merge_in_place(update);
            tracing::debug!("Session {} merged update on turn {}", self.id, self.turns);
        } else {
            tracing::trace!("Session {} turn {} carried no update", self.id, self.turns);
        }

        TurnOutcome {
            display_content: extraction.display_content,
            update: extraction.update,
            pattern: extraction.pattern,
        }
    }

    /// Buffer for a streamed turn, sized from configuration
    #[must_use]
    pub fn begin_turn(&self) -> TurnBuffer {
        TurnBuffer::with_limit(self.max_turn_bytes)
    }

    /// Apply a streamed turn once it is complete
    pub fn finish_turn(&mut self, buffer: TurnBuffer) -> TurnOutcome<D::Update> {
        let raw = buffer.finish();
        self.apply_turn(&raw)
    }

    /// Markdown export of the current document
    #[must_use]
    pub fn export_markdown(&self) -> String {
        self.document.to_markdown()
    }

    /// Preview of the current document
    #[must_use]
    pub fn info(&self) -> DocumentInfo {
        self.document.info(&self.info_options)
    }

    /// Serialize the session to JSON
    ///
    /// # Errors
    /// Returns [`CoreError::Snapshot`] if encoding fails.
    pub fn snapshot(&self) -> Result<String> {
        let snapshot = Snapshot {
            id: self.id,
            kind: D::KIND,
            turns: self.turns,
            document: &self.document,
        };
        Ok(serde_json::to_string(&snapshot)?)
    }

    /// Rebuild a session from [`Session::snapshot`] output
    ///
    /// # Errors
    /// Returns [`CoreError::Snapshot`] on malformed JSON and
    /// [`CoreError::KindMismatch`] if the snapshot holds another kind.
    pub fn restore(json: &str, config: &GistConfig) -> Result<Self> {
        let snapshot: Snapshot<D> = serde_json::from_str(json)?;
        if snapshot.kind != D::KIND {
            return Err(CoreError::KindMismatch {
                expected: D::KIND,
                found: snapshot.kind,
            });
        }
        tracing::debug!("Restored {} session {}", D::KIND, snapshot.id);
        Ok(Self {
            id: snapshot.id,
            document: snapshot.document,
            turns: snapshot.turns,
            max_turn_bytes: config.max_turn_bytes,
            info_options: config.info,
        })
    }
}

impl Session<Brief> {
    /// Accept a pattern the assistant identified
    ///
    /// Idempotent by pattern id; returns `true` if the brief changed.
    pub fn accept_pattern(&mut self, pattern: PatternReference) -> bool {
        let added = self.document.add_pattern(pattern);
        if !added {
            tracing::debug!("Session {} already holds that pattern", self.id);
        }
        added
    }

    /// Whether the brief already lists this pattern
    #[inline]
    #[must_use]
    pub fn has_pattern(&self, pattern_id: &str) -> bool {
        self.document.has_pattern(pattern_id)
    }
}

impl<D: SessionDocument> Default for Session<D> {
    fn default() -> Self {
        Self::new(&GistConfig::default())
    }
}

/// Check a snapshot's kind without decoding its document
///
/// # Errors
/// Returns [`CoreError::Snapshot`] if the JSON has no readable `kind`.
pub fn snapshot_kind(json: &str) -> Result<DocumentKind> {
    #[derive(Deserialize)]
    struct KindOnly {
        kind: DocumentKind,
    }
    let probe: KindOnly = serde_json::from_str(json)?;
    Ok(probe.kind)
}
