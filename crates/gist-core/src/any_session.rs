//! Sessions selected at runtime
//!
//! [`AnySession`] wraps a [`Session`] of whichever conversational kind a
//! caller picked by name, exposing results as JSON values.

use crate::config::GistConfig;
use crate::error::Result;
use crate::session::{snapshot_kind, Session};
use gist_directive::extract_for;
use gist_model::{Brief, ConstraintMap, DocumentKind, Ideation, StakeholderPrep};
use gist_render::DocumentInfo;
use serde_json::Value;

/// Session over any conversational document kind
#[derive(Debug, Clone)]
pub enum AnySession {
    /// Design brief session
    Brief(Session<Brief>),
    /// Solution options session
    Ideation(Session<Ideation>),
    /// Constraint map session
    Constraints(Session<ConstraintMap>),
    /// Stakeholder prep session
    Stakeholder(Session<StakeholderPrep>),
}

macro_rules! each_kind {
    ($session:expr, $s:ident => $body:expr) => {
        match $session {
            AnySession::Brief($s) => $body,
            AnySession::Ideation($s) => $body,
            AnySession::Constraints($s) => $body,
            AnySession::Stakeholder($s) => $body,
        }
    };
}

impl AnySession {
    /// Start an empty session of `kind`
    #[must_use]
    pub fn new(kind: DocumentKind, config: &GistConfig) -> Self {
        match kind {
            DocumentKind::Brief => Self::Brief(Session::new(config)),
            DocumentKind::Ideation => Self::Ideation(Session::new(config)),
            DocumentKind::Constraints => Self::Constraints(Session::new(config)),
            DocumentKind::Stakeholder => Self::Stakeholder(Session::new(config)),
        }
    }

    /// Rebuild a session of whatever kind the snapshot holds
    ///
    /// # Errors
    /// Returns [`CoreError::Snapshot`](crate::CoreError::Snapshot) on
    /// malformed JSON.
    pub fn restore(json: &str, config: &GistConfig) -> Result<Self> {
        Ok(match snapshot_kind(json)? {
            DocumentKind::Brief => Self::Brief(Session::restore(json, config)?),
            DocumentKind::Ideation => Self::Ideation(Session::restore(json, config)?),
            DocumentKind::Constraints => Self::Constraints(Session::restore(json, config)?),
            DocumentKind::Stakeholder => Self::Stakeholder(Session::restore(json, config)?),
        })
    }

    /// Document kind
    #[must_use]
    pub fn kind(&self) -> DocumentKind {
        each_kind!(self, s => s.kind())
    }

    /// Completed turns
    #[must_use]
    pub fn turns(&self) -> u64 {
        each_kind!(self, s => s.turns())
    }

    /// Apply one complete assistant turn, returning the outcome as JSON
    ///
    /// # Errors
    /// Returns [`CoreError::Snapshot`](crate::CoreError::Snapshot) if the
    /// outcome cannot be encoded.
    pub fn apply_turn(&mut self, raw: &str) -> Result<Value> {
        each_kind!(self, s => Ok(serde_json::to_value(s.apply_turn(raw))?))
    }

    /// Markdown export of the current document
    #[must_use]
    pub fn export_markdown(&self) -> String {
        each_kind!(self, s => s.export_markdown())
    }

    /// Preview of the current document
    #[must_use]
    pub fn info(&self) -> DocumentInfo {
        each_kind!(self, s => s.info())
    }

    /// Serialize the session to JSON
    ///
    /// # Errors
    /// Returns [`CoreError::Snapshot`](crate::CoreError::Snapshot) if
    /// encoding fails.
    pub fn snapshot(&self) -> Result<String> {
        each_kind!(self, s => s.snapshot())
    }
}

/// Extract directives for `kind` from one turn, as JSON
///
/// # Errors
/// Returns [`CoreError::Snapshot`](crate::CoreError::Snapshot) if the
/// extraction cannot be encoded.
pub fn extract_json(kind: DocumentKind, raw: &str) -> Result<Value> {
    let value = match kind {
        DocumentKind::Brief => serde_json::to_value(extract_for::<Brief>(raw))?,
        DocumentKind::Ideation => serde_json::to_value(extract_for::<Ideation>(raw))?,
        DocumentKind::Constraints => serde_json::to_value(extract_for::<ConstraintMap>(raw))?,
        DocumentKind::Stakeholder => serde_json::to_value(extract_for::<StakeholderPrep>(raw))?,
    };
    Ok(value)
}
