//! Document trait and kind registry
//!
//! Provides [`Document`], which ties each accumulating document to its
//! update payload and to the directive tag the upstream model wraps that
//! payload in.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug, Display};
use std::str::FromStr;

/// Accumulating conversational document
///
/// # Invariants
/// - `Default` is the empty document a conversation starts from
/// - The serde shape is the persisted session shape
pub trait Document: Clone + Default + PartialEq + Debug + Serialize + DeserializeOwned {
    /// Partial update payload carried by a directive
    type Update: Clone + Default + PartialEq + Debug + Serialize + DeserializeOwned;

    /// Kind marker, used to select the directive tag
    const KIND: DocumentKind;
}

/// Entity addressable by a stable identifier
pub trait Keyed {
    /// Identity key; immutable once created
    fn id(&self) -> &str;
}

/// The four conversational document kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    /// Design brief
    Brief,
    /// Solution options board
    Ideation,
    /// Constraint map
    Constraints,
    /// Stakeholder preparation
    Stakeholder,
}

impl DocumentKind {
    /// All kinds, in flow order
    pub const ALL: [Self; 4] = [
        Self::Brief,
        Self::Ideation,
        Self::Constraints,
        Self::Stakeholder,
    ];

    /// Tag name wrapping this kind's update payload
    #[inline]
    #[must_use]
    pub fn directive_tag(self) -> &'static str {
        match self {
            Self::Brief => "brief_update",
            Self::Ideation => "ideation_update",
            Self::Constraints => "constraints_update",
            Self::Stakeholder => "stakeholder_update",
        }
    }

    /// Human-readable label
    #[inline]
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Brief => "Design Brief",
            Self::Ideation => "Solution Options",
            Self::Constraints => "Constraint Map",
            Self::Stakeholder => "Stakeholder Prep",
        }
    }
}

impl Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Brief => "brief",
            Self::Ideation => "ideation",
            Self::Constraints => "constraints",
            Self::Stakeholder => "stakeholder",
        };
        f.write_str(name)
    }
}

/// Unrecognized document kind name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown document kind: '{0}'")]
pub struct UnknownKind(pub String);

impl FromStr for DocumentKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "brief" => Ok(Self::Brief),
            "ideation" | "options" => Ok(Self::Ideation),
            "constraints" | "constraint-map" => Ok(Self::Constraints),
            "stakeholder" | "stakeholder-prep" => Ok(Self::Stakeholder),
            _ => Err(UnknownKind(s.to_string())),
        }
    }
}
