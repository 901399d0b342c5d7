//! Directive extraction
//!
//! Assistant text may embed a document update and a pattern reference as
//! tagged JSON:
//!
//! ```text
//! Here's my analysis.
//! <brief_update>{"goal": "Reduce signup friction"}</brief_update>
//! <pattern_identified>{"patternId": "progressive-disclosure", "reason": "..."}</pattern_identified>
//! ```
//!
//! Tags are always stripped from the display text first; payloads are then
//! decoded best-effort. Only the first occurrence of each tag is decoded.

use crate::error::DirectiveError;
use gist_model::{Document, DocumentKind, PatternReference};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::HashMap;

/// Tag wrapping a [`PatternReference`]
pub const PATTERN_TAG: &str = "pattern_identified";

static KNOWN_TAGS: Lazy<HashMap<&'static str, Regex>> = Lazy::new(|| {
    DocumentKind::ALL
        .iter()
        .map(|kind| kind.directive_tag())
        .chain(std::iter::once(PATTERN_TAG))
        .map(|tag| (tag, tag_regex(tag).expect("valid directive regex")))
        .collect()
});

fn tag_regex(tag: &str) -> Result<Regex, regex::Error> {
    let tag = regex::escape(tag);
    Regex::new(&format!(r"(?s)<{tag}>(.*?)</{tag}>"))
}

fn matcher(tag: &str) -> Result<Cow<'static, Regex>, DirectiveError> {
    if let Some(re) = KNOWN_TAGS.get(tag) {
        return Ok(Cow::Borrowed(re));
    }
    tag_regex(tag)
        .map(Cow::Owned)
        .map_err(|source| DirectiveError::InvalidTag {
            tag: tag.to_string(),
            source,
        })
}

/// Result of extracting directives from one assistant turn
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Extraction<U> {
    /// Text with every directive tag removed, outer whitespace trimmed
    pub display_content: String,
    /// Decoded update payload, if present and well-formed
    pub update: Option<U>,
    /// Decoded pattern reference, if present and well-formed
    pub pattern: Option<PatternReference>,
}

/// Decode a directive body into a typed payload
///
/// # Errors
/// Returns [`DirectiveError::MalformedPayload`] if the body is not valid JSON
/// of the expected shape.
pub fn parse_payload<U: DeserializeOwned>(tag: &str, body: &str) -> Result<U, DirectiveError> {
    serde_json::from_str(body.trim()).map_err(|e| DirectiveError::malformed(tag, e))
}

/// Extract the update directive for document `D` and any pattern reference
#[must_use]
pub fn extract_for<D: Document>(raw: &str) -> Extraction<D::Update> {
    extract_with_tag(raw, D::KIND.directive_tag())
}

/// Extract an update wrapped in `tag` and any pattern reference
///
/// Never fails: a malformed payload is logged and reported as `None`, and
/// its tag is still removed from the display text.
#[must_use]
pub fn extract_with_tag<U: DeserializeOwned>(raw: &str, tag: &str) -> Extraction<U> {
    let update_re = match matcher(tag) {
        Ok(re) => Some(re),
        Err(e) => {
            tracing::error!("Cannot match directive: {}", e);
            None
        }
    };
    let pattern_re = matcher(PATTERN_TAG).ok();

    let update = update_re
        .as_deref()
        .and_then(|re| first_payload::<U>(re, raw, tag));
    let pattern = pattern_re
        .as_deref()
        .and_then(|re| first_payload::<PatternReference>(re, raw, PATTERN_TAG));

    let mut display = raw.to_string();
    for re in update_re.iter().chain(pattern_re.iter()) {
        display = re.replace_all(&display, "").into_owned();
    }

    Extraction {
        display_content: display.trim().to_string(),
        update,
        pattern,
    }
}

/// Remove every known directive tag without decoding anything
///
/// Used when re-displaying stored turns.
#[must_use]
pub fn strip_directives(raw: &str) -> String {
    let mut display = raw.to_string();
    for re in KNOWN_TAGS.values() {
        display = re.replace_all(&display, "").into_owned();
    }
    display.trim().to_string()
}

fn first_payload<U: DeserializeOwned>(re: &Regex, text: &str, tag: &str) -> Option<U> {
    let mut bodies = re.captures_iter(text).filter_map(|c| c.get(1));
    let first = bodies.next()?;

    let ignored = bodies.count();
    if ignored > 0 {
        tracing::warn!("Ignoring {} repeated <{}> directive(s)", ignored, tag);
    }

    match parse_payload(tag, first.as_str()) {
        Ok(payload) => Some(payload),
        Err(e) => {
            tracing::error!("Discarding directive: {}", e);
            None
        }
    }
}
