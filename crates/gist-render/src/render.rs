//! Render trait
//!
//! Rendering is total: every well-typed document value renders, and empty
//! sections are omitted rather than emitted as bare headings.

/// Document that renders to markdown
pub trait Render {
    /// Full markdown export
    fn to_markdown(&self) -> String;
}

pub(crate) fn non_blank(value: Option<&String>) -> Option<&str> {
    value.map(|s| s.trim()).filter(|s| !s.is_empty())
}

/// `**head**: tail` list item; `None` when `head` is blank
pub(crate) fn emphasis_item(head: &str, tail: &str) -> Option<String> {
    let head = head.trim();
    let tail = tail.trim();
    match (head.is_empty(), tail.is_empty()) {
        (true, _) => None,
        (false, true) => Some(format!("**{head}**")),
        (false, false) => Some(format!("**{head}**: {tail}")),
    }
}
