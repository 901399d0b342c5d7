//! Markdown writer
//!
//! Block-oriented CommonMark builder. Blocks are separated by one blank line
//! and the output ends with a single newline. Headings are clamped to levels
//! 1-3 and no HTML is ever emitted.

/// List rendering style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListStyle {
    /// `- item`, for unordered content
    Bullets,
    /// `1. item`, where sequence matters
    Numbered,
    /// `- [ ] item`, for things still to resolve
    Checklist,
}

/// Block-oriented markdown builder
#[derive(Debug, Clone, Default)]
pub struct MarkdownWriter {
    blocks: Vec<String>,
}

impl MarkdownWriter {
    /// Create empty writer
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self { blocks: Vec::new() }
    }

    /// Whether no block has been written
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Heading at `level` (clamped to 1..=3)
    pub fn heading(&mut self, level: u8, text: &str) -> &mut Self {
        let level = usize::from(level.clamp(1, 3));
        self.blocks
            .push(format!("{} {}", "#".repeat(level), single_line(text)));
        self
    }

    /// Section whose heading is only written if `body` writes something
    pub fn section(&mut self, level: u8, title: &str, body: impl FnOnce(&mut Self)) -> &mut Self {
        let mut inner = Self::new();
        body(&mut inner);
        if !inner.is_empty() {
            self.heading(level, title);
            self.blocks.append(&mut inner.blocks);
        }
        self
    }

    /// Paragraph; skipped when blank
    pub fn paragraph(&mut self, text: &str) -> &mut Self {
        let text = text.trim();
        if !text.is_empty() {
            self.blocks.push(block_text(text));
        }
        self
    }

    /// `**Label:** value` paragraph; skipped when value is blank
    pub fn field(&mut self, label: &str, value: &str) -> &mut Self {
        let value = value.trim();
        if !value.is_empty() {
            self.blocks.push(format!("**{label}:** {}", single_line(value)));
        }
        self
    }

    /// `**Label:** a, b, c` paragraph; skipped when empty
    pub fn inline_list<S: AsRef<str>>(&mut self, label: &str, items: &[S]) -> &mut Self {
        let joined = items
            .iter()
            .map(|s| single_line(s.as_ref()))
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(", ");
        self.field(label, &joined)
    }

    /// Bullet list; skipped when empty
    pub fn bullets<S: AsRef<str>>(&mut self, items: &[S]) -> &mut Self {
        self.list(ListStyle::Bullets, items)
    }

    /// Numbered list for ordered steps; skipped when empty
    pub fn numbered<S: AsRef<str>>(&mut self, items: &[S]) -> &mut Self {
        self.list(ListStyle::Numbered, items)
    }

    /// Unchecked checkbox list; skipped when empty
    pub fn checklist<S: AsRef<str>>(&mut self, items: &[S]) -> &mut Self {
        self.list(ListStyle::Checklist, items)
    }

    /// `**Label:**` block followed by a list, both skipped when the list is empty
    pub fn labeled_list<S: AsRef<str>>(&mut self, label: &str, style: ListStyle, items: &[S]) -> &mut Self {
        if items.iter().any(|s| !s.as_ref().trim().is_empty()) {
            self.blocks.push(format!("**{label}:**"));
            self.list(style, items);
        }
        self
    }

    /// List in the given style; skipped when empty
    pub fn list<S: AsRef<str>>(&mut self, style: ListStyle, items: &[S]) -> &mut Self {
        let lines: Vec<String> = items
            .iter()
            .map(|s| single_line(s.as_ref()))
            .filter(|s| !s.is_empty())
            .enumerate()
            .map(|(i, s)| match style {
                ListStyle::Bullets => format!("- {s}"),
                ListStyle::Numbered => format!("{}. {s}", i + 1),
                ListStyle::Checklist => format!("- [ ] {s}"),
            })
            .collect();
        if !lines.is_empty() {
            self.blocks.push(lines.join("\n"));
        }
        self
    }

    /// Finish into a string
    #[must_use]
    pub fn finish(&self) -> String {
        let mut out = self.blocks.join("\n\n");
        out.push('\n');
        out
    }
}

/// Collapse internal line breaks so a value stays inside its list item
fn single_line(text: &str) -> String {
    quote_guard(&escape_text(&text.split_whitespace().collect::<Vec<_>>().join(" ")))
}

/// Keep multi-line prose from opening headings, quotes or raw HTML
fn block_text(text: &str) -> String {
    text.lines()
        .map(|line| quote_guard(&escape_text(line)))
        .collect::<Vec<_>>()
        .join("\n")
}

fn quote_guard(line: &str) -> String {
    let trimmed = line.trim_start();
    if trimmed.starts_with('>') {
        format!("\\{trimmed}")
    } else {
        line.to_string()
    }
}

/// Escape `<`, backslashes, and any `#` that could open a heading
///
/// A `#` run only opens a heading at the start of a line or after a list
/// marker, so escaping those at a word start is enough.
fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev: Option<char> = None;
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '<' => out.push_str("\\<"),
            '#' if prev.map_or(true, char::is_whitespace) => out.push_str("\\#"),
            _ => out.push(c),
        }
        prev = Some(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn blocks_are_blank_line_separated() {
        let mut w = MarkdownWriter::new();
        w.heading(1, "Title").paragraph("Body").bullets(&["a", "b"]);
        assert_eq!(w.finish(), "# Title\n\nBody\n\n- a\n- b\n");
    }

    #[test]
    fn empty_section_emits_nothing() {
        let mut w = MarkdownWriter::new();
        w.heading(1, "Title");
        w.section(2, "Empty", |s| {
            s.bullets::<&str>(&[]).paragraph("  ");
        });
        assert_eq!(w.finish(), "# Title\n");
    }

    #[test]
    fn heading_level_is_clamped() {
        let mut w = MarkdownWriter::new();
        w.heading(5, "Deep").heading(0, "Shallow");
        assert_eq!(w.finish(), "### Deep\n\n# Shallow\n");
    }

    #[test]
    fn numbered_and_checklist() {
        let mut w = MarkdownWriter::new();
        w.numbered(&["one", "", "two"]).checklist(&["q?"]);
        assert_eq!(w.finish(), "1. one\n2. two\n\n- [ ] q?\n");
    }

    #[test]
    fn list_items_stay_on_one_line() {
        let mut w = MarkdownWriter::new();
        w.bullets(&["first\nsecond"]);
        assert_eq!(w.finish(), "- first second\n");
    }

    #[test]
    fn labeled_list_skips_blank_items() {
        let mut w = MarkdownWriter::new();
        w.labeled_list("Strengths", ListStyle::Bullets, &["  "]);
        assert!(w.is_empty());
        w.labeled_list("Strengths", ListStyle::Bullets, &["fast"]);
        assert_eq!(w.finish(), "**Strengths:**\n\n- fast\n");
    }

    #[test]
    fn prose_cannot_inject_structure() {
        let mut w = MarkdownWriter::new();
        w.paragraph("## not a heading\n<b>bold</b>");
        assert_eq!(w.finish(), "\\## not a heading\n\\<b>bold\\</b>\n");
    }

    #[test]
    fn list_items_cannot_open_headings() {
        let mut w = MarkdownWriter::new();
        w.bullets(&["##### deep", "- ### nested", "C# #1"]).heading(2, "# inner");
        assert_eq!(
            w.finish(),
            "- \\##### deep\n- - \\### nested\n- C# \\#1\n\n## \\# inner\n"
        );
    }

    #[test]
    fn backslash_cannot_unescape_html() {
        let mut w = MarkdownWriter::new();
        w.bullets(&["\\<b>"]);
        assert_eq!(w.finish(), "- \\\\\\<b>\n");
    }

    #[test]
    fn fields_and_inline_lists() {
        let mut w = MarkdownWriter::new();
        w.field("Effort", "").field("Effort", "low").inline_list("Tags", &["a", "b"]);
        assert_eq!(w.finish(), "**Effort:** low\n\n**Tags:** a, b\n");
    }
}
