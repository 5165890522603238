use super::section::{Advance, SectionPath};

/// One table-of-contents entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineEntry {
    /// Dot-joined section number, e.g. `"2.1"`.
    pub number: String,
    /// Heading title as rendered inline HTML.
    pub title: String,
    /// Anchor name shared by the outline link and the body heading.
    pub anchor: String,
}

/// Table of contents built in document order.
///
/// Entries are append-only. The nested `<ol>` markup is produced alongside
/// the entries and only becomes well-formed after [`Outline::finish`].
#[derive(Debug, Clone)]
pub struct Outline {
    entries: Vec<OutlineEntry>,
    markup: Vec<String>,
    open_levels: usize,
}

impl Default for Outline {
    fn default() -> Self {
        Self::new()
    }
}

impl Outline {
    pub const HEADER: &'static str = "<h2>Contents</h2>\n";

    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            markup: vec![Self::HEADER.to_string()],
            open_levels: 0,
        }
    }

    pub fn anchor_for(path: &SectionPath) -> String {
        format!("toc_{path}")
    }

    /// Records a heading after `path` has been advanced by `advance`.
    pub fn push(&mut self, path: &SectionPath, advance: Advance, title: &str) -> &OutlineEntry {
        if advance.opened > 0 {
            // levels skipped over by a depth jump get an empty item so
            // every level closes the same way
            for _ in 1..advance.opened {
                self.markup.push("<ol><li>".to_string());
            }
            self.markup.push("<ol>".to_string());
        } else {
            self.markup.push("</li>".to_string());
            for _ in 0..advance.closed {
                self.markup.push("</ol></li>".to_string());
            }
        }
        self.open_levels = path.depth();

        let entry = OutlineEntry {
            number: path.to_string(),
            title: title.to_string(),
            anchor: Self::anchor_for(path),
        };
        self.markup.push(format!(
            "<li><a href=\"#{}\">{}</a>",
            entry.anchor, entry.title
        ));
        self.entries.push(entry);
        &self.entries[self.entries.len() - 1]
    }

    /// Closes every level still open.
    pub fn finish(&mut self) {
        for _ in 0..self.open_levels {
            self.markup.push("</li></ol>".to_string());
        }
        self.open_levels = 0;
    }

    pub fn entries(&self) -> &[OutlineEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn to_html(&self) -> String {
        self.markup.concat()
    }
}
