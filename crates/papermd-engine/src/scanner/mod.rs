//! Line scanner for the paper dialect.
//!
//! A paper starts with a metadata block of `key: value` lines closed by
//! `</pre>`, followed by Markdown prose with `#` headings, triple-backtick
//! code fences and literal `<table>`/`</table>` lines. The scanner numbers
//! the headings, builds the table of contents and hands each run of prose
//! lines to a [`ProseRenderer`] as a single block.
//!
//! Transitions are decided by `(state, line kind)` alone. Inside a code
//! block every marker except the closing fence is literal text.

pub mod line;
pub mod outline;
pub mod section;

use std::fmt;

use thiserror::Error;

use crate::header::HeaderFields;
use crate::render::ProseRenderer;
use line::{LineClassifier, LineKind};
use outline::{Outline, OutlineEntry};
use section::SectionPath;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    CodeBlock,
    Table,
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockKind::CodeBlock => f.write_str("code block"),
            BlockKind::Table => f.write_str("table"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    #[error("Line {line}: metadata line is not of the form `key: value`: {content:?}")]
    MalformedMetadata { line: usize, content: String },

    #[error("Input ended inside the metadata block (missing `</pre>`)")]
    UnterminatedMetadata,

    #[error("Unclosed {kind} opened on line {line}")]
    UnterminatedBlock { kind: BlockKind, line: usize },

    #[error("Line {line}: `</table>` without a matching `<table>`")]
    UnbalancedTableClose { line: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    Metadata,
    Prose,
    CodeBlock { opened_at: usize },
}

/// Result of a complete scan.
#[derive(Debug, Clone)]
pub struct ScannedDocument {
    pub header: HeaderFields,
    pub outline: Outline,
    pub body: String,
}

impl ScannedDocument {
    pub fn outline_html(&self) -> String {
        self.outline.to_html()
    }

    pub fn body_html(&self) -> &str {
        &self.body
    }

    pub fn entries(&self) -> &[OutlineEntry] {
        self.outline.entries()
    }
}

pub struct Scanner<R> {
    renderer: R,
    state: ScanState,
    header: HeaderFields,
    path: SectionPath,
    outline: Outline,
    body: Vec<String>,
    pending: Vec<String>,
    /// Line numbers of the `<table>` markers still open.
    open_tables: Vec<usize>,
    line_no: usize,
    seen_metadata: bool,
}

impl<R: ProseRenderer> Scanner<R> {
    pub const TABLE_OPEN_HTML: &'static str = "<table style=\"width: 100%\">\n";
    pub const TABLE_CLOSE_HTML: &'static str = "</table>\n";
    /// Code inside a table cell sits in an already bordered box.
    pub const TABLE_PRE_STYLE: &'static str = "background:transparent;border:0px";

    pub fn new(renderer: R) -> Self {
        Self {
            renderer,
            state: ScanState::Metadata,
            header: HeaderFields::new(),
            path: SectionPath::new(),
            outline: Outline::new(),
            body: Vec::new(),
            pending: Vec::new(),
            open_tables: Vec::new(),
            line_no: 0,
            seen_metadata: false,
        }
    }

    pub fn in_table(&self) -> bool {
        !self.open_tables.is_empty()
    }

    /// Feeds one line; a trailing `\n` or `\r\n` is ignored.
    pub fn push_line(&mut self, line: &str) -> Result<(), ScanError> {
        self.line_no += 1;
        let line = line.trim_end_matches(['\r', '\n']);
        let kind = LineClassifier::classify(line);

        match (self.state, kind) {
            (ScanState::Metadata, LineKind::Blank) => {}
            (ScanState::Metadata, LineKind::MetadataOpen) => self.seen_metadata = true,
            (ScanState::Metadata, LineKind::MetadataClose) => {
                log::debug!("line {}: metadata block closed", self.line_no);
                self.state = ScanState::Prose;
            }
            (ScanState::Metadata, _) => self.metadata_line(line)?,

            (ScanState::Prose, LineKind::Heading { depth, title }) => self.heading(depth, title),
            (ScanState::Prose, LineKind::Fence { language }) => self.open_code(language),
            (ScanState::Prose, LineKind::TableOpen) => self.open_table(),
            (ScanState::Prose, LineKind::TableClose) => self.close_table()?,
            (ScanState::Prose, LineKind::Blank) => self.paragraph_break(),
            (ScanState::Prose, _) => self.pending.push(line.to_string()),

            (ScanState::CodeBlock { .. }, LineKind::Fence { language: None }) => self.close_code(),
            (ScanState::CodeBlock { .. }, _) => self
                .body
                .push(format!("{}\n", html_escape::encode_text(line))),
        }
        Ok(())
    }

    /// Ends the scan, closing every open outline level.
    pub fn finish(mut self) -> Result<ScannedDocument, ScanError> {
        match self.state {
            ScanState::Metadata if self.seen_metadata => return Err(ScanError::UnterminatedMetadata),
            ScanState::CodeBlock { opened_at } => {
                return Err(ScanError::UnterminatedBlock {
                    kind: BlockKind::CodeBlock,
                    line: opened_at,
                });
            }
            _ => {}
        }
        if let Some(&line) = self.open_tables.last() {
            return Err(ScanError::UnterminatedBlock {
                kind: BlockKind::Table,
                line,
            });
        }

        self.flush();
        self.outline.finish();
        log::debug!(
            "scanned {} lines, {} headings",
            self.line_no,
            self.outline.entries().len()
        );
        Ok(ScannedDocument {
            header: self.header,
            outline: self.outline,
            body: self.body.concat(),
        })
    }

    fn metadata_line(&mut self, line: &str) -> Result<(), ScanError> {
        self.seen_metadata = true;
        if self.header.push_line(line) {
            Ok(())
        } else {
            Err(ScanError::MalformedMetadata {
                line: self.line_no,
                content: line.to_string(),
            })
        }
    }

    fn heading(&mut self, depth: usize, title: &str) {
        self.flush();
        let advance = self.path.advance(depth);
        let title = self.renderer.render_inline(title);
        let entry = self.outline.push(&self.path, advance, &title);
        let level = (depth + 1).min(6);
        self.body.push(format!(
            "<a name=\"{}\"></a><h{level}>{}. {}</h{level}>\n",
            entry.anchor, entry.number, entry.title
        ));
    }

    fn open_code(&mut self, language: Option<&str>) {
        self.flush();
        let language = language.unwrap_or(self.renderer.default_code_language());
        let pre = if self.in_table() {
            format!("<pre style=\"{}\">", Self::TABLE_PRE_STYLE)
        } else {
            "<pre>".to_string()
        };
        self.body.push(format!(
            "{pre}<code class=\"language-{}\">",
            html_escape::encode_double_quoted_attribute(language)
        ));
        log::debug!("line {}: code block opened", self.line_no);
        self.state = ScanState::CodeBlock {
            opened_at: self.line_no,
        };
    }

    fn close_code(&mut self) {
        self.body.push("</code></pre>\n".to_string());
        self.state = ScanState::Prose;
    }

    fn open_table(&mut self) {
        self.flush();
        self.open_tables.push(self.line_no);
        self.body.push(Self::TABLE_OPEN_HTML.to_string());
    }

    fn close_table(&mut self) -> Result<(), ScanError> {
        self.flush();
        if self.open_tables.pop().is_none() {
            return Err(ScanError::UnbalancedTableClose { line: self.line_no });
        }
        self.body.push(Self::TABLE_CLOSE_HTML.to_string());
        Ok(())
    }

    /// Keeps a paragraph separator inside the pending run so the renderer
    /// still sees paragraph boundaries.
    fn paragraph_break(&mut self) {
        if self.pending.last().is_some_and(|l| !l.is_empty()) {
            self.pending.push(String::new());
        }
    }

    fn flush(&mut self) {
        while self.pending.last().is_some_and(String::is_empty) {
            self.pending.pop();
        }
        if self.pending.is_empty() {
            return;
        }
        let text = self.pending.join("\n");
        log::debug!(
            "line {}: rendering {} pending lines",
            self.line_no,
            self.pending.len()
        );
        self.body.push(self.renderer.render_block(&text));
        self.pending.clear();
    }
}

/// Scans a sequence of lines.
pub fn scan<R, I, S>(lines: I, renderer: R) -> Result<ScannedDocument, ScanError>
where
    R: ProseRenderer,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut scanner = Scanner::new(renderer);
    for line in lines {
        scanner.push_line(line.as_ref())?;
    }
    scanner.finish()
}

/// Scans a whole document held in memory.
pub fn scan_str<R: ProseRenderer>(text: &str, renderer: R) -> Result<ScannedDocument, ScanError> {
    scan(text.lines(), renderer)
}
