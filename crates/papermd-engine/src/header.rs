use std::collections::BTreeMap;

/// Metadata fields from the leading `<pre>` block of a paper.
///
/// Keys may repeat (one `Editor` line per editor); values keep their
/// document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderFields {
    fields: BTreeMap<String, Vec<String>>,
}

impl HeaderFields {
    pub const TITLE: &'static str = "Title";
    pub const SHORTNAME: &'static str = "Shortname";
    pub const AUDIENCE: &'static str = "Audience";
    pub const EDITOR: &'static str = "Editor";
    pub const DATE: &'static str = "Date";

    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a `key: value` line and appends the value under its key.
    ///
    /// Returns `false` without touching the table when the line has no `:`.
    pub fn push_line(&mut self, line: &str) -> bool {
        match line.split_once(':') {
            Some((key, value)) => {
                self.push(key.trim(), value.trim());
                true
            }
            None => false,
        }
    }

    pub fn push(&mut self, key: &str, value: &str) {
        self.fields
            .entry(key.to_string())
            .or_default()
            .push(value.to_string());
    }

    /// First value recorded under `key`.
    pub fn first(&self, key: &str) -> Option<&str> {
        self.fields
            .get(key)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    pub fn all(&self, key: &str) -> &[String] {
        self.fields.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn editors(&self) -> Vec<Editor> {
        self.all(Self::EDITOR)
            .iter()
            .map(|value| Editor::parse(value))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// An `Editor: Name, email` metadata value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Editor {
    pub name: String,
    pub email: Option<String>,
}

impl Editor {
    pub fn parse(value: &str) -> Self {
        match value.split_once(',') {
            Some((name, email)) if !email.trim().is_empty() => Self {
                name: name.trim().to_string(),
                email: Some(email.trim().to_string()),
            },
            Some((name, _)) => Self {
                name: name.trim().to_string(),
                email: None,
            },
            None => Self {
                name: value.trim().to_string(),
                email: None,
            },
        }
    }
}
