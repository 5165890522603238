//! Reference lists for wg21 papers.
//!
//! A [`ReferenceIndex`] maps paper ids (`P0798R3`, `N4861`, `CWG1234`) to
//! their titles, and optionally authors and dates. It is produced by
//! reducing the bibliography YAML files (titles only) or loaded from a full
//! wg21 index, and is consumed when rendering links and the "References"
//! section.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::OnceLock;

use pulldown_cmark::{Options, Parser};
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReferenceError {
    #[error("Failed to parse reference index: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to parse references in {name}: {source}")]
    Yaml {
        name: String,
        source: serde_yaml::Error,
    },

    #[error("Failed to write references: {0}")]
    Emit(serde_yaml::Error),

    #[error("No `references` list in {name}")]
    MissingList { name: String },

    #[error("Malformed paper number: {0}")]
    MalformedPaper(String),

    #[error("Paper {0} is a first revision, there is nothing to copy from")]
    NoPreviousRevision(String),

    #[error("Previous revision {previous} of {paper} is not in the index")]
    MissingPrevious { paper: String, previous: String },
}

pub const WG21_LINK: &str = "https://wg21.link/";

fn wg21_url_regex() -> &'static Regex {
    static WG21_URL: OnceLock<Regex> = OnceLock::new();
    WG21_URL.get_or_init(|| {
        Regex::new(r"(?i)^(?:https?://)?wg21\.link/([a-z0-9]+)").expect("Invalid wg21 url regex")
    })
}

fn wg21_href_regex() -> &'static Regex {
    static WG21_HREF: OnceLock<Regex> = OnceLock::new();
    WG21_HREF.get_or_init(|| {
        Regex::new(r#"href="((?:https?://)?wg21\.link/[^"]*)""#).expect("Invalid wg21 href regex")
    })
}

fn paper_revision_regex() -> &'static Regex {
    static PAPER_REVISION: OnceLock<Regex> = OnceLock::new();
    PAPER_REVISION
        .get_or_init(|| Regex::new(r"^P(\d+)R(\d+)$").expect("Invalid paper revision regex"))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Paper,
    Issue,
    #[serde(other)]
    Other,
}

/// What the index knows about one paper or issue.
///
/// Stored as a bare title string when nothing else is known, otherwise as
/// an object in the wg21 index layout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "StoredEntry", into = "StoredEntry")]
pub struct ReferenceEntry {
    pub title: String,
    pub kind: Option<EntryKind>,
    pub author: Option<String>,
    pub submitter: Option<String>,
    pub date: Option<String>,
    pub last_modified: Option<String>,
    pub long_link: Option<String>,
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum StoredEntry {
    Title(String),
    Details {
        title: String,
        #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
        kind: Option<EntryKind>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        author: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        submitter: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        date: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        last_modified: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        long_link: Option<String>,
    },
}

impl From<StoredEntry> for ReferenceEntry {
    fn from(stored: StoredEntry) -> Self {
        match stored {
            StoredEntry::Title(title) => Self::titled(title),
            StoredEntry::Details {
                title,
                kind,
                author,
                submitter,
                date,
                last_modified,
                long_link,
            } => Self {
                title,
                kind,
                author,
                submitter,
                date,
                last_modified,
                long_link,
            },
        }
    }
}

impl From<ReferenceEntry> for StoredEntry {
    fn from(entry: ReferenceEntry) -> Self {
        if entry == ReferenceEntry::titled(entry.title.clone()) {
            return StoredEntry::Title(entry.title);
        }
        StoredEntry::Details {
            title: entry.title,
            kind: entry.kind,
            author: entry.author,
            submitter: entry.submitter,
            date: entry.date,
            last_modified: entry.last_modified,
            long_link: entry.long_link,
        }
    }
}

impl ReferenceEntry {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// `"Title" by Author, Date`, leaving out whatever is unknown. Issues
    /// credit the submitter and prefer the last modification date.
    pub fn description(&self) -> String {
        let (by, date) = match self.kind {
            Some(EntryKind::Issue) => (
                self.submitter.as_deref(),
                self.last_modified.as_deref().or(self.date.as_deref()),
            ),
            _ => (self.author.as_deref(), self.date.as_deref()),
        };
        let mut out = format!("\"{}\"", self.title);
        if let Some(by) = by {
            out.push_str(&format!(" by {by}"));
        }
        if let Some(date) = date {
            out.push_str(&format!(", {date}"));
        }
        out
    }
}

/// Paper id → [`ReferenceEntry`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReferenceIndex {
    entries: BTreeMap<String, ReferenceEntry>,
}

#[derive(Debug, Deserialize)]
struct ReferenceFile {
    references: Vec<BibliographyItem>,
}

#[derive(Debug, Deserialize)]
struct BibliographyItem {
    id: String,
    title: String,
}

/// A Markdown reference definition, `[label]: href "title"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefinedReference {
    pub label: String,
    pub href: String,
    pub title: String,
}

impl DefinedReference {
    /// Text shown next to the link in the "References" section.
    ///
    /// `Title||Author||Date` becomes `"Title" by Author, Date`; a bracketed
    /// title such as `[N4861]` names the current working draft.
    pub fn description(&self) -> Option<String> {
        let title = self.title.trim();
        if title.is_empty() {
            return None;
        }
        let parts: Vec<&str> = title.split("||").map(str::trim).collect();
        Some(match parts.as_slice() {
            [single] if single.starts_with('[') && single.ends_with(']') => {
                "Current Working Draft".to_string()
            }
            [single] => single.to_string(),
            [title, author] => format!("\"{title}\" by {author}"),
            [title, author, date, ..] => format!("\"{title}\" by {author}, {date}"),
            [] => return None,
        })
    }
}

impl ReferenceIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self, ReferenceError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Merges bibliography YAML documents, later documents overriding
    /// earlier ones. Each item is `(name, contents)`; the name only
    /// appears in errors.
    pub fn reduce<'a>(
        documents: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Result<Self, ReferenceError> {
        let mut index = Self::new();
        for (name, contents) in documents {
            let file: ReferenceFile =
                serde_yaml::from_str(contents).map_err(|source| ReferenceError::Yaml {
                    name: name.to_string(),
                    source,
                })?;
            log::debug!("{name}: {} references", file.references.len());
            for item in file.references {
                index.insert(item.id, item.title);
            }
        }
        Ok(index)
    }

    pub fn insert(&mut self, id: impl Into<String>, title: impl Into<String>) {
        self.insert_entry(id, ReferenceEntry::titled(title));
    }

    pub fn insert_entry(&mut self, id: impl Into<String>, entry: ReferenceEntry) {
        self.entries.insert(id.into(), entry);
    }

    pub fn get(&self, id: &str) -> Option<&ReferenceEntry> {
        self.entries.get(id)
    }

    pub fn title(&self, id: &str) -> Option<&str> {
        self.get(id).map(|entry| entry.title.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Adds `P0798` style keys pointing at the newest known revision, so
    /// revisionless links resolve too. Existing keys are left alone.
    pub fn with_revisionless_aliases(mut self) -> Self {
        let mut newest: BTreeMap<String, (u32, ReferenceEntry)> = BTreeMap::new();
        for (id, entry) in &self.entries {
            let Some(caps) = paper_revision_regex().captures(id) else {
                continue;
            };
            let Ok(revision) = caps[2].parse::<u32>() else {
                continue;
            };
            let base = format!("P{}", &caps[1]);
            match newest.get(&base) {
                Some((seen, _)) if *seen >= revision => {}
                _ => {
                    newest.insert(base, (revision, entry.clone()));
                }
            }
        }
        for (base, (_, entry)) in newest {
            self.entries.entry(base).or_insert(entry);
        }
        self
    }

    /// JSON with four-space indentation.
    pub fn to_json_pretty(&self) -> Result<String, ReferenceError> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut serializer)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Upper-cased paper id of a `wg21.link` url.
    pub fn wg21_id(url: &str) -> Option<String> {
        wg21_url_regex()
            .captures(url)
            .map(|caps| caps[1].to_ascii_uppercase())
    }
}

/// Sorted ids of every wg21 paper linked from rendered HTML.
pub fn cited_papers(html: &str) -> BTreeSet<String> {
    wg21_href_regex()
        .captures_iter(html)
        .filter_map(|caps| ReferenceIndex::wg21_id(&caps[1]))
        .collect()
}

/// Reference definitions in a Markdown document, sorted by lowercase label.
pub fn defined_references(markdown: &str) -> Vec<DefinedReference> {
    let parser = Parser::new_ext(markdown, Options::empty());
    let mut by_label: BTreeMap<String, DefinedReference> = BTreeMap::new();
    for (label, def) in parser.reference_definitions().iter() {
        by_label.insert(
            label.to_lowercase(),
            DefinedReference {
                label: label.to_string(),
                href: def.dest.to_string(),
                title: def.title.as_deref().unwrap_or_default().to_string(),
            },
        );
    }
    by_label.into_values().collect()
}

fn reference_item(href: &str, label: &str, description: Option<String>) -> String {
    let description = description
        .map(|text| {
            format!(
                "<span style=\"margin-left: 5px;\">{}</span>",
                html_escape::encode_text(&text)
            )
        })
        .unwrap_or_default();
    format!(
        "<li><a href=\"{}\">[{}]</a>{description}</li>\n",
        html_escape::encode_double_quoted_attribute(href),
        html_escape::encode_text(label)
    )
}

/// "References" section listing the `cited` wg21 papers followed by the
/// document's own reference definitions, or `None` when there are neither.
pub fn render_references(
    cited: &BTreeSet<String>,
    index: &ReferenceIndex,
    defined: &[DefinedReference],
) -> Option<String> {
    if cited.is_empty() && defined.is_empty() {
        return None;
    }
    let mut out = vec!["<h1>References</h1>\n<ul>\n".to_string()];
    for id in cited {
        let entry = index.get(id);
        let href = entry
            .and_then(|entry| entry.long_link.clone())
            .unwrap_or_else(|| format!("{WG21_LINK}{}", id.to_ascii_lowercase()));
        out.push(reference_item(
            &href,
            id,
            entry.map(ReferenceEntry::description),
        ));
    }
    for def in defined {
        out.push(reference_item(&def.href, &def.label, def.description()));
    }
    out.push("</ul>\n".to_string());
    Some(out.concat())
}

/// Drafts bibliography entries for revisions that are not published yet.
///
/// Each id in `missing` (`P1234R2`) is derived from the previous revision
/// in `index_yaml`, with its id, citation label and URL replaced.
pub fn draft_unpublished(
    index_yaml: &str,
    missing: &[&str],
) -> Result<Vec<Mapping>, ReferenceError> {
    let index: Value = serde_yaml::from_str(index_yaml).map_err(|source| ReferenceError::Yaml {
        name: "index".to_string(),
        source,
    })?;
    let entries = index
        .get("references")
        .and_then(Value::as_sequence)
        .ok_or_else(|| ReferenceError::MissingList {
            name: "index".to_string(),
        })?;
    let by_id: BTreeMap<&str, &Mapping> = entries
        .iter()
        .filter_map(|entry| {
            let mapping = entry.as_mapping()?;
            let id = mapping.get("id")?.as_str()?;
            Some((id, mapping))
        })
        .collect();

    let mut drafts = Vec::with_capacity(missing.len());
    for paper in missing {
        let paper = paper.trim();
        let caps = paper_revision_regex()
            .captures(paper)
            .ok_or_else(|| ReferenceError::MalformedPaper(paper.to_string()))?;
        let revision: u32 = caps[2]
            .parse()
            .map_err(|_| ReferenceError::MalformedPaper(paper.to_string()))?;
        if revision == 0 {
            return Err(ReferenceError::NoPreviousRevision(paper.to_string()));
        }
        let previous = format!("P{}R{}", &caps[1], revision - 1);
        let mut entry = by_id
            .get(previous.as_str())
            .map(|m| (*m).clone())
            .ok_or_else(|| ReferenceError::MissingPrevious {
                paper: paper.to_string(),
                previous: previous.clone(),
            })?;
        entry.insert("id".into(), paper.into());
        entry.insert("citation-label".into(), paper.into());
        entry.insert(
            "URL".into(),
            format!("{WG21_LINK}{}", paper.to_ascii_lowercase()).into(),
        );
        drafts.push(entry);
    }
    Ok(drafts)
}

/// Serializes entries as a `references:` YAML document.
pub fn references_to_yaml(entries: Vec<Mapping>) -> Result<String, ReferenceError> {
    let mut root = Mapping::new();
    root.insert(
        "references".into(),
        Value::Sequence(entries.into_iter().map(Value::Mapping).collect()),
    );
    serde_yaml::to_string(&root).map_err(ReferenceError::Emit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    const INDEX: &str = r#"
references:
  - id: P0798R2
    title: "Monadic operations for std::optional"
    author: "Simon Brand"
    URL: https://wg21.link/p0798r2
  - id: N4861
    title: "Working Draft, Standard for Programming Language C++"
"#;

    const OVERRIDES: &str = r#"
references:
  - id: N4861
    title: "C++20 Working Draft"
  - id: P2300R7
    title: "std::execution"
"#;

    #[test]
    fn reduce_merges_and_later_files_win() {
        let index = ReferenceIndex::reduce([("index.yaml", INDEX), ("fmt.yaml", OVERRIDES)]).unwrap();
        assert_eq!(index.len(), 3);
        assert_eq!(index.title("N4861"), Some("C++20 Working Draft"));
        assert_eq!(
            index.title("P0798R2"),
            Some("Monadic operations for std::optional")
        );
    }

    #[test]
    fn reduce_reports_the_failing_file() {
        let err = ReferenceIndex::reduce([("broken.yaml", "references: 3")]).unwrap_err();
        assert!(matches!(err, ReferenceError::Yaml { ref name, .. } if name == "broken.yaml"));
    }

    #[test]
    fn json_uses_four_space_indent() {
        let mut index = ReferenceIndex::new();
        index.insert("N4861", "Draft");
        assert_eq!(index.to_json_pretty().unwrap(), "{\n    \"N4861\": \"Draft\"\n}");
    }

    #[test]
    fn json_round_trips_through_index() {
        let json = "{\"P0798R3\": \"Monadic\", \"N4861\": \"Draft\"}";
        let index = ReferenceIndex::from_json(json).unwrap();
        assert_eq!(index.title("P0798R3"), Some("Monadic"));
    }

    #[test]
    fn revisionless_alias_points_at_newest_revision() {
        let mut index = ReferenceIndex::new();
        index.insert("P0798R9", "old");
        index.insert("P0798R10", "new");
        index.insert("P1000R0", "only");
        let index = index.with_revisionless_aliases();
        assert_eq!(index.title("P0798"), Some("new"));
        assert_eq!(index.title("P1000"), Some("only"));
    }

    #[test]
    fn revisionless_alias_keeps_existing_entry() {
        let mut index = ReferenceIndex::new();
        index.insert("P0798", "explicit");
        index.insert("P0798R3", "revision");
        let index = index.with_revisionless_aliases();
        assert_eq!(index.title("P0798"), Some("explicit"));
    }

    #[rstest]
    #[case("https://wg21.link/p0798r3", Some("P0798R3"))]
    #[case("http://wg21.link/N4861", Some("N4861"))]
    #[case("wg21.link/cwg1234", Some("CWG1234"))]
    #[case("https://wg21.link/p0798r3/github", Some("P0798R3"))]
    #[case("https://example.com/p0798r3", None)]
    fn wg21_ids(#[case] url: &str, #[case] expected: Option<&str>) {
        assert_eq!(ReferenceIndex::wg21_id(url).as_deref(), expected);
    }

    #[test]
    fn cited_papers_are_sorted_and_unique() {
        let html = r#"<a href="https://wg21.link/p2300r7">a</a>
<a href="https://wg21.link/n4861">b</a>
<a href="https://wg21.link/P2300R7">c</a>
<a href="https://example.com/x">d</a>"#;
        let cited: Vec<_> = cited_papers(html).into_iter().collect();
        assert_eq!(cited, ["N4861", "P2300R7"]);
    }

    #[test]
    fn references_section_lists_titles() {
        let mut index = ReferenceIndex::new();
        index.insert("P2300R7", "std::execution");
        let cited: BTreeSet<String> = ["P2300R7".to_string(), "N9999".to_string()].into();
        let html = render_references(&cited, &index, &[]).unwrap();
        assert_eq!(
            html,
            "<h1>References</h1>\n<ul>\n\
             <li><a href=\"https://wg21.link/n9999\">[N9999]</a></li>\n\
             <li><a href=\"https://wg21.link/p2300r7\">[P2300R7]</a><span style=\"margin-left: 5px;\">\"std::execution\"</span></li>\n\
             </ul>\n"
        );
    }

    #[test]
    fn no_citations_no_section() {
        assert_eq!(
            render_references(&BTreeSet::new(), &ReferenceIndex::new(), &[]),
            None
        );
    }

    const WG21_INDEX: &str = r#"{
        "P0798R3": {
            "type": "paper",
            "title": "Monadic operations for std::optional",
            "author": "Simon Brand",
            "date": "2019-01-21",
            "long_link": "https://www.open-std.org/jtc1/sc22/wg21/docs/papers/2019/p0798r3.html",
            "subgroup": "LEWG"
        },
        "CWG1234": {
            "type": "issue",
            "title": "Some core issue",
            "submitter": "Jens Maurer",
            "date": "2010-01-01",
            "last_modified": "2012-02-02"
        },
        "N4861": "Working Draft"
    }"#;

    #[test]
    fn full_index_entries_are_loaded() {
        let index = ReferenceIndex::from_json(WG21_INDEX).unwrap();
        let paper = index.get("P0798R3").unwrap();
        assert_eq!(paper.kind, Some(EntryKind::Paper));
        assert_eq!(paper.author.as_deref(), Some("Simon Brand"));
        assert_eq!(index.title("N4861"), Some("Working Draft"));
        assert_eq!(index.get("N4861").unwrap().kind, None);
    }

    #[rstest]
    #[case("P0798R3", "\"Monadic operations for std::optional\" by Simon Brand, 2019-01-21")]
    #[case("CWG1234", "\"Some core issue\" by Jens Maurer, 2012-02-02")]
    #[case("N4861", "\"Working Draft\"")]
    fn entry_descriptions(#[case] id: &str, #[case] expected: &str) {
        let index = ReferenceIndex::from_json(WG21_INDEX).unwrap();
        assert_eq!(index.get(id).unwrap().description(), expected);
    }

    #[test]
    fn title_only_entries_serialize_as_strings() {
        let mut index = ReferenceIndex::new();
        index.insert("N4861", "Draft");
        index.insert_entry(
            "P1",
            ReferenceEntry {
                author: Some("A".to_string()),
                ..ReferenceEntry::titled("T")
            },
        );
        assert_eq!(
            index.to_json_pretty().unwrap(),
            "{\n    \"N4861\": \"Draft\",\n    \"P1\": {\n        \"title\": \"T\",\n        \"author\": \"A\"\n    }\n}"
        );
    }

    #[test]
    fn references_section_uses_long_link_and_author() {
        let index = ReferenceIndex::from_json(WG21_INDEX).unwrap();
        let cited: BTreeSet<String> = ["P0798R3".to_string()].into();
        let html = render_references(&cited, &index, &[]).unwrap();
        assert!(html.contains(
            "<a href=\"https://www.open-std.org/jtc1/sc22/wg21/docs/papers/2019/p0798r3.html\">[P0798R3]</a>"
        ));
        assert!(html.contains("by Simon Brand, 2019-01-21</span>"), "{html}");
    }

    #[test]
    fn defined_references_are_sorted_by_label() {
        let defined = defined_references(
            "Text [zeta] and [Alpha].\n\n\
             [zeta]: https://example.com/z \"Zeta||Zed||2020\"\n\
             [Alpha]: https://example.com/a\n",
        );
        let labels: Vec<_> = defined.iter().map(|d| d.label.as_str()).collect();
        assert_eq!(labels, ["Alpha", "zeta"]);
        assert_eq!(defined[1].href, "https://example.com/z");
        assert_eq!(defined[1].title, "Zeta||Zed||2020");
    }

    #[rstest]
    #[case("Zeta||Zed||2020", Some("\"Zeta\" by Zed, 2020"))]
    #[case("Plain title", Some("Plain title"))]
    #[case("[N4861]", Some("Current Working Draft"))]
    #[case("", None)]
    fn defined_reference_descriptions(#[case] title: &str, #[case] expected: Option<&str>) {
        let def = DefinedReference {
            label: "x".to_string(),
            href: "https://example.com".to_string(),
            title: title.to_string(),
        };
        assert_eq!(def.description().as_deref(), expected);
    }

    #[test]
    fn references_section_lists_definitions_after_papers() {
        let mut index = ReferenceIndex::new();
        index.insert("P2300R7", "std::execution");
        let cited: BTreeSet<String> = ["P2300R7".to_string()].into();
        let defined = defined_references("[fmt]: https://fmt.dev \"{fmt}||Victor Zverovich||2012\"\n");
        let html = render_references(&cited, &index, &defined).unwrap();

        let paper = html.find("[P2300R7]").unwrap();
        let fmt = html.find("<a href=\"https://fmt.dev\">[fmt]</a>").unwrap();
        assert!(paper < fmt);
        assert!(html.contains("\"{fmt}\" by Victor Zverovich, 2012"), "{html}");
    }

    #[test]
    fn definitions_alone_produce_a_section() {
        let defined = defined_references("[a]: https://example.com/a \"A\"\n");
        assert!(render_references(&BTreeSet::new(), &ReferenceIndex::new(), &defined).is_some());
    }

    #[test]
    fn draft_copies_previous_revision() {
        let drafts = draft_unpublished(INDEX, &["P0798R3"]).unwrap();
        assert_eq!(drafts.len(), 1);
        let draft = &drafts[0];
        assert_eq!(draft.get("id").and_then(Value::as_str), Some("P0798R3"));
        assert_eq!(
            draft.get("citation-label").and_then(Value::as_str),
            Some("P0798R3")
        );
        assert_eq!(
            draft.get("URL").and_then(Value::as_str),
            Some("https://wg21.link/p0798r3")
        );
        assert_eq!(draft.get("author").and_then(Value::as_str), Some("Simon Brand"));
    }

    #[test]
    fn draft_yaml_has_references_list() {
        let drafts = draft_unpublished(INDEX, &["P0798R3"]).unwrap();
        let yaml = references_to_yaml(drafts).unwrap();
        let parsed: Value = serde_yaml::from_str(&yaml).unwrap();
        let list = parsed.get("references").and_then(Value::as_sequence).unwrap();
        assert_eq!(list.len(), 1);
    }

    #[rstest]
    #[case("P0798R0")]
    #[case("N4861")]
    #[case("P0798R7")]
    fn draft_rejects(#[case] paper: &str) {
        assert!(draft_unpublished(INDEX, &[paper]).is_err());
    }

    #[test]
    fn draft_error_names_previous_revision() {
        let err = draft_unpublished(INDEX, &["P0798R7"]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Previous revision P0798R6 of P0798R7 is not in the index"
        );
    }
}
