use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

use crate::header::HeaderFields;
use crate::render::ProseRenderer;
use crate::scanner::ScannedDocument;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageError {
    #[error("Missing required metadata field `{0}`")]
    MissingField(&'static str),

    #[error("Unsupported asset {0}: expected a .css or .js file")]
    UnsupportedAsset(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Style,
    Script,
}

/// A stylesheet or script inlined into the page head.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    pub kind: AssetKind,
    pub contents: String,
}

impl Asset {
    /// Picks the asset kind from the file suffix of `name`.
    pub fn new(name: &str, contents: impl Into<String>) -> Result<Self, PageError> {
        let kind = match Path::new(name).extension().and_then(|e| e.to_str()) {
            Some("css") => AssetKind::Style,
            Some("js") => AssetKind::Script,
            _ => return Err(PageError::UnsupportedAsset(name.to_string())),
        };
        Ok(Self {
            kind,
            contents: contents.into(),
        })
    }

    fn to_html(&self) -> String {
        match self.kind {
            AssetKind::Style => format!("<style type=\"text/css\">{}</style>\n", self.contents),
            AssetKind::Script => format!(
                "<script type=\"text/javascript\">{}</script>\n",
                self.contents
            ),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PageOptions {
    /// Used when the metadata has no `Date` field.
    pub date: Option<String>,
    pub assets: Vec<Asset>,
    /// Pre-rendered section appended after the body.
    pub references: Option<String>,
}

fn tag_regex() -> &'static Regex {
    static TAG: OnceLock<Regex> = OnceLock::new();
    TAG.get_or_init(|| Regex::new(r"<[^>]*>").expect("Invalid tag regex"))
}

fn required<'a>(header: &'a HeaderFields, key: &'static str) -> Result<&'a str, PageError> {
    header.first(key).ok_or(PageError::MissingField(key))
}

/// Address block, rule and main heading rendered from the metadata.
pub fn render_title_block<R: ProseRenderer>(
    header: &HeaderFields,
    renderer: &R,
    date: Option<&str>,
) -> Result<String, PageError> {
    let title = required(header, HeaderFields::TITLE)?;
    let shortname = required(header, HeaderFields::SHORTNAME)?;
    let audience = required(header, HeaderFields::AUDIENCE)?;

    let mut out = vec!["<address align=right>\n".to_string()];
    out.push(format!(
        "Document number: {} <br />\n",
        html_escape::encode_text(shortname)
    ));
    if let Some(date) = header.first(HeaderFields::DATE).or(date) {
        out.push(format!("Date: {} <br />\n", html_escape::encode_text(date)));
    }
    out.push(format!(
        "Audience: {} <br />\n",
        html_escape::encode_text(audience)
    ));
    let editors = header.editors();
    if !editors.is_empty() {
        out.push("Reply-To: ".to_string());
        for editor in editors {
            let name = html_escape::encode_text(&editor.name);
            match editor.email {
                Some(email) => out.push(format!(
                    "{name} &lt;{}&gt;<br />\n",
                    html_escape::encode_text(&email)
                )),
                None => out.push(format!("{name}<br />\n")),
            }
        }
    }
    out.push("</address>\n".to_string());
    out.push("<hr/>\n".to_string());
    out.push(format!(
        "<h1 align=center>{}</h1>\n",
        renderer.render_inline(title)
    ));
    Ok(out.concat())
}

/// Title text with any markup removed, for the `<title>` element.
pub fn plain_title<R: ProseRenderer>(title: &str, renderer: &R) -> String {
    tag_regex()
        .replace_all(&renderer.render_inline(title), "")
        .into_owned()
}

/// Assembles the complete HTML page for a scanned document.
pub fn render_page<R: ProseRenderer>(
    doc: &ScannedDocument,
    renderer: &R,
    options: &PageOptions,
) -> Result<String, PageError> {
    let title = required(&doc.header, HeaderFields::TITLE)?;
    let title_block = render_title_block(&doc.header, renderer, options.date.as_deref())?;

    let mut out = vec![
        "<html>\n<head>\n".to_string(),
        "<meta http-equiv=\"Content-Type\" content=\"text/html; charset=UTF-8\">\n".to_string(),
        format!("<title>{}</title>\n", plain_title(title, renderer)),
    ];
    out.extend(options.assets.iter().map(Asset::to_html));
    out.push("</head>\n<body>\n".to_string());
    out.push(title_block);
    out.push(doc.outline_html());
    out.push("\n".to_string());
    out.push(doc.body_html().to_string());
    if let Some(references) = &options.references {
        out.push(references.clone());
    }
    out.push("</body>\n</html>\n".to_string());
    Ok(out.concat())
}
