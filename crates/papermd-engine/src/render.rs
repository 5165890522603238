use std::collections::BTreeMap;

use pulldown_cmark::{
    BrokenLink, CodeBlockKind, CowStr, Event, Options, Parser, Tag, TagEnd, html,
};

use crate::references::{DefinedReference, ReferenceIndex};

/// Turns batches of prose lines into HTML.
///
/// The scanner hands over every run of ordinary lines as one string so the
/// renderer can join soft-wrapped lines and detect lists.
pub trait ProseRenderer {
    /// Language class used for code that does not name one.
    fn default_code_language(&self) -> &str;

    /// Renders a block of Markdown text.
    fn render_block(&self, text: &str) -> String;

    /// Renders a single line, such as a heading title, as inline markup
    /// only.
    fn render_inline(&self, text: &str) -> String;
}

impl<R: ProseRenderer + ?Sized> ProseRenderer for &R {
    fn default_code_language(&self) -> &str {
        (**self).default_code_language()
    }

    fn render_block(&self, text: &str) -> String {
        (**self).render_block(text)
    }

    fn render_inline(&self, text: &str) -> String {
        (**self).render_inline(text)
    }
}

/// [`ProseRenderer`] backed by pulldown-cmark.
///
/// Inline code spans are tagged with the default language class; a span that
/// starts with `!` drops the marker and stays unclassed. Links to
/// `wg21.link` pick up the paper title from the reference index when they
/// carry no title of their own. Reference link titles written as
/// `Title||Author||Date` keep only the title.
#[derive(Debug, Clone)]
pub struct MarkdownRenderer {
    code_language: String,
    references: Option<ReferenceIndex>,
    /// Reference definitions of the whole document, keyed by lowercase
    /// label, so links resolve across separately rendered blocks.
    definitions: BTreeMap<String, DefinedReference>,
    options: Options,
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LANGUAGE)
    }
}

impl MarkdownRenderer {
    pub const DEFAULT_LANGUAGE: &'static str = "cpp";
    pub const UNCLASSED_CODE_MARKER: char = '!';

    pub fn new(code_language: impl Into<String>) -> Self {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_STRIKETHROUGH);
        options.insert(Options::ENABLE_FOOTNOTES);
        Self {
            code_language: code_language.into(),
            references: None,
            definitions: BTreeMap::new(),
            options,
        }
    }

    pub fn with_references(mut self, references: ReferenceIndex) -> Self {
        self.references = Some(references);
        self
    }

    pub fn with_definitions(
        mut self,
        definitions: impl IntoIterator<Item = DefinedReference>,
    ) -> Self {
        self.definitions.extend(
            definitions
                .into_iter()
                .map(|def| (def.label.to_lowercase(), def)),
        );
        self
    }

    fn parser<'a>(&'a self, text: &'a str) -> impl Iterator<Item = Event<'a>> + 'a {
        let definitions = &self.definitions;
        let resolve = move |link: BrokenLink<'a>| {
            let def = definitions.get(&link.reference.to_lowercase())?;
            Some((
                CowStr::from(def.href.clone()),
                CowStr::from(def.title.clone()),
            ))
        };
        Parser::new_with_broken_link_callback(text, self.options, Some(resolve))
            .map(|e| self.rewrite(e))
    }

    fn rewrite<'a>(&'a self, event: Event<'a>) -> Event<'a> {
        match event {
            Event::Code(code) => Event::InlineHtml(self.inline_code(&code).into()),
            Event::Start(Tag::CodeBlock(CodeBlockKind::Indented)) => Event::Start(Tag::CodeBlock(
                CodeBlockKind::Fenced(CowStr::Borrowed(self.code_language.as_str())),
            )),
            Event::Start(Tag::Link {
                link_type,
                dest_url,
                title,
                id,
            }) => {
                let title = match title.split_once("||") {
                    Some((head, _)) => CowStr::from(head.trim_end().to_string()),
                    None => title,
                };
                let title = if title.is_empty() {
                    self.paper_title(&dest_url)
                        .map(|t| CowStr::from(t.to_string()))
                        .unwrap_or(title)
                } else {
                    title
                };
                Event::Start(Tag::Link {
                    link_type,
                    dest_url,
                    title,
                    id,
                })
            }
            other => other,
        }
    }

    fn inline_code(&self, code: &str) -> String {
        match code.strip_prefix(Self::UNCLASSED_CODE_MARKER) {
            Some(rest) => format!("<code>{}</code>", html_escape::encode_text(rest.trim())),
            None => format!(
                "<code class=\"language-{}\">{}</code>",
                self.code_language,
                html_escape::encode_text(code)
            ),
        }
    }

    fn paper_title(&self, url: &str) -> Option<&str> {
        let id = ReferenceIndex::wg21_id(url)?;
        self.references.as_ref()?.title(&id)
    }
}

impl ProseRenderer for MarkdownRenderer {
    fn default_code_language(&self) -> &str {
        &self.code_language
    }

    fn render_block(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len() * 3 / 2);
        html::push_html(&mut out, self.parser(text));
        out
    }

    fn render_inline(&self, text: &str) -> String {
        // As the body of an ATX heading, list and quote markers stay text.
        let source = format!("# {}", text.trim());
        let events = self.parser(&source).filter(|e| {
            !matches!(
                e,
                Event::Start(Tag::Heading { .. }) | Event::End(TagEnd::Heading(_))
            )
        });
        let mut out = String::new();
        html::push_html(&mut out, events);
        out.trim_end().to_string()
    }
}
