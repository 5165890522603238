/// Marker kinds recognised on a single line.
///
/// Classification only looks at the line itself. Whether a marker actually
/// causes a transition is decided by the scanner from its current state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Opening tag of the metadata block (`<pre ...>`).
    MetadataOpen,
    /// Closing tag of the metadata block (`</pre>`).
    MetadataClose,
    /// `#`-prefixed heading; depth is the number of `#` characters.
    Heading { depth: usize, title: &'a str },
    /// Triple-backtick fence, with an optional language word.
    Fence { language: Option<&'a str> },
    TableOpen,
    TableClose,
    Blank,
    Text,
}

pub struct LineClassifier;

impl LineClassifier {
    pub const FENCE: &'static str = "```";
    pub const METADATA_OPEN: &'static str = "<pre";
    pub const METADATA_CLOSE: &'static str = "</pre>";
    pub const TABLE_OPEN: &'static str = "<table>";
    pub const TABLE_CLOSE: &'static str = "</table>";

    /// Classifies a line with its trailing newline already removed.
    pub fn classify(line: &str) -> LineKind<'_> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return LineKind::Blank;
        }
        if line.starts_with(Self::METADATA_CLOSE) {
            return LineKind::MetadataClose;
        }
        if line.starts_with(Self::METADATA_OPEN) {
            return LineKind::MetadataOpen;
        }
        if let Some(heading) = Self::heading(line) {
            return heading;
        }
        if let Some(rest) = trimmed.strip_prefix(Self::FENCE) {
            let language = rest.trim();
            // a fourth backtick or a second word is not a fence we understand
            if !language.starts_with('`') && !language.contains(char::is_whitespace) {
                return LineKind::Fence {
                    language: (!language.is_empty()).then_some(language),
                };
            }
        }
        match trimmed {
            Self::TABLE_OPEN => LineKind::TableOpen,
            Self::TABLE_CLOSE => LineKind::TableClose,
            _ => LineKind::Text,
        }
    }

    fn heading(line: &str) -> Option<LineKind<'_>> {
        let depth = line.chars().take_while(|&c| c == '#').count();
        if depth == 0 {
            return None;
        }
        let rest = &line[depth..];
        if !rest.is_empty() && !rest.starts_with(char::is_whitespace) {
            return None;
        }
        Some(LineKind::Heading {
            depth,
            title: rest.trim(),
        })
    }
}
