pub mod header;
pub mod io;
pub mod page;
pub mod references;
pub mod render;
pub mod scaffold;
pub mod scanner;
pub mod sd6;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use header::{Editor, HeaderFields};
pub use page::{Asset, AssetKind, PageError, PageOptions, render_page, render_title_block};
pub use references::{
    DefinedReference, EntryKind, ReferenceEntry, ReferenceError, ReferenceIndex, cited_papers,
    defined_references, render_references,
};
pub use render::{MarkdownRenderer, ProseRenderer};
pub use scaffold::{Author, ScaffoldError, ScaffoldedPaper, scaffold_paper};
pub use scanner::{
    BlockKind, ScanError, ScanState, ScannedDocument, Scanner, outline::Outline,
    outline::OutlineEntry, scan, scan_str, section::SectionPath,
};
pub use sd6::{FeatureMacro, FeatureMacros, MacroValue, Sd6Error};
