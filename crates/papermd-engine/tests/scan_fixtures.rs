use papermd_engine::{
    MarkdownRenderer, PageOptions, ReferenceIndex, cited_papers, defined_references, render_page,
    render_references, scan_str,
};
use pretty_assertions::assert_eq;

fn fixture(name: &str) -> String {
    std::fs::read_to_string(format!(
        "{}/tests/fixtures/{name}.md",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap()
}

fn heading_count(source: &str) -> usize {
    let mut in_code = false;
    source
        .lines()
        .filter(|line| {
            if line.trim() == "```" {
                in_code = !in_code;
            }
            !in_code && line.starts_with('#')
        })
        .count()
}

#[test]
fn outline_has_one_entry_per_heading() {
    let source = fixture("paper");
    let doc = scan_str(&source, MarkdownRenderer::default()).unwrap();

    assert_eq!(doc.entries().len(), heading_count(&source));
    let numbers: Vec<_> = doc.entries().iter().map(|e| e.number.as_str()).collect();
    assert_eq!(numbers, ["1", "2", "2.1", "2.2", "3"]);
}

#[test]
fn code_blocks_round_trip_through_escaping() {
    let source = fixture("paper");
    let doc = scan_str(&source, MarkdownRenderer::default()).unwrap();
    let body = doc.body_html();

    let start = body.find("template &lt;class F&gt;").unwrap();
    let end = start + body[start..].find("</code></pre>").unwrap();
    let decoded = html_escape::decode_html_entities(&body[start..end]);

    assert_eq!(
        decoded,
        "template <class F> constexpr auto and_then(F&& f) &;\n<script>alert(\"not html\")</script>\n"
    );
    assert!(!body.contains("<script>"));
}

#[test]
fn table_code_blocks_are_unstyled() {
    let source = fixture("paper");
    let doc = scan_str(&source, MarkdownRenderer::default()).unwrap();
    let body = doc.body_html();

    assert_eq!(
        body.matches("<pre style=\"background:transparent;border:0px\">")
            .count(),
        2
    );
    assert_eq!(body.matches("<pre>").count(), 2);
}

#[test]
fn prose_is_rendered_as_markdown() {
    let source = fixture("paper");
    let doc = scan_str(&source, MarkdownRenderer::default()).unwrap();
    let body = doc.body_html();

    assert!(body.contains("<ul>"));
    assert!(body.contains("<code class=\"language-cpp\">Option::map</code>"));
    // soft-wrapped lines stay in one paragraph
    assert!(body.contains("C++17 and up.\nSome uses"));
}

#[test]
fn full_page_with_references() {
    let source = fixture("paper");
    let mut index = ReferenceIndex::new();
    index.insert("P0798R3", "Monadic operations for std::optional");
    index.insert("N4861", "Working Draft");
    let defined = defined_references(&source);
    let renderer = MarkdownRenderer::default()
        .with_references(index.clone())
        .with_definitions(defined.clone());

    let doc = scan_str(&source, &renderer).unwrap();
    let cited = cited_papers(doc.body_html());
    let options = PageOptions {
        date: Some("2019-06-17".to_string()),
        references: render_references(&cited, &index, &defined),
        ..PageOptions::default()
    };
    let page = render_page(&doc, &renderer, &options).unwrap();

    assert!(page.contains("<title>Monadic operations for std::optional</title>"));
    assert!(page.contains("Document number: P0798R4 <br />"));
    assert!(page.contains("Reply-To: Sy Brand &lt;sy@example.com&gt;<br />"));
    assert!(page.contains("title=\"Monadic operations for std::optional\""));
    assert!(page.contains("<a href=\"https://wg21.link/n4861\">[N4861]</a>"));
    // defined at the end, used in the introduction
    assert!(page.contains("<a href=\"https://fmt.dev\" title=\"Text Formatting\">fmt</a>"));
    assert!(page.contains(
        "<a href=\"https://fmt.dev\">[fmt]</a><span style=\"margin-left: 5px;\">\"Text Formatting\" by Victor Zverovich, 2019-02-24</span>"
    ));
    assert!(page.ends_with("</ul>\n</body>\n</html>\n"));
}

#[test]
fn rendering_is_idempotent() {
    let source = fixture("paper");
    let renderer = MarkdownRenderer::default();
    let render = || {
        let doc = scan_str(&source, &renderer).unwrap();
        render_page(&doc, &renderer, &PageOptions::default()).unwrap()
    };
    assert_eq!(render(), render());
}
