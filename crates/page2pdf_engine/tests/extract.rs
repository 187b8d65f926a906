use page2pdf_engine::{decode_html, Extractor, PlainTextExtractor};
use pretty_assertions::assert_eq;

#[test]
fn absent_or_empty_input_yields_empty_text() {
    assert_eq!(PlainTextExtractor.extract(None), "");
    assert_eq!(PlainTextExtractor.extract(Some("")), "");
}

#[test]
fn text_nodes_are_concatenated_without_separators() {
    let html = "<html><head><title>T</title></head><body><p>A</p><p>B</p></body></html>";
    assert_eq!(PlainTextExtractor.extract(Some(html)), "TAB");
}

#[test]
fn whitespace_is_kept_as_parsed() {
    let html = "<html><body><p>one  two</p>\n<p>three</p></body></html>";
    assert_eq!(PlainTextExtractor.extract(Some(html)), "one  two\nthree");
}

#[test]
fn scripts_styles_and_comments_are_dropped() {
    let html = r#"<html><head><style>p { color: red }</style>
<script>var x = 1;</script></head><body><!-- note -->Hi <b>there</b></body></html>"#;
    let text = PlainTextExtractor.extract(Some(html));
    assert!(!text.contains("color"));
    assert!(!text.contains("var x"));
    assert!(!text.contains("note"));
    assert!(text.ends_with("Hi there"));
}

#[test]
fn entities_are_decoded_and_attributes_ignored() {
    let html = r#"<a href="https://example.com" title="hidden">Fish &amp; chips</a>"#;
    assert_eq!(PlainTextExtractor.extract(Some(html)), "Fish & chips");
}

#[test]
fn decode_then_extract_handles_bom() {
    let decoded = decode_html(b"\xEF\xBB\xBF<p>hello</p>", Some("text/html"));
    assert_eq!(decoded.encoding_label, "UTF-8");
    assert_eq!(PlainTextExtractor.extract(Some(&decoded.html)), "hello");
}
