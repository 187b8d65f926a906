use ego_tree::iter::Edge;
use scraper::node::Node;
use scraper::Html;

/// Elements whose text is not rendered by a browser.
const INVISIBLE_ELEMENTS: &[&str] = &["script", "style", "template"];

pub trait Extractor {
    fn extract(&self, html: Option<&str>) -> String;
}

/// Flattens a document to the concatenation of its text nodes.
///
/// No separators are inserted between nodes and whitespace is left exactly as
/// the parser produced it, so `<p>a</p><p>b</p>` becomes `"ab"`.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainTextExtractor;

impl Extractor for PlainTextExtractor {
    fn extract(&self, html: Option<&str>) -> String {
        let Some(html) = html.filter(|h| !h.is_empty()) else {
            return String::new();
        };
        let document = Html::parse_document(html);

        let mut text = String::new();
        let mut hidden_depth = 0usize;
        for edge in document.tree.root().traverse() {
            match edge {
                Edge::Open(node) => match node.value() {
                    Node::Element(element) if is_invisible(element.name()) => hidden_depth += 1,
                    Node::Text(chunk) if hidden_depth == 0 => text.push_str(chunk),
                    _ => {}
                },
                Edge::Close(node) => {
                    if let Node::Element(element) = node.value() {
                        if is_invisible(element.name()) {
                            hidden_depth -= 1;
                        }
                    }
                }
            }
        }
        text
    }
}

fn is_invisible(name: &str) -> bool {
    INVISIBLE_ELEMENTS
        .iter()
        .any(|invisible| name.eq_ignore_ascii_case(invisible))
}
