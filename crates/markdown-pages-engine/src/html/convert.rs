use crate::error::NodeError;
use crate::parsing::inline::{SpanKind, TextSpan};

use super::node::{Attributes, HtmlNode, LeafNode};

/// Converts one inline span into a leaf node.
///
/// | kind   | node |
/// |--------|------|
/// | Plain  | raw text |
/// | Bold   | `<b>` |
/// | Italic | `<i>` |
/// | Code   | `<code>` |
/// | Link   | `<a href="url">` |
/// | Image  | `<img src="url" alt="text">` with empty text |
pub fn span_to_node(span: TextSpan) -> Result<HtmlNode, NodeError> {
    let (text, kind, url) = span.into_parts();
    let leaf = match kind {
        SpanKind::Plain => LeafNode::raw(text),
        SpanKind::Bold => LeafNode::new("b", text),
        SpanKind::Italic => LeafNode::new("i", text),
        SpanKind::Code => LeafNode::new("code", text),
        SpanKind::Link => {
            let url = url.ok_or_else(|| NodeError::MissingUrl {
                kind,
                text: text.clone(),
            })?;
            LeafNode::with_attributes("a", text, [("href", url)].into_iter().collect())
        }
        SpanKind::Image => {
            let url = url.ok_or_else(|| NodeError::MissingUrl {
                kind,
                text: text.clone(),
            })?;
            let mut attrs = Attributes::new();
            attrs.insert("src", url);
            attrs.insert("alt", text);
            LeafNode::with_attributes("img", "", attrs)
        }
    };
    Ok(leaf.into())
}

pub fn spans_to_nodes(spans: Vec<TextSpan>) -> Result<Vec<HtmlNode>, NodeError> {
    spans.into_iter().map(span_to_node).collect()
}
