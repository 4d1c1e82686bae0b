use crate::error::RenderError;
use crate::html::{ContainerNode, HtmlNode, span_to_node, spans_to_nodes};
use crate::parsing::inline::{SpanKind, TextSpan, text_to_spans};

use super::{
    kinds::{
        BlockQuote, CodeFence, Heading, OrderedList, Paragraph, UnorderedList,
        list::LIST_ITEM_TAG,
    },
    types::BlockKind,
};

/// The node(s) one block assembles into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockNodes {
    /// Every block kind except headings wraps into one container.
    Single(HtmlNode),
    /// Each heading line becomes its own document-level node.
    Siblings(Vec<HtmlNode>),
}

impl BlockNodes {
    pub fn into_vec(self) -> Vec<HtmlNode> {
        match self {
            BlockNodes::Single(node) => vec![node],
            BlockNodes::Siblings(nodes) => nodes,
        }
    }
}

/// Tokenizes inline text into child nodes.
fn text_to_children(text: &str) -> Result<Vec<HtmlNode>, RenderError> {
    Ok(spans_to_nodes(text_to_spans(text)?)?)
}

fn container(tag: &str, children: Vec<HtmlNode>) -> Result<HtmlNode, RenderError> {
    Ok(ContainerNode::new(tag, children)?.into())
}

/// Assembles one classified block into HTML nodes.
///
/// - Paragraph: lines joined with spaces, inline-parsed, wrapped in `<p>`.
/// - Heading: one `<hN>` per line, holding that line's inline nodes.
/// - Code: fence content as a single `<code>` leaf inside `<pre>`; no inline parsing.
/// - Quote: markers stripped, lines joined, inline nodes under `<blockquote>`.
/// - Lists: one `<li>` per line under `<ul>` / `<ol>`.
pub fn block_to_nodes(kind: BlockKind, block: &str) -> Result<BlockNodes, RenderError> {
    let nodes = match kind {
        BlockKind::Paragraph => {
            let children = text_to_children(&Paragraph::content(block))?;
            BlockNodes::Single(container("p", children)?)
        }
        BlockKind::Heading => {
            let headings = block
                .lines()
                .map(|line| {
                    let (level, content) = Heading::split(line);
                    container(Heading::tag(level), text_to_children(content)?)
                })
                .collect::<Result<Vec<_>, _>>()?;
            BlockNodes::Siblings(headings)
        }
        BlockKind::Code => {
            let code = span_to_node(TextSpan::new(CodeFence::content(block), SpanKind::Code))?;
            BlockNodes::Single(container("pre", vec![code])?)
        }
        BlockKind::Quote => {
            let children = text_to_children(&BlockQuote::content(block))?;
            BlockNodes::Single(container("blockquote", children)?)
        }
        BlockKind::UnorderedList => {
            BlockNodes::Single(list(UnorderedList::TAG, block, UnorderedList::item_text)?)
        }
        BlockKind::OrderedList => {
            BlockNodes::Single(list(OrderedList::TAG, block, OrderedList::item_text)?)
        }
    };
    Ok(nodes)
}

fn list(tag: &str, block: &str, item_text: fn(&str) -> &str) -> Result<HtmlNode, RenderError> {
    let items = block
        .lines()
        .map(|line| container(LIST_ITEM_TAG, text_to_children(item_text(line))?))
        .collect::<Result<Vec<_>, _>>()?;
    container(tag, items)
}
