pub mod blocks;
pub mod inline;

#[cfg(test)]
pub mod tests;

use crate::error::{ParseError, RenderError};
use crate::html::{ContainerNode, HtmlNode};

use blocks::{MarkdownBlockClassifier, block_to_nodes};

/// The literal boundary between blocks.
pub const BLOCK_SEPARATOR: &str = "\n\n";

/// Marker of a top-level heading, used for the document title.
pub const TITLE_MARKER: &str = "# ";

/// Splits a document into blocks on blank-line boundaries.
///
/// Each block is trimmed; blocks that are empty after trimming are dropped.
pub fn markdown_to_blocks(markdown: &str) -> Vec<&str> {
    markdown
        .split(BLOCK_SEPARATOR)
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .collect()
}

/// Builds the node tree for a whole document.
///
/// The root is always a `<div>` container, even for a document with no
/// blocks. Heading blocks contribute one child per heading line; every
/// other block contributes exactly one child.
pub fn markdown_to_tree(markdown: &str) -> Result<HtmlNode, RenderError> {
    let classifier = MarkdownBlockClassifier;
    let mut children = Vec::new();

    for (idx, block) in markdown_to_blocks(markdown).into_iter().enumerate() {
        let kind = classifier.classify(block);
        log::trace!("block {idx} classified as {kind:?}");
        children.extend(block_to_nodes(kind, block)?.into_vec());
    }

    Ok(ContainerNode::new("div", children)?.into())
}

/// Renders a whole document to an HTML string rooted at one `<div>`.
pub fn markdown_to_html(markdown: &str) -> Result<String, RenderError> {
    Ok(markdown_to_tree(markdown)?.to_html())
}

/// Extracts the document title from the first line starting with `# `.
///
/// The title is the text after the marker up to the next blank-line
/// boundary, trimmed. There is no fallback title.
pub fn extract_title(markdown: &str) -> Result<String, ParseError> {
    let mut offset = 0;
    for line in markdown.split_inclusive('\n') {
        if line.starts_with(TITLE_MARKER) {
            let rest = &markdown[offset + TITLE_MARKER.len()..];
            let end = rest.find(BLOCK_SEPARATOR).unwrap_or(rest.len());
            return Ok(rest[..end].trim().to_string());
        }
        offset += line.len();
    }
    Err(ParseError::MissingTitle)
}
