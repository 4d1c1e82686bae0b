pub mod error;
pub mod html;
pub mod io;
pub mod parsing;
pub mod site;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use error::{NodeError, ParseError, RenderError};
pub use html::{Attributes, ContainerNode, HtmlNode, LeafNode};
pub use io::IoError;
pub use parsing::{
    blocks::BlockKind,
    extract_title,
    inline::{SpanKind, TextSpan, text_to_spans},
    markdown_to_blocks, markdown_to_html, markdown_to_tree,
};
pub use site::{SiteError, generate_page, generate_pages_recursive};
