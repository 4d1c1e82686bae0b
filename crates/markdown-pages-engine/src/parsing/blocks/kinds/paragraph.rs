/// Paragraph block type (marker struct).
///
/// Paragraphs have no delimiters - they are the default block when no
/// other kind matches. Their lines are joined with single spaces before
/// inline parsing.
pub struct Paragraph;

impl Paragraph {
    /// Collapses the block's newlines into single spaces.
    pub fn content(block: &str) -> String {
        block.replace('\n', " ")
    }
}
