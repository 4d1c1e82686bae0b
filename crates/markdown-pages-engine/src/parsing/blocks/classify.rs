use super::{
    kinds::{BlockQuote, CodeFence, Heading, OrderedList, UnorderedList},
    types::BlockKind,
};

/// Classifies whole blocks for the block-assembly phase.
///
/// Rules are tried in strict priority order and the first match wins:
/// heading, code, quote, unordered list, ordered list, paragraph. Every
/// line-based rule must hold for *all* lines of the block.
pub struct MarkdownBlockClassifier;

impl MarkdownBlockClassifier {
    pub fn classify(&self, block: &str) -> BlockKind {
        if block.is_empty() {
            return BlockKind::Paragraph;
        }

        let every_line = |pred: fn(&str) -> bool| block.lines().all(pred);

        if every_line(Heading::is_heading_line) {
            BlockKind::Heading
        } else if CodeFence::is_fenced(block) {
            BlockKind::Code
        } else if every_line(BlockQuote::is_quote_line) {
            BlockKind::Quote
        } else if every_line(UnorderedList::is_item_line) {
            BlockKind::UnorderedList
        } else if every_line(OrderedList::is_item_line) {
            BlockKind::OrderedList
        } else {
            BlockKind::Paragraph
        }
    }
}
