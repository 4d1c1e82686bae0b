/// The structural kind of a markdown block.
///
/// Pure classification output: the block's content is extracted separately,
/// keyed on the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    /// Default when no other kind matches.
    Paragraph,
    /// One or more `#`..`######` lines.
    Heading,
    /// A whole block wrapped in ``` fences.
    Code,
    /// Every line starts with `>`.
    Quote,
    /// Every line starts with `- `.
    UnorderedList,
    /// Every line starts with `<digits>. `.
    OrderedList,
}
