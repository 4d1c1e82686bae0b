/// Fenced code block type with owned delimiter constant.
///
/// Code blocks are raw zones: their content is never inline-parsed.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    /// Whether the whole block opens and closes with a fence.
    ///
    /// The opening and closing fences must not overlap, so a lone ``` is not
    /// a code block.
    pub fn is_fenced(block: &str) -> bool {
        block.len() >= 2 * Self::BACKTICKS.len()
            && block.starts_with(Self::BACKTICKS)
            && block.ends_with(Self::BACKTICKS)
    }

    /// The code between the fences, with leading whitespace after the
    /// opening fence removed. Trailing newlines before the closing fence
    /// are kept.
    pub fn content(block: &str) -> &str {
        let inner = block.strip_prefix(Self::BACKTICKS).unwrap_or(block);
        let inner = inner.strip_suffix(Self::BACKTICKS).unwrap_or(inner);
        inner.trim_start()
    }
}
