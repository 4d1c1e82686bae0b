/// Blockquote block type with owned delimiter constant.
///
/// All blockquote-related syntax knowledge lives here, not scattered in
/// classifier or builder code.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    pub fn is_quote_line(line: &str) -> bool {
        line.starts_with(Self::PREFIX)
    }

    /// Strips one `>` or `> ` marker from the start of a line.
    ///
    /// Lines without a marker are returned unchanged.
    pub fn strip_prefix(line: &str) -> &str {
        match line.strip_prefix(Self::PREFIX) {
            Some(rest) => rest.strip_prefix(' ').unwrap_or(rest),
            None => line,
        }
    }

    /// Joins the quote's lines with single spaces, markers stripped.
    ///
    /// Lines that are empty once the marker is gone (a bare `>`) separate
    /// paragraphs inside the quote and are dropped rather than doubling the
    /// space between their neighbours.
    pub fn content(block: &str) -> String {
        block
            .lines()
            .map(Self::strip_prefix)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
