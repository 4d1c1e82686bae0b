use std::sync::LazyLock;

use regex::Regex;

/// A single ATX heading line: 1-6 `#`, one space, then non-space content.
static HEADING_LINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^#{1,6} \S").unwrap());

/// Heading block type with owned marker knowledge.
pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';
    pub const MAX_LEVEL: u8 = 6;

    pub fn is_heading_line(line: &str) -> bool {
        HEADING_LINE.is_match(line)
    }

    /// Splits a heading line into its level and content.
    ///
    /// The level is the length of the leading `#` run, clamped to 1..=6.
    /// All spaces between the marker and the content are removed.
    pub fn split(line: &str) -> (u8, &str) {
        let content = line.trim_start_matches(Self::MARKER);
        let run = line.len() - content.len();
        let level = u8::try_from(run)
            .unwrap_or(Self::MAX_LEVEL)
            .clamp(1, Self::MAX_LEVEL);
        (level, content.trim_start_matches(' '))
    }

    /// The HTML tag for a heading level (`h1`..`h6`).
    pub fn tag(level: u8) -> &'static str {
        match level {
            0 | 1 => "h1",
            2 => "h2",
            3 => "h3",
            4 => "h4",
            5 => "h5",
            _ => "h6",
        }
    }
}
