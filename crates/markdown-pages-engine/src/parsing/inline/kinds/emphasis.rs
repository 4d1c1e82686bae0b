use crate::parsing::inline::types::SpanKind;

/// Bold and italic delimiters.
pub struct Emphasis;

impl Emphasis {
    pub const BOLD_ASTERISKS: &'static str = "**";
    pub const BOLD_UNDERSCORES: &'static str = "__";
    pub const ITALIC_UNDERSCORE: &'static str = "_";
    pub const ITALIC_ASTERISK: &'static str = "*";

    /// Delimiter passes in the order they must run.
    ///
    /// Double-character delimiters come first so a single `*` or `_` pass
    /// never consumes half of a bold marker.
    pub const PASSES: [(&'static str, SpanKind); 4] = [
        (Self::BOLD_ASTERISKS, SpanKind::Bold),
        (Self::BOLD_UNDERSCORES, SpanKind::Bold),
        (Self::ITALIC_UNDERSCORE, SpanKind::Italic),
        (Self::ITALIC_ASTERISK, SpanKind::Italic),
    ];
}
