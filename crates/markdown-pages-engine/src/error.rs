use thiserror::Error;

use crate::parsing::inline::SpanKind;

/// Errors caused by the markdown text itself.
///
/// These are user-facing: the document is malformed and should not be rendered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Unbalanced delimiter `{delimiter}` in text: {text:?}")]
    UnbalancedDelimiter { delimiter: String, text: String },

    #[error("Malformed {kind:?} syntax ({reason}) in text: {text:?}")]
    MalformedInlineSyntax {
        kind: SpanKind,
        text: String,
        reason: &'static str,
    },

    #[error("No `# ` heading found to use as the document title")]
    MissingTitle,
}

/// Errors raised when an HTML node would violate the tree invariants.
///
/// These indicate a defect in whatever assembled the node, not bad input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NodeError {
    #[error("Container node has no tag")]
    MissingTag,

    #[error("Container node has no children list")]
    MissingChildren,

    #[error("Untagged leaf cannot carry attributes (text: {text:?})")]
    UntaggedAttributes { text: String },

    #[error("{kind:?} span has no url (text: {text:?})")]
    MissingUrl { kind: SpanKind, text: String },
}

/// Any failure while turning a markdown document into HTML.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Node(#[from] NodeError),
}
