//! # HTML Node Tree
//!
//! A two-variant node tree (`Leaf`, `Container`) that serializes to an HTML
//! string, plus the conversion from inline [`TextSpan`](crate::parsing::inline::TextSpan)s
//! to leaf nodes.
//!
//! Tree invariants are enforced when nodes are built, so serialization
//! itself cannot fail:
//! - a container always has a non-empty tag and an initialized children list
//! - an untagged leaf never carries attributes

pub mod convert;
pub mod node;

pub use convert::{span_to_node, spans_to_nodes};
pub use node::{Attributes, ContainerBuilder, ContainerNode, HtmlNode, LeafNode};
