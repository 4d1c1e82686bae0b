//! # Block Parsing
//!
//! Two-phase block handling over blank-line separated blocks.
//!
//! ## Phases
//!
//! 1. **Block Classification** (`classify`): `MarkdownBlockClassifier` assigns a
//!    `BlockKind` to a whole block by a priority chain of line patterns
//!
//! 2. **Block Assembly** (`builder`): `block_to_nodes` extracts the block's
//!    content for its kind and builds the HTML nodes, running inline parsing
//!    where the kind allows it
//!
//! ## Modules
//!
//! - **`types`**: `BlockKind`
//! - **`kinds`**: Block-specific types with owned markers (Heading, CodeFence,
//!   BlockQuote, UnorderedList, OrderedList, Paragraph)
//! - **`classify`**: `MarkdownBlockClassifier`
//! - **`builder`**: `block_to_nodes` and `BlockNodes`
//!
//! ## Key Invariants
//!
//! - Fenced code blocks are raw zones: no inline parsing inside
//! - Headings are the only kind that yields sibling nodes instead of one wrapper

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;

pub use builder::{BlockNodes, block_to_nodes};
pub use classify::MarkdownBlockClassifier;
pub use types::BlockKind;
