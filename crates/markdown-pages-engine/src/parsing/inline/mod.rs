//! # Inline Parsing
//!
//! Pass-based inline tokenizing over owned span sequences.
//!
//! ## Architecture
//!
//! Inline parsing starts from one `Plain` span holding the raw text. Each
//! pass takes the previous pass's output by value and returns a new sequence,
//! rewriting only the spans that are still `Plain`:
//!
//! 1. delimiter passes (`**`, `__`, `_`, `*`, `` ` ``) via `split_by_delimiter`
//! 2. `split_images` for `![alt](url)`
//! 3. `split_links` for `[text](url)`
//!
//! ## Modules
//!
//! - **`types`**: `TextSpan` and `SpanKind`
//! - **`kinds`**: Inline-specific types with owned delimiters
//! - **`cursor`**: `Cursor` used by the image and link scanners
//! - **`parser`**: `text_to_spans()` main entry point and the individual passes

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::{split_by_delimiter, split_images, split_links, text_to_spans};
pub use types::{SpanKind, TextSpan};
