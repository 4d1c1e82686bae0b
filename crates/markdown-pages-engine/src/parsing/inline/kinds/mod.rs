//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`Emphasis`**: `**`/`__` (bold) and `_`/`*` (italic)
//! - **`CodeSpan`**: `` ` `` - resolved after emphasis
//! - **`Image`**: `![alt](url)`
//! - **`Link`**: `[text](url)`, never preceded by `!`
//!
//! ## Design Principle
//!
//! All delimiter constants live here, not scattered in parser code.
//! The parser calls these constants; it never hardcodes `**` or `](`.

pub mod code_span;
pub mod emphasis;
pub mod image;
pub mod link;

pub use code_span::CodeSpan;
pub use emphasis::Emphasis;
pub use image::Image;
pub use link::Link;
