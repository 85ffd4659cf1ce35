//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`Reference`**: `[label](url)` links and `![alt](src)` images
//! - **`Emphasis`**: `**` bold and `_` italic
//! - **`CodeSpan`**: `` ` `` code spans
//!
//! All delimiter constants live here, not scattered in parser code.

pub mod code_span;
pub mod emphasis;
pub mod reference;

pub use code_span::CodeSpan;
pub use emphasis::Emphasis;
pub use reference::Reference;
