//! # Inline Lexing
//!
//! Turns one block's worth of raw text into a flat sequence of typed
//! [`Segment`]s.
//!
//! ## Architecture
//!
//! Lexing is an ordered pipeline of passes. Each pass only rewrites the plain
//! segments left by the previous one:
//!
//! 1. links `[label](url)`
//! 2. images `![alt](src)`
//! 3. bold `**`
//! 4. italic `_`
//! 5. code spans `` ` ``
//!
//! ## Modules
//!
//! - **`types`**: `Segment` and `SegmentKind`
//! - **`kinds`**: Inline-specific types with owned delimiters
//! - **`cursor`**: `Cursor` used by the reference scanner
//! - **`parser`**: `lex()` and the pass functions
//! - **`error`**: `InlineError`

pub mod cursor;
pub mod error;
pub mod kinds;
pub mod parser;
pub mod types;

pub use error::InlineError;
pub use parser::lex;
pub use types::{Segment, SegmentKind};
