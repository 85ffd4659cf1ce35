//! # Block Parsing
//!
//! Two-phase block parsing.
//!
//! ## Parsing Phases
//!
//! 1. **Splitting** (`split`): the document is cut into blocks on blank-line
//!    boundaries, each stripped of surrounding whitespace
//!
//! 2. **Classification** (`classify`): each block is assigned exactly one
//!    `BlockKind` from its prefix (and, for code, suffix) pattern
//!
//! ## Modules
//!
//! - **`types`**: Core types (`Block`, `BlockKind`)
//! - **`kinds`**: Block-specific types with owned delimiters (Heading, CodeFence,
//!   BlockQuote, List, Paragraph)
//! - **`split`**: `split_blocks`
//! - **`classify`**: `classify` with fixed precedence
//!
//! ## Key Invariants
//!
//! - Classification never fails; `Paragraph` is the fallback
//! - Fenced code blocks are raw zones: no inline lexing inside

pub mod classify;
pub mod kinds;
pub mod split;
pub mod types;

pub use classify::{classify, classify_block};
pub use split::split_blocks;
pub use types::{Block, BlockKind};
