pub mod html;
pub mod io;
pub mod page;
pub mod parsing;
pub mod render;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use html::{Attributes, Element, ElementError};
pub use io::*;
pub use page::{PageError, extract_title, render_page, rewrite_base_path};
pub use parsing::blocks::{Block, BlockKind, classify, split_blocks};
pub use parsing::inline::{InlineError, Segment, SegmentKind, lex};
pub use render::{RenderError, compile_document, markdown_to_html};
