use super::{
    kinds::{BlockQuote, CodeFence, Heading, List},
    types::{Block, BlockKind},
};

/// Classifies a stripped block by its opening (and, for code, closing)
/// pattern.
///
/// Precedence: heading, code, quote, unordered list, ordered list,
/// paragraph. Never fails; anything unrecognised is a paragraph.
pub fn classify(block: &str) -> BlockKind {
    if Heading::opens(block) {
        BlockKind::Heading
    } else if CodeFence::wraps(block) {
        BlockKind::Code
    } else if BlockQuote::opens(block) {
        BlockKind::Quote
    } else if block.starts_with(List::UNORDERED_MARKER) {
        BlockKind::UnorderedList
    } else if block.starts_with(List::ORDERED_FIRST_MARKER) {
        BlockKind::OrderedList
    } else {
        BlockKind::Paragraph
    }
}

/// Classifies `text` and pairs it with its kind.
pub fn classify_block(text: &str) -> Block<'_> {
    Block {
        kind: classify(text),
        text,
    }
}
