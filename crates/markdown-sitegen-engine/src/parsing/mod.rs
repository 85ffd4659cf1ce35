pub mod blocks;
pub mod inline;

use blocks::{Block, classify_block, split_blocks};

#[derive(Debug)]
pub struct ParsedDoc<'a> {
    pub blocks: Vec<Block<'a>>,
}

/// Splits a document into blocks and classifies each one, in document order.
pub fn parse_document(markdown: &str) -> ParsedDoc<'_> {
    ParsedDoc {
        blocks: split_blocks(markdown)
            .into_iter()
            .map(classify_block)
            .collect(),
    }
}
