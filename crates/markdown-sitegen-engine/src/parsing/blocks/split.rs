/// The boundary between two blocks.
pub const BLOCK_SEPARATOR: &str = "\n\n";

/// Splits a document into blocks on blank-line boundaries.
///
/// Each block is stripped of surrounding whitespace and empty blocks are
/// dropped. Document order is preserved.
pub fn split_blocks(document: &str) -> Vec<&str> {
    document
        .split(BLOCK_SEPARATOR)
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .collect()
}
