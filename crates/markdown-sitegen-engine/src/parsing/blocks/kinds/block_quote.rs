/// Blockquote block type with owned prefix constant.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// Whether a block opens as a quote.
    pub fn opens(block: &str) -> bool {
        block.starts_with(Self::PREFIX)
    }

    /// Strips one `>` from a quote line. Whitespace after the marker is kept.
    ///
    /// Lazy continuation lines without a prefix are returned as-is.
    pub fn strip_prefix(line: &str) -> &str {
        line.strip_prefix(Self::PREFIX).unwrap_or(line)
    }

    /// Joins the lines of a quote block into one run of text.
    pub fn join_lines(block: &str) -> String {
        block
            .lines()
            .map(Self::strip_prefix)
            .collect::<Vec<_>>()
            .join(" ")
    }
}
