/// Marker constants for list blocks.
pub struct List;

impl List {
    pub const UNORDERED_MARKER: &'static str = "- ";
    /// An ordered list has to start counting at one.
    pub const ORDERED_FIRST_MARKER: &'static str = "1. ";
}

/// One line of a list block.
pub struct ListItem;

impl ListItem {
    /// Drops the list marker (`-`, `2.`, ...) from a line.
    ///
    /// The marker is whatever precedes the first run of whitespace; it is not
    /// validated. A line holding only a marker yields empty text.
    pub fn text(line: &str) -> &str {
        line.trim_start()
            .split_once(char::is_whitespace)
            .map(|(_, text)| text.trim_start())
            .unwrap_or("")
    }

    /// The text of every item in a list block, in order.
    pub fn texts(block: &str) -> impl Iterator<Item = &str> {
        block.lines().map(Self::text)
    }
}
