use std::sync::OnceLock;

use regex::Regex;

/// ATX heading block type with owned marker constants.
pub struct Heading;

impl Heading {
    /// The heading marker character.
    pub const MARKER: char = '#';
    /// Deepest heading level HTML provides (`h6`).
    pub const MAX_LEVEL: usize = 6;

    /// Whether a block opens with one to six `#` followed by a space.
    pub fn opens(block: &str) -> bool {
        static OPENER: OnceLock<Regex> = OnceLock::new();
        OPENER
            .get_or_init(|| Regex::new(r"^#{1,6} ").expect("Invalid heading regex"))
            .is_match(block)
    }

    /// Splits a heading block into its level and the text after the marker.
    ///
    /// The level is the number of `#` in the marker, which is not capped here;
    /// callers decide what to do with levels above [`Heading::MAX_LEVEL`].
    pub fn split(block: &str) -> (usize, &str) {
        let block = block.trim_start();
        let (marker, text) = block
            .split_once(char::is_whitespace)
            .unwrap_or((block, ""));
        let level = marker.chars().filter(|c| *c == Self::MARKER).count();
        (level, text.trim_start())
    }
}
