use std::fmt;

/// The structural kind of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    /// `# ` to `###### `
    Heading,
    /// A block wrapped in triple-backtick fences.
    Code,
    /// Lines starting with `>`.
    Quote,
    /// Lines starting with `- `.
    UnorderedList,
    /// Lines starting with `1. `, `2. `, ...
    OrderedList,
    /// Fallback when no other opener matches.
    Paragraph,
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BlockKind::Heading => "heading",
            BlockKind::Code => "code",
            BlockKind::Quote => "quote",
            BlockKind::UnorderedList => "unordered list",
            BlockKind::OrderedList => "ordered list",
            BlockKind::Paragraph => "paragraph",
        };
        f.write_str(name)
    }
}

/// A classified block borrowing its text from the source document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block<'a> {
    pub kind: BlockKind,
    /// Block text with surrounding whitespace stripped.
    pub text: &'a str,
}
