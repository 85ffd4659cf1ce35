/// Paragraph block type.
///
/// Paragraphs have no delimiters - they are the fallback when no other
/// block opener matches. Inline lexing is applied to the joined lines.
pub struct Paragraph;

impl Paragraph {
    /// Collapses the lines of a paragraph into one run of text.
    pub fn join_lines(block: &str) -> String {
        block.lines().collect::<Vec<_>>().join(" ")
    }
}
