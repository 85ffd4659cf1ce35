/// Fenced code block type with owned fence constant.
///
/// Only backtick fences are recognised, and the fence must both open and
/// close the block. Info strings after the opening fence are not
/// interpreted; they are part of the code.
pub struct CodeFence;

impl CodeFence {
    pub const FENCE: &'static str = "```";

    /// Whether a whole block is a fenced code block.
    ///
    /// The opening and closing fences may not share backticks.
    pub fn wraps(block: &str) -> bool {
        block.len() >= Self::FENCE.len() * 2
            && block.starts_with(Self::FENCE)
            && block.ends_with(Self::FENCE)
    }

    /// Extracts the raw code between the first two fences.
    ///
    /// One newline directly inside each fence is dropped and a single
    /// trailing newline is appended.
    pub fn body(block: &str) -> String {
        let rest = block.strip_prefix(Self::FENCE).unwrap_or(block);
        let rest = rest.strip_prefix('\n').unwrap_or(rest);
        let code = match rest.find(Self::FENCE) {
            Some(end) => &rest[..end],
            None => rest,
        };
        let code = code.strip_suffix('\n').unwrap_or(code);

        let mut body = String::with_capacity(code.len() + 1);
        body.push_str(code);
        body.push('\n');
        body
    }
}
