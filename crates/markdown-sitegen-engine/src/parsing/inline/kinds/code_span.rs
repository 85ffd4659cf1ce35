/// Code span type with owned delimiter constant.
///
/// Runs after emphasis, so `**` or `_` inside backticks are split first.
pub struct CodeSpan;

impl CodeSpan {
    pub const TICK: &'static str = "`";
}
