use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InlineError {
    #[error("unclosed `{delimiter}` span: delimiter should have a closing pair in: {text}")]
    UnclosedDelimiter {
        delimiter: &'static str,
        text: String,
    },

    #[error("`{delimiter}` appears {count} times in: {text} (only one span per text run is supported)")]
    RepeatedDelimiter {
        delimiter: &'static str,
        count: usize,
        text: String,
    },
}

impl InlineError {
    /// The delimiter that could not be matched.
    pub fn delimiter(&self) -> &'static str {
        match self {
            InlineError::UnclosedDelimiter { delimiter, .. }
            | InlineError::RepeatedDelimiter { delimiter, .. } => delimiter,
        }
    }
}
