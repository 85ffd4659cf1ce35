pub mod block_quote;
pub mod code_fence;
pub mod heading;
pub mod list;
pub mod paragraph;

pub use block_quote::BlockQuote;
pub use code_fence::CodeFence;
pub use heading::Heading;
pub use list::{List, ListItem};
pub use paragraph::Paragraph;
