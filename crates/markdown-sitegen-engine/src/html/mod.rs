//! # Element Tree
//!
//! The HTML tree produced by the block compiler.
//!
//! - **`attributes`**: `Attributes`, an insertion-ordered attribute list
//! - **`element`**: `Element` (`Leaf` or `Parent`) and its serializer

pub mod attributes;
pub mod element;

pub use attributes::Attributes;
pub use element::{Element, ElementError};
