//! # Rendering
//!
//! Compiles classified blocks into [`Element`] trees.
//!
//! - **`inline`**: segment to leaf mapping
//! - **`block`**: one conversion per `BlockKind`
//!
//! The document compiler lives here as well: split, classify, compile every
//! block in order and wrap the lot in a `div`.

pub mod block;
pub mod inline;

use thiserror::Error;

use crate::html::{Element, ElementError};
use crate::parsing::{inline::InlineError, inline::SegmentKind, parse_document};

pub use block::compile_block;

/// Tag of the container wrapping a compiled document.
pub const CONTAINER_TAG: &str = "div";

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("invalid inline markup: {0}")]
    Inline(#[from] InlineError),

    #[error("heading markdown should contain 1-6 '#', found {level}")]
    HeadingLevel { level: usize },

    #[error("{kind} segment has no destination")]
    MissingDestination { kind: SegmentKind },

    #[error("document contains no blocks")]
    EmptyDocument,

    #[error("cannot serialize element tree: {0}")]
    Element(#[from] ElementError),
}

/// Compiles a whole document into a `div` holding one element per block.
///
/// # Errors
/// [`RenderError::EmptyDocument`] when the document has no blocks, or the
/// first error raised by any block.
pub fn compile_document(markdown: &str) -> Result<Element, RenderError> {
    let doc = parse_document(markdown);
    if doc.blocks.is_empty() {
        return Err(RenderError::EmptyDocument);
    }

    let children = doc
        .blocks
        .into_iter()
        .map(|block| {
            log::debug!("compiling {} block ({} bytes)", block.kind, block.text.len());
            compile_block(block)
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Element::parent(CONTAINER_TAG, children))
}

/// Compiles and serializes a document in one go.
pub fn markdown_to_html(markdown: &str) -> Result<String, RenderError> {
    Ok(compile_document(markdown)?.to_html()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;
    use rstest::rstest;

    #[test]
    fn heading_and_paragraph() {
        assert_snapshot!(
            markdown_to_html("# Hi\n\nSome **bold** text.").unwrap(),
            @"<div><h1>Hi</h1><p>Some <b>bold</b> text.</p></div>"
        );
    }

    #[test]
    fn empty_document_is_an_error() {
        assert!(matches!(
            compile_document(""),
            Err(RenderError::EmptyDocument)
        ));
        assert!(matches!(
            compile_document("\n\n   \n\n"),
            Err(RenderError::EmptyDocument)
        ));
    }

    #[rstest]
    #[case("****", "p")]
    #[case("__", "p")]
    #[case("``", "p")]
    #[case("- ``", "li")]
    fn empty_span_leaves_childless_parent(#[case] markdown: &str, #[case] parent: &str) {
        assert!(matches!(
            markdown_to_html(markdown),
            Err(RenderError::Element(ElementError::EmptyParent { ref tag })) if tag == parent
        ));
    }

    #[test]
    fn children_follow_document_order() {
        let tree = compile_document("> q\n\n# h\n\np").unwrap();
        let tags: Vec<_> = tree.children().iter().filter_map(Element::tag).collect();
        assert_eq!(tree.tag(), Some(CONTAINER_TAG));
        assert_eq!(tags, ["blockquote", "h1", "p"]);
    }

    #[test]
    fn first_failing_block_aborts() {
        let err = compile_document("# ok\n\nbad **bold\n\nfine").unwrap_err();
        assert!(matches!(
            err,
            RenderError::Inline(InlineError::UnclosedDelimiter { delimiter: "**", .. })
        ));
    }

    #[test]
    fn full_document() {
        let md = "# Tolkien Fan Club\n\n\
                  **I like Tolkien**. Read my [first post here](/majesty)\n\n\
                  > All that is gold does not glitter\n\n\
                  ## Reasons I like Tolkien\n\n\
                  - You can spend years studying the legendarium\n\
                  - It's not as _woke_ as modern fantasy\n\n\
                  1. Gandalf\n2. Bilbo\n3. Sam\n\n\
                  ```\nfunc main(){\n    fmt.Println(\"Hello, World!\")\n}\n```";
        let expected = concat!(
            "<div>",
            "<h1>Tolkien Fan Club</h1>",
            r#"<p><b>I like Tolkien</b>. Read my <a href="/majesty">first post here</a></p>"#,
            "<blockquote> All that is gold does not glitter</blockquote>",
            "<h2>Reasons I like Tolkien</h2>",
            "<ul><li>You can spend years studying the legendarium</li>",
            "<li>It's not as <i>woke</i> as modern fantasy</li></ul>",
            "<ol><li>Gandalf</li><li>Bilbo</li><li>Sam</li></ol>",
            "<pre><code>func main(){\n    fmt.Println(\"Hello, World!\")\n}\n</code></pre>",
            "</div>",
        );
        pretty_assertions::assert_eq!(markdown_to_html(md).unwrap(), expected);
    }
}
