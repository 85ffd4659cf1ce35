use crate::html::Element;
use crate::parsing::blocks::{
    Block, BlockKind,
    kinds::{BlockQuote, CodeFence, Heading, ListItem, Paragraph},
};

use super::{RenderError, inline::text_to_children};

/// Compiles one classified block into its parent element.
pub fn compile_block(block: Block<'_>) -> Result<Element, RenderError> {
    match block.kind {
        BlockKind::Heading => heading_to_element(block.text),
        BlockKind::Code => Ok(code_to_element(block.text)),
        BlockKind::Quote => quote_to_element(block.text),
        BlockKind::UnorderedList => list_to_element(block.text, "ul"),
        BlockKind::OrderedList => list_to_element(block.text, "ol"),
        BlockKind::Paragraph => paragraph_to_element(block.text),
    }
}

/// `# Title` becomes `<h1>Title</h1>`.
///
/// # Errors
/// [`RenderError::HeadingLevel`] when the marker holds no `#` or more than six.
pub fn heading_to_element(text: &str) -> Result<Element, RenderError> {
    let (level, content) = Heading::split(text);
    if !(1..=Heading::MAX_LEVEL).contains(&level) {
        return Err(RenderError::HeadingLevel { level });
    }
    Ok(Element::parent(
        format!("h{level}"),
        text_to_children(content)?,
    ))
}

/// Fenced code becomes `<pre><code>...</code></pre>`, content untouched.
pub fn code_to_element(text: &str) -> Element {
    Element::parent("pre", vec![Element::leaf("code", CodeFence::body(text))])
}

pub fn quote_to_element(text: &str) -> Result<Element, RenderError> {
    Ok(Element::parent(
        "blockquote",
        text_to_children(&BlockQuote::join_lines(text))?,
    ))
}

/// Each line becomes an `<li>`, lexed on its own.
pub fn list_to_element(text: &str, tag: &str) -> Result<Element, RenderError> {
    let items = ListItem::texts(text)
        .map(|item| Ok(Element::parent("li", text_to_children(item)?)))
        .collect::<Result<Vec<_>, RenderError>>()?;
    Ok(Element::parent(tag, items))
}

pub fn paragraph_to_element(text: &str) -> Result<Element, RenderError> {
    Ok(Element::parent(
        "p",
        text_to_children(&Paragraph::join_lines(text))?,
    ))
}
