use crate::html::{Attributes, Element};
use crate::parsing::inline::{Segment, SegmentKind, lex};

use super::RenderError;

/// Maps one inline segment to its leaf element.
///
/// # Errors
/// [`RenderError::MissingDestination`] for a link or image without a URL.
pub fn segment_to_element(segment: Segment) -> Result<Element, RenderError> {
    let Segment {
        content,
        kind,
        destination,
    } = segment;

    let element = match kind {
        SegmentKind::Plain => Element::text(content),
        SegmentKind::Bold => Element::leaf("b", content),
        SegmentKind::Italic => Element::leaf("i", content),
        SegmentKind::Code => Element::leaf("code", content),
        SegmentKind::Link => {
            let href = destination.ok_or(RenderError::MissingDestination { kind })?;
            Element::leaf("a", content).with_attributes(Attributes::new().with("href", href))
        }
        SegmentKind::Image => {
            let src = destination.ok_or(RenderError::MissingDestination { kind })?;
            Element::leaf("img", "")
                .with_attributes(Attributes::new().with("src", src).with("alt", content))
        }
    };
    Ok(element)
}

/// Lexes `text` and maps every segment to an element, in order.
pub fn text_to_children(text: &str) -> Result<Vec<Element>, RenderError> {
    lex(text)?.into_iter().map(segment_to_element).collect()
}
