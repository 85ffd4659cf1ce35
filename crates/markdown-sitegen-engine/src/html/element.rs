use thiserror::Error;

use super::attributes::Attributes;

/// Tag of the one self-closing element the compiler emits.
const IMG: &str = "img";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ElementError {
    #[error("<{tag}> has no children")]
    EmptyParent { tag: String },

    #[error("<img> cannot hold content, found: {content}")]
    ImageWithContent { content: String },
}

/// A node of the HTML tree.
///
/// Parents own their children outright; the tree is built bottom-up and
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    /// Text content, optionally wrapped in a tag. An untagged leaf is raw
    /// text and ignores its attributes.
    Leaf {
        tag: Option<String>,
        content: String,
        attributes: Attributes,
    },
    /// A tag wrapping an ordered, non-empty list of children.
    Parent {
        tag: String,
        children: Vec<Element>,
        attributes: Attributes,
    },
}

impl Element {
    /// Raw text, serialized verbatim.
    pub fn text(content: impl Into<String>) -> Self {
        Element::Leaf {
            tag: None,
            content: content.into(),
            attributes: Attributes::new(),
        }
    }

    pub fn leaf(tag: impl Into<String>, content: impl Into<String>) -> Self {
        Element::Leaf {
            tag: Some(tag.into()),
            content: content.into(),
            attributes: Attributes::new(),
        }
    }

    pub fn parent(tag: impl Into<String>, children: Vec<Element>) -> Self {
        Element::Parent {
            tag: tag.into(),
            children,
            attributes: Attributes::new(),
        }
    }

    /// Replaces this element's attributes.
    pub fn with_attributes(mut self, new: Attributes) -> Self {
        match &mut self {
            Element::Leaf { attributes, .. } | Element::Parent { attributes, .. } => {
                *attributes = new
            }
        }
        self
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            Element::Leaf { tag, .. } => tag.as_deref(),
            Element::Parent { tag, .. } => Some(tag.as_str()),
        }
    }

    pub fn attributes(&self) -> &Attributes {
        match self {
            Element::Leaf { attributes, .. } | Element::Parent { attributes, .. } => attributes,
        }
    }

    /// Children of a parent; empty for leaves.
    pub fn children(&self) -> &[Element] {
        match self {
            Element::Leaf { .. } => &[],
            Element::Parent { children, .. } => children,
        }
    }

    /// Serializes the tree to an HTML string.
    ///
    /// # Errors
    /// Fails on a parent without children or an `img` leaf with content.
    pub fn to_html(&self) -> Result<String, ElementError> {
        let mut out = String::new();
        self.write_html(&mut out)?;
        Ok(out)
    }

    fn write_html(&self, out: &mut String) -> Result<(), ElementError> {
        match self {
            Element::Leaf {
                tag: None, content, ..
            } => out.push_str(content),
            Element::Leaf {
                tag: Some(tag),
                content,
                attributes,
            } if tag == IMG => {
                if !content.is_empty() {
                    return Err(ElementError::ImageWithContent {
                        content: content.clone(),
                    });
                }
                out.push('<');
                out.push_str(tag);
                attributes.write_html(out);
                out.push_str(" />");
            }
            Element::Leaf {
                tag: Some(tag),
                content,
                attributes,
            } => {
                open_tag(out, tag, attributes);
                out.push_str(content);
                close_tag(out, tag);
            }
            Element::Parent {
                tag,
                children,
                attributes,
            } => {
                if children.is_empty() {
                    return Err(ElementError::EmptyParent { tag: tag.clone() });
                }
                open_tag(out, tag, attributes);
                for child in children {
                    child.write_html(out)?;
                }
                close_tag(out, tag);
            }
        }
        Ok(())
    }
}

fn open_tag(out: &mut String, tag: &str, attributes: &Attributes) {
    out.push('<');
    out.push_str(tag);
    attributes.write_html(out);
    out.push('>');
}

fn close_tag(out: &mut String, tag: &str) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}
