use std::fmt;

/// The markup kind of an inline [`Segment`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    /// Literal text with no markup.
    Plain,
    /// `**bold**`
    Bold,
    /// `_italic_`
    Italic,
    /// `` `code` ``
    Code,
    /// `[label](url)`
    Link,
    /// `![alt](src)`
    Image,
}

impl SegmentKind {
    /// Whether segments of this kind carry a destination URL.
    pub fn has_destination(self) -> bool {
        matches!(self, SegmentKind::Link | SegmentKind::Image)
    }
}

impl fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SegmentKind::Plain => "plain",
            SegmentKind::Bold => "bold",
            SegmentKind::Italic => "italic",
            SegmentKind::Code => "code",
            SegmentKind::Link => "link",
            SegmentKind::Image => "image",
        };
        f.write_str(name)
    }
}

/// One contiguous run of inline text tagged with a markup kind.
///
/// `destination` is `Some` exactly for [`SegmentKind::Link`] and
/// [`SegmentKind::Image`] when built through the typed constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub content: String,
    pub kind: SegmentKind,
    pub destination: Option<String>,
}

impl Segment {
    /// Builds a segment from raw parts without checking the destination
    /// invariant. Prefer the typed constructors.
    pub fn new(
        content: impl Into<String>,
        kind: SegmentKind,
        destination: Option<String>,
    ) -> Self {
        Self {
            content: content.into(),
            kind,
            destination,
        }
    }

    pub fn plain(content: impl Into<String>) -> Self {
        Self::new(content, SegmentKind::Plain, None)
    }

    /// A destination-less segment of `kind`.
    pub fn styled(content: impl Into<String>, kind: SegmentKind) -> Self {
        debug_assert!(!kind.has_destination());
        Self::new(content, kind, None)
    }

    pub fn link(label: impl Into<String>, destination: impl Into<String>) -> Self {
        Self::new(label, SegmentKind::Link, Some(destination.into()))
    }

    pub fn image(alt: impl Into<String>, src: impl Into<String>) -> Self {
        Self::new(alt, SegmentKind::Image, Some(src.into()))
    }

    pub fn is_plain(&self) -> bool {
        self.kind == SegmentKind::Plain
    }
}
