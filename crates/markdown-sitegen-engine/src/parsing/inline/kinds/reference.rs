/// Link and image references: `[label](url)` and `![alt](src)`.
///
/// Neither the label nor the destination may span a line break.
pub struct Reference;

impl Reference {
    pub const LINK_OPEN: &'static [u8; 1] = b"[";
    pub const IMAGE_OPEN: &'static [u8; 2] = b"![";
    /// Marks an image when it precedes `[`.
    pub const BANG: u8 = b'!';
    /// Ends the label and opens the destination.
    pub const LABEL_CLOSE: &'static [u8; 2] = b"](";
    pub const CLOSE: &'static [u8; 1] = b")";
}
