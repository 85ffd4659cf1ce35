/// A byte cursor for scanning inline text.
///
/// Only ever stops on ASCII delimiters, so slices taken between two stop
/// positions are always on `char` boundaries.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being scanned.
    pub s: &'a str,
    /// Current byte index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `s`.
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    /// Returns the current byte position.
    pub fn pos(&self) -> usize {
        self.i
    }

    /// Returns true if at end of string.
    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.s.as_bytes().get(self.i).copied()
    }

    /// Returns the byte just before the cursor, if any.
    pub fn prev(&self) -> Option<u8> {
        self.i
            .checked_sub(1)
            .and_then(|i| self.s.as_bytes().get(i).copied())
    }

    /// Checks if the remaining input starts with the given byte pattern.
    pub fn starts_with(&self, pat: &[u8]) -> bool {
        self.s
            .as_bytes()
            .get(self.i..)
            .is_some_and(|rest| rest.starts_with(pat))
    }

    /// Advances by one byte, returning the consumed byte.
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.s.as_bytes().get(self.i).copied()?;
        self.i += 1;
        Some(b)
    }

    /// Advances by `n` bytes.
    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
    }

    /// Advances until `stop` matches or the line ends.
    ///
    /// Returns true if the cursor rests on `stop`.
    pub fn seek_on_line(&mut self, stop: &[u8]) -> bool {
        while !self.eof() {
            if self.starts_with(stop) {
                return true;
            }
            if self.peek() == Some(b'\n') {
                return false;
            }
            self.bump();
        }
        false
    }

    /// Slices the underlying string between two positions previously
    /// returned by [`Cursor::pos`].
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        &self.s[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_basics() {
        let mut cur = Cursor::new("hello");
        assert_eq!(cur.pos(), 0);
        assert!(!cur.eof());
        assert_eq!(cur.peek(), Some(b'h'));
        assert_eq!(cur.bump(), Some(b'h'));
        assert_eq!(cur.pos(), 1);
        assert_eq!(cur.prev(), Some(b'h'));
    }

    #[test]
    fn prev_at_start_is_none() {
        let cur = Cursor::new("[x]");
        assert_eq!(cur.prev(), None);
    }

    #[test]
    fn cursor_starts_with() {
        let cur = Cursor::new("![alt](src)");
        assert!(cur.starts_with(b"!["));
        assert!(!cur.starts_with(b"]("));
    }

    #[test]
    fn starts_with_pattern_longer_than_remaining() {
        let mut cur = Cursor::new("ab");
        assert!(!cur.starts_with(b"abcdef"));

        cur.bump();
        assert!(!cur.starts_with(b"bc"));
        assert!(cur.starts_with(b"b"));
    }

    #[test]
    fn starts_with_past_end_is_false() {
        let mut cur = Cursor::new("hi");
        cur.bump_n(10);
        assert!(cur.eof());
        assert!(!cur.starts_with(b"h"));
    }

    #[test]
    fn seek_on_line_finds_stop() {
        let mut cur = Cursor::new("label](url)");
        assert!(cur.seek_on_line(b"]("));
        assert_eq!(cur.pos(), 5);
    }

    #[test]
    fn seek_on_line_stops_at_newline() {
        let mut cur = Cursor::new("label\n](url)");
        assert!(!cur.seek_on_line(b"]("));
        assert_eq!(cur.peek(), Some(b'\n'));
    }

    #[test]
    fn seek_on_line_runs_to_eof() {
        let mut cur = Cursor::new("no closer");
        assert!(!cur.seek_on_line(b")"));
        assert!(cur.eof());
    }

    #[test]
    fn bump_at_eof_returns_none() {
        let mut cur = Cursor::new("x");
        assert_eq!(cur.bump(), Some(b'x'));
        assert_eq!(cur.bump(), None);
        assert_eq!(cur.bump(), None);
    }

    #[test]
    fn slice_multibyte_between_ascii_stops() {
        let mut cur = Cursor::new("[héllo](x)");
        cur.bump();
        let start = cur.pos();
        assert!(cur.seek_on_line(b"]("));
        assert_eq!(cur.slice(start, cur.pos()), "héllo");
    }
}
