//! Bounds-checked byte cursor over the input text.
//!
//! Reads past the end of the input return `0x00` instead of panicking, so
//! scanning loops terminate on the first byte that fails their predicate.
//! An interior `0x00` is told apart from end of input by comparing `pos`
//! against the input length.

/// Byte cursor over a source string.
///
/// The cursor is [`Copy`], enabling cheap state snapshots.
///
/// # Invariant
///
/// `source.len() <= u32::MAX`. [`Scanner::new`](crate::Scanner::new) checks
/// this before building its cursor; other callers must uphold it.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    source: &'a str,
    pos: u32,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        debug_assert!(u32::try_from(source.len()).is_ok(), "source exceeds u32::MAX");
        Self { source, pos: 0 }
    }

    /// Returns the byte at the current position, or `0x00` at end of input.
    #[inline]
    pub fn current(&self) -> u8 {
        self.source.as_bytes().get(self.pos as usize).copied().unwrap_or(0)
    }


    /// Advance the cursor by one byte. Does nothing at end of input.
    #[inline]
    pub fn advance(&mut self) {
        if !self.is_eof() {
            self.pos += 1;
        }
    }

    /// Returns the character starting at the current position.
    ///
    /// `None` at end of input or when `pos` is not on a character boundary.
    pub fn current_char(&self) -> Option<char> {
        self.source.get(self.pos as usize..)?.chars().next()
    }

    /// Advance past one full character (one byte if not on a boundary).
    #[allow(
        clippy::cast_possible_truncation,
        reason = "a UTF-8 character is at most 4 bytes"
    )]
    pub fn advance_char(&mut self) {
        let width = self.current_char().map_or(1, char::len_utf8) as u32;
        self.pos = (self.pos + width).min(self.source_len());
    }

    /// Returns `true` once every byte of the input has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos as usize >= self.source.len()
    }

    /// Current byte offset in the input.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Length of the input in bytes.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "source length is checked against u32::MAX on construction"
    )]
    #[inline]
    pub fn source_len(&self) -> u32 {
        self.source.len() as u32
    }

    /// Extract the input text from `start` to the current position.
    ///
    /// Returns an empty string if `start..pos` does not fall on character
    /// boundaries. The scanner only slices across ASCII runs, so this does
    /// not happen in practice.
    pub fn slice_from(&self, start: u32) -> &'a str {
        self.source
            .get(start as usize..self.pos as usize)
            .unwrap_or_default()
    }

    /// Advance while `pred` returns `true` for the current byte.
    ///
    /// Stops at end of input regardless of `pred(0)`.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while !self.is_eof() && pred(self.current()) {
            self.pos += 1;
        }
    }
}
