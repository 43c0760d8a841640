//! Byte ranges into an evaluated expression.
//!
//! Offsets are `u32`: the scanner refuses inputs it cannot address, so every
//! span built after that check is in range.

use std::fmt;
use std::ops::Range;

/// A byte offset did not fit in `u32`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpanError {
    StartTooLarge(usize),
    EndTooLarge(usize),
}

impl fmt::Display for SpanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (which, offset) = match *self {
            SpanError::StartTooLarge(offset) => ("start", offset),
            SpanError::EndTooLarge(offset) => ("end", offset),
        };
        write!(f, "{which} offset {offset} is beyond the 4 GiB input limit")
    }
}

impl std::error::Error for SpanError {}

/// Half-open byte range `start..end`.
///
/// Token spans cover the token text; a closed form's span runs from its
/// opener to its `)`; end of input is a zero-width span at the input length.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }

    /// Zero-width span at `offset`.
    #[inline]
    pub const fn point(offset: u32) -> Self {
        Span::new(offset, offset)
    }

    /// Convert a `usize` range, failing if either end exceeds `u32::MAX`.
    pub fn try_from_range(range: Range<usize>) -> Result<Self, SpanError> {
        let start =
            u32::try_from(range.start).map_err(|_| SpanError::StartTooLarge(range.start))?;
        let end = u32::try_from(range.end).map_err(|_| SpanError::EndTooLarge(range.end))?;
        Ok(Span::new(start, end))
    }

    /// Smallest span covering both `self` and `other`.
    #[inline]
    #[must_use]
    pub fn merge(self, other: Span) -> Span {
        Span::new(self.start.min(other.start), self.end.max(other.end))
    }

    /// Range for slicing the input.
    #[inline]
    pub fn to_range(self) -> Range<usize> {
        self.start as usize..self.end as usize
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::Span;
    crate::static_assert_size!(Span, 8);
}

#[cfg(test)]
mod tests;
