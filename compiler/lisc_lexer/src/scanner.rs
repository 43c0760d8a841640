//! Hand-written scanner producing borrowed [`Token`]s.
//!
//! # Design
//!
//! Dispatch is on the first byte of the token. Each arm calls a focused
//! method that advances the cursor and returns the [`TokenKind`]; the
//! common tail slices the token text and builds its span.
//!
//! Every token except `)` must be followed by a space, a `)` or the end of
//! input, so `1x` and `(add(add` are errors rather than two tokens.
//!
//! A single space after a token is a separator and is consumed lazily, at
//! the start of the *next* call. That keeps the byte immediately after the
//! last token observable through [`Scanner::at_close`], which the
//! evaluator needs to tell `(let x 1 ...)` declarations from `x)`
//! references.

use lisc_ir::{Span, SpanError};
use thiserror::Error;

use crate::cursor::Cursor;
use crate::tag::{Form, Token, TokenKind};

/// Why a token could not be read.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ScanErrorKind {
    #[error("unexpected character {0:?}")]
    UnexpectedChar(char),
    #[error("expected a space or `)` after the token, found {0:?}")]
    MissingSeparator(char),
    #[error("expected a digit after `-`")]
    MissingDigits,
    #[error("incomplete form keyword; expected `(add`, `(mult` or `(let`")]
    TruncatedForm,
    #[error("unknown form `({0}`; expected `(add`, `(mult` or `(let`")]
    UnknownForm(String),
    #[error("integer literal does not fit in a 64-bit signed integer")]
    LiteralOutOfRange,
    #[error("input is too large to scan: {0}")]
    SourceTooLarge(SpanError),
}

/// A scan failure and the input bytes it covers.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct ScanError {
    pub kind: ScanErrorKind,
    pub span: Span,
}

impl ScanError {
    #[cold]
    pub fn new(kind: ScanErrorKind, span: Span) -> Self {
        ScanError { kind, span }
    }
}

/// Pull-based scanner over one expression.
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
    /// A token has been produced, so one separating space may follow.
    after_token: bool,
    /// The iterator has yielded `Eof` or an error.
    finished: bool,
}

impl<'a> Scanner<'a> {
    /// Create a scanner positioned at the start of `source`.
    ///
    /// Fails only if `source` is longer than `u32::MAX` bytes.
    pub fn new(source: &'a str) -> Result<Self, ScanError> {
        if let Err(err) = Span::try_from_range(0..source.len()) {
            return Err(ScanError::new(
                ScanErrorKind::SourceTooLarge(err),
                Span::point(0),
            ));
        }
        Ok(Self {
            cursor: Cursor::new(source),
            after_token: false,
            finished: false,
        })
    }

    /// Produce the next token.
    ///
    /// Returns [`TokenKind::Eof`] once the input is exhausted; subsequent
    /// calls keep returning `Eof`.
    pub fn next_token(&mut self) -> Result<Token<'a>, ScanError> {
        if self.after_token && self.cursor.current() == b' ' {
            self.cursor.advance();
        }

        let start = self.cursor.pos();
        if self.cursor.is_eof() {
            return Ok(Token {
                kind: TokenKind::Eof,
                text: "",
                span: Span::point(start),
            });
        }

        let kind = match self.cursor.current() {
            b'(' => self.form(start)?,
            b')' => {
                self.cursor.advance();
                TokenKind::Close
            }
            b'-' => self.negative_integer(start)?,
            b'0'..=b'9' => self.integer(start, false)?,
            b'a'..=b'z' | b'A'..=b'Z' => self.identifier(),
            _ => return Err(self.unexpected_char(start)),
        };

        // `)` may be followed by anything; the evaluator rejects what it can't use.
        if kind != TokenKind::Close && !self.at_separator() {
            return Err(self.missing_separator());
        }

        self.after_token = true;
        Ok(Token {
            kind,
            text: self.cursor.slice_from(start),
            span: self.span_from(start),
        })
    }

    /// Returns `true` if the byte right after the last token is `)`.
    ///
    /// No separator has been consumed yet at this point, so `x)` answers
    /// `true` while `x )` answers `false`.
    #[inline]
    pub fn at_close(&self) -> bool {
        self.cursor.current() == b')'
    }

    /// The token just read ends at a space, a `)` or the end of input.
    #[inline]
    fn at_separator(&self) -> bool {
        self.cursor.is_eof() || matches!(self.cursor.current(), b' ' | b')')
    }

    /// Current byte offset in the input.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.cursor.pos()
    }

    // ─── Forms ─────────────────────────────────────────────────────

    fn form(&mut self, start: u32) -> Result<TokenKind, ScanError> {
        self.cursor.advance(); // consume '('
        let word_start = self.cursor.pos();
        self.cursor.eat_while(|b| b.is_ascii_alphanumeric());
        let word = self.cursor.slice_from(word_start);

        if let Some(form) = Form::from_keyword(word) {
            return Ok(TokenKind::Open(form));
        }

        let kind = if Form::ALL.iter().any(|form| form.keyword().starts_with(word)) {
            ScanErrorKind::TruncatedForm
        } else {
            ScanErrorKind::UnknownForm(word.to_owned())
        };
        Err(ScanError::new(kind, self.span_from(start)))
    }

    // ─── Literals ──────────────────────────────────────────────────

    fn negative_integer(&mut self, start: u32) -> Result<TokenKind, ScanError> {
        self.cursor.advance(); // consume '-'
        if !self.cursor.current().is_ascii_digit() {
            return Err(ScanError::new(
                ScanErrorKind::MissingDigits,
                self.span_from(start),
            ));
        }
        self.integer(start, true)
    }

    /// Accumulate digits toward the sign so that `i64::MIN` is representable.
    fn integer(&mut self, start: u32, negative: bool) -> Result<TokenKind, ScanError> {
        let mut value = Some(0i64);
        while self.cursor.current().is_ascii_digit() {
            let digit = i64::from(self.cursor.current() - b'0');
            value = value.and_then(|v| v.checked_mul(10)).and_then(|v| {
                if negative {
                    v.checked_sub(digit)
                } else {
                    v.checked_add(digit)
                }
            });
            self.cursor.advance();
        }

        value.map(TokenKind::Int).ok_or_else(|| {
            ScanError::new(ScanErrorKind::LiteralOutOfRange, self.span_from(start))
        })
    }

    fn identifier(&mut self) -> TokenKind {
        self.cursor.advance(); // first letter, already validated
        self.cursor.eat_while(|b| b.is_ascii_alphanumeric());
        TokenKind::Ident
    }

    // ─── Errors ────────────────────────────────────────────────────

    #[cold]
    fn unexpected_char(&mut self, start: u32) -> ScanError {
        let ch = self.cursor.current_char().unwrap_or(char::REPLACEMENT_CHARACTER);
        self.cursor.advance_char();
        ScanError::new(ScanErrorKind::UnexpectedChar(ch), self.span_from(start))
    }

    /// Points at the byte glued onto the previous token.
    #[cold]
    fn missing_separator(&mut self) -> ScanError {
        let start = self.cursor.pos();
        let ch = self.cursor.current_char().unwrap_or(char::REPLACEMENT_CHARACTER);
        self.cursor.advance_char();
        ScanError::new(ScanErrorKind::MissingSeparator(ch), self.span_from(start))
    }

    #[inline]
    fn span_from(&self, start: u32) -> Span {
        Span::new(start, self.cursor.pos())
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Result<Token<'a>, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.next_token() {
            Ok(tok) if tok.kind == TokenKind::Eof => {
                self.finished = true;
                None
            }
            Ok(tok) => Some(Ok(tok)),
            Err(err) => {
                self.finished = true;
                Some(Err(err))
            }
        }
    }
}

/// Convenience function: tokenize a whole expression.
///
/// Returns every token before `Eof`, or the first scan error.
pub fn tokenize(source: &str) -> Result<Vec<Token<'_>>, ScanError> {
    Scanner::new(source)?.collect()
}
