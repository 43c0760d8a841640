//! Lisc Lexer - token scanner for `add` / `mult` / `let` expressions.
//!
//! The scanner is pull-based: the evaluator asks for one token at a time
//! and the scanner never looks further ahead than the byte after the
//! token it just produced. Tokens borrow their text from the input; no
//! token is ever copied into an owned buffer.
//!
//! # Lexical Grammar
//!
//! ```text
//! token      = opener | ")" | integer | identifier
//! opener     = "(add" | "(mult" | "(let"
//! integer    = ["-"] digit { digit }
//! identifier = letter { letter | digit }
//! separator  = " "            (exactly one between two tokens, unless
//!                               the first is ")" or the second is ")")
//! ```
//!
//! A token that runs straight into another byte, as in `1x` or
//! `(add(add`, is a [`ScanErrorKind::MissingSeparator`]. Anything else,
//! including tabs, newlines and runs of spaces, is an
//! [`ScanErrorKind::UnexpectedChar`].

mod cursor;
mod scanner;
mod tag;

pub use cursor::Cursor;
pub use scanner::{tokenize, ScanError, ScanErrorKind, Scanner};
pub use tag::{Form, Token, TokenKind};
