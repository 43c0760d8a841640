//! Token kinds produced by the scanner.

use std::fmt;

use lisc_ir::Span;

/// One of the three special forms.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Form {
    Add,
    Mult,
    Let,
}

impl Form {
    /// All forms, in keyword order.
    pub const ALL: [Form; 3] = [Form::Add, Form::Mult, Form::Let];

    /// The keyword that follows `(` to open this form.
    pub const fn keyword(self) -> &'static str {
        match self {
            Form::Add => "add",
            Form::Mult => "mult",
            Form::Let => "let",
        }
    }

    /// Look up a form by its keyword.
    pub fn from_keyword(word: &str) -> Option<Form> {
        Form::ALL.into_iter().find(|form| form.keyword() == word)
    }
}

impl fmt::Display for Form {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// What a token is.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    /// `(add`, `(mult` or `(let`.
    Open(Form),
    /// `)`.
    Close,
    /// Integer literal, already converted.
    Int(i64),
    /// Variable name, either a declaration or a reference.
    Ident,
    /// End of input. Produced repeatedly once the input is exhausted.
    Eof,
}

impl TokenKind {
    /// Short name used by the `lex` dump and trace output.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Open(Form::Add) => "open-add",
            TokenKind::Open(Form::Mult) => "open-mult",
            TokenKind::Open(Form::Let) => "open-let",
            TokenKind::Close => "close",
            TokenKind::Int(_) => "int",
            TokenKind::Ident => "ident",
            TokenKind::Eof => "eof",
        }
    }
}

/// A token: its kind plus a view of the input it was read from.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Token<'a> {
    pub kind: TokenKind,
    /// The exact input bytes of the token (empty for [`TokenKind::Eof`]).
    pub text: &'a str,
    pub span: Span,
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let span = self.span.to_string();
        write!(f, "{span:<10} {:<10} {:?}", self.kind.name(), self.text)
    }
}
