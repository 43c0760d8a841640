//! Evaluation error to diagnostic conversion.
//!
//! Maps each [`EvalErrorKind`] to its error code, a short label for the
//! primary span, a label for the enclosing form, and any notes or
//! suggestions that help fix the input.

use lisc_diagnostic::Diagnostic;
use lisc_lexer::{Form, ScanErrorKind};

use crate::errors::{EvalError, EvalErrorKind};

impl EvalErrorKind {
    /// Produce a concise label for the primary span.
    pub fn primary_label(&self) -> &'static str {
        match self {
            Self::InvalidToken { reason } => match reason {
                ScanErrorKind::UnexpectedChar(_) => "unexpected character",
                ScanErrorKind::MissingSeparator(_) => "expected a space or `)` before this",
                ScanErrorKind::MissingDigits => "expected a digit",
                ScanErrorKind::TruncatedForm | ScanErrorKind::UnknownForm(_) => "unknown form",
                ScanErrorKind::LiteralOutOfRange => "literal out of range",
                ScanErrorKind::SourceTooLarge(_) => "input too large",
            },
            Self::StackUnderflow => "no open form to close",
            Self::UnexpectedEndOfInput => "expected more input",
            Self::IncompleteForm { form: Form::Let } => "closed before the body",
            Self::IncompleteForm { .. } => "closed without operands",
            Self::UnexpectedOperand => "unexpected operand",
            Self::TrailingInput => "expected end of input",
            Self::DepthLimitExceeded { .. } => "nesting limit reached here",
            Self::UndefinedVariable { .. } => "not found in this scope",
            Self::IntegerOverflow { .. } => "overflow occurred here",
        }
    }

    /// Label for the opener of the enclosing form.
    fn enclosing_label(&self) -> &'static str {
        match self {
            Self::UnexpectedEndOfInput => "this form is never closed",
            Self::IncompleteForm { .. } => "form opened here",
            Self::UnexpectedOperand => "this `let` already has its body",
            _ => "in this form",
        }
    }

    fn note(&self) -> Option<&'static str> {
        match self {
            Self::InvalidToken {
                reason: ScanErrorKind::UnexpectedChar(' ') | ScanErrorKind::MissingSeparator(_),
            } => Some("tokens are separated by exactly one space"),
            Self::InvalidToken {
                reason: ScanErrorKind::UnexpectedChar(_),
            } => Some("expressions use digits, letters, parentheses and single spaces"),
            Self::IncompleteForm { form: Form::Let } => {
                Some("`let` needs a body expression after its bindings")
            }
            Self::IncompleteForm { .. } => Some("`add` and `mult` need at least one operand"),
            Self::UnexpectedOperand => {
                Some("after its bindings, `let` takes exactly one body expression")
            }
            Self::TrailingInput => Some("each input holds exactly one expression"),
            _ => None,
        }
    }

    /// Produce an actionable suggestion for fixable errors.
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::UndefinedVariable {
                similar: Some(similar),
                ..
            } => Some(format!("did you mean `{similar}`?")),
            Self::UndefinedVariable {
                name,
                similar: None,
            } => Some(format!("bind it with `(let {name} <value> ...)`")),
            Self::StackUnderflow => Some("remove the unmatched `)`".to_string()),
            Self::UnexpectedEndOfInput => Some("add the missing `)`".to_string()),
            Self::DepthLimitExceeded { .. } => Some(
                "flatten the expression: `add` and `mult` take any number of operands".to_string(),
            ),
            _ => None,
        }
    }
}

impl EvalError {
    /// Convert this error into a `Diagnostic`.
    ///
    /// Spans are byte offsets into the evaluated input.
    #[cold]
    pub fn to_diagnostic(&self) -> Diagnostic {
        let mut diag = Diagnostic::error(self.code())
            .with_message(self.kind.to_string())
            .with_label(self.span, self.kind.primary_label());

        if let Some(enclosing) = self.enclosing {
            diag = diag.with_secondary_label(enclosing, self.kind.enclosing_label());
        }
        if let Some(note) = self.kind.note() {
            diag = diag.with_note(note);
        }
        if let Some(suggestion) = self.kind.suggestion() {
            diag = diag.with_suggestion(suggestion);
        }

        diag
    }
}
