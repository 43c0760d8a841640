//! Error types for evaluation.
//!
//! `EvalErrorKind` is the typed category; `EvalError` pairs it with the
//! span where evaluation stopped and, when one was open, the opener of the
//! enclosing form. Conversion to a `Diagnostic` lives in `diagnostics`.

use lisc_diagnostic::ErrorCode;
use lisc_ir::Span;
use lisc_lexer::{Form, ScanError, ScanErrorKind};
use thiserror::Error;

/// Result of evaluation.
pub type EvalResult<T = i64> = Result<T, EvalError>;

/// Typed error category.
///
/// The `Display` impl is the human-readable message used as the headline
/// of the rendered diagnostic.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EvalErrorKind {
    // Scanning
    #[error("invalid token: {reason}")]
    InvalidToken { reason: ScanErrorKind },

    // Structure
    #[error("unmatched `)`")]
    StackUnderflow,
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,
    #[error("`{form}` closed before it produced a value")]
    IncompleteForm { form: Form },
    #[error("unexpected operand after the body of `let`")]
    UnexpectedOperand,
    #[error("unexpected input after the complete expression")]
    TrailingInput,
    #[error("forms nested deeper than the limit of {limit}")]
    DepthLimitExceeded { limit: usize },

    // Access
    /// `similar` is the closest visible name, if any is close enough.
    #[error("undefined variable: {name}")]
    UndefinedVariable {
        name: String,
        similar: Option<String>,
    },

    // Arithmetic
    #[error("integer overflow in {operation}")]
    IntegerOverflow { operation: Form },
}

impl EvalErrorKind {
    /// Map this error kind to its corresponding `ErrorCode`.
    pub fn error_code(&self) -> ErrorCode {
        match self {
            Self::InvalidToken { reason } => match reason {
                ScanErrorKind::UnexpectedChar(_) | ScanErrorKind::MissingSeparator(_) => {
                    ErrorCode::E0001
                }
                ScanErrorKind::TruncatedForm | ScanErrorKind::UnknownForm(_) => ErrorCode::E0002,
                ScanErrorKind::MissingDigits | ScanErrorKind::LiteralOutOfRange => {
                    ErrorCode::E0003
                }
                ScanErrorKind::SourceTooLarge(_) => ErrorCode::E0004,
            },
            Self::UndefinedVariable { .. } => ErrorCode::E6001,
            Self::StackUnderflow => ErrorCode::E6002,
            Self::UnexpectedEndOfInput => ErrorCode::E6003,
            Self::IncompleteForm { .. } => ErrorCode::E6004,
            Self::IntegerOverflow { .. } => ErrorCode::E6005,
            Self::UnexpectedOperand => ErrorCode::E6006,
            Self::TrailingInput => ErrorCode::E6007,
            Self::DepthLimitExceeded { .. } => ErrorCode::E6008,
        }
    }
}

/// An evaluation failure.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct EvalError {
    pub kind: EvalErrorKind,
    /// Where evaluation stopped.
    pub span: Span,
    /// Opener of the innermost form that was open when evaluation stopped.
    pub enclosing: Option<Span>,
}

impl EvalError {
    #[cold]
    pub fn new(kind: EvalErrorKind, span: Span) -> Self {
        EvalError {
            kind,
            span,
            enclosing: None,
        }
    }

    /// Attach the opener span of the enclosing form.
    #[must_use]
    pub fn with_enclosing(mut self, enclosing: Option<Span>) -> Self {
        self.enclosing = enclosing;
        self
    }

    /// Stable error code for `lisc explain`.
    pub fn code(&self) -> ErrorCode {
        self.kind.error_code()
    }
}

impl From<ScanError> for EvalError {
    #[cold]
    fn from(err: ScanError) -> Self {
        EvalError::new(EvalErrorKind::InvalidToken { reason: err.kind }, err.span)
    }
}
