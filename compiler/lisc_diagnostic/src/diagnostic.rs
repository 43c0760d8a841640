//! Core diagnostic types for structured error reporting.
//!
//! Defines [`Diagnostic`] and [`Label`], the building blocks the scanner
//! and evaluator use to report errors. Every diagnostic is an error: the
//! evaluator aborts on the first problem and has nothing to warn about.

use lisc_ir::Span;
use std::fmt;

use crate::ErrorCode;

/// An underlined stretch of the expression and what it means.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Label {
    /// Bytes of the evaluated expression to underline.
    pub span: Span,
    pub message: String,
    /// `true` for the token that failed, `false` for the enclosing form.
    pub is_primary: bool,
}

impl Label {
    /// Label the token where evaluation stopped.
    pub fn primary(span: Span, message: impl Into<String>) -> Self {
        Label {
            span,
            message: message.into(),
            is_primary: true,
        }
    }

    /// Label the form that encloses the failure, usually by its opener.
    pub fn secondary(span: Span, message: impl Into<String>) -> Self {
        Label {
            span,
            message: message.into(),
            is_primary: false,
        }
    }
}

/// Why an expression failed to evaluate, ready to render.
///
/// Built from the single error that stopped evaluation; see
/// `EvalError::to_diagnostic` in `lisc_eval`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "an evaluation failure is lost unless this is emitted"]
pub struct Diagnostic {
    /// Looked up by `lisc explain`.
    pub code: ErrorCode,
    /// One line, shown after `error[CODE]:`.
    pub message: String,
    /// At most one primary label, plus the enclosing form if there is one.
    pub labels: Vec<Label>,
    /// Rendered as `= note:` lines.
    pub notes: Vec<String>,
    /// Rendered as `= help:` lines.
    pub suggestions: Vec<String>,
}

impl Diagnostic {
    /// Start an empty diagnostic for `code`.
    #[cold]
    pub fn error(code: ErrorCode) -> Self {
        Diagnostic {
            code,
            message: String::new(),
            labels: Vec::new(),
            notes: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    /// Set the main message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Underline the token that failed.
    pub fn with_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::primary(span, message));
        self
    }

    /// Underline the enclosing form.
    pub fn with_secondary_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::secondary(span, message));
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    /// Span of the first primary label.
    pub fn primary_span(&self) -> Option<Span> {
        self.labels.iter().find(|l| l.is_primary).map(|l| l.span)
    }

    /// Move every label `offset` bytes to the right.
    ///
    /// Used when a diagnostic produced for one line of a file is rendered
    /// against the whole file.
    pub fn shifted(mut self, offset: u32) -> Self {
        for label in &mut self.labels {
            label.span = Span::new(
                label.span.start.saturating_add(offset),
                label.span.end.saturating_add(offset),
            );
        }
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error [{}]: {}", self.code, self.message)?;
        for label in &self.labels {
            write!(f, "\n  {:?}: {}", label.span, label.message)?;
        }
        for note in &self.notes {
            write!(f, "\n  = note: {note}")?;
        }
        for suggestion in &self.suggestions {
            write!(f, "\n  = help: {suggestion}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
