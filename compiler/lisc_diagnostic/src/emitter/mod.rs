//! Diagnostic Emitters
//!
//! Only the human-readable terminal format exists today. The trait keeps
//! the CLI independent of the concrete output format.

mod terminal;

pub use terminal::{ColorMode, TerminalEmitter};

use crate::Diagnostic;

/// Trait for emitting diagnostics in various formats.
pub trait DiagnosticEmitter {
    /// Emit a single diagnostic.
    fn emit(&mut self, diagnostic: &Diagnostic);

    /// Flush any buffered output.
    fn flush(&mut self);

    /// Emit a closing summary after `error_count` errors.
    fn emit_summary(&mut self, error_count: usize);
}
