//! Diagnostic system for rich error reporting.
//!
//! Every failure the evaluator can report becomes a [`Diagnostic`]:
//! - an error code for searchability (`lisc explain E6001`)
//! - a clear message (what went wrong)
//! - a primary span (where it went wrong)
//! - secondary labels and notes (why it's wrong)
//! - suggestions (how to fix)

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod errors;
pub mod span_utils;

pub use diagnostic::{Diagnostic, Label};
pub use error_code::ErrorCode;
pub use errors::ErrorDocs;
