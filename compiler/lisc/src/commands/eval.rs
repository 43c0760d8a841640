//! The `eval` command: evaluate one expression given on the command line.

use std::io::{self, Write};

use lisc_diagnostic::emitter::{DiagnosticEmitter, TerminalEmitter};
use lisc_eval::Evaluator;

use super::{Console, ExitStatus};

/// Evaluate `expr` and print its value, or render the error against it.
pub fn eval_expr<O: Write, E: Write>(
    expr: &str,
    evaluator: &Evaluator,
    console: &mut Console<O, E>,
) -> io::Result<ExitStatus> {
    match evaluator.evaluate(expr) {
        Ok(value) => {
            writeln!(console.out, "{value}")?;
            Ok(ExitStatus::Success)
        }
        Err(err) => {
            let mut emitter =
                TerminalEmitter::with_color_mode(&mut console.err, console.color, console.err_is_tty)
                    .with_source(expr)
                    .with_file_path("<expr>");
            emitter.emit(&err.to_diagnostic());
            emitter.flush();
            Ok(ExitStatus::Failure)
        }
    }
}

#[cfg(test)]
mod tests;
