//! The `lex` command: print the token stream of an expression.

use std::io::{self, Write};

use lisc_diagnostic::emitter::{DiagnosticEmitter, TerminalEmitter};
use lisc_eval::EvalError;
use lisc_lexer::Scanner;

use super::{Console, ExitStatus};

/// Print one line per token (`span kind text`), stopping at the first scan error.
pub fn lex_expr<O: Write, E: Write>(
    expr: &str,
    console: &mut Console<O, E>,
) -> io::Result<ExitStatus> {
    let failure = match Scanner::new(expr) {
        Ok(scanner) => {
            let mut failure = None;
            for token in scanner {
                match token {
                    Ok(token) => writeln!(console.out, "{token}")?,
                    Err(err) => failure = Some(err),
                }
            }
            failure
        }
        Err(err) => Some(err),
    };

    let Some(err) = failure else {
        return Ok(ExitStatus::Success);
    };
    let mut emitter =
        TerminalEmitter::with_color_mode(&mut console.err, console.color, console.err_is_tty)
            .with_source(expr)
            .with_file_path("<expr>");
    emitter.emit(&EvalError::from(err).to_diagnostic());
    emitter.flush();
    Ok(ExitStatus::Failure)
}
