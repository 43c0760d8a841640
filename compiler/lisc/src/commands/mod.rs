//! Command handlers for the `lisc` CLI.
//!
//! Each submodule implements one command. Shared plumbing (the output
//! [`Console`], [`ExitStatus`] and [`dispatch`]) lives here in the module
//! root.

use std::io::{self, IsTerminal, Write};

use lisc_diagnostic::emitter::ColorMode;
use thiserror::Error;

use crate::config::{Options, UsageError};

mod eval;
mod explain;
mod lex;
mod run;

pub use eval::eval_expr;
pub use explain::explain_error;
pub use lex::lex_expr;
pub use run::{run_file, run_source};

/// How a command finished.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Everything evaluated.
    Success,
    /// At least one expression failed; diagnostics were printed.
    Failure,
    /// The command line was malformed.
    Usage,
}

impl ExitStatus {
    /// Process exit code: 0, 1 or 2.
    pub fn code(self) -> u8 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::Failure => 1,
            ExitStatus::Usage => 2,
        }
    }

    fn from_failures(failures: usize) -> Self {
        if failures == 0 {
            ExitStatus::Success
        } else {
            ExitStatus::Failure
        }
    }
}

/// A command that could not run to completion.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Usage(#[from] UsageError),
    #[error("cannot write output: {0}")]
    Io(#[from] io::Error),
}

/// Output streams for a command: results go to `out`, diagnostics to `err`.
pub struct Console<O: Write, E: Write> {
    pub out: O,
    pub err: E,
    pub color: ColorMode,
    /// Whether `err` is a terminal, for `--color=auto`.
    pub err_is_tty: bool,
}

impl<O: Write, E: Write> Console<O, E> {
    pub fn new(out: O, err: E, color: ColorMode, err_is_tty: bool) -> Self {
        Console {
            out,
            err,
            color,
            err_is_tty,
        }
    }
}

impl Console<io::Stdout, io::Stderr> {
    /// Console over the process's stdout and stderr.
    pub fn stdio(color: ColorMode) -> Self {
        let err = io::stderr();
        let err_is_tty = err.is_terminal();
        Console::new(io::stdout(), err, color, err_is_tty)
    }
}

/// Run `command` with already-parsed options.
pub fn dispatch<O: Write, E: Write>(
    command: &str,
    options: &Options,
    console: &mut Console<O, E>,
) -> Result<ExitStatus, CliError> {
    tracing::debug!(command, "dispatch");
    let status = match command {
        "eval" => {
            let expr = options.single_positional("expression")?;
            eval_expr(expr, &options.evaluator(), console)?
        }
        "run" => {
            let path = options.single_positional("file path")?;
            run_file(path, &options.evaluator(), console)?
        }
        "lex" => lex_expr(options.single_positional("expression")?, console)?,
        "explain" => explain_error(options.single_positional("error code")?, console)?,
        other => return Err(UsageError::UnknownCommand(other.to_string()).into()),
    };
    console.out.flush()?;
    Ok(status)
}
