//! The `run` command: evaluate every expression line of a file.
//!
//! Each non-empty line is one expression. Lines starting with `;` are
//! comments. A failing line is reported and the run continues; the exit
//! status is a failure if any line failed.

use std::io::{self, Read, Write};

use lisc_diagnostic::emitter::{DiagnosticEmitter, TerminalEmitter};
use lisc_eval::Evaluator;

use super::{Console, ExitStatus};

/// Read `path` (or stdin for `-`) and run it.
pub fn run_file<O: Write, E: Write>(
    path: &str,
    evaluator: &Evaluator,
    console: &mut Console<O, E>,
) -> io::Result<ExitStatus> {
    match read_source(path) {
        Ok(source) => {
            let label = if path == "-" { "<stdin>" } else { path };
            run_source(label, &source, evaluator, console)
        }
        Err(msg) => {
            writeln!(console.err, "error: {msg}")?;
            Ok(ExitStatus::Failure)
        }
    }
}

/// Evaluate each expression line of `source`, printing one result per line.
///
/// `path` is only used in diagnostic headers.
#[tracing::instrument(level = "debug", skip(source, evaluator, console))]
pub fn run_source<O: Write, E: Write>(
    path: &str,
    source: &str,
    evaluator: &Evaluator,
    console: &mut Console<O, E>,
) -> io::Result<ExitStatus> {
    let mut emitter =
        TerminalEmitter::with_color_mode(&mut console.err, console.color, console.err_is_tty)
            .with_source(source)
            .with_file_path(path);

    let mut failures = 0usize;
    for (offset, line) in expression_lines(source) {
        match evaluator.evaluate(line) {
            Ok(value) => writeln!(console.out, "{value}")?,
            Err(err) => {
                failures = failures.saturating_add(1);
                let offset = u32::try_from(offset).unwrap_or(u32::MAX);
                emitter.emit(&err.to_diagnostic().shifted(offset));
            }
        }
    }

    if failures > 0 {
        emitter.emit_summary(failures);
    }
    emitter.flush();
    tracing::debug!(failures, "run finished");
    Ok(ExitStatus::from_failures(failures))
}

/// Lines holding an expression, with the byte offset where each starts.
///
/// Line terminators (`\n` or `\r\n`) are stripped; empty lines and `;`
/// comment lines are skipped.
fn expression_lines(source: &str) -> impl Iterator<Item = (usize, &str)> {
    source
        .split_inclusive('\n')
        .scan(0usize, |offset, raw| {
            let start = *offset;
            *offset = offset.saturating_add(raw.len());
            let line = raw.strip_suffix('\n').unwrap_or(raw);
            let line = line.strip_suffix('\r').unwrap_or(line);
            Some((start, line))
        })
        .filter(|(_, line)| !line.is_empty() && !line.starts_with(';'))
}

/// Read a source file, or stdin when `path` is `-`.
fn read_source(path: &str) -> Result<String, String> {
    if path == "-" {
        let mut source = String::new();
        return io::stdin()
            .read_to_string(&mut source)
            .map(|_| source)
            .map_err(|e| format!("cannot read stdin: {e}"));
    }

    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
        io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
        io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
        _ => format!("error reading '{path}': {e}"),
    })
}
