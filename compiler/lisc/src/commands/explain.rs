//! The `explain` command: display documentation for error codes.

use std::io::{self, Write};

use lisc_diagnostic::{ErrorCode, ErrorDocs};

use super::{Console, ExitStatus};

/// Print the documentation for `code_str` (e.g. `E6001`).
pub fn explain_error<O: Write, E: Write>(
    code_str: &str,
    console: &mut Console<O, E>,
) -> io::Result<ExitStatus> {
    let Ok(code) = code_str.parse::<ErrorCode>() else {
        writeln!(console.err, "Unknown error code: {code_str}")?;
        writeln!(console.err)?;
        let known: Vec<&str> = ErrorDocs::all_codes().map(|code| code.as_str()).collect();
        writeln!(console.err, "Known codes: {}", known.join(", "))?;
        return Ok(ExitStatus::Usage);
    };

    match ErrorDocs::get(code) {
        Some(doc) => {
            writeln!(console.out, "{doc}")?;
            Ok(ExitStatus::Success)
        }
        None => {
            writeln!(console.err, "No documentation available for {code}")?;
            Ok(ExitStatus::Failure)
        }
    }
}
