//! Command-line options shared by every command.
//!
//! Hand-rolled parsing: flags may appear anywhere after the command name,
//! in `--flag value` or `--flag=value` form. `--` ends flag parsing. An
//! argument that starts with `-` followed by a digit is a positional (a
//! negative literal), and a lone `-` is a positional (stdin).

use std::num::ParseIntError;

use lisc_diagnostic::emitter::ColorMode;
use lisc_eval::Evaluator;
use thiserror::Error;

/// Environment variable consulted when `--max-depth` is not given.
pub const MAX_DEPTH_ENV: &str = "LISC_MAX_DEPTH";

/// A malformed command line. Reported with exit status 2.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum UsageError {
    #[error("unknown command `{0}`")]
    UnknownCommand(String),
    #[error("unknown option `{0}`")]
    UnknownOption(String),
    #[error("option `{0}` requires a value")]
    MissingValue(&'static str),
    #[error("invalid definition `{0}`; expected `name=value`")]
    InvalidDefine(String),
    #[error("invalid global name `{0}`; names are a letter followed by letters or digits")]
    InvalidName(String),
    #[error("invalid value `{value}` for {source_name}: {reason}")]
    InvalidNumber {
        source_name: &'static str,
        value: String,
        reason: ParseIntError,
    },
    #[error("{0}")]
    InvalidColor(String),
    #[error("missing {0}")]
    MissingArgument(&'static str),
    #[error("unexpected argument `{0}`")]
    UnexpectedArgument(String),
}

/// Parsed options plus the remaining positional arguments.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Options {
    /// `--define name=value`, in command-line order.
    pub globals: Vec<(String, i64)>,
    /// `--max-depth N`, falling back to `LISC_MAX_DEPTH`.
    pub max_depth: Option<usize>,
    /// `--color=auto|always|never`.
    pub color: ColorMode,
    pub positional: Vec<String>,
}

impl Options {
    /// Parse the arguments that follow the command name.
    ///
    /// `env_max_depth` is the value of [`MAX_DEPTH_ENV`], if set.
    pub fn parse(args: &[String], env_max_depth: Option<&str>) -> Result<Self, UsageError> {
        let mut options = Options::default();
        let mut args = args.iter();
        let mut flags_done = false;

        while let Some(arg) = args.next() {
            if flags_done || !looks_like_flag(arg) {
                options.positional.push(arg.clone());
                continue;
            }
            if arg == "--" {
                flags_done = true;
                continue;
            }

            let (flag, inline) = match arg.split_once('=') {
                Some((flag, value)) => (flag, Some(value.to_string())),
                None => (arg.as_str(), None),
            };
            let mut value = |name: &'static str| {
                inline
                    .clone()
                    .or_else(|| args.next().cloned())
                    .ok_or(UsageError::MissingValue(name))
            };

            match flag {
                "--define" | "-D" => {
                    let definition = value("--define")?;
                    options.globals.push(parse_define(&definition)?);
                }
                "--max-depth" => {
                    let depth = value("--max-depth")?;
                    options.max_depth = Some(parse_depth("--max-depth", &depth)?);
                }
                "--color" => {
                    options.color = value("--color")?
                        .parse()
                        .map_err(UsageError::InvalidColor)?;
                }
                _ => return Err(UsageError::UnknownOption(arg.clone())),
            }
        }

        if options.max_depth.is_none() {
            if let Some(depth) = env_max_depth {
                options.max_depth = Some(parse_depth(MAX_DEPTH_ENV, depth)?);
            }
        }

        Ok(options)
    }

    /// Build the evaluator these options describe.
    pub fn evaluator(&self) -> Evaluator {
        let mut builder = Evaluator::builder();
        for (name, value) in &self.globals {
            builder = builder.global(name.clone(), *value);
        }
        if let Some(depth) = self.max_depth {
            builder = builder.max_depth(depth);
        }
        builder.build()
    }

    /// The one positional argument a command takes.
    pub fn single_positional(&self, what: &'static str) -> Result<&str, UsageError> {
        match self.positional.as_slice() {
            [] => Err(UsageError::MissingArgument(what)),
            [only] => Ok(only.as_str()),
            [_, extra, ..] => Err(UsageError::UnexpectedArgument(extra.clone())),
        }
    }
}

fn looks_like_flag(arg: &str) -> bool {
    let bytes = arg.as_bytes();
    match bytes {
        [b'-', second, ..] => !second.is_ascii_digit(),
        _ => false,
    }
}

fn parse_define(definition: &str) -> Result<(String, i64), UsageError> {
    let Some((name, value)) = definition.split_once('=') else {
        return Err(UsageError::InvalidDefine(definition.to_string()));
    };
    if !is_identifier(name) {
        return Err(UsageError::InvalidName(name.to_string()));
    }
    let value = value.parse().map_err(|reason| UsageError::InvalidNumber {
        source_name: "--define",
        value: value.to_string(),
        reason,
    })?;
    Ok((name.to_string(), value))
}

fn parse_depth(source_name: &'static str, value: &str) -> Result<usize, UsageError> {
    value.parse().map_err(|reason| UsageError::InvalidNumber {
        source_name,
        value: value.to_string(),
        reason,
    })
}

/// Same shape the scanner accepts as an identifier.
fn is_identifier(name: &str) -> bool {
    let mut bytes = name.bytes();
    bytes.next().is_some_and(|b| b.is_ascii_alphabetic()) && bytes.all(|b| b.is_ascii_alphanumeric())
}

#[cfg(test)]
mod tests;
