//! Lisc CLI
//!
//! Evaluates `add` / `mult` / `let` expressions.

use std::process::ExitCode;

use lisc::commands::{dispatch, CliError, Console, ExitStatus};
use lisc::config::{Options, MAX_DEPTH_ENV};
use lisc::tracing_setup::init_tracing;

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();
    let Some(command) = args.get(1) else {
        print_usage();
        return exit(ExitStatus::Usage);
    };

    match command.as_str() {
        "help" | "--help" | "-h" => {
            print_usage();
            return exit(ExitStatus::Success);
        }
        "version" | "--version" | "-V" => {
            println!("lisc {}", env!("CARGO_PKG_VERSION"));
            return exit(ExitStatus::Success);
        }
        _ => {}
    }

    let env_max_depth = std::env::var(MAX_DEPTH_ENV).ok();
    let options = match Options::parse(&args[2..], env_max_depth.as_deref()) {
        Ok(options) => options,
        Err(err) => return usage_error(command, &CliError::Usage(err)),
    };

    let mut console = Console::stdio(options.color);
    match dispatch(command, &options, &mut console) {
        Ok(status) => exit(status),
        Err(err @ CliError::Usage(_)) => usage_error(command, &err),
        Err(err @ CliError::Io(_)) => {
            eprintln!("error: {err}");
            exit(ExitStatus::Failure)
        }
    }
}

fn exit(status: ExitStatus) -> ExitCode {
    ExitCode::from(status.code())
}

fn usage_error(command: &str, err: &CliError) -> ExitCode {
    eprintln!("error: {err}");
    eprintln!();
    match command {
        "eval" => eprintln!("Usage: lisc eval [options] <expression>"),
        "run" => eprintln!("Usage: lisc run [options] <file | ->"),
        "lex" => eprintln!("Usage: lisc lex <expression>"),
        "explain" => eprintln!("Usage: lisc explain <ERROR_CODE>"),
        _ => eprintln!("Run `lisc help` for usage."),
    }
    exit(ExitStatus::Usage)
}

fn print_usage() {
    println!("lisc - evaluator for add / mult / let expressions");
    println!();
    println!("Usage: lisc <command> [options]");
    println!();
    println!("Commands:");
    println!("  eval <expression>    Evaluate one expression and print its value");
    println!("  run <file | ->       Evaluate every line of a file (or stdin)");
    println!("  lex <expression>     Print the token stream of an expression");
    println!("  explain <code>       Explain an error code (e.g., E6001)");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Options:");
    println!("  --define, -D name=value   Define a global binding (repeatable)");
    println!("  --max-depth <n>           Limit nesting depth (env: {MAX_DEPTH_ENV})");
    println!("  --color <when>            Diagnostic colors: auto, always, never");
    println!();
    println!("In `run` input, empty lines and lines starting with `;` are skipped.");
    println!();
    println!("Environment:");
    println!("  RUST_LOG=lisc_eval=trace  Trace evaluation to stderr");
    println!("  LISC_LOG_TREE=1           Render traces as an indented tree");
    println!();
    println!("Examples:");
    println!("  lisc eval \"(let x 2 (mult x (add x 1)))\"");
    println!("  lisc eval --define x=10 \"(add x 1)\"");
    println!("  lisc run exprs.lisc");
    println!("  lisc explain E6001");
}
