//! The Abstract Stack Virtual Machine (AVM) command-line entry point.
//!
//! Two modes, chosen by argument count:
//!
//! - no arguments: start the interactive shell (see [`shell`])
//! - one argument, a `.avm` file: execute it line by line and exit
//! - more than one argument: a usage error

mod shell;

use std::fs;
use std::io::{self, Write};

use clap::Parser as ClapParser;

use avm::diagnostics;
use avm::evaluator::{Evaluator, Outcome};
use avm::lexer::Lexer;
use avm::parser::{ParseOutcome, Parser};

/// `avm [filename.avm]` — collects every positional argument so the CLI
/// can report its own usage message rather than clap's
/// generic "unexpected argument" error.
#[derive(ClapParser)]
#[command(
    name = "avm",
    about = "Abstract Stack Virtual Machine",
    long_about = None
)]
struct Cli {
    /// The `.avm` file to execute. Omit to start the interactive shell.
    files: Vec<String>,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if cli.files.len() > 1 {
        eprintln!(
            "too few arguments, got {} expected 1\nusage: avm [filename.avm]",
            cli.files.len()
        );
        std::process::exit(1);
    }

    let Some(filename) = cli.files.first() else {
        if let Err(err) = shell::run() {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
        return;
    };

    if !filename.ends_with(".avm") {
        let ext = filename.rsplit('.').next().unwrap_or("");
        eprintln!("bad file format, got \".{ext}\" format but expected .avm format");
        std::process::exit(1);
    }

    match run_file(filename) {
        Ok(true) => std::process::exit(0),
        Ok(false) => std::process::exit(1),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}

/// Executes a `.avm` file line by line, returning whether the run
/// succeeded (distinct from an I/O failure opening the file).
///
/// A parse error on a line is reported to stderr and
/// reading continues with the next line; an evaluation error is reported
/// and aborts the run. `exit`/`;;` end the run immediately without
/// draining. The stack is dumped once at the end of a successful run.
fn run_file(filename: &str) -> io::Result<bool> {
    let source = fs::read_to_string(filename)?;
    let mut evaluator = Evaluator::new();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for line in source.lines() {
        let line = line.trim();
        let tokens = match Lexer::new(line).tokenize() {
            Ok(tokens) => tokens,
            Err(err) => {
                diagnostics::report_lex_error(filename, line, &err);
                continue;
            }
        };

        let (program, outcome) = match Parser::new(tokens).parse_instruction() {
            Ok(result) => result,
            Err(err) => {
                diagnostics::report_parse_error(filename, line, &err);
                continue;
            }
        };

        match evaluator.eval_program(&program, &mut out) {
            Ok(Outcome::Continue) => {}
            Ok(Outcome::Exit) => return Ok(true),
            Err(err) => {
                diagnostics::report_eval_error(filename, line, &err);
                return Ok(false);
            }
        }

        if outcome == ParseOutcome::Terminate {
            return Ok(true);
        }
    }

    evaluator.stack().dump(&mut out)?;
    Ok(true)
}
