//! The interactive AVM shell.
//!
//! Reads one line at a time from stdin via `rustyline`, echoing the stack
//! after every successful instruction. History is persisted
//! to `~/.avm_history`, one entry per line, loaded on start and saved on
//! exit — the same path and format as the original shell
//! (`cmd/avm/shell/shell.go`'s `historyFilename`).

use std::io;
use std::path::PathBuf;

use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};

use avm::diagnostics;
use avm::evaluator::{Evaluator, Outcome};
use avm::lexer::Lexer;
use avm::parser::{ParseOutcome, Parser};

const PROMPT: &str = "avm> ";
const HISTORY_FILENAME: &str = ".avm_history";

/// Instruction keywords offered by tab completion, mirroring the original
/// shell's registered command table (`cmd/avm/shell/command.go`).
const INSTRUCTIONS: &[&str] = &[
    "push", "pop", "dump", "clear", "dup", "swap", "assert", "add", "sub", "mul", "div", "mod",
    "print", "exit",
];

/// `(usage, help)` pairs for `.help`, grounded on `getAllOperands`/
/// `registerCommands` in the original `command.go`.
const HELP_TEXT: &[(&str, &str)] = &[
    ("push value", "Stack the value at the top."),
    ("pop", "Unstack the value at the top of the stack."),
    (
        "add",
        "Unstack the first two values, add them, and push the result.",
    ),
    (
        "sub",
        "Unstack the first two values, subtract them, and push the result.",
    ),
    (
        "mul",
        "Unstack the first two values, multiply them, and push the result.",
    ),
    (
        "div",
        "Unstack the first two values, divide them, and push the result.",
    ),
    (
        "mod",
        "Unstack the first two values, compute their modulo, and push the result.",
    ),
    (
        "assert value",
        "Verify that the top of the stack equals the value passed.",
    ),
    ("dump", "Print every value on the stack, top to bottom."),
    ("print", "Print the top of the stack as an ASCII character."),
    ("dup", "Duplicate the value at the top of the stack."),
    ("swap", "Exchange the top two values on the stack."),
    ("clear", "Remove every value from the stack."),
    ("exit", "End the session."),
];

/// A `rustyline` helper offering prefix completion over the instruction
/// keywords. Highlighting, hinting, and validation all use their no-op
/// defaults — AVM has no multi-line statements to validate mid-entry.
struct AvmHelper;

impl Completer for AvmHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let word_start = line[..pos]
            .rfind(|c: char| !c.is_alphanumeric())
            .map(|i| i + 1)
            .unwrap_or(0);
        let word = &line[word_start..pos];

        let candidates = INSTRUCTIONS
            .iter()
            .filter(|kw| kw.starts_with(word))
            .map(|kw| Pair {
                display: (*kw).to_string(),
                replacement: (*kw).to_string(),
            })
            .collect();
        Ok((word_start, candidates))
    }
}

impl Hinter for AvmHelper {
    type Hint = String;
}

impl Highlighter for AvmHelper {}

impl Validator for AvmHelper {}

impl Helper for AvmHelper {}

fn history_path() -> Option<PathBuf> {
    std::env::var_os("HOME").map(|home| PathBuf::from(home).join(HISTORY_FILENAME))
}

fn print_help() {
    for (usage, help) in HELP_TEXT {
        println!("{usage:<15}{help}");
    }
}

/// What happened after one line: keep reading, or end the session.
enum LineOutcome {
    Continue,
    Terminate,
}

/// Runs the interactive shell until `exit`, `;;`, end-of-input, or
/// Ctrl-C/Ctrl-D.
pub fn run() -> io::Result<()> {
    println!("Abstract VM");
    println!("Enter \".help\" for usage hints.");

    let mut rl: Editor<AvmHelper, DefaultHistory> =
        Editor::new().map_err(|e| io::Error::other(e.to_string()))?;
    rl.set_helper(Some(AvmHelper));

    let history_path = history_path();
    if let Some(path) = &history_path {
        let _ = rl.load_history(path);
    }

    let mut evaluator = Evaluator::new();
    let mut out = io::stdout();

    loop {
        match rl.readline(PROMPT) {
            Ok(line) => {
                let _ = rl.add_history_entry(line.as_str());
                let trimmed = line.trim();

                if trimmed == ".help" {
                    print_help();
                    continue;
                }

                match run_line(&mut evaluator, trimmed, &mut out) {
                    LineOutcome::Continue => {}
                    LineOutcome::Terminate => break,
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => return Err(io::Error::other(err.to_string())),
        }
    }

    if let Some(path) = &history_path {
        let _ = rl.save_history(path);
    }

    Ok(())
}

/// Parses and evaluates one line, echoing the stack after a successful
/// instruction, echoing the interactive-mode "implicitly dumps" rule.
/// A blank line or comment has no instruction to report on and is a no-op.
fn run_line(evaluator: &mut Evaluator, line: &str, out: &mut impl io::Write) -> LineOutcome {
    let tokens = match Lexer::new(line).tokenize() {
        Ok(tokens) => tokens,
        Err(err) => {
            diagnostics::report_lex_error("<stdin>", line, &err);
            return LineOutcome::Continue;
        }
    };

    let (program, outcome) = match Parser::new(tokens).parse_instruction() {
        Ok(result) => result,
        Err(err) => {
            diagnostics::report_parse_error("<stdin>", line, &err);
            return LineOutcome::Continue;
        }
    };

    let had_statements = !program.statements.is_empty();

    match evaluator.eval_program(&program, out) {
        Ok(Outcome::Continue) => {
            if had_statements {
                let _ = evaluator.stack().dump(out);
            }
        }
        Ok(Outcome::Exit) => return LineOutcome::Terminate,
        Err(err) => diagnostics::report_eval_error("<stdin>", line, &err),
    }

    if outcome == ParseOutcome::Terminate {
        return LineOutcome::Terminate;
    }

    LineOutcome::Continue
}
