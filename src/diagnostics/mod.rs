//! Renders lex/parse/eval errors as source-annotated reports.
//!
//! Lex and parse errors carry a [`crate::token::Span`] and get an
//! [`ariadne::Report`] pointing at the offending byte range within the
//! line. Evaluation errors are mostly spanless — they're about stack
//! *state*, not a source position — and print as a plain `error: ...`
//! line instead.

use std::ops::Range;

use ariadne::{Color, Config, IndexType, Label, Report, ReportKind, Source};

use crate::evaluator::EvalError;
use crate::lexer::LexError;
use crate::parser::ParseError;

fn print_range_report(
    filename: &str,
    source: &str,
    span: Range<usize>,
    message: &str,
) -> std::io::Result<()> {
    Report::build(ReportKind::Error, (filename, span.clone()))
        .with_config(Config::default().with_index_type(IndexType::Byte))
        .with_message(message)
        .with_label(
            Label::new((filename, span))
                .with_message(message)
                .with_color(Color::Red),
        )
        .finish()
        .eprint((filename, Source::from(source)))
}

/// Reports a lex error against the line it was scanned from. Falls back
/// to a plain `error:`-prefixed line if the report itself fails to render
/// (e.g. stderr is not a terminal ariadne can colorize).
pub fn report_lex_error(filename: &str, source: &str, error: &LexError) {
    let span = error.span.start..error.span.end;
    if print_range_report(filename, source, span, &error.message).is_err() {
        eprintln!("error: {error}");
    }
}

/// Reports a parse error against the line it was parsed from.
pub fn report_parse_error(filename: &str, source: &str, error: &ParseError) {
    let span = error.span.start..error.span.end;
    if print_range_report(filename, source, span, &error.message).is_err() {
        eprintln!("error: {error}");
    }
}

/// Reports an evaluation error. A handful (type errors, identifier-in-infix)
/// carry a span and get the same ariadne treatment; the rest — stack
/// underflow, divide by zero, assert mismatch — are about VM state rather
/// than a point in the source, and print as `error: <message>`.
pub fn report_eval_error(filename: &str, source: &str, error: &EvalError) {
    match error.span() {
        Some(span) => {
            let range = span.start..span.end;
            if print_range_report(filename, source, range, &error.to_string()).is_err() {
                eprintln!("error: {error}");
            }
        }
        None => eprintln!("error: {error}"),
    }
}
