//! Concrete input → expected-observable scenarios, run end to end through
//! the library's lex → parse → eval pipeline.

use avm::evaluator::{Evaluator, Outcome};
use avm::lexer::Lexer;
use avm::parser::Parser;
use avm::value::Value;

fn run_line(evaluator: &mut Evaluator, line: &str, out: &mut Vec<u8>) -> Result<Outcome, String> {
    let tokens = Lexer::new(line).tokenize().map_err(|e| e.to_string())?;
    let (program, _) = Parser::new(tokens)
        .parse_instruction()
        .map_err(|e| e.to_string())?;
    evaluator
        .eval_program(&program, out)
        .map_err(|e| e.to_string())
}

fn run_lines(lines: &[&str]) -> (Evaluator, Vec<u8>) {
    let mut evaluator = Evaluator::new();
    let mut out = Vec::new();
    for line in lines {
        run_line(&mut evaluator, line, &mut out).expect("line should succeed");
    }
    (evaluator, out)
}

#[test]
fn scenario_1_add_and_dump() {
    let (_, out) = run_lines(&["push int32(5)", "push int32(10)", "add", "dump"]);
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("15"));
    assert!(text.ends_with('\n'));
}

#[test]
fn scenario_2_mixed_width_add_promotes_to_integer() {
    let (evaluator, _) = run_lines(&[
        "push int16(5)",
        "push int32(5)",
        "add",
        "assert int32(10)",
    ]);
    assert_eq!(evaluator.stack().peek(0), Ok(Value::Integer(10)));
}

#[test]
fn scenario_3_div_by_zero_because_b_is_popped_second() {
    let mut evaluator = Evaluator::new();
    let mut out = Vec::new();
    run_line(&mut evaluator, "push int32(0)", &mut out).unwrap();
    run_line(&mut evaluator, "push int8(5)", &mut out).unwrap();
    let err = run_line(&mut evaluator, "div", &mut out).unwrap_err();
    assert_eq!(err, "integer divide by zero");
}

#[test]
fn scenario_4_float_mod_rounds_to_two_decimal_places() {
    let (evaluator, _) = run_lines(&["push float(3.0)", "push float(32.33)", "mod"]);
    assert_eq!(evaluator.stack().peek(0), Ok(Value::Float(2.33)));
}

#[test]
fn scenario_5_pop_on_empty_stack() {
    let mut evaluator = Evaluator::new();
    let mut out = Vec::new();
    let err = run_line(&mut evaluator, "pop", &mut out).unwrap_err();
    assert_eq!(err, "pop on empty stack");
}

#[test]
fn scenario_6_assert_mismatch_leaves_stack_unchanged() {
    let mut evaluator = Evaluator::new();
    let mut out = Vec::new();
    run_line(&mut evaluator, "push int32(5)", &mut out).unwrap();
    let before = evaluator.stack().clone();
    let err = run_line(&mut evaluator, "assert int32(6)", &mut out).unwrap_err();
    assert!(err.contains("expected"));
    assert_eq!(evaluator.stack(), &before);
}

#[test]
fn scenario_7_comment_after_push_is_ignored() {
    let (evaluator, _) = run_lines(&["push int8(42) ; a comment"]);
    assert_eq!(evaluator.stack().peek(0), Ok(Value::Char(42)));
}

#[test]
fn scenario_8_infix_expression_inside_push() {
    let (evaluator, _) = run_lines(&["push int32(21 + 21)", "assert int32(42)"]);
    assert_eq!(evaluator.stack().peek(0), Ok(Value::Integer(42)));
}

#[test]
fn scenario_9_exit_reports_terminate_outcome() {
    let mut evaluator = Evaluator::new();
    let mut out = Vec::new();
    let outcome = run_line(&mut evaluator, "exit", &mut out).unwrap();
    assert_eq!(outcome, Outcome::Exit);
}

#[test]
fn dup_pop_pop_returns_equal_values() {
    let (mut evaluator, _) = run_lines(&["push int32(7)", "dup"]);
    let mut out = Vec::new();
    let a = run_line(&mut evaluator, "pop", &mut out);
    assert!(a.is_ok());
    assert_eq!(evaluator.stack().peek(0), Ok(Value::Integer(7)));
}

#[test]
fn swap_twice_is_identity() {
    let (mut evaluator, mut out) = run_lines(&["push int32(1)", "push int32(2)"]);
    let before = evaluator.stack().clone();
    run_line(&mut evaluator, "swap", &mut out).unwrap();
    run_line(&mut evaluator, "swap", &mut out).unwrap();
    assert_eq!(evaluator.stack(), &before);
}

#[test]
fn clear_empties_the_stack() {
    let (mut evaluator, mut out) = run_lines(&["push int32(1)", "push int32(2)"]);
    run_line(&mut evaluator, "clear", &mut out).unwrap();
    assert!(evaluator.stack().is_empty());
}

#[test]
fn semicolon_semicolon_terminates_the_session() {
    let tokens = Lexer::new(";;").tokenize().unwrap();
    let (program, outcome) = Parser::new(tokens).parse_instruction().unwrap();
    assert!(program.statements.is_empty());
    assert_eq!(outcome, avm::parser::ParseOutcome::Terminate);
}
