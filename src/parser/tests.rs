//! Unit tests for the parser.

use super::*;
use crate::ast::{ExprKind, InfixOp, StmtKind};
use crate::lexer::Lexer;
use crate::value::ValueType;

fn parse(input: &str) -> Result<(Program, ParseOutcome), ParseError> {
    let tokens = Lexer::new(input).tokenize().expect("lex failed");
    Parser::new(tokens).parse_instruction()
}

fn parse_ok(input: &str) -> Program {
    let (program, outcome) = parse(input).unwrap_or_else(|e| panic!("parse failed for {input:?}: {e}"));
    assert_eq!(outcome, ParseOutcome::Program);
    program
}

#[test]
fn blank_line_is_an_empty_program() {
    let program = parse_ok("");
    assert!(program.statements.is_empty());
}

#[test]
fn comment_yields_empty_program() {
    let program = parse_ok("; this is a comment");
    assert!(program.statements.is_empty());
}

#[test]
fn eoi_signals_termination() {
    let (program, outcome) = parse(";;").unwrap();
    assert!(program.statements.is_empty());
    assert_eq!(outcome, ParseOutcome::Terminate);
}

#[test]
fn exit_signals_termination() {
    let (program, outcome) = parse("exit").unwrap();
    assert_eq!(outcome, ParseOutcome::Terminate);
    assert_eq!(program.statements[0].kind, StmtKind::Exit);
}

#[test]
fn push_int32_literal() {
    let program = parse_ok("push int32(5)");
    match &program.statements[0].kind {
        StmtKind::Push(ty, expr) => {
            assert_eq!(*ty, ValueType::Integer);
            assert_eq!(expr.kind, ExprKind::Int32Lit(5));
        }
        other => panic!("expected Push, got {other:?}"),
    }
}

#[test]
fn push_with_trailing_comment() {
    let program = parse_ok("push int8(42) ; a comment");
    match &program.statements[0].kind {
        StmtKind::Push(ty, expr) => {
            assert_eq!(*ty, ValueType::Char);
            assert_eq!(expr.kind, ExprKind::Int8Lit(42));
        }
        other => panic!("expected Push, got {other:?}"),
    }
}

#[test]
fn assert_parses_like_push() {
    let program = parse_ok("assert int32(10)");
    match &program.statements[0].kind {
        StmtKind::Assert(ty, expr) => {
            assert_eq!(*ty, ValueType::Integer);
            assert_eq!(expr.kind, ExprKind::Int32Lit(10));
        }
        other => panic!("expected Assert, got {other:?}"),
    }
}

#[test]
fn nullary_instructions_parse_with_no_operand() {
    for (src, expected) in [
        ("pop", StmtKind::Pop),
        ("dump", StmtKind::Dump),
        ("clear", StmtKind::Clear),
        ("dup", StmtKind::Dup),
        ("swap", StmtKind::Swap),
        ("print", StmtKind::Print),
        ("add", StmtKind::Add),
        ("sub", StmtKind::Sub),
        ("mul", StmtKind::Mul),
        ("div", StmtKind::Div),
        ("mod", StmtKind::Mod),
    ] {
        let program = parse_ok(src);
        assert_eq!(program.statements[0].kind, expected, "parsing {src:?}");
    }
}

#[test]
fn nullary_instruction_with_trailing_token_is_an_error() {
    let err = parse("pop 5").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::ExtraTokens);
}

#[test]
fn trailing_eoi_after_a_nullary_instruction_terminates() {
    let (program, outcome) = parse("pop;;").unwrap();
    assert_eq!(program.statements[0].kind, StmtKind::Pop);
    assert_eq!(outcome, ParseOutcome::Terminate);
}

#[test]
fn trailing_eoi_after_push_terminates() {
    let (program, outcome) = parse("push int32(5);;").unwrap();
    match &program.statements[0].kind {
        StmtKind::Push(ty, expr) => {
            assert_eq!(*ty, ValueType::Integer);
            assert_eq!(expr.kind, ExprKind::Int32Lit(5));
        }
        other => panic!("expected Push, got {other:?}"),
    }
    assert_eq!(outcome, ParseOutcome::Terminate);
}

#[test]
fn trailing_eoi_after_a_bare_expression_statement_terminates() {
    let (_, outcome) = parse("21 + 21;;").unwrap();
    assert_eq!(outcome, ParseOutcome::Terminate);
}

#[test]
fn missing_closing_paren_is_unmatched_paren() {
    let err = parse("push int32(5").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::UnmatchedParen);
}

#[test]
fn out_of_range_literal_for_int8() {
    let err = parse("push int8(200)").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::LiteralOutOfRange);
}

#[test]
fn bigdecimal_is_an_unsupported_type() {
    let err = parse("push bigdecimal(5)").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::LiteralOutOfRange);
}

#[test]
fn infix_expression_inside_push() {
    let program = parse_ok("push int32(21 + 21)");
    match &program.statements[0].kind {
        StmtKind::Push(_, expr) => match &expr.kind {
            ExprKind::InfixExpr(lhs, InfixOp::Add, rhs) => {
                assert_eq!(lhs.kind, ExprKind::Int32Lit(21));
                assert_eq!(rhs.kind, ExprKind::Int32Lit(21));
            }
            other => panic!("expected InfixExpr, got {other:?}"),
        },
        other => panic!("expected Push, got {other:?}"),
    }
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    let program = parse_ok("push int32(2 + 3 * 4)");
    match &program.statements[0].kind {
        StmtKind::Push(_, expr) => match &expr.kind {
            ExprKind::InfixExpr(lhs, InfixOp::Add, rhs) => {
                assert_eq!(lhs.kind, ExprKind::Int32Lit(2));
                assert!(matches!(rhs.kind, ExprKind::InfixExpr(_, InfixOp::Mul, _)));
            }
            other => panic!("expected top-level Add, got {other:?}"),
        },
        other => panic!("expected Push, got {other:?}"),
    }
}

#[test]
fn addition_is_left_associative() {
    // 1 - 2 - 3 should parse as (1 - 2) - 3, not 1 - (2 - 3).
    let program = parse_ok("push int32(1 - 2 - 3)");
    match &program.statements[0].kind {
        StmtKind::Push(_, expr) => match &expr.kind {
            ExprKind::InfixExpr(lhs, InfixOp::Sub, rhs) => {
                assert!(matches!(lhs.kind, ExprKind::InfixExpr(_, InfixOp::Sub, _)));
                assert_eq!(rhs.kind, ExprKind::Int32Lit(3));
            }
            other => panic!("expected top-level Sub, got {other:?}"),
        },
        other => panic!("expected Push, got {other:?}"),
    }
}

#[test]
fn unary_minus_on_a_parenthesised_expr_parses_as_prefix() {
    let program = parse_ok("push int32(-(1 + 2))");
    match &program.statements[0].kind {
        StmtKind::Push(_, expr) => {
            assert!(matches!(
                expr.kind,
                ExprKind::PrefixExpr(crate::ast::PrefixOp::Neg, _)
            ));
        }
        other => panic!("expected Push, got {other:?}"),
    }
}

#[test]
fn unary_minus_directly_on_a_literal_decodes_as_a_negative_literal() {
    let program = parse_ok("push int32(-5)");
    match &program.statements[0].kind {
        StmtKind::Push(_, expr) => assert_eq!(expr.kind, ExprKind::Int32Lit(-5)),
        other => panic!("expected Push, got {other:?}"),
    }
}

#[test]
fn negative_literal_reaches_each_width_minimum() {
    let program = parse_ok("push int8(-128)");
    match &program.statements[0].kind {
        StmtKind::Push(ty, expr) => {
            assert_eq!(*ty, ValueType::Char);
            assert_eq!(expr.kind, ExprKind::Int8Lit(-128));
        }
        other => panic!("expected Push, got {other:?}"),
    }
    let program = parse_ok("push int16(-32768)");
    match &program.statements[0].kind {
        StmtKind::Push(ty, expr) => {
            assert_eq!(*ty, ValueType::Short);
            assert_eq!(expr.kind, ExprKind::Int16Lit(-32768));
        }
        other => panic!("expected Push, got {other:?}"),
    }
    let program = parse_ok("push int32(-2147483648)");
    match &program.statements[0].kind {
        StmtKind::Push(ty, expr) => {
            assert_eq!(*ty, ValueType::Integer);
            assert_eq!(expr.kind, ExprKind::Int32Lit(-2147483648));
        }
        other => panic!("expected Push, got {other:?}"),
    }
}

#[test]
fn negative_literal_one_past_the_minimum_is_still_out_of_range() {
    let err = parse("push int8(-129)").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::LiteralOutOfRange);
}

#[test]
fn grouped_expression_overrides_precedence() {
    let program = parse_ok("push int32((2 + 3) * 4)");
    match &program.statements[0].kind {
        StmtKind::Push(_, expr) => match &expr.kind {
            ExprKind::InfixExpr(lhs, InfixOp::Mul, rhs) => {
                assert!(matches!(lhs.kind, ExprKind::InfixExpr(_, InfixOp::Add, _)));
                assert_eq!(rhs.kind, ExprKind::Int32Lit(4));
            }
            other => panic!("expected top-level Mul, got {other:?}"),
        },
        other => panic!("expected Push, got {other:?}"),
    }
}

#[test]
fn bare_expression_statement_parses_outside_push() {
    let program = parse_ok("21 + 21");
    match &program.statements[0].kind {
        StmtKind::Expr(expr) => {
            assert!(matches!(expr.kind, ExprKind::InfixExpr(_, InfixOp::Add, _)));
        }
        other => panic!("expected Expr, got {other:?}"),
    }
}

#[test]
fn float_literal_inside_double_container() {
    let program = parse_ok("push double(3.14)");
    match &program.statements[0].kind {
        StmtKind::Push(ty, expr) => {
            assert_eq!(*ty, ValueType::Double);
            assert_eq!(expr.kind, ExprKind::Float64Lit(3.14));
        }
        other => panic!("expected Push, got {other:?}"),
    }
}

#[test]
fn unexpected_token_has_no_prefix_parser() {
    let err = parse("push int32(+)").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::UnexpectedToken);
}
