//! Evaluates `push`/`assert` operand expressions to a [`Value`].
//!
//! Literal leaves already carry their container's declared type — the
//! parser's ranged decode baked that in — so this module only has to
//! resolve operators. A bare infix expression only supports integer
//! operands; `Float`/`Double` inside an infix is a `TypeError`, and a bare
//! `Identifier` always is too, since AVM has no variables.

use crate::ast::{Expr, ExprKind, InfixOp, PrefixOp};
use crate::token::Span;
use crate::value::{Value, ValueType, bigger};

use super::error::EvalError;

/// Evaluates an expression tree to a value, independent of the stack.
pub fn eval_expr(expr: &Expr) -> Result<Value, EvalError> {
    match &expr.kind {
        ExprKind::Int8Lit(v) => Ok(Value::Char(*v)),
        ExprKind::Int16Lit(v) => Ok(Value::Short(*v)),
        ExprKind::Int32Lit(v) => Ok(Value::Integer(*v)),
        ExprKind::Float32Lit(v) => Ok(Value::Float(*v)),
        ExprKind::Float64Lit(v) => Ok(Value::Double(*v)),
        ExprKind::PrefixExpr(PrefixOp::Neg, inner) => Ok(negate(eval_expr(inner)?)),
        ExprKind::InfixExpr(lhs, op, rhs) => {
            let left = eval_expr(lhs)?;
            let right = eval_expr(rhs)?;
            eval_integer_infix(left, *op, right, expr.span)
        }
        ExprKind::Identifier(name) => Err(EvalError::unknown_identifier(name, expr.span)),
    }
}

/// Wraps on overflow, same as the binary integer ops: negating `Char::MIN`
/// yields `Char::MIN` rather than failing.
fn negate(v: Value) -> Value {
    match v {
        Value::Char(n) => Value::Char(n.wrapping_neg()),
        Value::Short(n) => Value::Short(n.wrapping_neg()),
        Value::Integer(n) => Value::Integer(n.wrapping_neg()),
        Value::Float(n) => Value::Float(-n),
        Value::Double(n) => Value::Double(-n),
    }
}

fn is_integer(t: ValueType) -> bool {
    matches!(t, ValueType::Char | ValueType::Short | ValueType::Integer)
}

fn eval_integer_infix(left: Value, op: InfixOp, right: Value, span: Span) -> Result<Value, EvalError> {
    let (lt, rt) = (left.value_type(), right.value_type());
    if !is_integer(lt) || !is_integer(rt) {
        let got = if !is_integer(lt) { lt } else { rt };
        return Err(EvalError::type_error(ValueType::Integer, got, Some(span)));
    }

    match bigger(lt, rt) {
        ValueType::Char => {
            let a = left.to_char().expect("promoted from an integer variant");
            let b = right.to_char().expect("promoted from an integer variant");
            int_op_i8(op, a, b).map(Value::Char)
        }
        ValueType::Short => {
            let a = left.to_short().expect("promoted from an integer variant");
            let b = right.to_short().expect("promoted from an integer variant");
            int_op_i16(op, a, b).map(Value::Short)
        }
        ValueType::Integer => {
            let a = left.to_integer().expect("promoted from an integer variant");
            let b = right.to_integer().expect("promoted from an integer variant");
            int_op_i32(op, a, b).map(Value::Integer)
        }
        ValueType::Float | ValueType::Double => {
            unreachable!("is_integer already rejected float/double operands")
        }
    }
}

/// Wraps on overflow rather than erroring, matching `eval_binary`'s integer
/// arithmetic and the original source's reliance on Go's deterministic
/// two's-complement wraparound.
fn int_op_i8(op: InfixOp, a: i8, b: i8) -> Result<i8, EvalError> {
    match op {
        InfixOp::Add => Ok(a.wrapping_add(b)),
        InfixOp::Sub => Ok(a.wrapping_sub(b)),
        InfixOp::Mul => Ok(a.wrapping_mul(b)),
        InfixOp::Div => {
            if b == 0 {
                return Err(EvalError::div_by_zero());
            }
            Ok(a.wrapping_div(b))
        }
    }
}

fn int_op_i16(op: InfixOp, a: i16, b: i16) -> Result<i16, EvalError> {
    match op {
        InfixOp::Add => Ok(a.wrapping_add(b)),
        InfixOp::Sub => Ok(a.wrapping_sub(b)),
        InfixOp::Mul => Ok(a.wrapping_mul(b)),
        InfixOp::Div => {
            if b == 0 {
                return Err(EvalError::div_by_zero());
            }
            Ok(a.wrapping_div(b))
        }
    }
}

fn int_op_i32(op: InfixOp, a: i32, b: i32) -> Result<i32, EvalError> {
    match op {
        InfixOp::Add => Ok(a.wrapping_add(b)),
        InfixOp::Sub => Ok(a.wrapping_sub(b)),
        InfixOp::Mul => Ok(a.wrapping_mul(b)),
        InfixOp::Div => {
            if b == 0 {
                return Err(EvalError::div_by_zero());
            }
            Ok(a.wrapping_div(b))
        }
    }
}
