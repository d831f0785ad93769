//! Stack-level binary arithmetic: `add`, `sub`, `mul`, `div`, `mod`.
//!
//! Pop order matches the original source's `evaluator.go` `evalAdd`
//! exactly: `a` is popped first (the most recently pushed value), then
//! `b`; `div`/`mod` compute `a / b` and `a % b`, so `b` is the divisor.
//! Integer over/underflow wraps rather than errors, matching the original's
//! reliance on Go's two's-complement wraparound. Both operands are peeked
//! and the result fully computed before either is popped, so a `DivByZero`
//! failure leaves the stack exactly as it was.

use crate::value::{Value, ValueType, bigger};

use super::error::EvalError;
use super::stack::Stack;

/// The five binary instructions that pop two operands and push one result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
}

impl BinOp {
    fn name(self) -> &'static str {
        match self {
            BinOp::Add => "add",
            BinOp::Sub => "sub",
            BinOp::Mul => "mul",
            BinOp::Div => "div",
            BinOp::Mod => "mod",
        }
    }
}

/// Applies `op` to the stack's top two values, pushing the promoted-type
/// result. Errors leave the stack untouched.
pub fn eval_binary(stack: &mut Stack, op: BinOp) -> Result<(), EvalError> {
    let len = stack.len();
    if len < 2 {
        return Err(EvalError::stack_too_small(2, len));
    }

    let a = stack.peek(0).expect("length already checked");
    let b = stack.peek(1).expect("length already checked");
    let result = compute(op, a, b)?;

    stack.pop(op.name()).expect("length already checked");
    stack.pop(op.name()).expect("length already checked");
    stack.push(result);
    Ok(())
}

fn compute(op: BinOp, a: Value, b: Value) -> Result<Value, EvalError> {
    match bigger(a.value_type(), b.value_type()) {
        ValueType::Char => {
            let (a, b) = (a.to_char().expect("widen"), b.to_char().expect("widen"));
            int_op(
                op,
                a,
                b,
                i8::wrapping_add,
                i8::wrapping_sub,
                i8::wrapping_mul,
                i8::wrapping_div,
                i8::wrapping_rem,
            )
            .map(Value::Char)
        }
        ValueType::Short => {
            let (a, b) = (a.to_short().expect("widen"), b.to_short().expect("widen"));
            int_op(
                op,
                a,
                b,
                i16::wrapping_add,
                i16::wrapping_sub,
                i16::wrapping_mul,
                i16::wrapping_div,
                i16::wrapping_rem,
            )
            .map(Value::Short)
        }
        ValueType::Integer => {
            let (a, b) = (a.to_integer().expect("widen"), b.to_integer().expect("widen"));
            int_op(
                op,
                a,
                b,
                i32::wrapping_add,
                i32::wrapping_sub,
                i32::wrapping_mul,
                i32::wrapping_div,
                i32::wrapping_rem,
            )
            .map(Value::Integer)
        }
        ValueType::Float => {
            let (a, b) = (a.to_float().expect("widen"), b.to_float().expect("widen"));
            let result = float_op(op, a, b)?;
            let result = if op == BinOp::Mod { round_to_two_dp(result) } else { result };
            Ok(Value::Float(result))
        }
        ValueType::Double => {
            let (a, b) = (a.to_double().expect("widen"), b.to_double().expect("widen"));
            double_op(op, a, b).map(Value::Double)
        }
    }
}

/// Rounds a `mod` result on `Float` to two decimal places. `Double` results
/// are never rounded — a deliberately preserved asymmetry. Applying this
/// unconditionally here is harmless for the other four ops since
/// `float_op` only routes `Mod` through it — see call site.
fn round_to_two_dp(v: f32) -> f32 {
    (v * 100.0).round() / 100.0
}

/// Integer arithmetic wraps on overflow rather than erroring, matching the
/// original source's `evalAdd` (`NewInt8Value(ca + cb)`), which relies on
/// Go's deterministic two's-complement wraparound — `int8(100)+int8(100)`
/// yields `-56`, not a failure. `div`/`mod` still error on a zero divisor
/// per spec.md §7's `DivByZero` kind; the one's-complement edge case
/// (`MIN / -1`) wraps rather than panics, for the same reason.
#[allow(clippy::too_many_arguments)]
fn int_op<T: Copy + PartialEq + Default>(
    op: BinOp,
    a: T,
    b: T,
    add: fn(T, T) -> T,
    sub: fn(T, T) -> T,
    mul: fn(T, T) -> T,
    div: fn(T, T) -> T,
    rem: fn(T, T) -> T,
) -> Result<T, EvalError> {
    match op {
        BinOp::Add => Ok(add(a, b)),
        BinOp::Sub => Ok(sub(a, b)),
        BinOp::Mul => Ok(mul(a, b)),
        BinOp::Div => {
            if b == T::default() {
                return Err(EvalError::div_by_zero());
            }
            Ok(div(a, b))
        }
        BinOp::Mod => {
            if b == T::default() {
                return Err(EvalError::div_by_zero());
            }
            Ok(rem(a, b))
        }
    }
}

fn float_op(op: BinOp, a: f32, b: f32) -> Result<f32, EvalError> {
    match op {
        BinOp::Add => Ok(a + b),
        BinOp::Sub => Ok(a - b),
        BinOp::Mul => Ok(a * b),
        BinOp::Div => {
            if b == 0.0 {
                return Err(EvalError::div_by_zero());
            }
            Ok(a / b)
        }
        BinOp::Mod => {
            if b == 0.0 {
                return Err(EvalError::div_by_zero());
            }
            Ok(a % b)
        }
    }
}

fn double_op(op: BinOp, a: f64, b: f64) -> Result<f64, EvalError> {
    match op {
        BinOp::Add => Ok(a + b),
        BinOp::Sub => Ok(a - b),
        BinOp::Mul => Ok(a * b),
        BinOp::Div => {
            if b == 0.0 {
                return Err(EvalError::div_by_zero());
            }
            Ok(a / b)
        }
        BinOp::Mod => {
            if b == 0.0 {
                return Err(EvalError::div_by_zero());
            }
            Ok(a % b)
        }
    }
}
