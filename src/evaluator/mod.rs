//! Evaluates parsed [`Program`]s against the operand [`Stack`].
//!
//! One `Evaluator` lives for the lifetime of a VM session (interactive
//! shell or file run); its `Stack` is the only state that survives across
//! lines.
//!
//! # Module Structure
//!
//! - [`stack`] - The operand `Stack` and its primitive operations
//! - [`arithmetic`] - Promotion-aware `add`/`sub`/`mul`/`div`/`mod`
//! - [`expr`] - Evaluates `push`/`assert` operand expressions
//! - [`error`] - `EvalError` and its taxonomy
//!
//! # See Also
//!
//! * [`crate::parser`] - Produces the `Program` this module consumes
//! * [`crate::value`] - The tagged value model arithmetic operates over

mod arithmetic;
mod error;
mod expr;
mod stack;

pub use error::{EvalError, EvalErrorKind};
pub use stack::Stack;

use std::io::Write;

use crate::ast::{Expr, Program, Stmt, StmtKind};
use crate::value::ValueType;

use arithmetic::{BinOp, eval_binary};
use expr::eval_expr;

/// What running an instruction means for the calling session loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// An ordinary instruction; the session keeps reading lines.
    Continue,
    /// `exit` was run (or `;;` was parsed) — the session should end.
    Exit,
}

/// Owns the operand stack and executes one [`Program`] (one source line)
/// against it at a time.
#[derive(Debug, Default)]
pub struct Evaluator {
    stack: Stack,
}

impl Evaluator {
    /// Creates a new evaluator with an empty stack.
    pub fn new() -> Self {
        Evaluator {
            stack: Stack::new(),
        }
    }

    /// The operand stack, for callers that want to inspect or dump it
    /// outside of a `dump` instruction (e.g. the interactive shell's
    /// implicit post-instruction echo).
    pub fn stack(&self) -> &Stack {
        &self.stack
    }

    /// Runs every statement in `program` in order, writing any `dump`/
    /// `print` output to `out`. A failure aborts the remaining statements
    /// in the program (in practice there is never more than one) and
    /// leaves the stack exactly as it was before the failing instruction.
    pub fn eval_program(
        &mut self,
        program: &Program,
        out: &mut impl Write,
    ) -> Result<Outcome, EvalError> {
        for stmt in &program.statements {
            if self.eval_stmt(stmt, out)? == Outcome::Exit {
                return Ok(Outcome::Exit);
            }
        }
        Ok(Outcome::Continue)
    }

    fn eval_stmt(&mut self, stmt: &Stmt, out: &mut impl Write) -> Result<Outcome, EvalError> {
        log::debug!("evaluator: {:?}", stmt.kind);
        match &stmt.kind {
            StmtKind::Push(ty, expr) => {
                self.eval_push(*ty, expr)?;
                Ok(Outcome::Continue)
            }
            StmtKind::Assert(_, expr) => {
                self.eval_assert(expr)?;
                Ok(Outcome::Continue)
            }
            StmtKind::Expr(expr) => {
                self.eval_push(ValueType::Integer, expr)?;
                Ok(Outcome::Continue)
            }
            StmtKind::Pop => {
                self.stack.pop("pop")?;
                Ok(Outcome::Continue)
            }
            StmtKind::Dump => {
                self.stack.dump(out).map_err(EvalError::io)?;
                Ok(Outcome::Continue)
            }
            StmtKind::Clear => {
                self.stack.clear();
                Ok(Outcome::Continue)
            }
            StmtKind::Dup => {
                self.stack.dup();
                Ok(Outcome::Continue)
            }
            StmtKind::Swap => {
                self.stack.swap()?;
                Ok(Outcome::Continue)
            }
            StmtKind::Print => {
                self.stack.print(out)?;
                Ok(Outcome::Continue)
            }
            StmtKind::Exit => Ok(Outcome::Exit),
            StmtKind::Add => self.eval_binop(BinOp::Add),
            StmtKind::Sub => self.eval_binop(BinOp::Sub),
            StmtKind::Mul => self.eval_binop(BinOp::Mul),
            StmtKind::Div => self.eval_binop(BinOp::Div),
            StmtKind::Mod => self.eval_binop(BinOp::Mod),
        }
    }

    fn eval_binop(&mut self, op: BinOp) -> Result<Outcome, EvalError> {
        eval_binary(&mut self.stack, op)?;
        Ok(Outcome::Continue)
    }

    /// Evaluates `expr` and pushes the result. The literal leaves inside
    /// `expr` already carry `ty`'s width — the parser's ranged decode
    /// baked that in — so this is just `eval_expr` plus the push.
    fn eval_push(&mut self, _ty: ValueType, expr: &Expr) -> Result<(), EvalError> {
        let value = eval_expr(expr)?;
        self.stack.push(value);
        Ok(())
    }

    /// Evaluates `expr` and compares it against the stack top. Fails
    /// `StackEmpty` if the stack is empty, `AssertFail` if the value or
    /// its type differs. The stack is never modified.
    fn eval_assert(&mut self, expr: &Expr) -> Result<(), EvalError> {
        let expected = eval_expr(expr)?;
        let actual = self
            .stack
            .peek(0)
            .map_err(|_| EvalError::stack_empty("assert"))?;
        if actual != expected || actual.value_type() != expected.value_type() {
            return Err(EvalError::assert_fail(expected, actual));
        }
        Ok(())
    }
}
