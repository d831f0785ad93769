//! Abstract Syntax Tree definitions for AVM instructions.
//!
//! The AST is produced by the [`crate::parser`] and consumed by the
//! [`crate::evaluator`], one line at a time — nodes never outlive a single
//! `eval` call.
//!
//! # Structure
//!
//! - [`Program`] - Zero or one [`Stmt`] parsed from a single line
//! - [`Stmt`] - An instruction (`push`, `add`, `dump`, ...)
//! - [`Expr`] - The value expression inside `push`/`assert` operands
//!
//! Each node carries a [`Span`](crate::token::Span) for error reporting.
//!
//! # See Also
//!
//! * [`crate::parser`] - Produces the AST from tokens
//! * [`crate::evaluator`] - Consumes the AST against the operand stack

mod expr;
mod program;
mod stmt;

pub use expr::{Expr, ExprKind, InfixOp, PrefixOp};
pub use program::Program;
pub use stmt::{Stmt, StmtKind};
