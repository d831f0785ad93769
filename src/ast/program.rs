//! Top-level program structure for the AVM AST.

use super::stmt::Stmt;

/// The result of parsing one line.
///
/// A well-formed line parses to zero or one [`Stmt`] — zero for a blank
/// line, a comment (`; …`), or the `;;` end-of-input sentinel, one for
/// anything else. The evaluator iterates `statements` in order to remain
/// general, even though in practice there is never more than one.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    /// The instructions parsed from this line, in source order.
    pub statements: Vec<Stmt>,
}

impl Program {
    /// An empty program, as produced by a blank line or a comment.
    pub fn empty() -> Self {
        Program {
            statements: Vec::new(),
        }
    }

    /// A program containing a single statement.
    pub fn single(stmt: Stmt) -> Self {
        Program {
            statements: vec![stmt],
        }
    }
}
