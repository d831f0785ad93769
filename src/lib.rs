//! The Abstract Stack Virtual Machine (AVM) core library.
//!
//! AVM reads a line-oriented assembly-like language and executes each line
//! against a typed operand stack. This crate provides the execution
//! pipeline for one instruction:
//!
//! ```text
//! line ──► Lexer ──► token stream ──► Parser ──► Program ──► Evaluator(Stack) ──► side effects
//! ```
//!
//! # Modules
//!
//! - [`token`] - Token types and source location tracking
//! - [`lexer`] - Lexical analysis of one line into a token stream
//! - [`ast`] - Instruction and expression AST definitions
//! - [`parser`] - Statement dispatch plus a Pratt expression sub-parser
//! - [`value`] - The tagged numeric value model and its promotion lattice
//! - [`evaluator`] - The operand stack and instruction semantics
//! - [`diagnostics`] - Renders lex/parse/eval errors as source-annotated reports
//!
//! The file reader and interactive shell that drive this pipeline live in
//! the `avm` binary (`src/main.rs`, `src/shell.rs`); this library has no
//! knowledge of stdin, files, or history.
//!
//! # Example
//!
//! ```
//! use avm::evaluator::Evaluator;
//! use avm::lexer::Lexer;
//! use avm::parser::Parser;
//!
//! let mut evaluator = Evaluator::new();
//! let mut out = Vec::new();
//!
//! for line in ["push int32(5)", "push int32(10)", "add", "dump"] {
//!     let tokens = Lexer::new(line).tokenize().expect("lex error");
//!     let (program, _) = Parser::new(tokens).parse_instruction().expect("parse error");
//!     evaluator.eval_program(&program, &mut out).expect("eval error");
//! }
//!
//! assert_eq!(out, b"15\n\n");
//! ```

pub mod ast;
pub mod diagnostics;
pub mod evaluator;
pub mod lexer;
pub mod parser;
pub mod token;
pub mod value;
