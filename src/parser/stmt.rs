//! Statement dispatch: chooses a grammar production from the first token
//! on the line.

use super::Parser;
use super::ParseOutcome;
use super::error::ParseError;
use crate::ast::{Program, Stmt, StmtKind};
use crate::token::{Span, TokenKind};
use crate::value::ValueType;

impl Parser {
    /// Parses the single line this parser was constructed over.
    pub(super) fn parse_line(&mut self) -> Result<(Program, ParseOutcome), ParseError> {
        match self.current_kind() {
            TokenKind::Eof => Ok((Program::empty(), ParseOutcome::Program)),
            // `;` turns the rest of the line into a comment: nothing left to parse.
            TokenKind::Semicolon => Ok((Program::empty(), ParseOutcome::Program)),
            // `;;` ends the session outright.
            TokenKind::Eoi => Ok((Program::empty(), ParseOutcome::Terminate)),
            TokenKind::Exit => {
                let span = self.current_span();
                self.advance();
                self.expect_line_end()?;
                Ok((
                    Program::single(Stmt::new(StmtKind::Exit, span)),
                    ParseOutcome::Terminate,
                ))
            }
            TokenKind::Push => {
                let (stmt, outcome) = self.parse_push()?;
                Ok((Program::single(stmt), outcome))
            }
            TokenKind::Assert => {
                let (stmt, outcome) = self.parse_assert()?;
                Ok((Program::single(stmt), outcome))
            }
            TokenKind::Pop
            | TokenKind::Dump
            | TokenKind::Clear
            | TokenKind::Dup
            | TokenKind::Swap
            | TokenKind::Print
            | TokenKind::Add
            | TokenKind::Sub
            | TokenKind::Mul
            | TokenKind::Div
            | TokenKind::Mod => {
                let (stmt, outcome) = self.parse_nullary()?;
                Ok((Program::single(stmt), outcome))
            }
            TokenKind::BigDecimal => Err(ParseError::unsupported_type(
                "bigdecimal",
                self.current_span(),
            )),
            _ => {
                let expr = self.parse_expr(ValueType::Integer)?;
                let span = expr.span;
                let outcome = self.expect_line_end()?;
                Ok((Program::single(Stmt::new(StmtKind::Expr(expr), span)), outcome))
            }
        }
    }

    /// Parses one of the thirteen nullary instructions: no operand, and
    /// nothing but `EOF`/a comment/`;;` may trail it on the line.
    fn parse_nullary(&mut self) -> Result<(Stmt, ParseOutcome), ParseError> {
        let span = self.current_span();
        let kind = match self.current_kind() {
            TokenKind::Pop => StmtKind::Pop,
            TokenKind::Dump => StmtKind::Dump,
            TokenKind::Clear => StmtKind::Clear,
            TokenKind::Dup => StmtKind::Dup,
            TokenKind::Swap => StmtKind::Swap,
            TokenKind::Print => StmtKind::Print,
            TokenKind::Add => StmtKind::Add,
            TokenKind::Sub => StmtKind::Sub,
            TokenKind::Mul => StmtKind::Mul,
            TokenKind::Div => StmtKind::Div,
            TokenKind::Mod => StmtKind::Mod,
            other => unreachable!("parse_nullary called on non-nullary token {other:?}"),
        };
        self.advance();
        let outcome = self.expect_line_end()?;
        Ok((Stmt::new(kind, span), outcome))
    }

    /// Parses `push τ( expr )`.
    fn parse_push(&mut self) -> Result<(Stmt, ParseOutcome), ParseError> {
        let start = self.current_span();
        self.advance();
        let ty = self.expect_type()?;
        let open_span = self.current_span();
        self.expect_lparen()?;
        let expr = self.parse_expr(ty)?;
        let close_span = self.current_span();
        self.expect_rparen(open_span)?;
        let outcome = self.expect_line_end()?;
        let span = Span::new(start.start, close_span.end, start.line, start.column);
        Ok((Stmt::new(StmtKind::Push(ty, expr), span), outcome))
    }

    /// Parses `assert τ( expr )`.
    fn parse_assert(&mut self) -> Result<(Stmt, ParseOutcome), ParseError> {
        let start = self.current_span();
        self.advance();
        let ty = self.expect_type()?;
        let open_span = self.current_span();
        self.expect_lparen()?;
        let expr = self.parse_expr(ty)?;
        let close_span = self.current_span();
        self.expect_rparen(open_span)?;
        let outcome = self.expect_line_end()?;
        let span = Span::new(start.start, close_span.end, start.line, start.column);
        Ok((Stmt::new(StmtKind::Assert(ty, expr), span), outcome))
    }

    /// Confirms nothing but `EOF`, a `;` comment marker, or a `;;`
    /// end-of-input sentinel trails the instruction just parsed, returning
    /// which of the two applies. Any other leftover token is `ExtraTokens`.
    pub(super) fn expect_line_end(&mut self) -> Result<ParseOutcome, ParseError> {
        match self.current_kind() {
            TokenKind::Eof | TokenKind::Semicolon => Ok(ParseOutcome::Program),
            TokenKind::Eoi => Ok(ParseOutcome::Terminate),
            other => Err(ParseError::extra_tokens(
                &Self::token_kind_display(other),
                self.current_span(),
            )),
        }
    }
}
