//! Expression parsing using Pratt parsing (precedence climbing).
//!
//! Used inside the parentheses of `push τ( … )` / `assert τ( … )`, and for
//! bare top-level arithmetic expression statements. A literal leaf is
//! reinterpreted into the container's declared [`ValueType`] as it's
//! parsed (a ranged decode), so the target type threads through every
//! recursive call rather than being fixed up in a later pass.

use super::Parser;
use super::error::ParseError;
use crate::ast::{Expr, ExprKind, InfixOp, PrefixOp};
use crate::token::{Span, TokenKind};
use crate::value::ValueType;

/// Precedence ladder, lowest to highest. `EQUALS` is vestigial: no token
/// in this grammar has equality precedence, but the rung is kept so the
/// ladder reads as a familiar, complete Pratt precedence table.
const LOWEST: u8 = 0;
#[allow(dead_code)]
const EQUALS: u8 = 1;
const SUM: u8 = 2;
const PRODUCT: u8 = 3;
const PREFIX: u8 = 4;

/// Returns the precedence of a binary operator token, if it is one.
fn binary_op_precedence(kind: &TokenKind) -> Option<u8> {
    match kind {
        TokenKind::Plus | TokenKind::Minus => Some(SUM),
        TokenKind::Star | TokenKind::Slash => Some(PRODUCT),
        _ => None,
    }
}

/// Converts a token kind to an infix operator.
fn token_to_infix_op(kind: &TokenKind) -> Option<InfixOp> {
    match kind {
        TokenKind::Plus => Some(InfixOp::Add),
        TokenKind::Minus => Some(InfixOp::Sub),
        TokenKind::Star => Some(InfixOp::Mul),
        TokenKind::Slash => Some(InfixOp::Div),
        _ => None,
    }
}

impl Parser {
    /// Parses an expression, reinterpreting literal leaves as `target`.
    ///
    /// This is the entry point used by `push`/`assert` (with the declared
    /// container type) and by bare expression statements (with an implicit
    /// `int32` target).
    pub(super) fn parse_expr(&mut self, target: ValueType) -> Result<Expr, ParseError> {
        self.parse_expr_pratt(LOWEST, target)
    }

    /// Core Pratt loop: parse a primary, then keep consuming binary
    /// operators whose precedence exceeds `min_precedence`, recursing with
    /// the operator's own precedence as the new floor (giving
    /// left-associativity: a same-precedence operator immediately to the
    /// right stops the recursive call and is picked up by this loop
    /// instead).
    fn parse_expr_pratt(&mut self, min_precedence: u8, target: ValueType) -> Result<Expr, ParseError> {
        let mut left = self.parse_primary_expr(target)?;

        loop {
            let Some(precedence) = binary_op_precedence(self.current_kind()) else {
                break;
            };
            if precedence <= min_precedence {
                break;
            }

            let op = token_to_infix_op(self.current_kind())
                .expect("binary_op_precedence and token_to_infix_op must agree");
            self.advance();

            let right = self.parse_expr_pratt(precedence, target)?;

            let span = Span::new(
                left.span.start,
                right.span.end,
                left.span.line,
                left.span.column,
            );
            left = Expr::new(
                ExprKind::InfixExpr(Box::new(left), op, Box::new(right)),
                span,
            );
        }

        Ok(left)
    }

    /// Parses a primary expression: a unary-negated operand, a parenthesised
    /// group, a literal (reinterpreted as `target`), or a bare identifier.
    fn parse_primary_expr(&mut self, target: ValueType) -> Result<Expr, ParseError> {
        let start_span = self.current_span();

        match self.current_kind().clone() {
            TokenKind::Minus => {
                self.advance();
                // A minus directly in front of an integer literal decodes the
                // negative magnitude straight into the target width, so
                // `int8(-128)` etc. can reach their type's minimum value —
                // widening the positive magnitude first and negating after
                // would reject it, since 128 doesn't fit `i8` but -128 does.
                if let TokenKind::Int(value) = self.current_kind() {
                    let value = *value;
                    let lit_span = self.current_span();
                    self.advance();
                    let span = Span::new(
                        start_span.start,
                        lit_span.end,
                        start_span.line,
                        start_span.column,
                    );
                    return self.decode_int_literal(-value, target, span);
                }
                let operand = self.parse_expr_pratt(PREFIX, target)?;
                let span = Span::new(
                    start_span.start,
                    operand.span.end,
                    start_span.line,
                    start_span.column,
                );
                Ok(Expr::new(
                    ExprKind::PrefixExpr(PrefixOp::Neg, Box::new(operand)),
                    span,
                ))
            }
            TokenKind::LParen => {
                self.advance();
                let inner = self.parse_expr_pratt(LOWEST, target)?;
                let close_span = self.current_span();
                self.expect_rparen(start_span)?;
                let span = Span::new(
                    start_span.start,
                    close_span.end,
                    start_span.line,
                    start_span.column,
                );
                Ok(Expr::new(inner.kind, span))
            }
            TokenKind::Ident(name) => {
                self.advance();
                Ok(Expr::new(ExprKind::Identifier(name), start_span))
            }
            TokenKind::Int(value) => {
                self.advance();
                self.decode_int_literal(value, target, start_span)
            }
            TokenKind::FloatNum(value) => {
                self.advance();
                self.decode_float_literal(value, target, start_span)
            }
            other => Err(ParseError::unexpected_token(
                &Self::token_kind_display(&other),
                start_span,
            )),
        }
    }

    /// Reinterprets an `INT` literal's value as `target`'s payload type,
    /// checking it fits the target's range. The lexer only ever scans a
    /// non-negative magnitude, but callers may pass a negated value here
    /// (see the `Minus` case above) so that e.g. `int8(-128)` decodes
    /// straight to its type's minimum rather than overflowing on the
    /// positive magnitude first.
    fn decode_int_literal(
        &self,
        value: i64,
        target: ValueType,
        span: Span,
    ) -> Result<Expr, ParseError> {
        let kind = match target {
            ValueType::Char => i8::try_from(value)
                .map(ExprKind::Int8Lit)
                .map_err(|_| ParseError::literal_out_of_range(&value.to_string(), "int8", span))?,
            ValueType::Short => i16::try_from(value)
                .map(ExprKind::Int16Lit)
                .map_err(|_| ParseError::literal_out_of_range(&value.to_string(), "int16", span))?,
            ValueType::Integer => i32::try_from(value)
                .map(ExprKind::Int32Lit)
                .map_err(|_| ParseError::literal_out_of_range(&value.to_string(), "int32", span))?,
            ValueType::Float => ExprKind::Float32Lit(value as f32),
            ValueType::Double => ExprKind::Float64Lit(value as f64),
        };
        Ok(Expr::new(kind, span))
    }

    /// Reinterprets a scanned `FLOAT_NUM` literal as `target`'s payload
    /// type. A float literal cannot inhabit an integer container.
    fn decode_float_literal(
        &self,
        value: f64,
        target: ValueType,
        span: Span,
    ) -> Result<Expr, ParseError> {
        let kind = match target {
            ValueType::Float => ExprKind::Float32Lit(value as f32),
            ValueType::Double => ExprKind::Float64Lit(value),
            ValueType::Char | ValueType::Short | ValueType::Integer => {
                return Err(ParseError::literal_out_of_range(
                    &value.to_string(),
                    target.name(),
                    span,
                ));
            }
        };
        Ok(Expr::new(kind, span))
    }
}
