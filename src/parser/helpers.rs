//! Parser helper methods for token navigation and basic operations.

use super::Parser;
use super::error::ParseError;
use crate::token::{Span, Token, TokenKind};
use crate::value::ValueType;

impl Parser {
    /// Returns a user-friendly display string for a token kind.
    pub(super) fn token_kind_display(kind: &TokenKind) -> String {
        match kind {
            TokenKind::Ident(s) => format!("identifier '{s}'"),
            TokenKind::Int(n) => format!("integer '{n}'"),
            TokenKind::FloatNum(n) => format!("float '{n}'"),
            TokenKind::LParen => "'('".to_string(),
            TokenKind::RParen => "')'".to_string(),
            TokenKind::Plus => "'+'".to_string(),
            TokenKind::Minus => "'-'".to_string(),
            TokenKind::Star => "'*'".to_string(),
            TokenKind::Slash => "'/'".to_string(),
            TokenKind::Semicolon => "';'".to_string(),
            TokenKind::Eoi => "';;'".to_string(),
            TokenKind::Eof => "end of line".to_string(),
            TokenKind::Illegal(c) => format!("illegal character '{c}'"),
            TokenKind::Int8 => "'int8'".to_string(),
            TokenKind::Int16 => "'int16'".to_string(),
            TokenKind::Int32 => "'int32'".to_string(),
            TokenKind::Float => "'float'".to_string(),
            TokenKind::Double => "'double'".to_string(),
            TokenKind::BigDecimal => "'bigdecimal'".to_string(),
            TokenKind::Push => "'push'".to_string(),
            TokenKind::Pop => "'pop'".to_string(),
            TokenKind::Dump => "'dump'".to_string(),
            TokenKind::Clear => "'clear'".to_string(),
            TokenKind::Dup => "'dup'".to_string(),
            TokenKind::Swap => "'swap'".to_string(),
            TokenKind::Assert => "'assert'".to_string(),
            TokenKind::Add => "'add'".to_string(),
            TokenKind::Sub => "'sub'".to_string(),
            TokenKind::Mul => "'mul'".to_string(),
            TokenKind::Div => "'div'".to_string(),
            TokenKind::Mod => "'mod'".to_string(),
            TokenKind::Print => "'print'".to_string(),
            TokenKind::Exit => "'exit'".to_string(),
        }
    }

    /// Returns a reference to the current token.
    ///
    /// This method is safe to call at any time - if the position is past
    /// the end, it returns the last token (which should be `Eof`).
    pub(super) fn current(&self) -> &Token {
        // new() ensures tokens is non-empty (len >= 1)
        // advance() doesn't increment pos past Eof
        let idx = self.pos.min(self.tokens.len() - 1);
        &self.tokens[idx]
    }

    /// Returns the kind of the current token.
    pub(super) fn current_kind(&self) -> &TokenKind {
        &self.current().kind
    }

    /// Returns the span of the current token.
    pub(super) fn current_span(&self) -> Span {
        self.current().span
    }

    /// Returns `true` if the current token is `Eof`.
    pub(super) fn is_eof(&self) -> bool {
        matches!(self.current_kind(), TokenKind::Eof)
    }

    /// Advances to the next token.
    ///
    /// Does nothing if already at `Eof`.
    pub(super) fn advance(&mut self) {
        if !self.is_eof() {
            self.pos += 1;
        }
    }

    /// Expects the current token to be `(` and advances past it.
    pub(super) fn expect_lparen(&mut self) -> Result<(), ParseError> {
        if matches!(self.current_kind(), TokenKind::LParen) {
            self.advance();
            Ok(())
        } else {
            Err(ParseError::unexpected_token(
                &Self::token_kind_display(self.current_kind()),
                self.current_span(),
            ))
        }
    }

    /// Expects the current token to be `)` and advances past it.
    ///
    /// Reports the error as an unmatched paren, using `open_span` (the span
    /// of the `(` that opened this group) for the reported location.
    pub(super) fn expect_rparen(&mut self, open_span: Span) -> Result<(), ParseError> {
        if matches!(self.current_kind(), TokenKind::RParen) {
            self.advance();
            Ok(())
        } else {
            Err(ParseError::unmatched_paren(open_span))
        }
    }

    /// Expects the current token to be a type keyword and returns the
    /// corresponding [`ValueType`]. Fails with `unsupported_type` for
    /// `bigdecimal`, which has no backing [`ValueType`] variant.
    pub(super) fn expect_type(&mut self) -> Result<ValueType, ParseError> {
        let span = self.current_span();
        let ty = match self.current_kind() {
            TokenKind::Int8 => ValueType::Char,
            TokenKind::Int16 => ValueType::Short,
            TokenKind::Int32 => ValueType::Integer,
            TokenKind::Float => ValueType::Float,
            TokenKind::Double => ValueType::Double,
            TokenKind::BigDecimal => return Err(ParseError::unsupported_type("bigdecimal", span)),
            other => {
                return Err(ParseError::unexpected_token(
                    &Self::token_kind_display(other),
                    span,
                ));
            }
        };
        self.advance();
        Ok(ty)
    }
}
