//! Lexical analyzer for AVM instructions.
//!
//! Scans a single input line into a stream of [`Token`]s.
//!
//! # Scanning rules
//!
//! Applied after skipping whitespace (`' '`, `\t`, `\r`, `\n`):
//!
//! 1. `(` / `)` → [`TokenKind::LParen`] / [`TokenKind::RParen`].
//! 2. `;` followed by `;` → [`TokenKind::Eoi`]; a lone `;` → [`TokenKind::Semicolon`].
//! 3. `+ - * /` → the corresponding operator token.
//! 4. A letter start consumes letters and digits into an identifier,
//!    classified via the keyword table (see [`crate::token::TokenKind::lookup_ident`]).
//! 5. A digit or `.` start consumes digits and at most one `.` into a
//!    number, emitting [`TokenKind::FloatNum`] if a `.` was seen, else
//!    [`TokenKind::Int`].
//! 6. End of input → [`TokenKind::Eof`], repeatedly once reached.
//! 7. Anything else → [`TokenKind::Illegal`].
//!
//! # Module Structure
//!
//! - [`error`] - [`LexError`], for literals that scan but fail to parse
//! - [`cursor`] - Position tracking and character navigation
//! - [`skip`] - Whitespace skipping
//! - [`tokens`] - Token recognition and reading
//!
//! # See Also
//!
//! * [`crate::token`] - Token type definitions
//! * [`crate::parser`] - Parser that consumes the token stream

mod cursor;
mod error;
mod skip;
mod tokens;


pub use error::LexError;

use crate::token::{Span, Token, TokenKind};

/// Scans one line of AVM source into tokens.
///
/// Lexing is total and single-pass: every byte of input is consumed or
/// ends at `EOF`, lookahead is exactly one character (`;` vs `;;`), and a
/// fresh `Lexer` is created per line rather than reused.
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
    line: usize,
    column: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new `Lexer` over the given input line.
    pub fn new(input: &'a str) -> Self {
        Lexer {
            input,
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the next token on demand. Once `EOF` is reached it is
    /// returned on every subsequent call rather than panicking or erroring.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_whitespace();
        let token = self.next_token_impl()?;
        log::trace!("lexer: {:?} at {}:{}", token.kind, token.span.line, token.span.column);
        Ok(token)
    }

    fn next_token_impl(&mut self) -> Result<Token, LexError> {
        if self.is_eof() {
            let span = Span::new(self.pos, self.pos, self.line, self.column);
            return Ok(Token::new(TokenKind::Eof, span));
        }
        self.scan_token()
    }

    /// Tokenizes the entire input, returning every token including the
    /// trailing `EOF`.
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let is_eof = token.kind == TokenKind::Eof;
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        Ok(tokens)
    }
}
