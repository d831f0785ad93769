//! Token reading and recognition for the lexer.

use super::Lexer;
use super::error::LexError;
use crate::token::{Span, Token, TokenKind};

impl<'a> Lexer<'a> {
    fn single_char_token(
        &mut self,
        kind: TokenKind,
        start_pos: usize,
        start_line: usize,
        start_column: usize,
    ) -> Token {
        self.advance();
        let span = Span::new(start_pos, self.pos, start_line, start_column);
        Token::new(kind, span)
    }

    /// Reads and returns the next token from the input.
    ///
    /// Assumes whitespace has already been skipped. Never fails on
    /// unrecognized input — unclassifiable bytes become
    /// [`TokenKind::Illegal`] so that every byte of the line is consumed;
    /// [`LexError`] is reserved for literals that scan but don't parse
    /// (e.g. integer overflow).
    pub(super) fn scan_token(&mut self) -> Result<Token, LexError> {
        let c = match self.current_char() {
            Some(c) => c,
            None => {
                let span = Span::new(self.pos, self.pos, self.line, self.column);
                return Ok(Token::new(TokenKind::Eof, span));
            }
        };

        let start_pos = self.pos;
        let start_line = self.line;
        let start_column = self.column;

        match c {
            '(' => Ok(self.single_char_token(TokenKind::LParen, start_pos, start_line, start_column)),
            ')' => Ok(self.single_char_token(TokenKind::RParen, start_pos, start_line, start_column)),
            ';' if self.peek_char() == Some(';') => {
                self.advance();
                self.advance();
                let span = Span::new(start_pos, self.pos, start_line, start_column);
                Ok(Token::new(TokenKind::Eoi, span))
            }
            ';' => Ok(self.single_char_token(TokenKind::Semicolon, start_pos, start_line, start_column)),
            '+' => Ok(self.single_char_token(TokenKind::Plus, start_pos, start_line, start_column)),
            '-' => Ok(self.single_char_token(TokenKind::Minus, start_pos, start_line, start_column)),
            '*' => Ok(self.single_char_token(TokenKind::Star, start_pos, start_line, start_column)),
            '/' => Ok(self.single_char_token(TokenKind::Slash, start_pos, start_line, start_column)),
            c if c.is_ascii_alphabetic() => {
                Ok(self.read_identifier(start_pos, start_line, start_column))
            }
            c if c.is_ascii_digit() || c == '.' => {
                self.read_number(start_pos, start_line, start_column)
            }
            c => {
                self.advance();
                let span = Span::new(start_pos, self.pos, start_line, start_column);
                Ok(Token::new(TokenKind::Illegal(c), span))
            }
        }
    }

    /// Reads an identifier or keyword: a letter followed by letters and
    /// digits, classified against the keyword table.
    fn read_identifier(&mut self, start_pos: usize, start_line: usize, start_column: usize) -> Token {
        while self
            .current_char()
            .is_some_and(|c| c.is_ascii_alphanumeric())
        {
            self.advance();
        }

        let value = &self.input[start_pos..self.pos];
        let span = Span::new(start_pos, self.pos, start_line, start_column);
        Token::new(TokenKind::lookup_ident(value), span)
    }

    /// Reads a number literal: digits, optionally containing one `.`. A
    /// literal containing `.` is a [`TokenKind::FloatNum`], otherwise an
    /// [`TokenKind::Int`].
    fn read_number(
        &mut self,
        start_pos: usize,
        start_line: usize,
        start_column: usize,
    ) -> Result<Token, LexError> {
        let mut saw_dot = false;
        while let Some(c) = self.current_char() {
            if c.is_ascii_digit() {
                self.advance();
            } else if c == '.' && !saw_dot {
                saw_dot = true;
                self.advance();
            } else {
                break;
            }
        }

        let text = &self.input[start_pos..self.pos];
        let span = Span::new(start_pos, self.pos, start_line, start_column);

        if saw_dot {
            let value: f64 = text
                .parse()
                .map_err(|_: std::num::ParseFloatError| LexError::invalid_float_literal(text, span))?;
            Ok(Token::new(TokenKind::FloatNum(value), span))
        } else {
            let value: i64 = text
                .parse()
                .map_err(|_: std::num::ParseIntError| LexError::integer_overflow(text, span))?;
            Ok(Token::new(TokenKind::Int(value), span))
        }
    }
}
