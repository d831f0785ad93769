//! Cursor position management for the lexer.

use super::Lexer;

impl<'a> Lexer<'a> {
    /// Returns the current character without consuming it.
    pub(super) fn current_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    /// Returns the character one past the current one, without consuming
    /// either. Used for the `;` vs `;;` lookahead.
    pub(super) fn peek_char(&self) -> Option<char> {
        self.input[self.pos..].chars().nth(1)
    }

    /// Returns `true` if the end of input has been reached.
    pub(super) fn is_eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Advances the lexer by one character, tracking line/column.
    pub(super) fn advance(&mut self) {
        if let Some(c) = self.current_char() {
            self.pos += c.len_utf8();
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
    }
}
