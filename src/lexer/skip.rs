//! Whitespace skipping for the lexer.
//!
//! AVM has no comment syntax of its own at the lexical level — `;` is a
//! real token, and the parser is what turns the rest of the line into a
//! no-op once it sees one.

use super::Lexer;

impl<'a> Lexer<'a> {
    /// Skips consecutive whitespace characters (`' '`, `\t`, `\r`, `\n`).
    pub(super) fn skip_whitespace(&mut self) {
        while self.current_char().is_some_and(|c| c.is_whitespace()) {
            self.advance();
        }
    }
}
