//! Parse error types.

use crate::token::Span;

/// The structured category of a [`ParseError`], per the error taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// No prefix parser exists for the current token.
    UnexpectedToken,
    /// A `(` was never matched by a closing `)`.
    UnmatchedParen,
    /// A numeric literal exceeds the target type's width.
    LiteralOutOfRange,
    /// A nullary instruction was followed by a non-empty, non-comment token.
    ExtraTokens,
}

/// An error that occurred during parsing.
///
/// # See Also
///
/// * [`crate::lexer::LexError`] - Similar error type for lexical errors
#[derive(Debug)]
pub struct ParseError {
    /// The structured category of this error.
    pub kind: ParseErrorKind,
    /// A human-readable description of the error.
    pub message: String,
    /// The source location where the error occurred.
    pub span: Span,
}

impl ParseError {
    /// A token appeared where no prefix parser handles it.
    pub fn unexpected_token(found: &str, span: Span) -> Self {
        ParseError {
            kind: ParseErrorKind::UnexpectedToken,
            message: format!("unexpected token: {found}"),
            span,
        }
    }

    /// A `(` was opened but never closed.
    pub fn unmatched_paren(span: Span) -> Self {
        ParseError {
            kind: ParseErrorKind::UnmatchedParen,
            message: "missing closing ')'".to_string(),
            span,
        }
    }

    /// A numeric literal doesn't fit the declared container type.
    pub fn literal_out_of_range(text: &str, target: &str, span: Span) -> Self {
        ParseError {
            kind: ParseErrorKind::LiteralOutOfRange,
            message: format!("literal '{text}' out of range for type {target}"),
            span,
        }
    }

    /// `bigdecimal`, or a literal whose kind can never inhabit `target`.
    pub fn unsupported_type(name: &str, span: Span) -> Self {
        ParseError {
            kind: ParseErrorKind::LiteralOutOfRange,
            message: format!("unsupported type: {name}"),
            span,
        }
    }

    /// A nullary instruction was followed by more tokens on the same line.
    pub fn extra_tokens(found: &str, span: Span) -> Self {
        ParseError {
            kind: ParseErrorKind::ExtraTokens,
            message: format!("unexpected trailing token: {found}"),
            span,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}: {}",
            self.span.line, self.span.column, self.message
        )
    }
}

impl std::error::Error for ParseError {}
