//! Parse error types.

use std::fmt;

use crate::token::{Token, TokenKind};

/// An error raised while parsing a token stream.
///
/// Carries enough of the offending token to render the exact diagnostic
/// text spec.md §6 requires: `[line L] Error at end: <msg>` when the
/// error was found at `EOF`, or `[line L] Error at '<lexeme>': <msg>`
/// otherwise.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub line: usize,
    where_: String,
    pub message: String,
}

impl ParseError {
    /// Builds a `ParseError` located at `token`.
    pub(super) fn at(token: &Token, message: impl Into<String>) -> Self {
        let where_ = if token.kind == TokenKind::Eof {
            "end".to_string()
        } else {
            format!("'{}'", token.lexeme)
        };
        ParseError {
            line: token.line,
            where_,
            message: message.into(),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[line {}] Error at {}: {}",
            self.line, self.where_, self.message
        )
    }
}

impl std::error::Error for ParseError {}
