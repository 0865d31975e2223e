//! Token definitions for the lexer.
//!
//! This module provides the fundamental token types produced by
//! [`crate::lexer`] and consumed by [`crate::parser`]: [`TokenKind`] for the
//! closed set of token types, [`Literal`] for the value a `STRING`/`NUMBER`
//! token carries, and [`Token`] tying a kind, lexeme, literal, and source
//! line together.
//!
//! # Module Structure
//!
//! - [`kind`] - Token type definitions ([`TokenKind`] enum)
//!
//! # See Also
//!
//! * [`crate::lexer`] - The lexer that produces these tokens
//! * [`crate::parser`] - The parser that consumes these tokens

mod kind;

pub use kind::TokenKind;

use std::fmt;

/// The value carried by a token beyond its lexeme.
///
/// Only `STRING` and `NUMBER` tokens carry a literal; every other kind
/// carries [`Literal::None`]. This mirrors spec's "literal" attribute
/// directly rather than overloading `Value` (the runtime type), since a
/// token's literal is fixed at scan time and a `Value` can also be `bool`
/// or produced at runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    None,
    Number(f64),
    Str(String),
}

impl fmt::Display for Literal {
    /// Formats the literal the way the `tokenize` command's dump expects:
    /// `null` for `None`, the unquoted string for `Str`, and canonical
    /// float text (always one decimal point) for `Number`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::None => f.write_str("null"),
            Literal::Str(s) => f.write_str(s),
            Literal::Number(n) => write!(f, "{}", format_number_literal(*n)),
        }
    }
}

/// Renders a number literal's canonical dump text: always one decimal
/// point, e.g. `42` → `"42.0"`, `3.14` → `"3.14"`.
pub(crate) fn format_number_literal(n: f64) -> String {
    if n.fract() == 0.0 && n.is_finite() {
        format!("{:.1}", n)
    } else {
        n.to_string()
    }
}

/// A token with its kind, exact source text, literal value, and line.
///
/// Tokens are immutable once produced by the lexer; the parser only ever
/// reads them.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The kind of this token.
    pub kind: TokenKind,
    /// The exact source substring that produced this token.
    pub lexeme: String,
    /// The literal value carried by `STRING`/`NUMBER` tokens, else `None`.
    pub literal: Literal,
    /// The 1-based source line this token appears on.
    pub line: usize,
}

impl Token {
    /// Creates a new `Token`. Performs no validation; the caller is
    /// responsible for lexeme/literal/line consistency.
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, literal: Literal, line: usize) -> Self {
        Token {
            kind,
            lexeme: lexeme.into(),
            literal,
            line,
        }
    }
}

impl fmt::Display for Token {
    /// Formats a token the way the `tokenize` command dumps it:
    /// `<KIND> <lexeme> <literal-or-null>`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.kind, self.lexeme, self.literal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_token_dump_line() {
        let token = Token::new(TokenKind::LeftParen, "(", Literal::None, 1);
        assert_eq!(token.to_string(), "LEFT_PAREN ( null");
    }

    #[test]
    fn display_formats_string_literal() {
        let token = Token::new(
            TokenKind::String,
            "\"hi\"",
            Literal::Str("hi".to_string()),
            3,
        );
        assert_eq!(token.to_string(), "STRING \"hi\" hi");
    }

    #[test]
    fn display_formats_integral_number_with_dot_zero() {
        let token = Token::new(TokenKind::Number, "42", Literal::Number(42.0), 1);
        assert_eq!(token.to_string(), "NUMBER 42 42.0");
    }

    #[test]
    fn display_formats_fractional_number_verbatim() {
        let token = Token::new(TokenKind::Number, "3.14", Literal::Number(3.14), 1);
        assert_eq!(token.to_string(), "NUMBER 3.14 3.14");
    }

    #[test]
    fn display_formats_eof() {
        let token = Token::new(TokenKind::Eof, "", Literal::None, 5);
        assert_eq!(token.to_string(), "EOF  null");
    }
}
