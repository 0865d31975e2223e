//! Lexical scanner for the language.
//!
//! This module provides the [`Lexer`] struct which converts source text
//! into a stream of [`Token`]s.
//!
//! # Overview
//!
//! The scanner performs the following tasks:
//! - Scans the input one character at a time, tracking a 1-based line
//!   counter that is bumped on every newline, including ones consumed
//!   inside comments
//! - Recognizes single-character punctuation, one-character-lookahead
//!   compound operators, string and number literals, identifiers, and the
//!   sixteen reserved words
//! - Skips whitespace and `//` line comments
//! - Never fails fast: every lexical error is reported to stderr as it is
//!   found and scanning continues, accumulating a `has_error` flag
//!
//! # Module Structure
//!
//! - [`error`] - Lexical error kinds ([`LexError`])
//! - `cursor` - Position tracking and character navigation
//! - `skip` - Line-comment skipping
//! - `scan` - Token recognition
//! - `tests` - Unit tests (test-only)
//!
//! # See Also
//!
//! * [`crate::token`] - Token type definitions
//! * [`crate::parser`] - Parser that consumes the token stream

mod cursor;
mod error;
mod scan;
mod skip;

#[cfg(test)]
mod tests;

pub use error::LexError;

use crate::token::{Literal, Token, TokenKind};

/// A lexical scanner that tokenizes source text.
///
/// The `Lexer` maintains its byte position and current line within the
/// input. It is meant to be used once per source file via [`Lexer::scan`]
/// or the free function [`scan`].
pub struct Lexer<'a> {
    /// The input source code being tokenized.
    input: &'a str,
    /// Current byte position in the input.
    pos: usize,
    /// Current 1-based line number.
    line: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new `Lexer` over `input`, starting at line 1.
    pub fn new(input: &'a str) -> Self {
        Lexer {
            input,
            pos: 0,
            line: 1,
        }
    }

    /// Scans the entire input into a token vector and an error flag.
    ///
    /// Always appends an `EOF` token last, with an empty lexeme and the
    /// final line reached. Every lexical error encountered along the way is
    /// printed to stderr immediately (spec.md §4.1); this method itself
    /// never returns early on error, only at end of input.
    ///
    /// # Returns
    ///
    /// `(tokens, has_error)` — `has_error` is `true` if any lexical error
    /// was reported.
    pub fn scan(mut self) -> (Vec<Token>, bool) {
        let mut tokens = Vec::new();
        let mut has_error = false;

        loop {
            loop {
                self.skip_whitespace();
                if !self.skip_line_comment() {
                    break;
                }
            }

            if self.is_eof() {
                tokens.push(Token::new(TokenKind::Eof, "", Literal::None, self.line));
                break;
            }

            match self.next_token() {
                Ok(token) => tokens.push(token),
                Err(err) => {
                    eprintln!("{}", err);
                    has_error = true;
                }
            }
        }

        (tokens, has_error)
    }

    /// Skips consecutive whitespace characters (space, tab, CR, newline).
    ///
    /// Only the exact four characters spec.md §4.1 names are whitespace;
    /// anything else (e.g. a Unicode space) must fall through to the
    /// unexpected-character path instead of being silently swallowed, so
    /// this does not use `char::is_whitespace`.
    ///
    /// Newlines bump the line counter through [`Lexer::advance`].
    fn skip_whitespace(&mut self) {
        while matches!(self.current_char(), Some(' ' | '\t' | '\r' | '\n')) {
            self.advance();
        }
    }
}

/// Scans `source` into a token vector and an error flag.
///
/// Convenience wrapper around [`Lexer::new`] + [`Lexer::scan`].
pub fn scan(source: &str) -> (Vec<Token>, bool) {
    Lexer::new(source).scan()
}
