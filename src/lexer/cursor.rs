//! Cursor position management for the lexer.
//!
//! This module provides methods for tracking and advancing the lexer's
//! position within the input source code.

use super::Lexer;

impl<'a> Lexer<'a> {
    /// Returns the current character without consuming it.
    ///
    /// Returns `None` if the end of input has been reached.
    pub(super) fn current_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    /// Returns the character one past the current one without consuming
    /// anything. Used for one-character lookahead on compound operators.
    pub(super) fn peek_next_char(&self) -> Option<char> {
        let mut chars = self.input[self.pos..].chars();
        chars.next();
        chars.next()
    }

    /// Returns `true` if the end of input has been reached.
    pub(super) fn is_eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Advances the lexer by one character.
    ///
    /// Updates the byte position and line counter. Handles multi-byte
    /// UTF-8 characters correctly and increments the line counter on
    /// newlines, matching spec.md §4.1 ("incremented on every newline,
    /// including those consumed inside comments").
    pub(super) fn advance(&mut self) -> Option<char> {
        let c = self.current_char()?;
        self.pos += c.len_utf8();
        if c == '\n' {
            self.line += 1;
        }
        Some(c)
    }

    /// Consumes the current character if it equals `expected`.
    ///
    /// Used for the one-character lookahead on compound operators like
    /// `==`, `!=`, `<=`, `>=`.
    pub(super) fn advance_if(&mut self, expected: char) -> bool {
        if self.current_char() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }
}
