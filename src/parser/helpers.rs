//! Parser helper methods for token navigation and basic operations.

use super::Parser;
use super::error::ParseError;
use crate::token::{Token, TokenKind};

impl Parser {
    /// Returns a reference to the current token.
    ///
    /// Safe to call at any time: `new()` ensures the token list is
    /// non-empty and `advance` never steps past `EOF`.
    pub(super) fn current(&self) -> &Token {
        let idx = self.pos.min(self.tokens.len() - 1);
        &self.tokens[idx]
    }

    /// Returns the previously consumed token.
    ///
    /// # Panics
    /// Panics if called before any token has been consumed.
    pub(super) fn previous(&self) -> &Token {
        &self.tokens[self.pos - 1]
    }

    /// Returns `true` if the current token is `EOF`.
    pub(super) fn is_eof(&self) -> bool {
        self.current().kind == TokenKind::Eof
    }

    /// Returns `true` if the current token has kind `kind`, without
    /// consuming it.
    pub(super) fn check(&self, kind: TokenKind) -> bool {
        !self.is_eof() && self.current().kind == kind
    }

    /// Consumes and returns the current token, unless already at `EOF`.
    pub(super) fn advance(&mut self) -> &Token {
        if !self.is_eof() {
            self.pos += 1;
        }
        self.previous()
    }

    /// If the current token's kind is any of `kinds`, consumes it and
    /// returns `true`; otherwise leaves the position unchanged.
    pub(super) fn match_any(&mut self, kinds: &[TokenKind]) -> bool {
        for kind in kinds {
            if self.check(*kind) {
                self.advance();
                return true;
            }
        }
        false
    }

    /// Consumes the current token if it has kind `kind`, else raises a
    /// [`ParseError`] located at the current token with `message`.
    pub(super) fn consume(&mut self, kind: TokenKind, message: &str) -> Result<&Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(ParseError::at(self.current(), message))
        }
    }

    /// Discards tokens until a plausible statement boundary is reached,
    /// after a parse error (spec.md §6's panic-mode recovery).
    ///
    /// Stops after a `;`, or before a token that starts a new statement
    /// (a statement/declaration keyword).
    pub(super) fn synchronize(&mut self) {
        self.advance();
        while !self.is_eof() {
            if self.previous().kind == TokenKind::Semicolon {
                return;
            }
            match self.current().kind {
                TokenKind::Class
                | TokenKind::Fun
                | TokenKind::Var
                | TokenKind::For
                | TokenKind::If
                | TokenKind::While
                | TokenKind::Print
                | TokenKind::Return => return,
                _ => {
                    self.advance();
                }
            }
        }
    }
}
