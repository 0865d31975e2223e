//! Token recognition for the lexer.
//!
//! This module reads one token at a time from the current cursor position:
//! single-character punctuation, one-character-lookahead compound
//! operators, string literals, number literals, and identifiers/keywords.

use super::Lexer;
use crate::lexer::error::LexError;
use crate::token::{Literal, Token, TokenKind};

impl<'a> Lexer<'a> {
    /// Reads and returns the next token from the input.
    ///
    /// Assumes whitespace and comments have already been skipped and the
    /// cursor is not at EOF. Implements the character-dispatch table from
    /// spec.md §4.1.
    pub(super) fn next_token(&mut self) -> Result<Token, LexError> {
        let line = self.line;
        let c = self.advance().expect("next_token called at EOF");

        let simple = |kind: TokenKind, lexeme: &str| Token::new(kind, lexeme, Literal::None, line);

        match c {
            '(' => Ok(simple(TokenKind::LeftParen, "(")),
            ')' => Ok(simple(TokenKind::RightParen, ")")),
            '{' => Ok(simple(TokenKind::LeftBrace, "{")),
            '}' => Ok(simple(TokenKind::RightBrace, "}")),
            '.' => Ok(simple(TokenKind::Dot, ".")),
            ',' => Ok(simple(TokenKind::Comma, ",")),
            '+' => Ok(simple(TokenKind::Plus, "+")),
            '-' => Ok(simple(TokenKind::Minus, "-")),
            '*' => Ok(simple(TokenKind::Star, "*")),
            ';' => Ok(simple(TokenKind::Semicolon, ";")),
            '=' => Ok(if self.advance_if('=') {
                simple(TokenKind::EqualEqual, "==")
            } else {
                simple(TokenKind::Equal, "=")
            }),
            '!' => Ok(if self.advance_if('=') {
                simple(TokenKind::BangEqual, "!=")
            } else {
                simple(TokenKind::Bang, "!")
            }),
            '<' => Ok(if self.advance_if('=') {
                simple(TokenKind::LessEqual, "<=")
            } else {
                simple(TokenKind::Less, "<")
            }),
            '>' => Ok(if self.advance_if('=') {
                simple(TokenKind::GreaterEqual, ">=")
            } else {
                simple(TokenKind::Greater, ">")
            }),
            '/' => Ok(simple(TokenKind::Slash, "/")),
            '"' => self.read_string(line),
            _ if c.is_ascii_digit() => Ok(self.read_number(c, line)),
            _ if c.is_ascii_alphabetic() || c == '_' => Ok(self.read_identifier(c, line)),
            other => Err(LexError::UnexpectedCharacter {
                line,
                character: other,
            }),
        }
    }

    /// Reads a string literal. The opening `"` has already been consumed.
    ///
    /// An embedded newline or EOF before the closing `"` is an unterminated
    /// string (spec.md §4.1); either way the token is dropped and an error
    /// reported. The lexeme includes the surrounding quotes; the literal
    /// value is the unquoted content.
    fn read_string(&mut self, start_line: usize) -> Result<Token, LexError> {
        let mut value = String::new();
        loop {
            match self.current_char() {
                Some('"') => {
                    self.advance();
                    let lexeme = format!("\"{}\"", value);
                    return Ok(Token::new(
                        TokenKind::String,
                        lexeme,
                        Literal::Str(value),
                        start_line,
                    ));
                }
                Some('\n') | None => {
                    return Err(LexError::UnterminatedString { line: start_line });
                }
                Some(c) => {
                    value.push(c);
                    self.advance();
                }
            }
        }
    }

    /// Reads a number literal starting with the already-consumed digit
    /// `first`.
    ///
    /// Consumes further digits, then a single `.` followed by more digits.
    /// A trailing `.` not followed by a digit is left unconsumed, so `42.`
    /// tokenizes as `NUMBER 42` then `DOT`, per spec.md §4.1/§8.
    fn read_number(&mut self, first: char, line: usize) -> Token {
        let mut lexeme = String::new();
        lexeme.push(first);

        while self.current_char().is_some_and(|c| c.is_ascii_digit()) {
            lexeme.push(self.advance().unwrap());
        }

        if self.current_char() == Some('.') && self.peek_next_char().is_some_and(|c| c.is_ascii_digit())
        {
            lexeme.push(self.advance().unwrap());
            while self.current_char().is_some_and(|c| c.is_ascii_digit()) {
                lexeme.push(self.advance().unwrap());
            }
        }

        let value: f64 = lexeme.parse().expect("number lexeme must be valid float text");
        Token::new(TokenKind::Number, lexeme, Literal::Number(value), line)
    }

    /// Reads an identifier or reserved word starting with the
    /// already-consumed character `first`.
    fn read_identifier(&mut self, first: char, line: usize) -> Token {
        let mut lexeme = String::new();
        lexeme.push(first);

        while self
            .current_char()
            .is_some_and(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            lexeme.push(self.advance().unwrap());
        }

        let kind = TokenKind::keyword(&lexeme).unwrap_or(TokenKind::Identifier);
        Token::new(kind, lexeme, Literal::None, line)
    }
}
