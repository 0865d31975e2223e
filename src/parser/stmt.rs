//! Statement parsing.
//!
//! ```text
//! program     → declaration* EOF
//! declaration → varDecl | statement
//! varDecl     → "var" IDENTIFIER ( "=" expression )? ";"
//! statement   → exprStmt | printStmt | block
//! exprStmt    → expression ";"
//! printStmt   → "print" expression ";"
//! block       → "{" declaration* "}"
//! ```

use super::Parser;
use super::error::ParseError;
use crate::ast::Stmt;
use crate::token::TokenKind;

impl Parser {
    /// `declaration → varDecl | statement`
    ///
    /// On a parse error, prints the diagnostic, sets [`Parser::had_error`],
    /// and synchronizes to the next statement boundary so one mistake
    /// doesn't abort the whole parse (spec.md §6) — mirroring how
    /// [`crate::lexer::Lexer::scan`] keeps going after a lexical error.
    /// Returns `None` for the statement that failed.
    pub(super) fn declaration(&mut self) -> Option<Stmt> {
        let result = if self.match_any(&[TokenKind::Var]) {
            self.var_declaration()
        } else {
            self.statement()
        };

        match result {
            Ok(stmt) => Some(stmt),
            Err(err) => {
                eprintln!("{}", err);
                self.had_error = true;
                self.synchronize();
                None
            }
        }
    }

    /// `varDecl → "var" IDENTIFIER ( "=" expression )? ";"`
    ///
    /// The leading `var` has already been consumed.
    fn var_declaration(&mut self) -> Result<Stmt, ParseError> {
        let name = self
            .consume(TokenKind::Identifier, "Expect variable name.")?
            .clone();

        let initializer = if self.match_any(&[TokenKind::Equal]) {
            Some(self.expression()?)
        } else {
            None
        };

        self.consume(
            TokenKind::Semicolon,
            "Expect ';' after variable declaration.",
        )?;
        Ok(Stmt::VarDecl { name, initializer })
    }

    /// `statement → exprStmt | printStmt | block`
    fn statement(&mut self) -> Result<Stmt, ParseError> {
        if self.match_any(&[TokenKind::Print]) {
            return self.print_statement();
        }
        if self.match_any(&[TokenKind::LeftBrace]) {
            return Ok(Stmt::Block(self.block()?));
        }
        self.expression_statement()
    }

    /// `printStmt → "print" expression ";"`
    ///
    /// The leading `print` has already been consumed.
    fn print_statement(&mut self) -> Result<Stmt, ParseError> {
        let value = self.expression()?;
        self.consume(TokenKind::Semicolon, "Expect ';' after value.")?;
        Ok(Stmt::Print(value))
    }

    /// `exprStmt → expression ";"`
    fn expression_statement(&mut self) -> Result<Stmt, ParseError> {
        let expr = self.expression()?;
        self.consume(TokenKind::Semicolon, "Expect ';' after expression.")?;
        Ok(Stmt::Expression(expr))
    }

    /// `block → "{" declaration* "}"`
    ///
    /// The leading `{` has already been consumed; consumes the trailing
    /// `}`.
    fn block(&mut self) -> Result<Vec<Stmt>, ParseError> {
        let mut statements = Vec::new();
        while !self.check(TokenKind::RightBrace) && !self.is_eof() {
            if let Some(stmt) = self.declaration() {
                statements.push(stmt);
            }
        }
        self.consume(TokenKind::RightBrace, "Expect '}' after block.")?;
        Ok(statements)
    }
}
