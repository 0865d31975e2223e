//! Expression parsing via recursive descent over the precedence grammar:
//!
//! ```text
//! expression → assignment
//! assignment → IDENTIFIER "=" assignment | equality
//! equality   → comparison ( ( "!=" | "==" ) comparison )*
//! comparison → term ( ( ">" | ">=" | "<" | "<=" ) term )*
//! term       → factor ( ( "-" | "+" ) factor )*
//! factor     → unary ( ( "/" | "*" ) unary )*
//! unary      → ( "!" | "-" ) unary | primary
//! primary    → NUMBER | STRING | "true" | "false" | "nil"
//!            | "(" expression ")" | IDENTIFIER
//! ```

use super::Parser;
use super::error::ParseError;
use crate::ast::Expr;
use crate::token::{Literal, TokenKind};
use crate::value::Value;

impl Parser {
    /// `expression → assignment`
    pub(super) fn expression(&mut self) -> Result<Expr, ParseError> {
        self.assignment()
    }

    /// `assignment → IDENTIFIER "=" assignment | equality`
    ///
    /// Parses the left side as an ordinary `equality` expression first,
    /// then — only if an `=` follows — rewrites it into an assignment.
    /// This is why `Expr::Variable` and `Expr::Assignment` are separate
    /// variants instead of one expression being mutated in place: a
    /// `Variable` node may already be fully built as an ordinary operand
    /// by the time we realize it was actually an assignment target.
    fn assignment(&mut self) -> Result<Expr, ParseError> {
        let target = self.equality()?;

        if self.match_any(&[TokenKind::Equal]) {
            let equals = self.previous().clone();
            let value = self.assignment()?;

            return match target {
                Expr::Variable(name) => Ok(Expr::assignment(name, value)),
                _ => Err(ParseError::at(&equals, "Invalid assignment target.")),
            };
        }

        Ok(target)
    }

    /// `equality → comparison ( ( "!=" | "==" ) comparison )*`
    fn equality(&mut self) -> Result<Expr, ParseError> {
        self.left_associative_binary(
            Self::comparison,
            &[TokenKind::BangEqual, TokenKind::EqualEqual],
        )
    }

    /// `comparison → term ( ( ">" | ">=" | "<" | "<=" ) term )*`
    fn comparison(&mut self) -> Result<Expr, ParseError> {
        self.left_associative_binary(
            Self::term,
            &[
                TokenKind::Greater,
                TokenKind::GreaterEqual,
                TokenKind::Less,
                TokenKind::LessEqual,
            ],
        )
    }

    /// `term → factor ( ( "-" | "+" ) factor )*`
    fn term(&mut self) -> Result<Expr, ParseError> {
        self.left_associative_binary(Self::factor, &[TokenKind::Minus, TokenKind::Plus])
    }

    /// `factor → unary ( ( "/" | "*" ) unary )*`
    fn factor(&mut self) -> Result<Expr, ParseError> {
        self.left_associative_binary(Self::unary, &[TokenKind::Slash, TokenKind::Star])
    }

    /// Shared left-associative binary-operator loop used by `equality`
    /// through `factor`: parse one `operand`, then keep folding in more
    /// `operand`s as long as the current token is one of `operators`.
    fn left_associative_binary(
        &mut self,
        operand: fn(&mut Self) -> Result<Expr, ParseError>,
        operators: &[TokenKind],
    ) -> Result<Expr, ParseError> {
        let mut expr = operand(self)?;
        while self.match_any(operators) {
            let op = self.previous().clone();
            let right = operand(self)?;
            expr = Expr::binary(expr, op, right);
        }
        Ok(expr)
    }

    /// `unary → ( "!" | "-" ) unary | primary`
    fn unary(&mut self) -> Result<Expr, ParseError> {
        if self.match_any(&[TokenKind::Bang, TokenKind::Minus]) {
            let op = self.previous().clone();
            let right = self.unary()?;
            return Ok(Expr::unary(op, right));
        }
        self.primary()
    }

    /// `primary → NUMBER | STRING | "true" | "false" | "nil" | "(" expression ")" | IDENTIFIER`
    fn primary(&mut self) -> Result<Expr, ParseError> {
        if self.match_any(&[TokenKind::False]) {
            return Ok(Expr::Literal(Value::Boolean(false)));
        }
        if self.match_any(&[TokenKind::True]) {
            return Ok(Expr::Literal(Value::Boolean(true)));
        }
        if self.match_any(&[TokenKind::Nil]) {
            return Ok(Expr::Literal(Value::Nil));
        }
        if self.match_any(&[TokenKind::Number]) {
            let Literal::Number(n) = &self.previous().literal else {
                unreachable!("NUMBER token must carry a Literal::Number");
            };
            return Ok(Expr::Literal(Value::Number(*n)));
        }
        if self.match_any(&[TokenKind::String]) {
            let Literal::Str(s) = &self.previous().literal else {
                unreachable!("STRING token must carry a Literal::Str");
            };
            return Ok(Expr::Literal(Value::Str(s.clone())));
        }
        if self.match_any(&[TokenKind::Identifier]) {
            return Ok(Expr::Variable(self.previous().clone()));
        }
        if self.match_any(&[TokenKind::LeftParen]) {
            let inner = self.expression()?;
            self.consume(TokenKind::RightParen, "Expect ')' after expression.")?;
            return Ok(Expr::grouping(inner));
        }

        Err(ParseError::at(self.current(), "Expect expression."))
    }
}
