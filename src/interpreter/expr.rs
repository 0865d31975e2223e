//! Expression evaluation.

use super::Interpreter;
use super::error::RuntimeError;
use crate::ast::Expr;
use crate::token::{Token, TokenKind};
use crate::value::Value;

impl<W: std::io::Write> Interpreter<W> {
    /// Evaluates `expr` to a [`Value`] (spec.md §4.4).
    pub fn evaluate(&mut self, expr: &Expr) -> Result<Value, RuntimeError> {
        match expr {
            Expr::Literal(value) => Ok(value.clone()),
            Expr::Grouping(inner) => self.evaluate(inner),
            Expr::Variable(name) => Ok(self.env.get(&name.lexeme, name.line)?),
            Expr::Assignment { name, value } => {
                let value = self.evaluate(value)?;
                self.env.assign(&name.lexeme, value.clone(), name.line)?;
                Ok(value)
            }
            Expr::Unary { op, right } => self.evaluate_unary(op, right),
            Expr::Binary { left, op, right } => self.evaluate_binary(left, op, right),
        }
    }

    /// `-x` requires a number operand; `!x` negates truthiness and never
    /// fails (spec.md §4.4).
    fn evaluate_unary(&mut self, op: &Token, right: &Expr) -> Result<Value, RuntimeError> {
        let right = self.evaluate(right)?;
        match op.kind {
            TokenKind::Minus => match right {
                Value::Number(n) => Ok(Value::Number(-n)),
                _ => Err(RuntimeError::new("Operand must be a number.", op.line)),
            },
            TokenKind::Bang => Ok(Value::Boolean(!right.is_truthy())),
            _ => unreachable!("parser only ever builds Unary with Minus or Bang"),
        }
    }

    /// Evaluates a binary operator application per spec.md §4.4:
    /// arithmetic and ordering require numbers on both sides, `+` also
    /// accepts two strings (concatenation), and equality is structural
    /// with no coercion between kinds.
    fn evaluate_binary(
        &mut self,
        left: &Expr,
        op: &Token,
        right: &Expr,
    ) -> Result<Value, RuntimeError> {
        let left = self.evaluate(left)?;
        let right = self.evaluate(right)?;

        match op.kind {
            TokenKind::Minus => numeric(op, left, right, |a, b| a - b),
            TokenKind::Star => numeric(op, left, right, |a, b| a * b),
            TokenKind::Slash => numeric(op, left, right, |a, b| a / b),
            TokenKind::Plus => match (left, right) {
                (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
                (Value::Str(a), Value::Str(b)) => Ok(Value::Str(a + &b)),
                _ => Err(RuntimeError::new(
                    "+ operator should be either numbers or strings",
                    op.line,
                )),
            },
            TokenKind::Greater => ordering(op, left, right, |a, b| a > b),
            TokenKind::GreaterEqual => ordering(op, left, right, |a, b| a >= b),
            TokenKind::Less => ordering(op, left, right, |a, b| a < b),
            TokenKind::LessEqual => ordering(op, left, right, |a, b| a <= b),
            TokenKind::EqualEqual => Ok(Value::Boolean(left == right)),
            TokenKind::BangEqual => Ok(Value::Boolean(left != right)),
            _ => unreachable!("parser only ever builds Binary with an arithmetic/comparison op"),
        }
    }
}

/// Applies a numeric binary operator, requiring both operands to be
/// numbers.
fn numeric(
    op: &Token,
    left: Value,
    right: Value,
    f: impl Fn(f64, f64) -> f64,
) -> Result<Value, RuntimeError> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok(Value::Number(f(a, b))),
        _ => Err(RuntimeError::new("Operand must be a number.", op.line)),
    }
}

/// Applies a numeric ordering comparison, requiring both operands to be
/// numbers.
fn ordering(
    op: &Token,
    left: Value,
    right: Value,
    f: impl Fn(f64, f64) -> bool,
) -> Result<Value, RuntimeError> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok(Value::Boolean(f(a, b))),
        _ => Err(RuntimeError::new("Operand must be a number.", op.line)),
    }
}
