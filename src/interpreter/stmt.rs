//! Statement execution.

use std::io::Write;

use super::Interpreter;
use super::error::RuntimeError;
use crate::ast::Stmt;
use crate::value::Value;

impl<W: std::io::Write> Interpreter<W> {
    /// Executes a whole statement sequence in order, stopping at the
    /// first runtime error (spec.md §4.4/§7 — "the first runtime error
    /// stops execution; no further statements run").
    pub fn execute_all(&mut self, statements: &[Stmt]) -> Result<(), RuntimeError> {
        for stmt in statements {
            self.execute(stmt)?;
        }
        Ok(())
    }

    /// Executes a single statement.
    fn execute(&mut self, stmt: &Stmt) -> Result<(), RuntimeError> {
        match stmt {
            Stmt::Expression(expr) => {
                self.evaluate(expr)?;
                Ok(())
            }
            Stmt::Print(expr) => {
                let value = self.evaluate(expr)?;
                writeln!(self.stdout, "{}", value).expect("write to stdout sink failed");
                Ok(())
            }
            Stmt::VarDecl { name, initializer } => {
                let value = match initializer {
                    Some(expr) => self.evaluate(expr)?,
                    None => Value::Nil,
                };
                self.env.define(name.lexeme.clone(), value);
                Ok(())
            }
            Stmt::Block(statements) => self.execute_block(statements),
        }
    }

    /// Executes a block's statements in a new scope enclosed by the
    /// current environment, discarding that scope on every exit path —
    /// normal completion or error propagation alike (spec.md §4.4/§5).
    fn execute_block(&mut self, statements: &[Stmt]) -> Result<(), RuntimeError> {
        let outer = self.env.clone();
        self.env = outer.child();
        let result = self.execute_all(statements);
        self.env = outer;
        result
    }
}
