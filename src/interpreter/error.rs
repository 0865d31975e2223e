//! Runtime error types.

use std::fmt;

use crate::environment::UndefinedVariable;

/// An error raised while evaluating an expression or executing a
/// statement.
///
/// Carries the 1-based line of the operator/name token responsible, so
/// the driver can render `<msg>\n[line L]` (spec.md §4.4/§6) without
/// hardcoding line 1 the way the source this spec was distilled from did
/// (SPEC_FULL.md §13).
#[derive(Debug, Clone, PartialEq)]
pub struct RuntimeError {
    pub message: String,
    pub line: usize,
}

impl RuntimeError {
    pub(super) fn new(message: impl Into<String>, line: usize) -> Self {
        RuntimeError {
            message: message.into(),
            line,
        }
    }
}

impl From<UndefinedVariable> for RuntimeError {
    fn from(err: UndefinedVariable) -> Self {
        RuntimeError {
            message: format!("Undefined variable '{}'.", err.name),
            line: err.line,
        }
    }
}

impl fmt::Display for RuntimeError {
    /// Formats the error exactly as it must appear on stderr:
    /// `<msg>\n[line L]` (spec.md §6).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n[line {}]", self.message, self.line)
    }
}

impl std::error::Error for RuntimeError {}
