//! Statement nodes for the AST.

use super::expr::Expr;
use crate::token::Token;

/// A statement in the language.
///
/// Each variant owns its sub-expressions and sub-statements exclusively
/// (spec.md §3). There is no separate statement-level span: every variant
/// that can raise a runtime error already carries the token it needs (e.g.
/// `VarDecl`'s `name`), and block scoping needs no location at all.
#[derive(Debug, Clone)]
pub enum Stmt {
    /// An expression evaluated and discarded for its side effects.
    Expression(Expr),

    /// `print expr;` — evaluates `expr`, stringifies it, and writes it to
    /// stdout with a trailing newline.
    Print(Expr),

    /// `var name = initializer;` or `var name;`.
    ///
    /// `initializer` is `None` when no `=` was written, in which case the
    /// name is bound to `nil` (spec.md §9's resolution of the open
    /// question on uninitialized `var`).
    VarDecl { name: Token, initializer: Option<Expr> },

    /// `{ declaration* }` — a new scope enclosing the contained
    /// statements, created on entry and unconditionally discarded on
    /// every exit path (spec.md §4.4, §5).
    Block(Vec<Stmt>),
}
