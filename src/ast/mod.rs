//! Abstract Syntax Tree definitions for the scripting language.
//!
//! This module defines the data structures that represent parsed programs:
//! a tree of [`Expr`] and [`Stmt`] nodes, each owning its children
//! exclusively so the whole tree is acyclic (spec.md §3).
//!
//! # Module Structure
//!
//! - [`expr`] - Expression nodes ([`Expr`])
//! - [`stmt`] - Statement nodes ([`Stmt`])
//!
//! # See Also
//!
//! * [`crate::parser`] - Produces the AST from tokens
//! * [`crate::interpreter`] - Walks the AST to evaluate it
//! * [`crate::printer`] - Renders expressions as parenthesized text

mod expr;
mod stmt;

pub use expr::Expr;
pub use stmt::Stmt;
