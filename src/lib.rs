//! Core of a tree-walking interpreter for a small dynamically-typed,
//! C-syntax scripting language.
//!
//! This library provides the pipeline described in spec.md: a lexical
//! scanner, a recursive-descent parser, a tree-walking evaluator, and the
//! supporting token/AST/value/environment data model. The CLI binary
//! (`src/main.rs`) and its [`driver`] glue the four commands (`tokenize`,
//! `parse`, `evaluate`, `run`) to these pieces and map results to process
//! exit codes.
//!
//! # Modules
//!
//! - [`token`] - Token kinds, lexemes, literals, and source lines
//! - [`lexer`] - Source text to token stream
//! - [`ast`] - Expression and statement node definitions
//! - [`parser`] - Token stream to AST
//! - [`value`] - The runtime value domain
//! - [`environment`] - Scoped variable storage
//! - [`interpreter`] - Walks the AST, mutating the environment and
//!   emitting `print` output
//! - [`printer`] - Canonical parenthesized AST text
//! - [`driver`] - Orchestrates the four CLI commands over the above

pub mod ast;
pub mod driver;
pub mod environment;
pub mod interpreter;
pub mod lexer;
pub mod parser;
pub mod printer;
pub mod token;
pub mod value;
