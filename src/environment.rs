//! Lexical scopes for variable storage.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::value::Value;

/// A runtime error raised by [`Environment`] lookups: referencing or
/// assigning an undefined variable (spec.md §4.5).
#[derive(Debug, Clone, PartialEq)]
pub struct UndefinedVariable {
    pub name: String,
    pub line: usize,
}

impl fmt::Display for UndefinedVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Undefined variable '{}'.\n[line {}]", self.name, self.line)
    }
}

impl std::error::Error for UndefinedVariable {}

/// A single lexical scope: a name-to-value table plus an optional link to
/// the enclosing scope.
///
/// Scopes form a chain via `Rc<RefCell<_>>` so a closure (or, here, a
/// nested block) can share and mutate an outer scope without the
/// borrow-checker requiring the whole chain to live behind one owner
/// (spec.md §4.5).
#[derive(Debug)]
struct Scope {
    values: HashMap<String, Value>,
    enclosing: Option<Environment>,
}

/// A reference-counted handle to a [`Scope`].
///
/// Cloning an `Environment` is cheap and shares the same underlying scope;
/// this is how the interpreter passes "the current environment" around
/// without re-borrowing a parent for every block.
#[derive(Debug, Clone)]
pub struct Environment(Rc<RefCell<Scope>>);

impl Environment {
    /// Creates a new global scope with no enclosing environment.
    pub fn new() -> Self {
        Environment(Rc::new(RefCell::new(Scope {
            values: HashMap::new(),
            enclosing: None,
        })))
    }

    /// Creates a new scope enclosed by `self`, e.g. entering a `{ }` block
    /// (spec.md §4.4, §4.5).
    pub fn child(&self) -> Self {
        Environment(Rc::new(RefCell::new(Scope {
            values: HashMap::new(),
            enclosing: Some(self.clone()),
        })))
    }

    /// Binds `name` to `value` in this scope.
    ///
    /// Redeclaring an existing name in the same scope silently overwrites
    /// it (spec.md §4.5's open question, resolved in SPEC_FULL.md §13: the
    /// original's global-scope redeclaration tolerance is kept for every
    /// scope, not just the global one).
    pub fn define(&self, name: impl Into<String>, value: Value) {
        self.0.borrow_mut().values.insert(name.into(), value);
    }

    /// Looks up `name`, searching outward through enclosing scopes.
    pub fn get(&self, name: &str, line: usize) -> Result<Value, UndefinedVariable> {
        let scope = self.0.borrow();
        if let Some(value) = scope.values.get(name) {
            return Ok(value.clone());
        }
        match &scope.enclosing {
            Some(parent) => parent.get(name, line),
            None => Err(UndefinedVariable {
                name: name.to_string(),
                line,
            }),
        }
    }

    /// Assigns `value` to the nearest existing binding of `name`, searching
    /// outward through enclosing scopes.
    ///
    /// Unlike [`Environment::define`], assignment never creates a new
    /// binding: assigning to a name that isn't declared anywhere in the
    /// chain is a runtime error (spec.md §4.5).
    pub fn assign(&self, name: &str, value: Value, line: usize) -> Result<(), UndefinedVariable> {
        let mut scope = self.0.borrow_mut();
        if scope.values.contains_key(name) {
            scope.values.insert(name.to_string(), value);
            return Ok(());
        }
        match &scope.enclosing {
            Some(parent) => parent.assign(name, value, line),
            None => Err(UndefinedVariable {
                name: name.to_string(),
                line,
            }),
        }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Environment::new()
    }
}
