use std::collections::HashMap;

use thiserror::Error;

use crate::interpreter::value::Value;

/// Failures of name resolution and binding.
///
/// These carry no source location; the evaluator wraps them in
/// [`RuntimeError::Name`](crate::error::RuntimeError::Name) with the line of
/// the offending expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnvironmentError {
    /// The name is already bound in the current scope.
    #[error("Variable '{name}' is already declared in this scope")]
    AlreadyDeclared {
        /// The variable name.
        name: String,
    },
    /// The name is not bound in any enclosing scope.
    #[error("Unknown variable '{name}'")]
    Undeclared {
        /// The variable name.
        name: String,
    },
    /// The nearest binding of the name was declared with `const`.
    #[error("Cannot reassign constant '{name}'")]
    ConstantReassignment {
        /// The constant name.
        name: String,
    },
}

/// Whether a binding can be reassigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutability {
    /// Declared with `met`.
    Mutable,
    /// Declared with `const`.
    Constant,
}

/// Index of a scope inside an [`Environment`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScopeId(usize);

impl ScopeId {
    /// The root scope, which lives as long as the environment.
    pub const ROOT: Self = Self(0);
}

#[derive(Debug, Clone)]
struct Binding {
    value:      Value,
    mutability: Mutability,
}

#[derive(Debug, Clone, Default)]
struct Scope {
    parent:   Option<ScopeId>,
    bindings: HashMap<String, Binding>,
}

/// A tree of lexical scopes stored as an arena.
///
/// Scopes refer to their parent by [`ScopeId`]. Child scopes are opened with
/// [`push_scope`](Self::push_scope) and discarded with
/// [`pop_scope`](Self::pop_scope); name lookups walk from the current scope
/// towards the root.
///
/// ## Usage
///
/// One environment is created per session and reused for every program run in
/// it, so declarations persist from one input to the next.
///
/// ```
/// use francois::{Environment, Value};
///
/// let mut env = Environment::new();
/// env.declare("x", Value::Numeric(1.0)).unwrap();
///
/// env.push_scope();
/// env.declare("x", Value::Numeric(2.0)).unwrap();
/// assert_eq!(env.get("x").unwrap(), Value::Numeric(2.0));
///
/// env.pop_scope();
/// assert_eq!(env.get("x").unwrap(), Value::Numeric(1.0));
/// ```
#[derive(Debug, Clone)]
pub struct Environment {
    scopes:  Vec<Scope>,
    current: ScopeId,
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment {
    /// Creates an environment holding only an empty root scope.
    #[must_use]
    pub fn new() -> Self {
        Self { scopes:  vec![Scope::default()],
               current: ScopeId::ROOT, }
    }

    /// Creates an environment whose root scope binds the boolean constants
    /// `vrai` and `faux`.
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut env = Self::new();
        for (name, value) in [("vrai", true), ("faux", false)] {
            env.scopes[0].bindings.insert(name.to_string(),
                                          Binding { value:      Value::Boolean(value),
                                                    mutability: Mutability::Constant, });
        }
        env
    }

    /// The innermost scope, where declarations go.
    #[must_use]
    pub const fn current(&self) -> ScopeId {
        self.current
    }

    /// Number of scopes between the current scope and the root, inclusive.
    #[must_use]
    pub fn depth(&self) -> usize {
        let mut depth = 1;
        let mut scope = self.current;
        while let Some(parent) = self.scopes[scope.0].parent {
            depth += 1;
            scope = parent;
        }
        depth
    }

    /// Opens a child of the current scope and makes it current.
    pub fn push_scope(&mut self) -> ScopeId {
        let id = ScopeId(self.scopes.len());
        self.scopes.push(Scope { parent:   Some(self.current),
                                 bindings: HashMap::new(), });
        self.current = id;
        id
    }

    /// Discards the current scope and its bindings, returning to its parent.
    ///
    /// Returns `false` and does nothing when the current scope is the root.
    pub fn pop_scope(&mut self) -> bool {
        let Some(parent) = self.scopes[self.current.0].parent else {
            return false;
        };
        self.scopes.truncate(self.current.0);
        self.current = parent;
        true
    }

    /// Binds a new mutable variable in the current scope.
    ///
    /// # Errors
    /// [`EnvironmentError::AlreadyDeclared`] if the current scope already has
    /// a binding for `name`. Bindings in enclosing scopes are shadowed, not
    /// rejected.
    pub fn declare(&mut self, name: &str, value: Value) -> Result<Value, EnvironmentError> {
        self.bind(name, value, Mutability::Mutable)
    }

    /// Binds a new constant in the current scope.
    ///
    /// # Errors
    /// Same as [`declare`](Self::declare).
    pub fn declare_constant(&mut self, name: &str, value: Value) -> Result<Value, EnvironmentError> {
        self.bind(name, value, Mutability::Constant)
    }

    /// Reads the nearest binding of `name`.
    ///
    /// # Errors
    /// [`EnvironmentError::Undeclared`] if no enclosing scope binds `name`.
    pub fn get(&self, name: &str) -> Result<Value, EnvironmentError> {
        let scope = self.resolve(name)
                        .ok_or_else(|| EnvironmentError::Undeclared { name: name.to_string() })?;
        Ok(self.scopes[scope.0].bindings[name].value.clone())
    }

    /// Replaces the value of the nearest binding of `name`.
    ///
    /// Never creates a binding.
    ///
    /// # Errors
    /// [`EnvironmentError::Undeclared`] if no enclosing scope binds `name`,
    /// [`EnvironmentError::ConstantReassignment`] if that binding is constant.
    pub fn set(&mut self, name: &str, value: Value) -> Result<Value, EnvironmentError> {
        let scope = self.resolve(name)
                        .ok_or_else(|| EnvironmentError::Undeclared { name: name.to_string() })?;
        let binding = self.scopes[scope.0].bindings
                                          .get_mut(name)
                                          .ok_or_else(|| EnvironmentError::Undeclared { name: name.to_string() })?;
        if binding.mutability == Mutability::Constant {
            return Err(EnvironmentError::ConstantReassignment { name: name.to_string() });
        }
        binding.value = value.clone();
        Ok(value)
    }

    /// Finds the innermost scope that binds `name`.
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<ScopeId> {
        let mut scope = Some(self.current);
        while let Some(id) = scope {
            let record = &self.scopes[id.0];
            if record.bindings.contains_key(name) {
                return Some(id);
            }
            scope = record.parent;
        }
        None
    }

    fn bind(&mut self,
            name: &str,
            value: Value,
            mutability: Mutability)
            -> Result<Value, EnvironmentError> {
        let bindings = &mut self.scopes[self.current.0].bindings;
        if bindings.contains_key(name) {
            return Err(EnvironmentError::AlreadyDeclared { name: name.to_string() });
        }
        bindings.insert(name.to_string(),
                        Binding { value: value.clone(),
                                  mutability });
        Ok(value)
    }
}
