//! Lexical environments.
//!
//! An environment is a handle to one scope in a tree of scopes. Scopes are
//! shared by reference: closures keep a handle to their defining scope, so
//! later mutations through any handle are visible to every holder.

use rustc_hash::FxHashMap;
use std::cell::RefCell;
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

use fwjs_ir::Name;

use crate::Value;

/// Error returned by `Environment::create_var`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeclareError {
    /// The name is already bound in this exact scope.
    AlreadyDeclared,
}

/// A single-threaded, reference-counted cell.
///
/// Wraps `Rc<RefCell<T>>` so that every scope allocation goes through
/// `LocalScope::new`. Not `Send`.
#[repr(transparent)]
pub struct LocalScope<T>(Rc<RefCell<T>>);

impl<T> LocalScope<T> {
    #[inline]
    pub fn new(value: T) -> Self {
        LocalScope(Rc::new(RefCell::new(value)))
    }
}

impl<T> Clone for LocalScope<T> {
    #[inline]
    fn clone(&self) -> Self {
        LocalScope(Rc::clone(&self.0))
    }
}

impl<T: fmt::Debug> fmt::Debug for LocalScope<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("LocalScope").field(&self.0).finish()
    }
}

impl<T> Deref for LocalScope<T> {
    type Target = RefCell<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Bindings of one scope plus the link to its parent.
#[derive(Debug, Default)]
pub struct Scope {
    bindings: FxHashMap<Name, Value>,
    parent: Option<Environment>,
}

/// Handle to a scope in the environment tree.
///
/// Cloning the handle shares the scope. The parent link is fixed when the
/// scope is created, so the tree can never contain a cycle of scopes.
#[derive(Clone, Debug, Default)]
pub struct Environment {
    scope: LocalScope<Scope>,
}

impl Default for LocalScope<Scope> {
    fn default() -> Self {
        LocalScope::new(Scope::default())
    }
}

impl Environment {
    /// Create a root environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new scope whose parent is `self`.
    pub fn child(&self) -> Self {
        Environment {
            scope: LocalScope::new(Scope {
                bindings: FxHashMap::default(),
                parent: Some(self.clone()),
            }),
        }
    }

    /// Bind `name` in this scope.
    ///
    /// Fails if `name` is already bound here; bindings in ancestors are
    /// shadowed, not checked.
    pub fn create_var(&self, name: Name, value: Value) -> Result<(), DeclareError> {
        let mut scope = self.scope.borrow_mut();
        if scope.bindings.contains_key(&name) {
            return Err(DeclareError::AlreadyDeclared);
        }
        scope.bindings.insert(name, value);
        Ok(())
    }

    /// Bind `name` in this scope, replacing any existing local binding.
    pub(crate) fn bind_fresh(&self, name: Name, value: Value) {
        self.scope.borrow_mut().bindings.insert(name, value);
    }

    /// Find the nearest binding of `name`.
    pub fn lookup(&self, name: Name) -> Option<Value> {
        let mut current = self.clone();
        loop {
            let parent = {
                let scope = current.scope.borrow();
                if let Some(value) = scope.bindings.get(&name) {
                    return Some(value.clone());
                }
                scope.parent.clone()?
            };
            current = parent;
        }
    }

    /// Value of the nearest binding of `name`, or `Null` when unbound.
    pub fn resolve_var(&self, name: Name) -> Value {
        self.lookup(name).unwrap_or(Value::Null)
    }

    /// Overwrite the nearest binding of `name`.
    ///
    /// When no scope binds `name`, a new binding is created in the root.
    pub fn update_var(&self, name: Name, value: Value) {
        let mut current = self.clone();
        loop {
            let parent = {
                let mut scope = current.scope.borrow_mut();
                if let Some(slot) = scope.bindings.get_mut(&name) {
                    *slot = value;
                    return;
                }
                let Some(parent) = scope.parent.clone() else {
                    scope.bindings.insert(name, value);
                    return;
                };
                parent
            };
            current = parent;
        }
    }

    /// Whether `name` is bound directly in this scope.
    #[cfg(test)]
    pub(crate) fn contains_local(&self, name: Name) -> bool {
        self.scope.borrow().bindings.contains_key(&name)
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
