use std::collections::HashMap;
use std::ops::{Deref, DerefMut};

/// One level of the lexical environment.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct Scope {
    pub store: HashMap<String, f64>,
}

/// Stack of scopes, innermost last.
///
/// The global scope is created with the environment and can never be popped:
/// the only way to push a scope is [`Environment::enter_scope`], and the
/// returned guard pops exactly that scope when it goes out of scope, whether
/// the block finished normally, returned an error or panicked.
#[derive(Debug, Clone, PartialEq)]
pub struct Environment {
    scopes: Vec<Scope>,
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment {
    pub fn new() -> Self {
        Self {
            scopes: vec![Scope::default()]
        }
    }

    /// Number of live scopes, global included.
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.scopes.iter()
            .rev()
            .find_map(|scope| scope.store.get(name).copied())
    }

    /// Innermost binding of `name`, for in-place assignment.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut f64> {
        self.scopes.iter_mut()
            .rev()
            .find_map(|scope| scope.store.get_mut(name))
    }

    /// Binds `name` in the innermost scope. Returns `false` and leaves the
    /// environment untouched if that scope already binds it.
    pub fn declare(&mut self, name: &str, value: f64) -> bool {
        let Some(scope) = self.scopes.last_mut() else {
            return false;
        };

        if scope.store.contains_key(name) {
            return false;
        }

        scope.store.insert(name.to_string(), value);

        true
    }

    pub fn enter_scope(&mut self) -> ScopeGuard<'_> {
        self.scopes.push(Scope::default());
        tracing::trace!(depth = self.scopes.len(), "entered scope");

        ScopeGuard { env: self }
    }
}

/// A pushed block scope. Derefs to the whole [`Environment`] so lookups still
/// see outer scopes; dropping it pops the scope.
#[derive(Debug)]
pub struct ScopeGuard<'a> {
    env: &'a mut Environment,
}

impl Deref for ScopeGuard<'_> {
    type Target = Environment;

    fn deref(&self) -> &Self::Target {
        self.env
    }
}

impl DerefMut for ScopeGuard<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.env
    }
}

impl Drop for ScopeGuard<'_> {
    fn drop(&mut self) {
        debug_assert!(self.env.scopes.len() > 1, "the global scope is never popped");

        self.env.scopes.pop();
        tracing::trace!(depth = self.env.scopes.len(), "left scope");
    }
}
