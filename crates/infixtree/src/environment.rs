//! Variable bindings supplied to the evaluator

use indexmap::IndexMap;

use crate::{Result, TreeError, Value};

/// Mapping from variable name to value for one evaluation.
///
/// Callers build a fresh environment for each top-level evaluation; the
/// evaluator only reads it. Bindings keep their definition order.
///
/// # Example
///
/// ```
/// use infixtree::{Environment, Value};
///
/// let mut env = Environment::new();
/// env.define("x", Value::Int(7));
///
/// assert_eq!(env.get("x"), Some(&Value::Int(7)));
/// assert_eq!(env.get("y"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Environment {
    bindings: IndexMap<String, Value>,
}

impl Environment {
    /// Create a new empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name`, replacing any previous value.
    pub fn define(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.bindings.insert(name.into(), value.into());
    }

    /// Builder form of [`Environment::define`].
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.define(name, value);
        self
    }

    /// Look up a binding.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name)
    }

    /// Look up a binding, failing with [`TreeError::UnboundVariable`].
    pub fn lookup(&self, name: &str) -> Result<&Value> {
        self.bindings
            .get(name)
            .ok_or_else(|| TreeError::UnboundVariable {
                name: name.to_string(),
            })
    }

    /// Check if a name is bound.
    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    /// Number of bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Check if there are no bindings.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Iterate over bindings in definition order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.bindings.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Environment {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut env = Environment::new();
        for (name, value) in iter {
            env.define(name, value);
        }
        env
    }
}
