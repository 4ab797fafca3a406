//! The variable environment.
//!
//! A single flat mapping from case-sensitive identifier to declared type
//! and current value. CFPL has no binding-introducing blocks, so there is
//! no scope nesting; IF and WHILE bodies read and write the same mapping.

use indexmap::IndexMap;

use cfpl_util::Type;

use crate::value::Value;

/// A declared variable: its type tag and current value.
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    pub ty: Type,
    pub value: Value,
}

/// The global environment of a running program.
#[derive(Debug, Default)]
pub struct Environment {
    vars: IndexMap<String, Variable>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a variable, replacing any previous declaration of the
    /// same name.
    pub fn declare(&mut self, name: &str, ty: Type, value: Value) {
        self.vars.insert(name.to_string(), Variable { ty, value });
    }

    /// Returns true if the name has been declared.
    pub fn contains(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }

    /// Looks up a declared variable.
    pub fn get(&self, name: &str) -> Option<&Variable> {
        self.vars.get(name)
    }

    /// Stores a new value into an existing variable. Returns false when
    /// the name was never declared.
    pub fn set_value(&mut self, name: &str, value: Value) -> bool {
        match self.vars.get_mut(name) {
            Some(var) => {
                var.value = value;
                true
            }
            None => false,
        }
    }

    /// An ordered snapshot of the current values, in declaration order.
    pub fn snapshot(&self) -> IndexMap<String, Value> {
        self.vars
            .iter()
            .map(|(name, var)| (name.clone(), var.value.clone()))
            .collect()
    }

    /// Removes every binding.
    pub fn clear(&mut self) {
        self.vars.clear();
    }
}
