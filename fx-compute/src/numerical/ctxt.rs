//! The evaluation context: a value for every declared symbol.

use crate::consts;
use std::collections::HashMap;

/// A context to use when evaluating an expression, containing the values of declared symbols.
///
/// The independent variable is not part of the context; it is passed positionally to
/// [`Eval::eval`](super::eval::Eval::eval). The context only holds the declared constants and,
/// during summation, the bound index.
#[derive(Debug, Clone, PartialEq)]
pub struct Ctxt {
    vars: HashMap<String, f64>,
}

impl Default for Ctxt {
    fn default() -> Self {
        Self {
            vars: consts::CONSTANTS
                .iter()
                .map(|(name, value)| (name.to_string(), *value))
                .collect(),
        }
    }
}

impl Ctxt {
    /// Creates a new context with the builtin constants declared.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a variable in the context.
    pub fn add_var(&mut self, name: &str, value: f64) {
        self.vars.insert(name.to_string(), value);
    }

    /// Returns the value of the given variable, if it is declared.
    pub fn get_var(&self, name: &str) -> Option<f64> {
        self.vars.get(name).copied()
    }

    /// Resolves the value of a declared symbol.
    ///
    /// # Panics
    ///
    /// Panics if the symbol is not declared. The parser reports undeclared symbols as
    /// diagnostics before evaluation begins, so reaching this with an unknown name is a
    /// programming error, not a runtime condition.
    pub fn resolve(&self, name: &str) -> f64 {
        match self.get_var(name) {
            Some(value) => value,
            None => panic!("symbol `{name}` was not declared before evaluation"),
        }
    }

    /// Returns a copy of the context with the given variable declared. Summation uses this to
    /// bind its index without mutating the caller's context, so concurrent evaluations sharing a
    /// context never observe the binding.
    pub fn extended(&self, name: &str, value: f64) -> Self {
        let mut extended = self.clone();
        extended.add_var(name, value);
        extended
    }
}
