//! The builtin functions available to every expression.
//!
//! Each function is a unit struct implementing [`Builtin`]: a numeric implementation used by
//! evaluation, and a symbolic derivative builder used by differentiation. The derivative builder
//! produces the closed-form derivative of the function applied to its argument; the chain-rule
//! factor for the argument itself is applied by the caller.
//!
//! The table is built lazily and consumed read-only. The parser's name list
//! ([`fx_parser::names::FUNCTIONS`]) must list exactly the names registered here; a test keeps
//! the two in sync.

pub mod miscellaneous;
pub mod trigonometry;

use fx_parser::parser::ast::Expr;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// A builtin unary function.
pub trait Builtin: Send + Sync {
    /// Numerically applies the function. Out-of-domain arguments produce a non-finite value,
    /// which evaluation normalizes to a domain error.
    fn eval(&self, arg: f64) -> f64;

    /// Builds the symbolic derivative of the function applied to the given argument.
    fn derivative(&self, arg: &Expr) -> Expr;
}

/// Generates a unit struct implementing [`Builtin`] from a numeric implementation and a
/// derivative builder.
macro_rules! builtin {
    ($(#[$meta:meta])* $upname:ident, $eval:expr, $deriv:expr) => {
        $(#[$meta])*
        #[derive(Debug)]
        pub struct $upname;

        impl $crate::funcs::Builtin for $upname {
            fn eval(&self, arg: f64) -> f64 {
                #[allow(clippy::redundant_closure_call)]
                ($eval)(arg)
            }

            fn derivative(&self, arg: &fx_parser::parser::ast::Expr) -> fx_parser::parser::ast::Expr {
                #[allow(clippy::redundant_closure_call)]
                ($deriv)(arg)
            }
        }
    };
}

pub(crate) use builtin;

static ALL: Lazy<HashMap<&'static str, &'static dyn Builtin>> = Lazy::new(|| {
    use miscellaneous::*;
    use trigonometry::*;

    macro_rules! build {
        ($($name:literal $upname:ident),* $(,)?) => {
            [
                $(
                    ($name, &$upname as &'static dyn Builtin),
                )*
            ]
                .into_iter()
                .collect()
        };
    }

    build! {
        "sin" Sin,
        "cos" Cos,
        "tan" Tan,
        "asin" Asin,
        "acos" Acos,
        "atan" Atan,
        "sec" Sec,
        "csc" Csc,
        "cot" Cot,
        "asec" Asec,
        "acsc" Acsc,
        "acot" Acot,
        "abs" Abs,
        "sgn" Sgn,
        "ln" Ln,
    }
});

/// Looks up a builtin function by name.
pub fn lookup(name: &str) -> Option<&'static dyn Builtin> {
    ALL.get(name).copied()
}

/// Returns the full table of builtin functions.
pub fn all() -> &'static HashMap<&'static str, &'static dyn Builtin> {
    &ALL
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The parser's function name list and this table must agree.
    #[test]
    fn names_in_sync_with_parser() {
        for &name in fx_parser::names::FUNCTIONS {
            assert!(lookup(name).is_some(), "function `{name}` has no implementation");
        }
        for &name in all().keys() {
            assert!(fx_parser::names::is_function(name), "function `{name}` is unknown to the parser");
        }
    }
}
