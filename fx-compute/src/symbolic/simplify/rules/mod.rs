//! Implementation of the simplification rules.
//!
//! Each rule is a function that takes the expression to simplify as an argument, and returns
//! `Some(expr)` with the rewritten expression if the rule applies, or `None` if it does not.
//! Rules assume the children of the expression are already simplified.

pub mod fold;
pub mod grouping;
pub mod identity;
pub mod reassociate;

use fx_parser::parser::ast::{expr::Expr, literal::LitNum};

/// Returns the value of the expression if it is a numeric literal.
pub(crate) fn literal_value(expr: &Expr) -> Option<f64> {
    match expr {
        Expr::Literal(LitNum { value, .. }) => Some(*value),
        _ => None,
    }
}

/// Applies all rules, returning the first rewrite that fires.
pub fn all(expr: &Expr) -> Option<Expr> {
    fold::all(expr)
        .or_else(|| identity::all(expr))
        .or_else(|| reassociate::all(expr))
        .or_else(|| grouping::all(expr))
}
