//! Identity elimination: operations with a neutral or absorbing literal operand collapse.

use fx_parser::parser::{ast::expr::Expr, token::op::BinOpKind};
use crate::symbolic::build;
use super::literal_value;

/// `x + 0`, `x - 0`, `x * 1`, `x * 0`, `0 / x`, `x / 1`, and `x ^ 1` (and their mirrored forms
/// where they are valid) collapse to one operand.
fn binary(expr: &Expr) -> Option<Expr> {
    let Expr::Binary(binary) = expr else { return None };
    let lhs = literal_value(&binary.lhs);
    let rhs = literal_value(&binary.rhs);

    match binary.op.kind {
        BinOpKind::Add => {
            if lhs == Some(0.0) {
                return Some((*binary.rhs).clone());
            }
            if rhs == Some(0.0) {
                return Some((*binary.lhs).clone());
            }
        },
        BinOpKind::Sub => {
            if rhs == Some(0.0) {
                return Some((*binary.lhs).clone());
            }
            if lhs == Some(0.0) {
                return Some(build::neg((*binary.rhs).clone()));
            }
        },
        BinOpKind::Mul => {
            if lhs == Some(1.0) {
                return Some((*binary.rhs).clone());
            }
            if rhs == Some(1.0) {
                return Some((*binary.lhs).clone());
            }
            if lhs == Some(0.0) || rhs == Some(0.0) {
                return Some(build::num(0.0));
            }
        },
        BinOpKind::Div => {
            if lhs == Some(0.0) {
                return Some(build::num(0.0));
            }
            if rhs == Some(1.0) {
                return Some((*binary.lhs).clone());
            }
        },
        BinOpKind::Exp => {
            if rhs == Some(1.0) {
                return Some((*binary.lhs).clone());
            }
        },
    }

    None
}

/// Parentheses around an atom are redundant.
fn paren(expr: &Expr) -> Option<Expr> {
    let Expr::Paren(paren) = expr else { return None };
    match &*paren.expr {
        inner @ (Expr::Literal(_) | Expr::Symbol(_) | Expr::Paren(_)) => Some(inner.clone()),
        _ => None,
    }
}

/// Applies all identity rules.
pub fn all(expr: &Expr) -> Option<Expr> {
    binary(expr).or_else(|| paren(expr))
}
