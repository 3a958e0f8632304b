//! Constant re-association: two literal factors separated by a non-literal collapse into a
//! single literal coefficient, and dividing by a unit-numerator fraction becomes a product.

use fx_parser::parser::{ast::expr::Expr, token::op::BinOpKind};
use crate::symbolic::build;
use super::literal_value;

/// `c * (k * e)` and `(e * k) * c` (with the literal factor on either side of the inner product)
/// collapse to `(c*k) * e`.
fn nested_product(expr: &Expr) -> Option<Expr> {
    let Expr::Binary(outer) = expr else { return None };
    if outer.op.kind != BinOpKind::Mul {
        return None;
    }

    if let (Some(c), Expr::Binary(inner)) = (literal_value(&outer.lhs), &*outer.rhs) {
        if inner.op.kind == BinOpKind::Mul {
            if let Some(k) = literal_value(&inner.lhs) {
                return Some(build::mul(build::num(c * k), (*inner.rhs).clone()));
            }
            if let Some(k) = literal_value(&inner.rhs) {
                return Some(build::mul(build::num(c * k), (*inner.lhs).clone()));
            }
        }
    }

    if let (Some(c), Expr::Binary(inner)) = (literal_value(&outer.rhs), &*outer.lhs) {
        if inner.op.kind == BinOpKind::Mul {
            if let Some(k) = literal_value(&inner.lhs) {
                return Some(build::mul(build::num(c * k), (*inner.rhs).clone()));
            }
            if let Some(k) = literal_value(&inner.rhs) {
                return Some(build::mul(build::num(c * k), (*inner.lhs).clone()));
            }
        }
    }

    None
}

/// `c / (1/e)` collapses to `c * e`.
fn reciprocal(expr: &Expr) -> Option<Expr> {
    let Expr::Binary(outer) = expr else { return None };
    if outer.op.kind != BinOpKind::Div {
        return None;
    }

    let c = literal_value(&outer.lhs)?;
    let Expr::Binary(inner) = &*outer.rhs else { return None };
    if inner.op.kind == BinOpKind::Div && literal_value(&inner.lhs) == Some(1.0) {
        return Some(build::mul(build::num(c), (*inner.rhs).clone()));
    }

    None
}

/// Applies all re-association rules.
pub fn all(expr: &Expr) -> Option<Expr> {
    nested_product(expr).or_else(|| reciprocal(expr))
}
