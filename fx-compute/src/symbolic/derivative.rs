//! Exact symbolic differentiation with respect to the independent variable.

use fx_parser::parser::{ast::{binary::Binary, expr::Expr, literal::LitNum}, token::op::{BinOpKind, UnaryOpKind}};
use crate::funcs;
use super::build;

/// Returns true if the expression is the literal `1`.
fn is_literal_one(expr: &Expr) -> bool {
    matches!(expr, Expr::Literal(LitNum { value, .. }) if *value == 1.0)
}

/// Computes the derivative of the given expression with respect to the independent variable.
///
/// Returns [`None`] when the expression has no derivative rule: summations, factorials, and
/// error placeholders are not differentiable, and neither is any tree containing one of them.
/// The result is not simplified beyond the power rule's exponent-one short-circuit; callers
/// normally run [`simplify`](super::simplify::simplify) on it afterwards.
pub fn derivative(expr: &Expr) -> Option<Expr> {
    match expr {
        Expr::Literal(_) => Some(build::num(0.0)),
        Expr::Symbol(symbol) => Some(build::num(if symbol.independent { 1.0 } else { 0.0 })),
        Expr::Paren(paren) => derivative(&paren.expr),
        Expr::Abs(abs) => {
            // chain rule, with the closed form of d|u|/du supplied by the builtin table
            let inner = derivative(&abs.expr)?;
            let outer = funcs::lookup("abs")?.derivative(&abs.expr);
            Some(build::mul(inner, outer))
        },
        Expr::Unary(unary) => match unary.op.kind {
            UnaryOpKind::Neg => Some(build::neg(derivative(&unary.operand)?)),
            UnaryOpKind::Factorial => None,
        },
        Expr::Binary(binary) => binary_derivative(binary),
        Expr::Call(call) => {
            let inner = derivative(&call.arg)?;
            let outer = funcs::lookup(&call.name.name)?.derivative(&call.arg);
            Some(build::mul(inner, outer))
        },
        Expr::Sigma(_) | Expr::Error(_) => None,
    }
}

fn binary_derivative(binary: &Binary) -> Option<Expr> {
    let lhs = &*binary.lhs;
    let rhs = &*binary.rhs;

    match binary.op.kind {
        BinOpKind::Add => Some(build::add(derivative(lhs)?, derivative(rhs)?)),
        BinOpKind::Sub => Some(build::sub(derivative(lhs)?, derivative(rhs)?)),
        // (LR)' = L'R + LR'
        BinOpKind::Mul => Some(build::add(
            build::mul(derivative(lhs)?, rhs.clone()),
            build::mul(lhs.clone(), derivative(rhs)?),
        )),
        // (L/R)' = (L'R - LR') / R^2
        BinOpKind::Div => Some(build::div(
            build::sub(
                build::mul(derivative(lhs)?, rhs.clone()),
                build::mul(lhs.clone(), derivative(rhs)?),
            ),
            build::pow(rhs.clone(), build::num(2.0)),
        )),
        BinOpKind::Exp => {
            if is_literal_one(rhs) {
                // L^1 is just L
                return derivative(lhs);
            }

            if matches!(lhs, Expr::Literal(_)) {
                // constant base: (c^R)' = R' * c^R * ln(c)
                Some(build::mul(
                    derivative(rhs)?,
                    build::mul(
                        Expr::Binary(binary.clone()),
                        build::call("ln", lhs.clone()),
                    ),
                ))
            } else {
                // generalized power rule: (L^R)' = L' * R * L^(R - 1)
                Some(build::mul(
                    derivative(lhs)?,
                    build::mul(
                        rhs.clone(),
                        build::pow(lhs.clone(), build::sub(rhs.clone(), build::num(1.0))),
                    ),
                ))
            }
        },
    }
}
