//! Constant folding: nodes whose operands are all literals collapse to a single literal.
//!
//! Folding uses the same domain rules as evaluation. A fold that would be a domain error (such
//! as `1/0`) is left unfolded rather than inventing a value.

use fx_parser::parser::{ast::expr::Expr, token::op::UnaryOpKind};
use crate::{
    funcs,
    numerical::{ctxt::Ctxt, eval::{self, Eval}},
    symbolic::build,
};
use super::literal_value;

/// `lit op lit` folds to a literal.
fn binary(expr: &Expr) -> Option<Expr> {
    let Expr::Binary(binary) = expr else { return None };
    let lhs = literal_value(&binary.lhs)?;
    let rhs = literal_value(&binary.rhs)?;
    eval::eval_operands(binary.op.kind, lhs, rhs).map(build::num)
}

/// `-lit` and `!lit` fold to a literal.
fn unary(expr: &Expr) -> Option<Expr> {
    let Expr::Unary(unary) = expr else { return None };
    let operand = literal_value(&unary.operand)?;
    match unary.op.kind {
        UnaryOpKind::Neg => Some(build::num(-operand)),
        UnaryOpKind::Factorial => eval::factorial(operand).map(build::num),
    }
}

/// `|lit|` folds to a literal.
fn abs(expr: &Expr) -> Option<Expr> {
    let Expr::Abs(abs) = expr else { return None };
    literal_value(&abs.expr).map(|value| build::num(value.abs()))
}

/// A function applied to a literal folds to a literal.
fn call(expr: &Expr) -> Option<Expr> {
    let Expr::Call(call) = expr else { return None };
    let arg = literal_value(&call.arg)?;
    let value = funcs::lookup(&call.name.name)?.eval(arg);
    value.is_finite().then(|| build::num(value))
}

/// A summation whose bounds and body are all literals folds to a literal.
fn sigma(expr: &Expr) -> Option<Expr> {
    let Expr::Sigma(sigma) = expr else { return None };
    literal_value(&sigma.start)?;
    literal_value(&sigma.end)?;
    literal_value(&sigma.body)?;
    sigma.eval(&Ctxt::default(), 0.0).map(build::num)
}

/// Applies all folding rules.
pub fn all(expr: &Expr) -> Option<Expr> {
    binary(expr)
        .or_else(|| unary(expr))
        .or_else(|| abs(expr))
        .or_else(|| call(expr))
        .or_else(|| sigma(expr))
}
