//! Grouping insertion: when a binary node cannot be folded further and an operand is itself a
//! bare binary node, the operand is wrapped in parentheses so that the rendered text re-parses
//! without precedence ambiguity. This does not change evaluation, only the textual form.

use fx_parser::parser::ast::{binary::Binary, expr::Expr};
use crate::symbolic::build;

/// Wraps bare binary operands in parentheses. Already-wrapped operands are left alone, which
/// keeps the rule (and the whole pass) idempotent.
fn wrap_operands(expr: &Expr) -> Option<Expr> {
    let Expr::Binary(binary) = expr else { return None };
    let wrap_lhs = matches!(&*binary.lhs, Expr::Binary(_));
    let wrap_rhs = matches!(&*binary.rhs, Expr::Binary(_));
    if !wrap_lhs && !wrap_rhs {
        return None;
    }

    let lhs = if wrap_lhs {
        build::paren((*binary.lhs).clone())
    } else {
        (*binary.lhs).clone()
    };
    let rhs = if wrap_rhs {
        build::paren((*binary.rhs).clone())
    } else {
        (*binary.rhs).clone()
    };

    Some(Expr::Binary(Binary {
        lhs: Box::new(lhs),
        op: binary.op.clone(),
        rhs: Box::new(rhs),
        span: binary.span.clone(),
    }))
}

/// Applies the grouping rule.
pub fn all(expr: &Expr) -> Option<Expr> {
    wrap_operands(expr)
}
