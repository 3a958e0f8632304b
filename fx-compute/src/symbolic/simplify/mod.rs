//! Algebraic simplification of expression trees.
//!
//! Simplification is a bottom-up structural rewrite: children are simplified first, then the
//! rules in [`rules`] are applied to the node until none of them fire. The pass terminates and
//! is idempotent: simplifying an already-simplified tree returns it unchanged. Rewrites never
//! change the value of the expression at any point where both trees are defined.

pub mod rules;

use fx_parser::parser::ast::{
    abs::Abs,
    binary::Binary,
    call::Call,
    expr::Expr,
    paren::Paren,
    sigma::Sigma,
    unary::Unary,
};

/// Simplifies the given expression.
pub fn simplify(expr: &Expr) -> Expr {
    let mut current = simplify_children(expr);
    while let Some(next) = rules::all(&current) {
        current = next;
    }
    current
}

/// Rebuilds the node with all of its children simplified.
fn simplify_children(expr: &Expr) -> Expr {
    match expr {
        Expr::Literal(_) | Expr::Symbol(_) | Expr::Error(_) => expr.clone(),
        Expr::Paren(paren) => Expr::Paren(Paren {
            expr: Box::new(simplify(&paren.expr)),
            span: paren.span.clone(),
        }),
        Expr::Abs(abs) => Expr::Abs(Abs {
            expr: Box::new(simplify(&abs.expr)),
            span: abs.span.clone(),
        }),
        Expr::Unary(unary) => Expr::Unary(Unary {
            operand: Box::new(simplify(&unary.operand)),
            op: unary.op.clone(),
            span: unary.span.clone(),
        }),
        Expr::Binary(binary) => Expr::Binary(Binary {
            lhs: Box::new(simplify(&binary.lhs)),
            op: binary.op.clone(),
            rhs: Box::new(simplify(&binary.rhs)),
            span: binary.span.clone(),
        }),
        Expr::Call(call) => Expr::Call(Call {
            name: call.name.clone(),
            arg: Box::new(simplify(&call.arg)),
            span: call.span.clone(),
        }),
        Expr::Sigma(sigma) => Expr::Sigma(Sigma {
            index: sigma.index.clone(),
            start: Box::new(simplify(&sigma.start)),
            end: Box::new(simplify(&sigma.end)),
            body: Box::new(simplify(&sigma.body)),
            span: sigma.span.clone(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use fx_parser::parser::{ast::{expr::Expr, literal::LitNum}, Parser};
    use pretty_assertions::assert_eq;
    use crate::{
        numerical::{ctxt::Ctxt, eval::Eval},
        symbolic::{build, derivative::derivative},
    };
    use super::simplify;

    /// Parses and simplifies the source.
    fn simplify_str(source: &str) -> Expr {
        let expr = Parser::new(source).try_parse_full::<Expr>().unwrap();
        simplify(&expr)
    }

    #[test]
    fn constant_folding() {
        assert_eq!(simplify_str("2 * 3"), build::num(6.0));
        assert_eq!(simplify_str("1 + 2 * 3 - 4"), build::num(3.0));
        assert_eq!(simplify_str("2^3"), build::num(8.0));
        assert_eq!(simplify_str("cos(0)"), build::num(1.0));
        assert_eq!(simplify_str("!4"), build::num(24.0));
        assert_eq!(simplify_str("|3 - 5|"), build::num(2.0));
    }

    #[test]
    fn folding_never_invents_values_for_domain_errors() {
        // 1/0 stays unfolded rather than becoming a number
        let simplified = simplify_str("1/0");
        assert!(matches!(simplified, Expr::Binary(_)));
    }

    #[test]
    fn identity_elimination() {
        assert_eq!(simplify_str("x + 0").to_string(), "x");
        assert_eq!(simplify_str("0 + x").to_string(), "x");
        assert_eq!(simplify_str("x - 0").to_string(), "x");
        assert_eq!(simplify_str("0 - x").to_string(), "-x");
        assert_eq!(simplify_str("x * 1").to_string(), "x");
        assert_eq!(simplify_str("1x").to_string(), "x");
        assert_eq!(simplify_str("x * 0").to_string(), "0");
        assert_eq!(simplify_str("0 * x").to_string(), "0");
        assert_eq!(simplify_str("0 / x").to_string(), "0");
        assert_eq!(simplify_str("x / 1").to_string(), "x");
        assert_eq!(simplify_str("x^1").to_string(), "x");
    }

    #[test]
    fn summation_of_constants_folds() {
        assert_eq!(simplify_str("sigma(n = 1, 3, 2)"), build::num(6.0));
    }

    #[test]
    fn constant_reassociation() {
        // c * (k * e) collapses the two literal factors, wherever the literals sit
        let x = || Parser::new("x").try_parse_full::<Expr>().unwrap();
        let expr = build::mul(build::num(2.0), build::mul(build::num(3.0), x()));
        assert_eq!(simplify(&expr).to_string(), "6x");

        let expr = build::mul(build::mul(x(), build::num(3.0)), build::num(2.0));
        assert_eq!(simplify(&expr).to_string(), "6x");
    }

    #[test]
    fn reciprocal_collapsing() {
        let x = || Parser::new("x").try_parse_full::<Expr>().unwrap();
        let expr = build::div(build::num(2.0), build::div(build::num(1.0), x()));
        assert_eq!(simplify(&expr).to_string(), "2x");
    }

    #[test]
    fn grouping_insertion_disambiguates_rendering() {
        // an unfoldable binary operand is wrapped so the rendering re-parses unambiguously
        let simplified = simplify_str("x*2 + 3");
        assert_eq!(simplified.to_string(), "(x*2) + 3");
    }

    #[test]
    fn derivative_of_x_squared_simplifies_to_coefficient_form() {
        let expr = Parser::new("x^2").try_parse_full::<Expr>().unwrap();
        let simplified = simplify(&derivative(&expr).unwrap());
        assert_eq!(simplified.to_string(), "2x");
    }

    #[test]
    fn derivative_of_x_simplifies_to_one() {
        let expr = Parser::new("x^1").try_parse_full::<Expr>().unwrap();
        let simplified = simplify(&derivative(&expr).unwrap());
        assert_eq!(simplified, build::num(1.0));
    }

    #[test]
    fn idempotence() {
        for source in [
            "2x^2 + sin(x) - 3",
            "x*1 + 0",
            "sigma(n = 1, 3, n*x)",
            "(1 + 2)*x",
            "x^2/(x + 2)",
            "|x - 1| + pi",
        ] {
            let once = simplify_str(source);
            let twice = simplify(&once);
            assert_eq!(once, twice, "simplify is not idempotent for `{source}`");
        }
    }

    #[test]
    fn simplification_preserves_values() {
        for source in [
            "2x^2 + sin(x) - 3",
            "(1 + 2)*x + 0",
            "x*1 / (x + 2)",
            "sigma(n = 1, 4, n*x)",
        ] {
            let expr = Parser::new(source).try_parse_full::<Expr>().unwrap();
            let simplified = simplify(&expr);
            let ctxt = Ctxt::default();
            for x in [-2.0, -0.5, 0.0, 1.0, 3.25] {
                assert_eq!(
                    expr.eval(&ctxt, x),
                    simplified.eval(&ctxt, x),
                    "value changed for `{source}` at x={x}",
                );
            }
        }
    }

    #[test]
    fn literal_spans_survive_when_nothing_applies() {
        let expr = Parser::new("42").try_parse_full::<Expr>().unwrap();
        assert_eq!(simplify(&expr), Expr::Literal(LitNum { value: 42.0, span: 0..2 }));
    }
}
