//! Numeric evaluation of expression trees.
//!
//! [`Eval::eval`] returns `Option<f64>`, where `None` marks a domain error: division by a
//! denominator within [`DIV_EPSILON`] of zero, a power of a negative base with no real value, a
//! factorial below one, or an out-of-domain function argument. Domain errors propagate through
//! every composite node, and non-finite intermediate values normalize to `None`, so an undefined
//! result can never re-enter arithmetic.

mod binary;
mod call;
mod literal;
mod paren;
mod sigma;
mod unary;

pub use binary::DIV_EPSILON;
pub(crate) use binary::eval_operands;
pub(crate) use unary::factorial;

use fx_parser::parser::ast::Expr;
use super::ctxt::Ctxt;

/// Any node that can be numerically evaluated.
pub trait Eval {
    /// Evaluates the node with the given context and value of the independent variable. Returns
    /// [`None`] on a domain error.
    fn eval(&self, ctxt: &Ctxt, x: f64) -> Option<f64>;
}

/// Normalizes non-finite values to a domain error.
pub(crate) fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

impl Eval for Expr {
    fn eval(&self, ctxt: &Ctxt, x: f64) -> Option<f64> {
        match self {
            Expr::Literal(literal) => literal.eval(ctxt, x),
            Expr::Symbol(symbol) => symbol.eval(ctxt, x),
            Expr::Paren(paren) => paren.eval(ctxt, x),
            Expr::Abs(abs) => abs.eval(ctxt, x),
            Expr::Unary(unary) => unary.eval(ctxt, x),
            Expr::Binary(binary) => binary.eval(ctxt, x),
            Expr::Call(call) => call.eval(ctxt, x),
            Expr::Sigma(sigma) => sigma.eval(ctxt, x),
            Expr::Error(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_float_eq::assert_float_absolute_eq;
    use fx_parser::parser::{ast::Expr, Parser};
    use super::*;

    /// Parses the source and evaluates it at the given `x`.
    fn eval_str(source: &str, x: f64) -> Option<f64> {
        let expr = Parser::new(source).try_parse_full::<Expr>().unwrap();
        expr.eval(&Ctxt::default(), x)
    }

    #[test]
    fn literals_evaluate_to_themselves() {
        for x in [-10.0, 0.0, 4.5] {
            assert_eq!(eval_str("16", x), Some(16.0));
            assert_eq!(eval_str("3.25", x), Some(3.25));
        }
    }

    #[test]
    fn constants_resolve_through_the_context() {
        assert_float_absolute_eq!(eval_str("pi", 0.0).unwrap(), std::f64::consts::PI, 1e-15);
        assert_float_absolute_eq!(eval_str("2e", 0.0).unwrap(), 2.0 * std::f64::consts::E, 1e-15);
    }

    #[test]
    fn implicit_and_explicit_multiplication_evaluate_alike() {
        for x in [-3.0, -0.5, 0.0, 1.0, 7.25] {
            assert_eq!(eval_str("2x", x), eval_str("2*x", x));
            assert_eq!(eval_str("x(x + 1)", x), eval_str("x*(x + 1)", x));
        }
    }

    #[test]
    fn division_by_zero_is_a_domain_error() {
        assert_eq!(eval_str("1/0", 0.0), None);
        assert_eq!(eval_str("1/(x - x)", 3.0), None);
        assert_eq!(eval_str("x/x", 5.0), Some(1.0));
    }

    #[test]
    fn domain_errors_propagate() {
        assert_eq!(eval_str("2 + 1/0", 0.0), None);
        assert_eq!(eval_str("|1/0|", 0.0), None);
        assert_eq!(eval_str("sin(1/0)", 0.0), None);
    }

    #[test]
    fn odd_roots_of_negative_bases_are_real() {
        let cbrt = eval_str("(0 - 8)^(1/3)", 0.0).unwrap();
        assert_float_absolute_eq!(cbrt, -2.0, 1e-9);
    }

    #[test]
    fn even_roots_of_negative_bases_are_domain_errors() {
        assert_eq!(eval_str("(0 - 4)^(1/2)", 0.0), None);
    }

    #[test]
    fn integer_powers_of_negative_bases_are_fine() {
        assert_eq!(eval_str("(0 - 2)^3", 0.0), Some(-8.0));
        assert_eq!(eval_str("(0 - 2)^2", 0.0), Some(4.0));
    }

    #[test]
    fn factorial() {
        assert_eq!(eval_str("!5", 0.0), Some(120.0));
        assert_eq!(eval_str("!1", 0.0), Some(1.0));
        // rounded to the nearest integer
        assert_eq!(eval_str("!4.2", 0.0), Some(24.0));
        // undefined below one
        assert_eq!(eval_str("!0.5", 0.0), None);
        assert_eq!(eval_str("!(0 - 3)", 0.0), None);
    }

    #[test]
    fn functions_apply_to_their_argument() {
        assert_float_absolute_eq!(eval_str("sin(pi/2)", 0.0).unwrap(), 1.0, 1e-12);
        assert_float_absolute_eq!(eval_str("cos(0)", 0.0).unwrap(), 1.0, 1e-12);
        assert_float_absolute_eq!(eval_str("ln(e)", 0.0).unwrap(), 1.0, 1e-12);
        assert_eq!(eval_str("sgn(0 - 7)", 0.0), Some(-1.0));
    }

    #[test]
    fn out_of_domain_function_arguments_fail() {
        assert_eq!(eval_str("ln(0 - 1)", 0.0), None);
        assert_eq!(eval_str("asin(2)", 0.0), None);
    }

    #[test]
    fn summation() {
        assert_eq!(eval_str("sigma(n = 1, 5, n)", 0.0), Some(15.0));
        assert_eq!(eval_str("sigma(n = 1, 4, n^2)", 0.0), Some(30.0));
        // the body sees the independent variable too
        assert_eq!(eval_str("sigma(n = 1, 3, n*x)", 2.0), Some(12.0));
        // an empty range sums to zero
        assert_eq!(eval_str("sigma(n = 5, 1, n)", 0.0), Some(0.0));
    }

    #[test]
    fn summation_binding_does_not_leak() {
        let expr = Parser::new("sigma(n = 1, 5, n)").try_parse_full::<Expr>().unwrap();
        let ctxt = Ctxt::default();
        expr.eval(&ctxt, 0.0).unwrap();
        assert_eq!(ctxt.get_var("n"), None);
    }

    #[test]
    fn error_nodes_do_not_evaluate() {
        let (expr, errors) = Parser::new("sigma(n 1, 5, n)").parse_full_recoverable::<Expr>();
        assert!(!errors.is_empty());
        assert_eq!(expr.eval(&Ctxt::default(), 0.0), None);
    }
}
