//! Builtin functions that are not trigonometric.

use crate::symbolic::build::{call, div, num};
use fx_parser::parser::ast::Expr;
use super::builtin;

builtin!(Abs,
    |n: f64| n.abs(),
    |arg: &Expr| call("sgn", arg.clone()));

builtin!(
    /// The sign of the argument: `-1`, `0`, or `1`.
    Sgn,
    |n: f64| if n == 0.0 { 0.0 } else { n.signum() },
    |_: &Expr| num(0.0));

builtin!(Ln,
    |n: f64| n.ln(),
    |arg: &Expr| div(num(1.0), arg.clone()));
