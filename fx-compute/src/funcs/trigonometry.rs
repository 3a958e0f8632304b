//! The trigonometric functions, their reciprocals, and their inverses.

use crate::symbolic::build::{abs, add, call, div, mul, neg, num, pow, sub};
use fx_parser::parser::ast::Expr;
use super::builtin;

builtin!(Sin,
    |n: f64| n.sin(),
    |arg: &Expr| call("cos", arg.clone()));

builtin!(Cos,
    |n: f64| n.cos(),
    |arg: &Expr| neg(call("sin", arg.clone())));

builtin!(Tan,
    |n: f64| n.tan(),
    |arg: &Expr| pow(call("sec", arg.clone()), num(2.0)));

builtin!(Asin,
    |n: f64| n.asin(),
    |arg: &Expr| div(num(1.0), pow(sub(num(1.0), pow(arg.clone(), num(2.0))), num(0.5))));

builtin!(Acos,
    |n: f64| n.acos(),
    |arg: &Expr| neg(div(num(1.0), pow(sub(num(1.0), pow(arg.clone(), num(2.0))), num(0.5)))));

builtin!(Atan,
    |n: f64| n.atan(),
    |arg: &Expr| div(num(1.0), add(num(1.0), pow(arg.clone(), num(2.0)))));

builtin!(Sec,
    |n: f64| n.cos().recip(),
    |arg: &Expr| mul(call("sec", arg.clone()), call("tan", arg.clone())));

builtin!(Csc,
    |n: f64| n.sin().recip(),
    |arg: &Expr| mul(neg(call("csc", arg.clone())), call("cot", arg.clone())));

builtin!(Cot,
    |n: f64| n.cos() / n.sin(),
    |arg: &Expr| neg(pow(call("csc", arg.clone()), num(2.0))));

builtin!(Asec,
    |n: f64| n.recip().acos(),
    |arg: &Expr| div(
        num(1.0),
        mul(abs(arg.clone()), pow(sub(pow(arg.clone(), num(2.0)), num(1.0)), num(0.5))),
    ));

builtin!(Acsc,
    |n: f64| n.recip().asin(),
    |arg: &Expr| neg(div(
        num(1.0),
        mul(abs(arg.clone()), pow(sub(pow(arg.clone(), num(2.0)), num(1.0)), num(0.5))),
    )));

builtin!(Acot,
    |n: f64| n.recip().atan(),
    |arg: &Expr| neg(div(num(1.0), add(num(1.0), pow(arg.clone(), num(2.0))))));
