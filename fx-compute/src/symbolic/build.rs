//! Constructors for synthesized expression nodes.

use fx_parser::parser::{
    ast::{
        abs::Abs as AbsExpr,
        binary::Binary,
        call::Call,
        expr::Expr,
        literal::{LitNum, LitSym},
        paren::Paren,
        unary::Unary,
    },
    token::op::{BinOp, BinOpKind, UnaryOp, UnaryOpKind},
};

pub(crate) fn num(value: f64) -> Expr {
    Expr::Literal(LitNum { value, span: 0..0 })
}

pub(crate) fn binary(lhs: Expr, kind: BinOpKind, rhs: Expr) -> Expr {
    Expr::Binary(Binary {
        lhs: Box::new(lhs),
        op: BinOp { kind, implicit: false, span: 0..0 },
        rhs: Box::new(rhs),
        span: 0..0,
    })
}

pub(crate) fn add(lhs: Expr, rhs: Expr) -> Expr {
    binary(lhs, BinOpKind::Add, rhs)
}

pub(crate) fn sub(lhs: Expr, rhs: Expr) -> Expr {
    binary(lhs, BinOpKind::Sub, rhs)
}

pub(crate) fn mul(lhs: Expr, rhs: Expr) -> Expr {
    binary(lhs, BinOpKind::Mul, rhs)
}

pub(crate) fn div(lhs: Expr, rhs: Expr) -> Expr {
    binary(lhs, BinOpKind::Div, rhs)
}

pub(crate) fn pow(lhs: Expr, rhs: Expr) -> Expr {
    binary(lhs, BinOpKind::Exp, rhs)
}

pub(crate) fn neg(operand: Expr) -> Expr {
    Expr::Unary(Unary {
        operand: Box::new(operand),
        op: UnaryOp { kind: UnaryOpKind::Neg, span: 0..0 },
        span: 0..0,
    })
}

pub(crate) fn paren(expr: Expr) -> Expr {
    Expr::Paren(Paren { expr: Box::new(expr), span: 0..0 })
}

pub(crate) fn abs(expr: Expr) -> Expr {
    Expr::Abs(AbsExpr { expr: Box::new(expr), span: 0..0 })
}

pub(crate) fn call(name: &str, arg: Expr) -> Expr {
    Expr::Call(Call {
        name: LitSym { name: name.to_string(), independent: false, span: 0..0 },
        arg: Box::new(arg),
        span: 0..0,
    })
}
