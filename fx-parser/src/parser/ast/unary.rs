use crate::{
    parser::{
        ast::{binary::Binary, expr::Expr},
        error::Error,
        token::op::UnaryOp,
        Parser,
    },
    return_if_ok,
};
use std::{fmt, ops::Range};

/// A unary expression, such as `-x` or `!5`. Both unary operators are written before their
/// operand.
#[derive(Debug, Clone, PartialEq)]
pub struct Unary {
    /// The operand of the unary expression.
    pub operand: Box<Expr>,

    /// The operator of the unary expression.
    pub op: UnaryOp,

    /// The region of the source code that this unary expression was parsed from.
    pub span: Range<usize>,
}

impl Unary {
    /// Parses a unary expression. The operand extends as far as the operator's precedence
    /// allows, so `-x^2` parses as `-(x^2)` while `-x + 1` parses as `(-x) + 1`.
    pub fn parse_right(
        input: &mut Parser,
        recoverable_errors: &mut Vec<Error>,
    ) -> Result<Self, Vec<Error>> {
        let op = input.try_parse::<UnaryOp>().forward_errors(recoverable_errors)?;
        let op_precedence = op.precedence();
        let start_span = op.span.start;
        let operand = {
            let lhs = Self::parse_or_lower(input, recoverable_errors)?;
            Binary::parse_expr(input, recoverable_errors, lhs, op_precedence)?
        };
        let end_span = operand.span().end;
        Ok(Self {
            operand: Box::new(operand),
            op,
            span: start_span..end_span,
        })
    }

    /// Parses a unary expression, or lower precedence expressions.
    pub fn parse_or_lower(
        input: &mut Parser,
        recoverable_errors: &mut Vec<Error>,
    ) -> Result<Expr, Vec<Error>> {
        let _ = return_if_ok!(input
            .try_parse_with_fn(|input| Self::parse_right(input, recoverable_errors))
            .map(Expr::Unary));
        Expr::parse_primary(input, recoverable_errors)
    }
}

impl fmt::Display for Unary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.op.kind, self.operand)
    }
}
