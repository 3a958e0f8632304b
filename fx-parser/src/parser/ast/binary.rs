use crate::{
    parser::{
        ast::{expr::Expr, unary::Unary},
        error::Error,
        token::op::{Associativity, BinOp, BinOpKind, Precedence},
        Parse,
        Parser,
    },
    tokenizer::TokenKind,
};
use std::{fmt, ops::Range};

/// A binary operator, real or synthesized.
#[derive(Debug, Clone, PartialEq)]
enum BinOpExt {
    /// A binary operator that appears in the source, such as `+` or `*`.
    Op(BinOp),

    /// Implicit multiplication, such as `2x` or `x(x + 1)`.
    ///
    /// This is not a real operator, but it is treated as one for the purposes of parsing.
    ImplicitMultiplication,
}

impl BinOpExt {
    /// Returns the precedence of the binary operator.
    fn precedence(&self) -> Precedence {
        match self {
            BinOpExt::Op(op) => op.precedence(),
            BinOpExt::ImplicitMultiplication => Precedence::Factor,
        }
    }
}

impl From<BinOp> for BinOpExt {
    fn from(op: BinOp) -> Self {
        BinOpExt::Op(op)
    }
}

/// Builds the implicit multiplication node joining the two given expressions.
fn implicit_mul(lhs: Expr, rhs: Expr) -> Expr {
    let span = lhs.span().start..rhs.span().end;
    let op_span = lhs.span().end..rhs.span().start;
    Expr::Binary(Binary {
        lhs: Box::new(lhs),
        op: BinOp {
            kind: BinOpKind::Mul,
            implicit: true,
            span: op_span,
        },
        rhs: Box::new(rhs),
        span,
    })
}

/// Returns true if the next token can begin the right-hand factor of an implicit multiplication:
/// a name, a group, or a summation. Numbers are deliberately absent (`2 3` is not a product), and
/// so are pipes: after a term, a `|` always closes an enclosing absolute value rather than
/// opening a new one.
fn peek_starts_primary(input: &Parser) -> bool {
    matches!(
        input.peek_kind(),
        Some(TokenKind::OpenParen | TokenKind::Name | TokenKind::Keyword)
    )
}

/// A binary expression, such as `1 + 2`. Binary expressions can include nested expressions.
#[derive(Debug, Clone, PartialEq)]
pub struct Binary {
    /// The left-hand side of the binary expression.
    pub lhs: Box<Expr>,

    /// The operator of the binary expression.
    pub op: BinOp,

    /// The right-hand side of the binary expression.
    pub rhs: Box<Expr>,

    /// The region of the source code that this binary expression was parsed from.
    pub span: Range<usize>,
}

impl Binary {
    /// After parsing the left-hand-side, the operator, and the right-hand-side of a potential
    /// binary expression, parse ahead to see if the right-hand-side is incomplete.
    fn complete_rhs(
        input: &mut Parser,
        recoverable_errors: &mut Vec<Error>,
        lhs: Expr,
        op: BinOpExt,
        mut rhs: Expr,
    ) -> Result<Expr, Vec<Error>> {
        let precedence = op.precedence();

        loop {
            // before creating the `lhs op rhs` node, check the precedence of the following
            // operator, if any; `3 + 4 * 5` must not become `(3 + 4) * 5`
            if let Some(next_op) = input.peek_binary_op() {
                if next_op.precedence() > precedence
                    || next_op.associativity() == Associativity::Right
                {
                    // this operator has a higher precedence or is right associative, so its
                    // expression starts with our `rhs`
                    rhs = Self::parse_expr(input, recoverable_errors, rhs, next_op.precedence())?;
                } else {
                    // this operator has lower precedence, or equal precedence and left
                    // associativity; let the enclosing loop handle it after `lhs op rhs` is folded
                    break;
                }
            } else if precedence < Precedence::Factor && peek_starts_primary(input) {
                // there is no operator, but another primary follows: implicit multiplication,
                // which binds to `rhs` before the pending lower-precedence operator is folded
                let mut attempt_errors = Vec::new();
                let Ok(expr) = input
                    .try_parse_with_fn(|input| Expr::parse_primary(input, &mut attempt_errors))
                else {
                    break;
                };
                recoverable_errors.append(&mut attempt_errors);
                rhs = implicit_mul(rhs, expr);
            } else {
                break;
            }
        }

        // create the binary node representing `lhs op rhs`
        match op {
            BinOpExt::Op(op) => {
                let span = lhs.span().start..rhs.span().end;
                Ok(Expr::Binary(Binary {
                    lhs: Box::new(lhs),
                    op,
                    rhs: Box::new(rhs),
                    span,
                }))
            },
            BinOpExt::ImplicitMultiplication => Ok(implicit_mul(lhs, rhs)),
        }
    }

    /// The precedence-climbing loop: repeatedly extends `lhs` with binary operators of at least
    /// the given precedence, synthesizing implicit multiplication when two terms sit side by side
    /// with no operator between them.
    pub fn parse_expr(
        input: &mut Parser,
        recoverable_errors: &mut Vec<Error>,
        mut lhs: Expr,
        precedence: Precedence,
    ) -> Result<Expr, Vec<Error>> {
        loop {
            if let Some(next_op) = input.peek_binary_op() {
                if next_op.precedence() < precedence {
                    break;
                }

                let op = input.try_parse::<BinOp>().forward_errors(recoverable_errors)?;
                let rhs = Expr::parse_or_recover(input, recoverable_errors)?;
                lhs = Self::complete_rhs(input, recoverable_errors, lhs, op.into(), rhs)?;
            } else if Precedence::Factor >= precedence && peek_starts_primary(input) {
                let mut attempt_errors = Vec::new();
                let Ok(rhs) = input
                    .try_parse_with_fn(|input| Unary::parse_or_lower(input, &mut attempt_errors))
                else {
                    break;
                };
                recoverable_errors.append(&mut attempt_errors);
                lhs = Self::complete_rhs(
                    input,
                    recoverable_errors,
                    lhs,
                    BinOpExt::ImplicitMultiplication,
                    rhs,
                )?;
            } else {
                break;
            }
        }

        Ok(lhs)
    }
}

impl<'source> Parse<'source> for Binary {
    fn std_parse(
        input: &mut Parser<'source>,
        recoverable_errors: &mut Vec<Error>,
    ) -> Result<Self, Vec<Error>> {
        match input.try_parse::<Expr>().forward_errors(recoverable_errors)? {
            Expr::Binary(binary) => Ok(binary),
            expr => Err(vec![Error::new(
                vec![expr.span()],
                crate::parser::error::kind::NonFatal,
            )]),
        }
    }
}

impl fmt::Display for Binary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.lhs)?;

        // multiplications that read naturally without a glyph are rendered without one: a literal
        // coefficient on a symbol (`2x`) or a factor against a group (`2(x + 1)`)
        let hide_op = self.op.kind == BinOpKind::Mul
            && (matches!((&*self.lhs, &*self.rhs), (Expr::Literal(_), Expr::Symbol(_)))
                || matches!(&*self.rhs, Expr::Paren(_)));

        if !hide_op {
            match self.op.kind {
                BinOpKind::Add => write!(f, " + ")?,
                BinOpKind::Sub => write!(f, " - ")?,
                kind => write!(f, "{kind}")?,
            }
        }

        if self.op.kind == BinOpKind::Exp {
            // exponents are always parenthesized so the rendering re-parses unambiguously
            write!(f, "({})", self.rhs)
        } else {
            write!(f, "{}", self.rhs)
        }
    }
}
