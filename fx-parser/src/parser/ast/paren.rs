use crate::parser::{
    ast::expr::Expr,
    error::{kind, Error},
    token::{CloseParen, OpenParen},
    Parse,
    Parser,
};
use std::{fmt, ops::Range};

/// A parenthesized expression. A [`Paren`] can only contain a single expression.
#[derive(Debug, Clone, PartialEq)]
pub struct Paren {
    /// The inner expression.
    pub expr: Box<Expr>,

    /// The region of the source code that this [`Paren`] was parsed from.
    pub span: Range<usize>,
}

impl Paren {
    /// Returns the innermost expression in the parenthesized expression.
    pub fn innermost(&self) -> &Expr {
        self.expr.innermost()
    }
}

impl<'source> Parse<'source> for Paren {
    fn std_parse(
        input: &mut Parser<'source>,
        recoverable_errors: &mut Vec<Error>,
    ) -> Result<Self, Vec<Error>> {
        let open_paren = input.try_parse::<OpenParen>().forward_errors(recoverable_errors)?;
        let expr = input.try_parse::<Expr>().forward_errors(recoverable_errors)?;
        let close_span = match input.try_parse::<CloseParen>().forward_errors(recoverable_errors) {
            Ok(close_paren) => close_paren.span,
            Err(_) => {
                recoverable_errors.push(Error::new(
                    vec![open_paren.span.clone()],
                    kind::UnclosedParenthesis { opening: true },
                ));

                // pretend the parenthesis closes at the end of the source for recovery purposes
                input.eof_span()
            },
        };

        Ok(Self {
            expr: Box::new(expr),
            span: open_paren.span.start..close_span.end,
        })
    }
}

impl fmt::Display for Paren {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({})", self.expr)
    }
}
