use crate::parser::{
    ast::expr::Expr,
    error::{kind, Error},
    token::Pipe,
    Parse,
    Parser,
};
use std::{fmt, ops::Range};

/// An absolute value expression, delimited by pipes: `|x - 1|`.
#[derive(Debug, Clone, PartialEq)]
pub struct Abs {
    /// The inner expression.
    pub expr: Box<Expr>,

    /// The region of the source code that this [`Abs`] was parsed from.
    pub span: Range<usize>,
}

impl<'source> Parse<'source> for Abs {
    fn std_parse(
        input: &mut Parser<'source>,
        recoverable_errors: &mut Vec<Error>,
    ) -> Result<Self, Vec<Error>> {
        let open_pipe = input.try_parse::<Pipe>().forward_errors(recoverable_errors)?;
        let expr = input.try_parse::<Expr>().forward_errors(recoverable_errors)?;
        let close_span = match input.try_parse::<Pipe>().forward_errors(recoverable_errors) {
            Ok(close_pipe) => close_pipe.span,
            Err(_) => {
                recoverable_errors.push(Error::new(
                    vec![open_pipe.span.clone()],
                    kind::UnclosedPipe,
                ));
                input.eof_span()
            },
        };

        Ok(Self {
            expr: Box::new(expr),
            span: open_pipe.span.start..close_span.end,
        })
    }
}

impl fmt::Display for Abs {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "|{}|", self.expr)
    }
}
