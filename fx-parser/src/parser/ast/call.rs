use crate::{
    names,
    parser::{
        ast::{expr::Expr, literal::LitSym},
        error::{kind, Error},
        token::{CloseParen, OpenParen},
        Parse,
        Parser,
    },
};
use std::{fmt, ops::Range};

/// A call to a builtin function, such as `sin(x)`. Every builtin function takes exactly one
/// argument.
///
/// A bare name followed by `(` only parses as a call when the name is a known builtin function;
/// any other name followed by a group is implicit multiplication (`x(x + 1)` is `x * (x + 1)`).
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    /// The name of the function being called.
    pub name: LitSym,

    /// The argument to the function.
    pub arg: Box<Expr>,

    /// The region of the source code that this function call was parsed from.
    pub span: Range<usize>,
}

impl<'source> Parse<'source> for Call {
    fn std_parse(
        input: &mut Parser<'source>,
        recoverable_errors: &mut Vec<Error>,
    ) -> Result<Self, Vec<Error>> {
        let name = input.try_parse::<LitSym>().forward_errors(recoverable_errors)?;
        if !names::is_function(&name.name) {
            return Err(vec![input.error(kind::NonFatal)]);
        }

        let open_paren = input.try_parse::<OpenParen>().forward_errors(recoverable_errors)?;
        let arg = input.try_parse::<Expr>().forward_errors(recoverable_errors)?;
        let close_span = match input.try_parse::<CloseParen>().forward_errors(recoverable_errors) {
            Ok(close_paren) => close_paren.span,
            Err(_) => {
                recoverable_errors.push(Error::new(
                    vec![open_paren.span.clone()],
                    kind::UnclosedParenthesis { opening: true },
                ));
                input.eof_span()
            },
        };

        let span = name.span.start..close_span.end;
        Ok(Self {
            name,
            arg: Box::new(arg),
            span,
        })
    }
}

impl fmt::Display for Call {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}({})", self.name, self.arg)
    }
}
