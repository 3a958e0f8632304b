use crate::{
    names,
    parser::{
        error::{kind, Error},
        token::{Float, Int, Name},
        Parse,
        Parser,
    },
    return_if_ok,
};
use std::{fmt, ops::Range};

/// A numeric literal.
#[derive(Debug, Clone, PartialEq)]
pub struct LitNum {
    /// The value of the literal.
    pub value: f64,

    /// The region of the source code that this literal was parsed from.
    pub span: Range<usize>,
}

impl<'source> Parse<'source> for LitNum {
    fn std_parse(
        input: &mut Parser<'source>,
        recoverable_errors: &mut Vec<Error>,
    ) -> Result<Self, Vec<Error>> {
        let _ = return_if_ok!(input
            .try_parse::<Int>()
            .map(|int| Self {
                // the token regex guarantees a parseable float
                value: int.lexeme.parse().unwrap_or_default(),
                span: int.span,
            })
            .forward_errors(recoverable_errors));

        input
            .try_parse::<Float>()
            .map(|float| Self {
                value: float.lexeme.parse().unwrap_or_default(),
                span: float.span,
            })
            .forward_errors(recoverable_errors)
    }
}

impl fmt::Display for LitNum {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// A bare name appearing in an expression.
#[derive(Debug, Clone, PartialEq)]
pub struct LitSym {
    /// The name of the symbol.
    pub name: String,

    /// Whether this symbol is the independent variable of the expression. Evaluation substitutes
    /// the positional argument for it; every other symbol is resolved through the environment.
    pub independent: bool,

    /// The region of the source code that this literal was parsed from.
    pub span: Range<usize>,
}

impl LitSym {
    /// Parses a bare symbol, recording a diagnostic if the name has no meaning in the current
    /// scope. The symbol node is produced either way, so callers can continue working with the
    /// tree.
    pub(crate) fn parse_validated(
        input: &mut Parser,
        recoverable_errors: &mut Vec<Error>,
    ) -> Result<Self, Vec<Error>> {
        let symbol = input.try_parse::<Self>().forward_errors(recoverable_errors)?;

        if !input.recognizes_symbol(&symbol.name) && !names::is_function(&symbol.name) {
            recoverable_errors.push(Error::new(vec![symbol.span.clone()], kind::UnknownSymbol {
                name: symbol.name.clone(),
                similar: names::similar_functions(&symbol.name)
                    .into_iter()
                    .map(String::from)
                    .collect(),
            }));
        }

        Ok(symbol)
    }
}

impl<'source> Parse<'source> for LitSym {
    fn std_parse(
        input: &mut Parser<'source>,
        recoverable_errors: &mut Vec<Error>,
    ) -> Result<Self, Vec<Error>> {
        let independent = input.independent().map(String::from);
        input
            .try_parse::<Name>()
            .map(|name| Self {
                independent: independent.as_deref() == Some(name.lexeme),
                name: name.lexeme.to_owned(),
                span: name.span,
            })
            .forward_errors(recoverable_errors)
    }
}

impl fmt::Display for LitSym {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
