use crate::parser::{
    ast::{expr::{ErrorExpr, Expr}, literal::LitSym},
    error::{kind, Error},
    keyword::Sigma as SigmaKeyword,
    token::{Assign, CloseParen, Comma, OpenParen},
    Parser,
};
use std::{fmt, ops::Range};

/// A summation, such as `sigma(n = 1, 5, n^2)`: the body is summed once for every value of the
/// index from the start bound to the end bound, inclusive.
///
/// The index is only in scope while the body is parsed, and must not collide with a name that
/// already has a meaning.
#[derive(Debug, Clone, PartialEq)]
pub struct Sigma {
    /// The index variable of the summation.
    pub index: LitSym,

    /// The first value the index takes on.
    pub start: Box<Expr>,

    /// The last value the index takes on.
    pub end: Box<Expr>,

    /// The body of the summation.
    pub body: Box<Expr>,

    /// The region of the source code that this summation was parsed from.
    pub span: Range<usize>,
}

impl Sigma {
    /// Parses a summation, recovering with an error placeholder when the header is malformed.
    /// Each piece of the `sigma(index = start, end, body)` form must be present; a missing piece
    /// is reported at the offending token and the whole summation collapses to [`Expr::Error`],
    /// letting the caller continue with whatever follows.
    pub(crate) fn parse_or_error(
        input: &mut Parser,
        recoverable_errors: &mut Vec<Error>,
    ) -> Result<Expr, Vec<Error>> {
        let keyword = input.try_parse::<SigmaKeyword>().forward_errors(recoverable_errors)?;
        let start_pos = keyword.span.start;

        macro_rules! expect {
            ($ty:ty) => {
                match input.try_parse::<$ty>().forward_errors(recoverable_errors) {
                    Ok(value) => value,
                    Err(errors) => return Ok(bail(input, recoverable_errors, errors, start_pos)),
                }
            };
        }

        let open_paren = expect!(OpenParen);
        let index = expect!(LitSym);
        if input.recognizes_symbol(&index.name) {
            recoverable_errors.push(Error::new(vec![index.span.clone()], kind::ShadowedSummationIndex {
                name: index.name.clone(),
            }));
        }

        expect!(Assign);
        let start = expect!(Expr);
        expect!(Comma);
        let end = expect!(Expr);
        expect!(Comma);

        // the index is only recognized inside the body
        input.push_symbol(&index.name);
        let body_result = input.try_parse::<Expr>().forward_errors(recoverable_errors);
        input.pop_symbol();
        let body = match body_result {
            Ok(body) => body,
            Err(errors) => return Ok(bail(input, recoverable_errors, errors, start_pos)),
        };

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

        Ok(Expr::Sigma(Self {
            index,
            start: Box::new(start),
            end: Box::new(end),
            body: Box::new(body),
            span: start_pos..close_span.end,
        }))
    }
}

/// Forwards the errors of a failed summation piece and produces the error placeholder covering
/// everything consumed so far.
fn bail(
    input: &Parser,
    recoverable_errors: &mut Vec<Error>,
    mut errors: Vec<Error>,
    start_pos: usize,
) -> Expr {
    recoverable_errors.append(&mut errors);
    let end_pos = input.prev_token().map_or(start_pos, |token| token.span.end);
    Expr::Error(ErrorExpr { span: start_pos..end_pos.max(start_pos) })
}

impl fmt::Display for Sigma {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "sigma({} = {}, {}, {})", self.index, self.start, self.end, self.body)
    }
}
