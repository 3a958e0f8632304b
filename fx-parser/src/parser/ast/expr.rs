use crate::{
    parser::{
        ast::{
            abs::Abs,
            binary::Binary,
            call::Call,
            literal::{LitNum, LitSym},
            paren::Paren,
            sigma::Sigma,
            unary::Unary,
        },
        error::{kind, Error},
        token::op::Precedence,
        Parse,
        Parser,
    },
    tokenizer::TokenKind,
    return_if_ok,
};
use std::{fmt, ops::Range};

/// Represents any kind of expression.
///
/// An expression is any valid piece of source code that can be evaluated to produce a value. The
/// whole source is one expression; sub-expressions appear as children of other expressions.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal, such as `3.14`.
    Literal(LitNum),

    /// A bare name: the independent variable, a declared constant, or a summation index.
    Symbol(LitSym),

    /// A parenthesized expression, such as `(1 + 2)`.
    Paren(Paren),

    /// An absolute value expression, such as `|x - 1|`.
    Abs(Abs),

    /// A unary operation, such as `-x` or `!5`.
    Unary(Unary),

    /// A binary operation, such as `1 + 2`.
    Binary(Binary),

    /// A builtin function call, such as `sin(x)`.
    Call(Call),

    /// A summation, such as `sigma(n = 1, 5, n^2)`.
    Sigma(Sigma),

    /// A placeholder produced while recovering from a parsing error.
    Error(ErrorExpr),
}

impl Expr {
    /// Returns the span of the expression.
    pub fn span(&self) -> Range<usize> {
        match self {
            Expr::Literal(literal) => literal.span.clone(),
            Expr::Symbol(symbol) => symbol.span.clone(),
            Expr::Paren(paren) => paren.span.clone(),
            Expr::Abs(abs) => abs.span.clone(),
            Expr::Unary(unary) => unary.span.clone(),
            Expr::Binary(binary) => binary.span.clone(),
            Expr::Call(call) => call.span.clone(),
            Expr::Sigma(sigma) => sigma.span.clone(),
            Expr::Error(error) => error.span.clone(),
        }
    }

    /// If this expression is a [`Expr::Paren`], returns the innermost expression in the
    /// parenthesized expression. Otherwise, returns `self`.
    pub fn innermost(&self) -> &Expr {
        let mut inner = self;
        while let Expr::Paren(paren) = inner {
            inner = &paren.expr;
        }
        inner
    }

    /// Parses a primary expression: a summation, function call, literal, parenthesized group,
    /// absolute value, or bare symbol. Fails cleanly (without consuming input) when the next
    /// token cannot begin a primary expression.
    pub(crate) fn parse_primary(
        input: &mut Parser,
        recoverable_errors: &mut Vec<Error>,
    ) -> Result<Self, Vec<Error>> {
        let _ = return_if_ok!(input.try_parse_with_fn(|input| Sigma::parse_or_error(input, recoverable_errors)));
        // function calls can overlap with bare symbols, so try them first
        let _ = return_if_ok!(input.try_parse::<Call>().map(Self::Call).forward_errors(recoverable_errors));
        let _ = return_if_ok!(input.try_parse::<LitNum>().map(Self::Literal).forward_errors(recoverable_errors));
        let _ = return_if_ok!(input.try_parse::<Paren>().map(Self::Paren).forward_errors(recoverable_errors));
        let _ = return_if_ok!(input.try_parse::<Abs>().map(Self::Abs).forward_errors(recoverable_errors));
        input
            .try_parse_with_fn(|input| LitSym::parse_validated(input, recoverable_errors))
            .map(Self::Symbol)
    }

    /// Parses an expression term at a position where one is required: if nothing matches, the
    /// offending token is consumed and replaced with an error placeholder so that parsing can
    /// continue with the expressions around it.
    pub(crate) fn parse_or_recover(
        input: &mut Parser,
        recoverable_errors: &mut Vec<Error>,
    ) -> Result<Self, Vec<Error>> {
        let _ = return_if_ok!(input.try_parse_with_fn(|input| Unary::parse_or_lower(input, recoverable_errors)));

        let span = input.span();
        match input.next_token() {
            Ok(_) => {
                recoverable_errors.push(Error::new(vec![span.clone()], kind::UnknownExpression));
                Ok(Expr::Error(ErrorExpr { span }))
            },
            Err(error) => Err(vec![error]),
        }
    }
}

impl<'source> Parse<'source> for Expr {
    fn std_parse(
        input: &mut Parser<'source>,
        recoverable_errors: &mut Vec<Error>,
    ) -> Result<Self, Vec<Error>> {
        if input.peek_kind() == Some(TokenKind::CloseParen) {
            return Err(vec![input.error(kind::UnclosedParenthesis { opening: false })]);
        }

        let lhs = Expr::parse_or_recover(input, recoverable_errors)?;
        Binary::parse_expr(input, recoverable_errors, lhs, Precedence::Any)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expr::Literal(literal) => literal.fmt(f),
            Expr::Symbol(symbol) => symbol.fmt(f),
            Expr::Paren(paren) => paren.fmt(f),
            Expr::Abs(abs) => abs.fmt(f),
            Expr::Unary(unary) => unary.fmt(f),
            Expr::Binary(binary) => binary.fmt(f),
            Expr::Call(call) => call.fmt(f),
            Expr::Sigma(sigma) => sigma.fmt(f),
            Expr::Error(error) => error.fmt(f),
        }
    }
}

/// A placeholder expression produced while recovering from a parsing error.
///
/// Error placeholders evaluate to nothing and have no derivative; they only exist so that the
/// parser can return a complete tree alongside its diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorExpr {
    /// The region of the source code that could not be parsed.
    pub span: Range<usize>,
}

impl fmt::Display for ErrorExpr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "?")
    }
}
