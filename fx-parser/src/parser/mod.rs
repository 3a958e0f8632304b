pub mod ast;
pub mod error;
pub mod garbage;
pub mod keyword;
pub mod token;

use crate::{names, tokenizer::{tokenize_complete, Token, TokenKind}};
use error::{kind, Error};
use garbage::Garbage;
use std::ops::Range;
use token::op::BinOpKind;

/// Returns the value from the enclosing function if the given expression is `Ok`. Otherwise, the
/// expression evaluates to the contained error, which can be ignored to try another parser.
#[macro_export]
macro_rules! return_if_ok {
    ($expr:expr) => {
        match $expr {
            Ok(value) => return Ok(value),
            err => err,
        }
    };
}

/// The result of a parsing attempt.
///
/// Recoverable errors are errors that the parser can get past by patching up the stream, for
/// example by acting as if a missing closing parenthesis was present. They still make the overall
/// parse unsuccessful, but parsing can continue, allowing multiple errors to be reported at once.
#[derive(Debug)]
pub enum ParseResult<T> {
    /// The value was parsed successfully, with no errors.
    Ok(T),

    /// Parsing produced a usable value, but recoverable errors were encountered along the way.
    Recoverable(T, Vec<Error>),

    /// Parsing failed entirely. The cursor is restored to where it was before the attempt.
    Unrecoverable(Vec<Error>),
}

impl<T> ParseResult<T> {
    /// Maps the contained value with the given function.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ParseResult<U> {
        match self {
            ParseResult::Ok(value) => ParseResult::Ok(f(value)),
            ParseResult::Recoverable(value, errors) => ParseResult::Recoverable(f(value), errors),
            ParseResult::Unrecoverable(errors) => ParseResult::Unrecoverable(errors),
        }
    }

    /// Returns true if the result contains a usable value.
    pub fn is_ok(&self) -> bool {
        !matches!(self, ParseResult::Unrecoverable(_))
    }

    /// Moves any recoverable errors into the given accumulator, converting the result into a
    /// [`Result`] that can be used with the `?` operator.
    pub fn forward_errors(self, errors: &mut Vec<Error>) -> Result<T, Vec<Error>> {
        match self {
            ParseResult::Ok(value) => Ok(value),
            ParseResult::Recoverable(value, mut recoverable) => {
                errors.append(&mut recoverable);
                Ok(value)
            },
            ParseResult::Unrecoverable(errors) => Err(errors),
        }
    }
}

/// A high-level parser for function expressions. This is the type to use to parse an arbitrary
/// piece of source code into an abstract syntax tree.
#[derive(Debug)]
pub struct Parser<'source> {
    /// The tokens that this parser is currently parsing.
    tokens: Box<[Token<'source>]>,

    /// The index of the **next** token to be parsed.
    cursor: usize,

    /// Diagnostics recorded by the tokenizer before parsing began.
    lex_errors: Vec<Error>,

    /// The names the parser currently recognizes as symbols: the declared constants, plus any
    /// summation indices in scope. Summation indices are pushed while their body is parsed and
    /// popped afterwards.
    symbols: Vec<String>,

    /// The name of the independent variable, if one is allowed. `None` puts the parser in plain
    /// calculator mode, where every bare name must be a declared constant.
    independent: Option<String>,
}

impl<'source> Parser<'source> {
    /// Create a new parser for the given source, recognizing `x` as the independent variable.
    pub fn new(source: &'source str) -> Self {
        Self::with_independent(source, Some("x"))
    }

    /// Create a new parser with a custom independent variable, or none at all.
    pub fn with_independent(source: &'source str, independent: Option<&str>) -> Self {
        let (tokens, lex_errors) = tokenize_complete(source);
        Self {
            tokens,
            cursor: 0,
            lex_errors,
            symbols: names::CONSTANTS.iter().map(|name| name.to_string()).collect(),
            independent: independent.map(String::from),
        }
    }

    /// The name of the independent variable, if one is allowed.
    pub fn independent(&self) -> Option<&str> {
        self.independent.as_deref()
    }

    /// Returns true if the given bare name currently has a meaning: the independent variable, a
    /// declared constant, or a summation index in scope.
    pub(crate) fn recognizes_symbol(&self, name: &str) -> bool {
        self.independent.as_deref() == Some(name) || self.symbols.iter().any(|s| s == name)
    }

    /// Brings a summation index into scope for the duration of parsing its body.
    pub(crate) fn push_symbol(&mut self, name: &str) {
        self.symbols.push(name.to_owned());
    }

    /// Removes the most recently pushed summation index from scope.
    pub(crate) fn pop_symbol(&mut self) {
        self.symbols.pop();
    }

    /// Creates an error that points at the current token, or the end of the source code if the
    /// cursor is at the end of the stream.
    pub fn error(&self, kind: impl fx_error::ErrorKind + 'static) -> Error {
        Error::new(vec![self.span()], kind)
    }

    /// Returns a span pointing at the end of the source code.
    pub fn eof_span(&self) -> Range<usize> {
        self.tokens.last().map_or(0..0, |token| token.span.end..token.span.end)
    }

    /// Returns the span of the next non-whitespace token, or the end of the source code if there
    /// is none.
    pub fn span(&self) -> Range<usize> {
        self.peek_token().map_or(self.eof_span(), |token| token.span.clone())
    }

    /// Returns the previous token. The cursor is not moved. Returns [`None`] if the cursor is at
    /// the beginning of the stream.
    pub fn prev_token(&self) -> Option<&Token<'source>> {
        self.tokens.get(self.cursor.checked_sub(1)?)
    }

    /// Returns the next non-whitespace token without advancing the cursor.
    fn peek_token(&self) -> Option<&Token<'source>> {
        self.tokens[self.cursor..].iter().find(|token| !token.is_whitespace())
    }

    /// Returns the kind of the next non-whitespace token without advancing the cursor.
    pub fn peek_kind(&self) -> Option<TokenKind> {
        self.peek_token().map(|token| token.kind)
    }

    /// Returns the binary operator formed by the next non-whitespace token, if any, without
    /// advancing the cursor.
    pub(crate) fn peek_binary_op(&self) -> Option<BinOpKind> {
        BinOpKind::from_token(self.peek_kind()?)
    }

    /// Returns true if every remaining token is whitespace.
    pub fn at_eof(&self) -> bool {
        self.peek_token().is_none()
    }

    /// Returns the next token to be parsed, then advances the cursor. Whitespace tokens are
    /// skipped.
    ///
    /// Returns an EOF error if there are no more tokens.
    pub fn next_token(&mut self) -> Result<Token<'source>, Error> {
        while self.cursor < self.tokens.len() {
            let token = &self.tokens[self.cursor];
            self.cursor += 1;
            if token.is_whitespace() {
                continue;
            } else {
                // cloning is cheap: only the `Range<_>` is cloned
                return Ok(token.clone());
            }
        }

        Err(self.error(kind::UnexpectedEof))
    }

    /// Speculatively parses a value from the stream of tokens. If parsing fails, the cursor is
    /// restored to where it was before the attempt.
    pub fn try_parse<T: Parse<'source>>(&mut self) -> ParseResult<T> {
        self.try_parse_with_fn_raw(|input, errors| T::std_parse(input, errors))
    }

    /// Speculatively parses a value using a custom parsing function. If parsing fails, the cursor
    /// is restored to where it was before the attempt.
    pub fn try_parse_with_fn<T, F>(&mut self, f: F) -> Result<T, Vec<Error>>
    where
        F: FnOnce(&mut Parser<'source>) -> Result<T, Vec<Error>>,
    {
        let start = self.cursor;
        match f(self) {
            Ok(value) => Ok(value),
            err => {
                self.cursor = start;
                err
            },
        }
    }

    /// Shared implementation of speculative parsing: collects the recoverable errors produced by
    /// the attempt and backtracks the cursor on failure.
    fn try_parse_with_fn_raw<T, F>(&mut self, f: F) -> ParseResult<T>
    where
        F: FnOnce(&mut Parser<'source>, &mut Vec<Error>) -> Result<T, Vec<Error>>,
    {
        let start = self.cursor;
        let mut recoverable = Vec::new();
        match f(self, &mut recoverable) {
            Ok(value) if recoverable.is_empty() => ParseResult::Ok(value),
            Ok(value) => ParseResult::Recoverable(value, recoverable),
            Err(errors) => {
                self.cursor = start;
                ParseResult::Unrecoverable(errors)
            },
        }
    }

    /// Attempts to parse a value from the stream of tokens, requiring all input to be consumed
    /// and no diagnostics (lexical or recoverable) to have been recorded.
    pub fn try_parse_full<T: Parse<'source>>(&mut self) -> Result<T, Vec<Error>> {
        let mut errors = std::mem::take(&mut self.lex_errors);
        match self.try_parse::<T>() {
            ParseResult::Ok(value) => {
                if !self.at_eof() {
                    errors.push(self.error(kind::ExpectedEof));
                }
                if errors.is_empty() {
                    Ok(value)
                } else {
                    Err(errors)
                }
            },
            ParseResult::Recoverable(_, mut recoverable) => {
                errors.append(&mut recoverable);
                Err(errors)
            },
            ParseResult::Unrecoverable(mut unrecoverable) => {
                errors.append(&mut unrecoverable);
                Err(errors)
            },
        }
    }

    /// Parses a value no matter what: if parsing fails entirely, a garbage placeholder is
    /// returned instead. The value is returned together with every diagnostic recorded, in source
    /// order, so error-tolerant callers can decide what to surface.
    pub fn parse_full_recoverable<T: Parse<'source> + Garbage>(&mut self) -> (T, Vec<Error>) {
        let mut errors = std::mem::take(&mut self.lex_errors);
        let value = match self.try_parse::<T>() {
            ParseResult::Ok(value) => value,
            ParseResult::Recoverable(value, mut recoverable) => {
                errors.append(&mut recoverable);
                value
            },
            ParseResult::Unrecoverable(mut unrecoverable) => {
                errors.append(&mut unrecoverable);
                T::garbage()
            },
        };

        if !self.at_eof() {
            errors.push(self.error(kind::ExpectedEof));
        }

        (value, errors)
    }
}

/// Any type that can be parsed from a source of tokens.
pub trait Parse<'source>: Sized {
    /// Parses a value from the given stream of tokens, writing any recoverable errors into the
    /// given accumulator. Returning `Err` means the value could not be parsed at all; callers go
    /// through [`Parser::try_parse`], which restores the cursor in that case.
    fn std_parse(
        input: &mut Parser<'source>,
        recoverable_errors: &mut Vec<Error>,
    ) -> Result<Self, Vec<Error>>;
}

#[cfg(test)]
mod tests;
