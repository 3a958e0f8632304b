pub mod token;

use crate::parser::error::kind::{MalformedNumber, UnknownCharacter};
use fx_error::Error;
use logos::{Lexer, Logos};
pub use token::{Token, TokenKind};

/// Returns an iterator over the token kinds produced by the tokenizer.
pub fn tokenize(input: &str) -> Lexer<TokenKind> {
    TokenKind::lexer(input)
}

/// Returns an owned array containing all of the tokens produced by the tokenizer, along with the
/// lexical diagnostics recorded along the way.
///
/// Lexing never aborts. An unrecognized character becomes a [`TokenKind::Symbol`] token and an
/// "unknown character" diagnostic; a number with a dangling decimal point still becomes a usable
/// [`TokenKind::Int`] token, with a "malformed number" diagnostic pointing at the dot. The caller
/// decides whether the diagnostics are fatal.
pub fn tokenize_complete(input: &str) -> (Box<[Token]>, Vec<Error>) {
    let mut lexer = tokenize(input);
    let mut tokens = Vec::new();
    let mut errors = Vec::new();

    while let Some(Ok(kind)) = lexer.next() {
        let span = lexer.span();
        let lexeme = lexer.slice();

        match kind {
            TokenKind::Symbol => {
                errors.push(Error::new(vec![span.clone()], UnknownCharacter {
                    character: lexeme.chars().next().unwrap_or(' '),
                }));
            },
            TokenKind::Int if lexeme.ends_with('.') => {
                errors.push(Error::new(vec![span.end - 1..span.end], MalformedNumber));
            },
            _ => {},
        }

        tokens.push(Token { span, kind, lexeme });
    }

    (tokens.into_boxed_slice(), errors)
}
