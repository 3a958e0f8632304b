use crate::{
    parser::{error::{kind, Error}, Parse, Parser},
    tokenizer::TokenKind,
};
use std::ops::Range;

/// Generates a unit struct for each keyword, as well as a simple [`Parse`] implementation for each
/// keyword. This enables the parser to use and request keywords as a type, which is much more
/// ergonomic than using a string.
macro_rules! keywords {
    ($(($name:ident, $lexeme:tt))*) => {
        $(
            #[derive(Clone, Debug, PartialEq, Eq)]
            pub struct $name<'source> {
                pub lexeme: &'source str,
                pub span: Range<usize>,
            }

            impl<'source> Parse<'source> for $name<'source> {
                fn std_parse(
                    input: &mut Parser<'source>,
                    _: &mut Vec<Error>,
                ) -> Result<Self, Vec<Error>> {
                    let token = input.next_token().map_err(|error| vec![error])?;

                    if token.kind == TokenKind::Keyword && token.lexeme == stringify!($lexeme) {
                        Ok(Self {
                            lexeme: token.lexeme,
                            span: token.span,
                        })
                    } else {
                        Err(vec![Error::new(vec![token.span], kind::UnexpectedToken {
                            expected: &[TokenKind::Keyword],
                            found: token.kind,
                        })])
                    }
                }
            }
        )*
    };
}

keywords!(
    (Sigma, sigma)
);
