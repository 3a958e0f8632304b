use ariadne::Fmt;
use fx_attrs::ErrorKind;
use fx_error::{ErrorKind, EXPR};
use crate::tokenizer::TokenKind;

/// An intentionally useless error. This should only be used for non-fatal errors, as it contains
/// no useful information.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "an internal non-fatal error occurred while parsing",
    labels = ["here"],
    help = "you should never see this error; please report this as a bug"
)]
pub struct NonFatal;

/// The end of the source code was reached unexpectedly.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected end of input",
    labels = [format!("you might need to add another {} here", "expression".fg(EXPR))],
)]
pub struct UnexpectedEof;

/// The end of the source code was expected, but something else was found.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expected end of input",
    labels = [format!("I could not understand the remaining {} here", "expression".fg(EXPR))],
)]
pub struct ExpectedEof;

/// An unexpected token was encountered.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected token",
    labels = [format!("expected one of: {}", self.expected.iter().map(|t| format!("{:?}", t)).collect::<Vec<_>>().join(", "))],
    help = format!("found {:?}", self.found),
)]
pub struct UnexpectedToken {
    /// The token(s) that were expected.
    pub expected: &'static [TokenKind],

    /// The token that was found.
    pub found: TokenKind,
}

/// A character the tokenizer does not recognize.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unknown character `{}`", self.character),
    labels = ["this character is not part of the expression syntax"],
)]
pub struct UnknownCharacter {
    /// The offending character.
    pub character: char,
}

/// A numeric literal with a dangling decimal point, such as `3.`.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "malformed number",
    labels = ["the fractional part of a number needs at least one digit"],
    help = "remove this dot, or add a digit after it",
)]
pub struct MalformedNumber;

/// A parenthesis was not closed.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unclosed parenthesis",
    labels = ["this parenthesis is not closed"],
    help = if self.opening {
        "add a closing parenthesis `)` somewhere after this"
    } else {
        "add an opening parenthesis `(` somewhere before this"
    },
)]
pub struct UnclosedParenthesis {
    /// Whether the parenthesis was an opening parenthesis `(`. Otherwise, the parenthesis was a
    /// closing parenthesis `)`.
    pub opening: bool,
}

/// An absolute value bar was not closed.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unclosed absolute value",
    labels = ["this `|` is not closed"],
    help = "add a closing `|` somewhere after this",
)]
pub struct UnclosedPipe;

/// A bare name that is not the independent variable, a declared constant, or a builtin function.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unknown symbol `{}`", self.name),
    labels = ["this name is not defined"],
    help = if self.similar.is_empty() {
        "only the independent variable, declared constants, and builtin function names can be used here".to_string()
    } else {
        format!("did you mean `{}`?", self.similar.join("`, `"))
    },
)]
pub struct UnknownSymbol {
    /// The name that could not be resolved.
    pub name: String,

    /// Builtin function names similar to the unresolved name.
    pub similar: Vec<String>,
}

/// A summation index that collides with a name that already has a meaning.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("summation index `{}` is already defined", self.name),
    labels = ["choose a different name for this index"],
)]
pub struct ShadowedSummationIndex {
    /// The index name.
    pub name: String,
}

/// A token that cannot begin an expression.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unknown expression",
    labels = [format!("I expected to see an {} here", "expression".fg(EXPR))],
)]
pub struct UnknownExpression;
