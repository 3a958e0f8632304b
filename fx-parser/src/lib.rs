//! Lexer and parser for single-variable function expressions, such as `2x^2 + sin(x) - 3`.
//!
//! The entry point is [`parser::Parser`], which tokenizes the source on construction and parses it
//! into an abstract syntax tree ([`parser::ast::Expr`]). Both passes are error-tolerant: illegal
//! characters, malformed numbers, and structural mistakes are recorded as diagnostics
//! ([`fx_error::Error`]) while lexing and parsing continue, so the caller always gets a tree
//! together with the ordered list of everything that went wrong.

pub mod names;
pub mod parser;
pub mod tokenizer;
