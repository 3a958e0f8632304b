pub mod abs;
pub mod binary;
pub mod call;
pub mod expr;
pub mod literal;
pub mod paren;
pub mod sigma;
pub mod unary;

pub use expr::{ErrorExpr, Expr};
