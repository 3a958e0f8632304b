use super::ast::{expr::{ErrorExpr, Expr}, literal::LitSym};

/// A trait for producing garbage values, useful for recovering from parsing errors.
///
/// We could've implemented [`Default`] on types instead, but garbage values are not useful to the
/// end user, and we don't want to encourage its use due to [`Default`] being implemented.
pub trait Garbage {
    /// Produces a garbage value.
    fn garbage() -> Self;
}

impl Garbage for Expr {
    fn garbage() -> Self {
        Expr::Error(ErrorExpr { span: 0..0 })
    }
}

impl Garbage for LitSym {
    fn garbage() -> Self {
        Self { name: String::new(), independent: false, span: 0..0 }
    }
}
