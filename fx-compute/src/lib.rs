//! Evaluation and symbolic manipulation of parsed function expressions.
//!
//! The crate has two halves, mirroring the two things you can do with an expression tree:
//!
//! - [`numerical`] evaluates a tree at a point. Evaluation takes an immutable context of declared
//!   symbols ([`numerical::ctxt::Ctxt`]) plus the value of the independent variable, and returns
//!   `Option<f64>`, where `None` marks a domain error.
//! - [`symbolic`] rewrites trees: exact differentiation ([`symbolic::derivative`]) and algebraic
//!   simplification ([`symbolic::simplify`]).
//!
//! The builtin function table consumed by both halves lives in [`funcs`], and the named constants
//! in [`consts`].

pub mod consts;
pub mod funcs;
pub mod numerical;
pub mod symbolic;
