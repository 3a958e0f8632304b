//! Symbolic manipulation of expression trees: exact differentiation and algebraic
//! simplification.
//!
//! Both operations are structural rewrites producing new trees; the input tree is never mutated.
//! Synthesized nodes carry empty spans, since they correspond to no source text.

pub(crate) mod build;
pub mod derivative;
pub mod simplify;
