use fx_parser::parser::{ast::unary::Unary, token::op::UnaryOpKind};
use crate::numerical::{ctxt::Ctxt, eval::{finite, Eval}};

/// Iterative factorial, defined for operands of at least one, rounded to the nearest integer.
/// Operands past 170 overflow an `f64` and are domain errors.
pub(crate) fn factorial(value: f64) -> Option<f64> {
    if !(1.0..=170.0).contains(&value) {
        return None;
    }

    let n = value.round() as u64;
    let mut product = 1.0;
    for i in 2..=n {
        product *= i as f64;
    }
    finite(product)
}

impl Eval for Unary {
    fn eval(&self, ctxt: &Ctxt, x: f64) -> Option<f64> {
        let operand = self.operand.eval(ctxt, x)?;
        match self.op.kind {
            UnaryOpKind::Neg => finite(-operand),
            UnaryOpKind::Factorial => factorial(operand),
        }
    }
}
