use fx_parser::parser::{ast::binary::Binary, token::op::BinOpKind};
use crate::numerical::{ctxt::Ctxt, eval::{finite, Eval}};

/// Denominators closer to zero than this are treated as division domain errors. One epsilon is
/// used everywhere a division is performed, including constant folding.
pub const DIV_EPSILON: f64 = 1e-9;

/// Evaluates the binary operation given the operator and the two operand values.
pub(crate) fn eval_operands(op: BinOpKind, left: f64, right: f64) -> Option<f64> {
    match op {
        BinOpKind::Add => finite(left + right),
        BinOpKind::Sub => finite(left - right),
        BinOpKind::Mul => finite(left * right),
        BinOpKind::Div => {
            if right.abs() <= DIV_EPSILON {
                None
            } else {
                finite(left / right)
            }
        },
        BinOpKind::Exp => eval_pow(left, right),
    }
}

/// Raises `base` to `exp`, staying within the reals.
///
/// A negative base with a fractional exponent only has a real value when the exponent is the
/// reciprocal of an odd integer; that case follows the odd-root sign convention
/// (`(-8)^(1/3) = -2`). Reciprocals of even integers, and fractional exponents that are not
/// reciprocals of integers at all, are domain errors rather than complex results.
fn eval_pow(base: f64, exp: f64) -> Option<f64> {
    if base < 0.0 && exp.fract() != 0.0 {
        let recip = exp.recip();
        let rounded = recip.round();
        if (recip - rounded).abs() < 1e-9 && (rounded as i64) % 2 != 0 {
            return finite(-(-base).powf(exp));
        }
        return None;
    }

    finite(base.powf(exp))
}

impl Eval for Binary {
    fn eval(&self, ctxt: &Ctxt, x: f64) -> Option<f64> {
        let left = self.lhs.eval(ctxt, x)?;
        let right = self.rhs.eval(ctxt, x)?;
        eval_operands(self.op.kind, left, right)
    }
}
