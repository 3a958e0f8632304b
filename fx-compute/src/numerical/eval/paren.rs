use fx_parser::parser::ast::{abs::Abs, paren::Paren};
use crate::numerical::{ctxt::Ctxt, eval::{finite, Eval}};

impl Eval for Paren {
    fn eval(&self, ctxt: &Ctxt, x: f64) -> Option<f64> {
        self.expr.eval(ctxt, x)
    }
}

impl Eval for Abs {
    fn eval(&self, ctxt: &Ctxt, x: f64) -> Option<f64> {
        finite(self.expr.eval(ctxt, x)?.abs())
    }
}
