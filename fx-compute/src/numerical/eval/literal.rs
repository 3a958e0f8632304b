use fx_parser::parser::ast::literal::{LitNum, LitSym};
use crate::numerical::{ctxt::Ctxt, eval::Eval};

impl Eval for LitNum {
    fn eval(&self, _ctxt: &Ctxt, _x: f64) -> Option<f64> {
        Some(self.value)
    }
}

impl Eval for LitSym {
    fn eval(&self, ctxt: &Ctxt, x: f64) -> Option<f64> {
        if self.independent {
            Some(x)
        } else {
            Some(ctxt.resolve(&self.name))
        }
    }
}
