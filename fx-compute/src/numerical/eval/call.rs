use fx_parser::parser::ast::call::Call;
use crate::{funcs, numerical::{ctxt::Ctxt, eval::{finite, Eval}}};

impl Eval for Call {
    fn eval(&self, ctxt: &Ctxt, x: f64) -> Option<f64> {
        let arg = self.arg.eval(ctxt, x)?;
        let func = funcs::lookup(&self.name.name)?;
        finite(func.eval(arg))
    }
}
