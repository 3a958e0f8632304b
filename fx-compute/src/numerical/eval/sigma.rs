use fx_parser::parser::ast::sigma::Sigma;
use crate::numerical::{ctxt::Ctxt, eval::{finite, Eval}};

impl Eval for Sigma {
    fn eval(&self, ctxt: &Ctxt, x: f64) -> Option<f64> {
        let start = self.start.eval(ctxt, x)?;
        let end = self.end.eval(ctxt, x)?;

        let mut sum = 0.0;
        let mut index = start;
        while index <= end {
            // the index is bound in a copy of the context, so the caller's context is never
            // mutated and concurrent evaluations cannot observe the binding
            let bound = ctxt.extended(&self.index.name, index);
            sum += self.body.eval(&bound, x)?;
            index += 1.0;
        }

        finite(sum)
    }
}
