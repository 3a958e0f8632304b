use fx_compute::numerical::{ctxt::Ctxt, eval::Eval};
use fx_parser::parser::ast::Expr;
use rayon::prelude::*;
use crate::{opts::SampleOptions, point::GraphPoint};

/// Samples the expression across the window described by the options.
///
/// The result holds one entry per sample position, in order from `min_x` to `max_x`. `None`
/// marks a sample where the expression is undefined; callers drawing the curve break the path
/// at those samples instead of connecting across them.
///
/// Every sample is an independent evaluation against the shared read-only context, so the work
/// is spread across threads.
pub fn sample(expr: &Expr, ctxt: &Ctxt, opts: SampleOptions) -> Vec<Option<GraphPoint<f64>>> {
    opts.positions()
        .into_par_iter()
        .map(|x| expr.eval(ctxt, x).map(|y| GraphPoint(x, y)))
        .collect()
}

#[cfg(test)]
mod tests {
    use fx_parser::parser::Parser;
    use super::*;

    #[test]
    fn undefined_samples_are_holes() {
        let expr = Parser::new("1/x").try_parse_full::<Expr>().unwrap();
        let ctxt = Ctxt::default();
        let samples = sample(&expr, &ctxt, SampleOptions::default().window(-1.0, 1.0).step(0.5));

        // -1.0, -0.5, 0.0, 0.5, 1.0
        assert_eq!(samples.len(), 5);
        assert_eq!(samples[0], Some(GraphPoint(-1.0, -1.0)));
        assert_eq!(samples[2], None);
        assert_eq!(samples[4], Some(GraphPoint(1.0, 1.0)));
    }

    #[test]
    fn samples_are_ordered() {
        let expr = Parser::new("x").try_parse_full::<Expr>().unwrap();
        let ctxt = Ctxt::default();
        let samples = sample(&expr, &ctxt, SampleOptions::default().window(0.0, 1.0).step(0.25));

        let xs: Vec<f64> = samples.into_iter().flatten().map(|point| point.0).collect();
        assert_eq!(xs, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }
}
