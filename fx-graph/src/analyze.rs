//! Curve feature extraction: roots, extrema, and inflection points.
//!
//! The analysis derives `f′`, `f″`, and `f‴` symbolically, then scans the sampling grid with
//! Newton–Raphson from every defined sample, deduplicating the points the iterations converge
//! to. Expressions with no symbolic derivative simply produce empty feature lists; analysis
//! never fails.

use fx_compute::{
    numerical::{ctxt::Ctxt, eval::Eval},
    symbolic::{derivative::derivative, simplify::simplify},
};
use fx_parser::parser::ast::Expr;
use rayon::prelude::*;
use std::cmp::Ordering;
use crate::{
    opts::SampleOptions,
    point::GraphPoint,
    roots::{newton_raphson, ROOT_EPSILON},
};

/// Converged x-positions closer together than this are treated as the same point.
const DEDUP_EPSILON: f64 = 1e-4;

/// A local extremum of the analyzed expression.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extremum {
    /// The location of the extremum on the curve.
    pub point: GraphPoint<f64>,

    /// Whether the extremum is a local maximum. Otherwise, it is a local minimum.
    pub is_max: bool,
}

/// The curve features found by [`analyze`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Analysis {
    /// Points where the expression crosses zero.
    pub roots: Vec<GraphPoint<f64>>,

    /// Local maxima and minima of the expression.
    pub extrema: Vec<Extremum>,

    /// Points where the concavity of the expression changes.
    pub inflections: Vec<GraphPoint<f64>>,
}

/// Analyzes the expression across the sampling window.
pub fn analyze(expr: &Expr, ctxt: &Ctxt, opts: SampleOptions) -> Analysis {
    let d1 = derivative(expr).map(|d| simplify(&d));
    let d2 = d1.as_ref().and_then(|d| derivative(d)).map(|d| simplify(&d));
    let d3 = d2.as_ref().and_then(|d| derivative(d)).map(|d| simplify(&d));

    let mut analysis = Analysis::default();

    let Some(d1) = d1 else { return analysis };
    analysis.roots = scan_roots(expr, &d1, ctxt, opts)
        .into_iter()
        .filter_map(|x| expr.eval(ctxt, x).map(|y| GraphPoint(x, y)))
        .collect();

    let Some(d2) = d2 else { return analysis };
    // extrema are roots of f' where f'' is nonzero; the sign of f'' separates maxima from minima
    analysis.extrema = scan_roots(&d1, &d2, ctxt, opts)
        .into_iter()
        .filter_map(|x| {
            let concavity = d2.eval(ctxt, x)?;
            if concavity.abs() <= ROOT_EPSILON {
                return None;
            }
            let y = expr.eval(ctxt, x)?;
            Some(Extremum {
                point: GraphPoint(x, y),
                is_max: concavity < 0.0,
            })
        })
        .collect();

    let Some(d3) = d3 else { return analysis };
    // inflection points are roots of f'' where f''' is nonzero
    analysis.inflections = scan_roots(&d2, &d3, ctxt, opts)
        .into_iter()
        .filter_map(|x| {
            if d3.eval(ctxt, x)?.abs() <= ROOT_EPSILON {
                return None;
            }
            expr.eval(ctxt, x).map(|y| GraphPoint(x, y))
        })
        .collect();

    analysis
}

/// Runs Newton–Raphson from every defined sample position and collects the deduplicated
/// x-positions the iterations converge to.
fn scan_roots(f: &Expr, f_prime: &Expr, ctxt: &Ctxt, opts: SampleOptions) -> Vec<f64> {
    let mut found: Vec<f64> = opts
        .positions()
        .into_par_iter()
        .filter_map(|seed| {
            // skip seeds where the expression itself is undefined
            f.eval(ctxt, seed)?;
            let root = newton_raphson(seed, f, f_prime, ctxt)?;
            // only keep roots inside the window; iteration can wander far outside it
            (opts.min_x..=opts.max_x).contains(&root.0).then_some(root.0)
        })
        .collect();

    found.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    found.dedup_by(|a, b| (*a - *b).abs() <= DEDUP_EPSILON);
    found
}
