//! Root finding over an evaluable expression: Newton–Raphson refinement from a seed point, and
//! bisection of a bracketing interval.
//!
//! Both routines are pure functions over immutable inputs, so they are safe to invoke
//! concurrently for different intervals. "No root found" is a normal negative result, not an
//! error: sampling code calls these at thousands of seed points and most of them find nothing.

use fx_compute::numerical::{ctxt::Ctxt, eval::Eval};
use fx_parser::parser::ast::Expr;
use crate::point::GraphPoint;

/// Absolute tolerance within which Newton–Raphson accepts a value as a root.
pub const ROOT_EPSILON: f64 = 1e-7;

/// Absolute tolerance within which bisection accepts a value as a root.
pub const BISECT_EPSILON: f64 = 1e-5;

/// The iteration cap for Newton–Raphson refinement.
const NEWTON_ITERATIONS: usize = 50;

/// The iteration cap for bisection.
const BISECT_ITERATIONS: usize = 15;

/// Refines the seed with Newton–Raphson iteration (`x ← x − f(x)/f′(x)`), using the expression
/// and its derivative.
///
/// The loop stops early if the derivative is undefined at the current estimate or too close to
/// zero to divide by. The final estimate only counts as a root if `|f(x)|` is within
/// [`ROOT_EPSILON`] of zero.
pub fn newton_raphson(
    seed: f64,
    f: &Expr,
    f_prime: &Expr,
    ctxt: &Ctxt,
) -> Option<GraphPoint<f64>> {
    let mut x = seed;

    for _ in 0..NEWTON_ITERATIONS {
        let Some(slope) = f_prime.eval(ctxt, x) else { break };
        if slope.abs() <= f64::EPSILON {
            break;
        }
        let Some(y) = f.eval(ctxt, x) else { break };
        x -= y / slope;
    }

    let y = f.eval(ctxt, x)?;
    (y.abs() <= ROOT_EPSILON).then(|| GraphPoint(x, y))
}

/// Bisects the interval between two sampled points, looking for a root of the expression.
///
/// Either endpoint already within [`BISECT_EPSILON`] of zero is returned immediately. If both
/// endpoints have the same sign, no sign change is bracketed and there is no root to find.
/// Otherwise the interval is halved up to 15 times, narrowing toward whichever half still
/// brackets the sign change; the midpoint is returned once its value is within tolerance, or
/// after the final halving if it happens to satisfy the tolerance.
pub fn bisect(
    p1: GraphPoint<f64>,
    p2: GraphPoint<f64>,
    f: &Expr,
    ctxt: &Ctxt,
) -> Option<GraphPoint<f64>> {
    if p1.1.abs() <= BISECT_EPSILON {
        return Some(p1);
    }
    if p2.1.abs() <= BISECT_EPSILON {
        return Some(p2);
    }
    if p1.1.signum() == p2.1.signum() {
        return None;
    }

    let (mut a, mut b) = (p1.0, p2.0);
    let mut value_at_a = p1.1;

    for _ in 0..BISECT_ITERATIONS {
        let midpoint = (a + b) / 2.0;
        let value = f.eval(ctxt, midpoint)?;
        if value.abs() <= BISECT_EPSILON {
            return Some(GraphPoint(midpoint, value));
        }

        if value.signum() == value_at_a.signum() {
            a = midpoint;
            value_at_a = value;
        } else {
            b = midpoint;
        }
    }

    let midpoint = (a + b) / 2.0;
    let value = f.eval(ctxt, midpoint)?;
    (value.abs() <= BISECT_EPSILON).then(|| GraphPoint(midpoint, value))
}
