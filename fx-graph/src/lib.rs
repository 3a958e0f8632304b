//! Numeric analysis of single-variable expressions: sampling a curve across a window, locating
//! roots with Newton–Raphson and bisection, and extracting curve features (roots, extrema,
//! inflection points) for display.
//!
//! Everything here works on coordinate lists in graph units. Rasterization, axes, and
//! screen-space mapping belong to the presentation layer and are not part of this crate.

pub mod analyze;
pub mod opts;
pub mod point;
pub mod roots;
pub mod sample;

pub use analyze::{analyze, Analysis, Extremum};
pub use opts::SampleOptions;
pub use point::GraphPoint;
pub use roots::{bisect, newton_raphson, BISECT_EPSILON, ROOT_EPSILON};
pub use sample::sample;
