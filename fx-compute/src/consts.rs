//! The named constants available to every expression.

use once_cell::sync::Lazy;
use std::collections::HashMap;

pub const PI: f64 = std::f64::consts::PI;

/// Euler's number.
pub const E: f64 = std::f64::consts::E;

/// The table of named constants, keyed by the names the parser recognizes.
pub static CONSTANTS: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    [
        ("pi", PI),
        ("e", E),
    ]
        .into_iter()
        .collect()
});

#[cfg(test)]
mod tests {
    use super::*;

    /// The parser's constant name list and this table must agree.
    #[test]
    fn names_in_sync_with_parser() {
        for &name in fx_parser::names::CONSTANTS {
            assert!(CONSTANTS.contains_key(name), "constant `{name}` has no value");
        }
        for &name in CONSTANTS.keys() {
            assert!(fx_parser::names::is_constant(name), "constant `{name}` is unknown to the parser");
        }
    }
}
