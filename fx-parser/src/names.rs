//! The canonical names of the builtin functions and constants.
//!
//! The parser needs these at parse time: a bare name directly followed by `(` is parsed as a
//! function call only when the name is listed in [`FUNCTIONS`]; anything else multiplies the
//! preceding term. The numeric and symbolic halves of each builtin live in the compute crate,
//! which is tested against these lists to keep the two in sync.

use levenshtein::levenshtein;

/// The names of the builtin functions.
pub const FUNCTIONS: &[&str] = &[
    "sin", "cos", "tan",
    "asin", "acos", "atan",
    "sec", "csc", "cot",
    "asec", "acsc", "acot",
    "abs", "sgn", "ln",
];

/// The names of the declared constants.
pub const CONSTANTS: &[&str] = &["pi", "e"];

/// Returns true if the given name is a builtin function.
pub fn is_function(name: &str) -> bool {
    FUNCTIONS.contains(&name)
}

/// Returns true if the given name is a declared constant.
pub fn is_constant(name: &str) -> bool {
    CONSTANTS.contains(&name)
}

/// Returns all builtin function names similar to the given name.
pub fn similar_functions(name: &str) -> Vec<&'static str> {
    FUNCTIONS
        .iter()
        .filter(|f| levenshtein(f, name) < 2)
        .copied()
        .collect()
}
