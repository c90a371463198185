//! Operand grammar.
//!
//! An operand is a decimal numeral with an optional sign, an optional
//! fractional part, and an optional `e`/`E` exponent. Textual specials such
//! as `NaN` or `Infinity` are not numerals and are rejected here, before any
//! float parsing happens.

use once_cell::sync::Lazy;
use regex::Regex;

static NUMERAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?$")
        .expect("numeral pattern compiles")
});

/// Parse operand text into a finite `f64`.
///
/// Returns `None` if the text is not a numeral or if its value does not fit
/// in a finite double (e.g. `1e400`). Negative zero is preserved.
pub fn parse_operand(text: &str) -> Option<f64> {
    if !NUMERAL.is_match(text) {
        return None;
    }
    let value: f64 = text.parse().ok()?;
    value.is_finite().then_some(value)
}
