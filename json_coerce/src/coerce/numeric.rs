//! Numeric detection.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Number;

/// Largest integer an `f64` represents exactly together with all its
/// predecessors (2^53 - 1).
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

#[expect(
    clippy::expect_used,
    reason = "the pattern is a literal and is covered by unit tests"
)]
static EXPONENTIAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?[0-9]+\.?[0-9]*e[+-]?[0-9]+$").expect("exponential pattern compiles")
});

/// Whether `text` is lexically in scientific notation, e.g. `"2e2"` or
/// `"-1.5e-3"`. No range check is made.
pub(super) fn is_exponential(text: &str) -> bool {
    EXPONENTIAL.is_match(text)
}

/// Convert `text` into a finite number.
///
/// Scientific notation is only accepted when `allow_exponential` is set. The
/// whole string must parse; trailing characters disqualify it.
pub(super) fn coerce_number(text: &str, allow_exponential: bool) -> Option<Number> {
    if text.is_empty() {
        return None;
    }
    if !allow_exponential && is_exponential(text) {
        tracing::trace!(text, "leaving exponential literal as text");
        return None;
    }
    let parsed = text.parse::<f64>().ok()?;
    if !parsed.is_finite() {
        return None;
    }
    Some(to_number(parsed))
}

/// Store integral values as JSON integers so `"123"` compares equal to `123`.
#[expect(
    clippy::cast_possible_truncation,
    reason = "only integral values within the safe-integer range are cast"
)]
fn to_number(value: f64) -> Number {
    let negative_zero = value == 0.0 && value.is_sign_negative();
    if value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER && !negative_zero {
        return Number::from(value as i64);
    }
    // `value` is finite, so `from_f64` cannot refuse it.
    Number::from_f64(value).unwrap_or_else(|| Number::from(0))
}
