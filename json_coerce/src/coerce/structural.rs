//! Structural detection of JSON-encoded arrays and objects.

use serde_json::Value;

/// Decode `text` when its first and last characters form a matching pair of
/// brackets or braces.
pub(super) fn coerce_structure(text: &str) -> Option<Value> {
    if !is_bracketed(text) {
        return None;
    }
    try_decode(text)
}

const fn is_bracketed(text: &str) -> bool {
    let bytes = text.as_bytes();
    matches!(
        (bytes.first(), bytes.last()),
        (Some(b'['), Some(b']')) | (Some(b'{'), Some(b'}'))
    )
}

/// Decode `text` as JSON, reporting failure as `None` rather than an error.
///
/// `serde_json` keeps its recursion limit of 128 nested arrays or objects, so
/// deeper documents stay text. Numbers that overflow `f64` and unpaired
/// surrogate escapes are also refused.
pub(super) fn try_decode(text: &str) -> Option<Value> {
    serde_json::from_str(text)
        .inspect_err(|err| tracing::trace!(%err, "invalid bracketed JSON"))
        .ok()
}
