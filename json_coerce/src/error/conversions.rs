//! Conversions from external error types into `CoerceError`.

use figment::Error as FigmentError;

use super::CoerceError;

impl From<FigmentError> for CoerceError {
    fn from(e: FigmentError) -> Self {
        Self::Gathering(Box::new(e))
    }
}

/// JSON option blobs that fail to deserialise are reported as invalid
/// options. Errors from `from_value` carry no position.
impl From<serde_json::Error> for CoerceError {
    fn from(e: serde_json::Error) -> Self {
        Self::invalid_options(e.to_string())
    }
}

impl From<CoerceError> for FigmentError {
    /// Allow using `?` in tests and integrations that return `figment::Error`.
    fn from(e: CoerceError) -> Self {
        match e {
            CoerceError::Gathering(fe) => *fe,
            other => Self::from(other.to_string()),
        }
    }
}
