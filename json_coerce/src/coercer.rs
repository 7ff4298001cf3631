//! Reusable coercer bound to pre-normalised options.

use serde_json::{Map, Value};

use crate::coerce::coerce;
use crate::object::coerce_entries;
use crate::{CoerceOptions, PartialCoerceOptions};

/// Coercer holding options normalised once at construction.
///
/// Repeated calls reuse the same [`CoerceOptions`], which matters when
/// processing mappings with many entries.
///
/// # Examples
///
/// ```rust
/// use json_coerce::{Coercer, PartialCoerceOptions};
/// use serde_json::json;
///
/// let coercer = Coercer::new(PartialCoerceOptions::new().with_boolean(false));
/// assert_eq!(coercer.parse_value(json!("true")), json!("true"));
/// assert_eq!(coercer.parse_value(json!("12")), json!(12));
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Coercer {
    options: CoerceOptions,
}

impl Coercer {
    /// Normalise `options` and bind them to a new coercer.
    #[must_use]
    pub fn new(options: impl Into<CoerceOptions>) -> Self {
        let normalised = options.into();
        tracing::debug!(options = ?normalised, "bound coercer created");
        Self {
            options: normalised,
        }
    }

    /// The options every call uses.
    #[must_use]
    pub const fn options(&self) -> CoerceOptions {
        self.options
    }

    /// Coerce a single value. See [`crate::parse_value`].
    #[must_use]
    pub fn parse_value(&self, value: Value) -> Value {
        coerce(value, &self.options)
    }

    /// Coerce every value in `data`. See [`crate::parse_object`].
    #[must_use]
    pub fn parse_object(&self, data: Map<String, Value>) -> Map<String, Value> {
        coerce_entries(data, &self.options)
    }

    /// Coerce key/value pairs. See [`crate::parse_pairs`].
    #[must_use]
    pub fn parse_pairs<I, K, V>(&self, pairs: I) -> Map<String, Value>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        coerce_entries(pairs, &self.options)
    }
}

impl From<CoerceOptions> for Coercer {
    fn from(options: CoerceOptions) -> Self {
        Self::new(options)
    }
}

/// Build a [`Coercer`] from optional partial options.
///
/// Equivalent to [`Coercer::new`]; `None` binds the defaults.
#[must_use]
pub fn create_bound_instance(options: Option<PartialCoerceOptions>) -> Coercer {
    Coercer::new(options)
}
