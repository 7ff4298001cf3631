//! Restore types to string-valued JSON payloads.
//!
//! Form posts and flattened envelopes often deliver every value as a string:
//! `"true"`, `"123"`, `"[1, 2]"`. This crate turns such values back into
//! booleans, numbers, arrays and objects, leaving anything ambiguous or
//! malformed as the original text. Which coercions run is controlled by
//! [`CoerceOptions`], usually built from a [`PartialCoerceOptions`].
//!
//! ```rust
//! use json_coerce::{CoerceOptions, Coercer, parse_object};
//! use serde_json::json;
//!
//! let envelope = json!({
//!     "enabled": "true",
//!     "retries": "3",
//!     "ratio": ".5",
//!     "tags": "[\"a\", \"b\"]",
//!     "version": "1.2.3",
//! });
//! let fields = envelope.as_object().cloned().unwrap_or_default();
//! let typed = parse_object(fields, CoerceOptions::DEFAULT);
//! assert_eq!(
//!     serde_json::Value::Object(typed),
//!     json!({
//!         "enabled": true,
//!         "retries": 3,
//!         "ratio": 0.5,
//!         "tags": ["a", "b"],
//!         "version": "1.2.3",
//!     })
//! );
//!
//! let coercer = Coercer::default();
//! assert_eq!(coercer.parse_value(json!("false")), json!(false));
//! ```

mod coerce;
mod coercer;
mod error;
mod object;
mod options;

pub use coerce::parse_value;
pub use coercer::{Coercer, create_bound_instance};
pub use error::{CoerceError, CoerceResult};
pub use object::{parse_object, parse_pairs};
pub use options::{CoerceOptions, PartialCoerceOptions, normalize_options};
