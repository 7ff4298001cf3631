//! Gathering partial options from configuration sources.
//!
//! Options travel through `figment`, so any provider a host application
//! already uses (environment, TOML, serialised defaults) can feed the coercer.

use figment::{Figment, providers::Env};
use serde_json::Value;

use super::PartialCoerceOptions;
use crate::{CoerceError, CoerceResult};

impl PartialCoerceOptions {
    /// Extract partial options from an arbitrary figment.
    ///
    /// Keys the figment does not hold stay unspecified. Unknown keys are
    /// ignored.
    ///
    /// # Errors
    ///
    /// Returns [`CoerceError::Gathering`] when a recognised key holds a value
    /// that is not a boolean.
    pub fn from_figment(figment: &Figment) -> CoerceResult<Self> {
        figment.extract().map_err(CoerceError::from)
    }

    /// Read options from environment variables sharing `prefix`.
    ///
    /// With the prefix `APP_`, the variable `APP_EXPONENTIAL=true` sets
    /// [`Self::exponential`].
    ///
    /// ```rust,no_run
    /// use json_coerce::PartialCoerceOptions;
    ///
    /// let options = PartialCoerceOptions::from_env("APP_")?;
    /// let _ = options.normalize();
    /// # Ok::<_, json_coerce::CoerceError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`CoerceError::Gathering`] when a matching variable does not
    /// hold a boolean.
    pub fn from_env(prefix: &str) -> CoerceResult<Self> {
        Self::from_figment(&Figment::from(Env::prefixed(prefix)))
    }

    /// Parse options from an inline TOML document.
    ///
    /// ```rust
    /// use json_coerce::PartialCoerceOptions;
    ///
    /// let options = PartialCoerceOptions::from_toml_str("float = false\n")?;
    /// assert_eq!(options.float, Some(false));
    /// assert_eq!(options.boolean, None);
    /// # Ok::<_, json_coerce::CoerceError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`CoerceError::Gathering`] when the document is not valid TOML
    /// or a recognised key is not a boolean.
    #[cfg(feature = "toml")]
    pub fn from_toml_str(source: &str) -> CoerceResult<Self> {
        use figment::providers::{Format, Toml};

        Self::from_figment(&Figment::from(Toml::string(source)))
    }

    /// Convert a JSON options blob, such as one shipped alongside the
    /// payload it configures.
    ///
    /// # Errors
    ///
    /// Returns [`CoerceError::InvalidOptions`] when `value` is not an object
    /// or a recognised key holds something other than a boolean or `null`.
    pub fn from_json_value(value: Value) -> CoerceResult<Self> {
        if !value.is_object() {
            return Err(CoerceError::invalid_options(format!(
                "expected an object of boolean flags, found {}",
                json_kind(&value)
            )));
        }
        serde_json::from_value(value).map_err(CoerceError::from)
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
