//! Coercion options and their normalisation.
//!
//! [`CoerceOptions`] is the complete, read-only configuration consulted by the
//! coercer. Callers normally describe what they want with a
//! [`PartialCoerceOptions`], leaving any flag they do not care about as
//! `None`; normalisation fills the gaps from [`CoerceOptions::DEFAULT`].

mod load;

use serde::{Deserialize, Serialize};

/// Complete set of coercion toggles.
///
/// Values of this type are only produced by normalisation, so every flag is
/// always decided. The type is `Copy` and exposes no setters: a normalised
/// configuration never changes after construction.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize)]
pub struct CoerceOptions {
    boolean: bool,
    float: bool,
    exponential: bool,
    array: bool,
    object: bool,
}

impl CoerceOptions {
    /// Defaults applied to any flag left unspecified.
    ///
    /// Everything is enabled except [`Self::exponential`].
    pub const DEFAULT: Self = Self {
        boolean: true,
        float: true,
        exponential: false,
        array: true,
        object: true,
    };

    /// Configuration with every coercion switched off.
    pub const DISABLED: Self = Self {
        boolean: false,
        float: false,
        exponential: false,
        array: false,
        object: false,
    };

    /// Whether `"true"`/`"false"` become booleans.
    #[must_use]
    pub const fn boolean(&self) -> bool {
        self.boolean
    }

    /// Whether numeric strings become numbers.
    #[must_use]
    pub const fn float(&self) -> bool {
        self.float
    }

    /// Whether scientific-notation strings such as `"2e2"` may become
    /// numbers. Only consulted when [`Self::float`] is set.
    #[must_use]
    pub const fn exponential(&self) -> bool {
        self.exponential
    }

    /// Whether `[...]` strings are decoded.
    #[must_use]
    pub const fn array(&self) -> bool {
        self.array
    }

    /// Whether `{...}` strings are decoded.
    #[must_use]
    pub const fn object(&self) -> bool {
        self.object
    }

    /// Whether structural detection runs at all.
    ///
    /// Either [`Self::array`] or [`Self::object`] enables decoding of both
    /// bracket styles.
    #[must_use]
    pub const fn structural(&self) -> bool {
        self.array || self.object
    }
}

impl Default for CoerceOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Caller-facing options where every flag may be left unspecified.
///
/// Unknown keys are ignored when deserialising, so a misspelt option silently
/// falls back to its default.
///
/// # Examples
///
/// ```rust
/// use json_coerce::{CoerceOptions, PartialCoerceOptions};
///
/// let options = PartialCoerceOptions::new().with_exponential(true).normalize();
/// assert!(options.exponential());
/// assert!(options.boolean());
/// assert_eq!(PartialCoerceOptions::new().normalize(), CoerceOptions::DEFAULT);
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct PartialCoerceOptions {
    /// See [`CoerceOptions::boolean`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boolean: Option<bool>,
    /// See [`CoerceOptions::float`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub float: Option<bool>,
    /// See [`CoerceOptions::exponential`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exponential: Option<bool>,
    /// See [`CoerceOptions::array`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub array: Option<bool>,
    /// See [`CoerceOptions::object`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object: Option<bool>,
}

impl PartialCoerceOptions {
    /// Options with nothing specified.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            boolean: None,
            float: None,
            exponential: None,
            array: None,
            object: None,
        }
    }

    /// Set the `boolean` flag.
    #[must_use]
    pub const fn with_boolean(mut self, enabled: bool) -> Self {
        self.boolean = Some(enabled);
        self
    }

    /// Set the `float` flag.
    #[must_use]
    pub const fn with_float(mut self, enabled: bool) -> Self {
        self.float = Some(enabled);
        self
    }

    /// Set the `exponential` flag.
    #[must_use]
    pub const fn with_exponential(mut self, enabled: bool) -> Self {
        self.exponential = Some(enabled);
        self
    }

    /// Set the `array` flag.
    #[must_use]
    pub const fn with_array(mut self, enabled: bool) -> Self {
        self.array = Some(enabled);
        self
    }

    /// Set the `object` flag.
    #[must_use]
    pub const fn with_object(mut self, enabled: bool) -> Self {
        self.object = Some(enabled);
        self
    }

    /// Fill every unspecified flag from [`CoerceOptions::DEFAULT`].
    #[must_use]
    pub const fn normalize(&self) -> CoerceOptions {
        let defaults = CoerceOptions::DEFAULT;
        CoerceOptions {
            boolean: or_default(self.boolean, defaults.boolean),
            float: or_default(self.float, defaults.float),
            exponential: or_default(self.exponential, defaults.exponential),
            array: or_default(self.array, defaults.array),
            object: or_default(self.object, defaults.object),
        }
    }

    /// Layer `upper` over `self`, field by field.
    ///
    /// Flags set in `upper` win; flags it leaves unspecified keep the value
    /// from `self`.
    ///
    /// ```rust
    /// use json_coerce::PartialCoerceOptions;
    ///
    /// let file = PartialCoerceOptions::new().with_boolean(false).with_float(false);
    /// let env = PartialCoerceOptions::new().with_float(true);
    /// let merged = file.overlay(env);
    /// assert_eq!(merged.boolean, Some(false));
    /// assert_eq!(merged.float, Some(true));
    /// ```
    #[must_use]
    pub const fn overlay(self, upper: Self) -> Self {
        Self {
            boolean: first_set(upper.boolean, self.boolean),
            float: first_set(upper.float, self.float),
            exponential: first_set(upper.exponential, self.exponential),
            array: first_set(upper.array, self.array),
            object: first_set(upper.object, self.object),
        }
    }
}

const fn or_default(value: Option<bool>, default: bool) -> bool {
    match value {
        Some(value) => value,
        None => default,
    }
}

const fn first_set(upper: Option<bool>, lower: Option<bool>) -> Option<bool> {
    match upper {
        Some(_) => upper,
        None => lower,
    }
}

/// Produce a complete configuration from optional partial options.
///
/// `None` yields [`CoerceOptions::DEFAULT`]. The input is never modified.
///
/// ```rust
/// use json_coerce::{CoerceOptions, PartialCoerceOptions, normalize_options};
///
/// assert_eq!(normalize_options(None), CoerceOptions::DEFAULT);
/// let partial = PartialCoerceOptions::new().with_array(false);
/// assert!(!normalize_options(Some(&partial)).array());
/// ```
#[must_use]
pub const fn normalize_options(partial: Option<&PartialCoerceOptions>) -> CoerceOptions {
    match partial {
        Some(partial) => partial.normalize(),
        None => CoerceOptions::DEFAULT,
    }
}

impl From<PartialCoerceOptions> for CoerceOptions {
    fn from(partial: PartialCoerceOptions) -> Self {
        partial.normalize()
    }
}

impl From<&PartialCoerceOptions> for CoerceOptions {
    fn from(partial: &PartialCoerceOptions) -> Self {
        partial.normalize()
    }
}

impl From<Option<PartialCoerceOptions>> for CoerceOptions {
    fn from(partial: Option<PartialCoerceOptions>) -> Self {
        normalize_options(partial.as_ref())
    }
}

impl From<Option<&PartialCoerceOptions>> for CoerceOptions {
    fn from(partial: Option<&PartialCoerceOptions>) -> Self {
        normalize_options(partial)
    }
}

impl From<CoerceOptions> for PartialCoerceOptions {
    fn from(options: CoerceOptions) -> Self {
        Self {
            boolean: Some(options.boolean),
            float: Some(options.float),
            exponential: Some(options.exponential),
            array: Some(options.array),
            object: Some(options.object),
        }
    }
}
