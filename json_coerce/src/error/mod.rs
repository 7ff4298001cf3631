//! Error types produced while gathering coercion options.
//!
//! Coercion itself never fails; only option loading can.

mod conversions;
mod types;

pub use types::{CoerceError, CoerceResult};
