//! Test helpers shared across crates.
//!
//! Provides the canonical payload fixtures and a `figment::Jail` wrapper.

pub mod figment;
pub mod payloads;
