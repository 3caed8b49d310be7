//! Configuration library for Collate.
//!
//! Loads parser defaults and named sort presets from TOML or JSON, either
//! from a file, from inline JSON in the environment, or from well-known
//! default locations, and turns presets into comparator chains.

pub mod models;

pub use models::comparator::{ComparatorConfig, ConfigSource};
