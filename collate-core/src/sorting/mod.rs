//! Comparators built from sort descriptors
//!
//! This module provides:
//! - The [`ObjectComparator`] trait every chain link implements
//! - Field-level ordering with null, case and direction policy
//! - Delegating links that apply caller-supplied orderings to extracted values
//! - Comparator chains and the builder that assembles them
//! - A stable, fallible sort over slices of introspectable values

pub mod builder;
pub mod chain;
pub mod delegating;
pub mod strategy;
pub mod traits;
pub mod utils;
pub mod value;


pub use builder::*;
pub use chain::*;
pub use delegating::*;
pub use strategy::*;
pub use traits::*;
pub use value::*;
