//! Configuration models.

pub mod comparator;
