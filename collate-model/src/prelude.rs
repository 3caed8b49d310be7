//! Convenience re-exports for crates that build comparators from descriptors.

pub use super::error::ModelError;
pub use super::field::{FIELD_DELIMITER, PART_DELIMITER, SortField, SortFields};
pub use super::wkt::{WktDefaults, WktParser};
