//! Sort descriptor data shared across Collate crates.
//!
//! Nothing in here compares anything; it only describes *how* values should
//! be ordered and moves that description across a wire boundary (well-known
//! text for query strings, serde for JSON payloads).

pub mod error;
pub mod field;
pub mod prelude;
pub mod wkt;

pub use error::{ModelError, Result as ModelResult};
pub use field::{SortField, SortFields, normalize_path};
pub use wkt::{WktDefaults, WktParser, parse_field, parse_fields};
