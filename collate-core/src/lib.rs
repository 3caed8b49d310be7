//! # Collate Core
//!
//! Runtime comparators for arbitrary values, driven by declarative sort
//! descriptors.
//!
//! ## Overview
//!
//! A [`SortField`] names a dot-separated path into a value together with a
//! direction, a case policy and a null policy. This crate turns descriptors
//! into comparators:
//!
//! - **Extraction**: [`ValueExtractor`] resolves a path against anything
//!   implementing [`Introspect`], walking members, accessors and ancestors
//! - **Field ordering**: [`ValueComparator`] applies null placement, case
//!   folding and direction to the two extracted values
//! - **Chains**: [`ComparatorChain`] evaluates links left to right and falls
//!   back to natural ordering when every link ties
//! - **Building**: [`ComparatorBuilder`] assembles chains from fields,
//!   well-known text and caller-supplied comparators
//!
//! ## Examples
//!
//! ```
//! use collate_core::prelude::*;
//! use serde_json::json;
//!
//! let chain = ComparatorBuilder::new().from_wkt("city|age,desc").build();
//! let mut people = vec![
//!     json!({ "city": "bonn", "age": 31 }),
//!     json!({ "city": "Aachen", "age": 40 }),
//!     json!({ "city": "Bonn", "age": 52 }),
//! ];
//! chain.sort(&mut people).unwrap();
//! assert_eq!(people[0]["city"], "Aachen");
//! assert_eq!(people[1]["age"], 52);
//! ```
//!
//! [`SortField`]: collate_model::SortField

pub mod error;
pub mod extractor;
pub mod sorting;

pub use collate_contracts::{Introspect, Value, cmp_ignore_case};
pub use collate_model::{SortField, SortFields, WktDefaults, WktParser};
pub use error::{ComparatorError, Result};
pub use extractor::{
    DefaultValueExtractor, PATH_DELIMITER, ValueExtractor, possible_accessor_names,
};
pub use sorting::{
    ComparatorBuilder, ComparatorChain, DelegatingComparator, FnComparator, ObjectComparator,
    SortStrategy, ValueComparator, ValueOrderFn, null_placement,
};

/// Everything needed to build and run comparator chains.
pub mod prelude {
    pub use crate::error::{ComparatorError, Result};
    pub use crate::extractor::{DefaultValueExtractor, ValueExtractor};
    pub use crate::sorting::{
        ComparatorBuilder, ComparatorChain, DelegatingComparator, ObjectComparator, SortStrategy,
        ValueComparator,
    };
    pub use collate_contracts::prelude::*;
    pub use collate_model::prelude::*;
}
