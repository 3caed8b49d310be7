//! Strategy pattern for sorting slices
//!
//! A [`SortStrategy`] sorts a slice in place or reports why it could not.
//! Chains sort with their links; a [`SortFields`] list sorts by building a
//! chain with the default extractor first.

use collate_contracts::Introspect;
use collate_model::SortFields;

use super::builder::ComparatorBuilder;
use super::chain::ComparatorChain;
use super::traits::ObjectComparator;
use crate::error::{ComparatorError, Result};
use crate::extractor::{DefaultValueExtractor, ValueExtractor};

/// A sorting strategy that can be held behind one interface
pub trait SortStrategy<T>: Send + Sync {
    /// Apply this sorting strategy to the given items
    ///
    /// On error the items keep their original order.
    fn sort(&self, items: &mut [T]) -> Result<()>;

    /// Check if this strategy can be applied to the given sample item
    fn can_apply(&self, sample: &T) -> bool;
}

impl<T: Introspect> SortStrategy<T> for ComparatorChain {
    fn sort(&self, items: &mut [T]) -> Result<()> {
        ComparatorChain::sort(self, items)
    }

    /// Every link resolves its values on `sample`.
    fn can_apply(&self, sample: &T) -> bool {
        !matches!(
            self.compare(sample, sample),
            Err(ComparatorError::ValueResolution { .. })
        )
    }
}

impl<T: Introspect> SortStrategy<T> for SortFields {
    fn sort(&self, items: &mut [T]) -> Result<()> {
        ComparatorBuilder::new()
            .sort_fields(self)
            .build()
            .sort(items)
    }

    /// Every field path resolves on `sample`.
    fn can_apply(&self, sample: &T) -> bool {
        let extractor = DefaultValueExtractor::new();
        self.iter()
            .all(|field| extractor.resolve(sample, field.path()).is_ok())
    }
}
