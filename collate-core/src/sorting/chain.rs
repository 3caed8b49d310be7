//! Ordered comparator chains.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use collate_contracts::{Introspect, Value};
use tracing::{trace, warn};

use super::traits::ObjectComparator;
use super::utils::{apply_permutation, try_merge_sort_indices};
use crate::error::{ComparatorError, Result};

/// An immutable sequence of comparison links evaluated left to right.
///
/// The first link that returns something other than `Equal` decides. When
/// every link ties (or there are none), the objects' own natural ordering
/// decides, and objects without one are an error.
#[derive(Clone, Default)]
pub struct ComparatorChain {
    links: Arc<[Arc<dyn ObjectComparator>]>,
}

impl ComparatorChain {
    /// Chain evaluating `links` in order.
    pub fn new(links: Vec<Arc<dyn ObjectComparator>>) -> Self {
        Self {
            links: links.into(),
        }
    }

    /// Number of links.
    pub fn len(&self) -> usize {
        self.links.len()
    }

    /// Whether the chain has no links and orders naturally.
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Sort `items` with this chain as the comparison function.
    ///
    /// The sort is stable. If any comparison fails, the error is returned
    /// and `items` is left in its original order.
    pub fn sort<T: Introspect>(&self, items: &mut [T]) -> Result<()> {
        let compare = |i: usize, j: usize| self.compare(&items[i], &items[j]);
        let indices = match try_merge_sort_indices(items.len(), compare) {
            Ok(indices) => indices,
            Err(err) => {
                warn!(error = %err, len = items.len(), "sort aborted");
                return Err(err);
            }
        };
        apply_permutation(items, indices);
        Ok(())
    }
}

impl ObjectComparator for ComparatorChain {
    fn compare(&self, a: &dyn Introspect, b: &dyn Introspect) -> Result<Ordering> {
        for link in self.links.iter() {
            let result = link.compare(a, b)?;
            if result != Ordering::Equal {
                return Ok(result);
            }
        }

        trace!(
            links = self.links.len(),
            left = a.type_name(),
            right = b.type_name(),
            "links tied, falling back to natural ordering"
        );
        Value::object(a)
            .natural_cmp(&Value::object(b))
            .ok_or(ComparatorError::NotComparable { path: None })
    }
}

impl FromIterator<Arc<dyn ObjectComparator>> for ComparatorChain {
    fn from_iter<I: IntoIterator<Item = Arc<dyn ObjectComparator>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl fmt::Debug for ComparatorChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComparatorChain")
            .field("link_count", &self.links.len())
            .finish()
    }
}
