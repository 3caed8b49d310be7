//! Core traits for comparison links.
//!
//! Every link of a comparator chain implements [`ObjectComparator`]: it is
//! handed two whole objects and returns their relative order, or an error
//! when the pair cannot be ordered.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use collate_contracts::{Introspect, Value};

use crate::error::Result;

/// A comparison over whole objects.
pub trait ObjectComparator: Send + Sync {
    /// Order `a` relative to `b`.
    fn compare(&self, a: &dyn Introspect, b: &dyn Introspect) -> Result<Ordering>;
}

impl<C: ObjectComparator + ?Sized> ObjectComparator for Arc<C> {
    fn compare(&self, a: &dyn Introspect, b: &dyn Introspect) -> Result<Ordering> {
        (**self).compare(a, b)
    }
}

impl<C: ObjectComparator + ?Sized> ObjectComparator for Box<C> {
    fn compare(&self, a: &dyn Introspect, b: &dyn Introspect) -> Result<Ordering> {
        (**self).compare(a, b)
    }
}

/// Ordering function over already extracted values.
pub type ValueOrderFn = dyn Fn(&Value<'_>, &Value<'_>) -> Result<Ordering> + Send + Sync;

/// Adapts a closure over whole objects into an [`ObjectComparator`].
#[derive(Clone)]
pub struct FnComparator<F>(F);

impl<F> FnComparator<F>
where
    F: Fn(&dyn Introspect, &dyn Introspect) -> Result<Ordering> + Send + Sync,
{
    /// Wrap `compare` as a chain link.
    pub fn new(compare: F) -> Self {
        Self(compare)
    }
}

impl<F> ObjectComparator for FnComparator<F>
where
    F: Fn(&dyn Introspect, &dyn Introspect) -> Result<Ordering> + Send + Sync,
{
    fn compare(&self, a: &dyn Introspect, b: &dyn Introspect) -> Result<Ordering> {
        (self.0)(a, b)
    }
}

impl<F> fmt::Debug for FnComparator<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FnComparator")
            .field(&std::any::type_name::<F>())
            .finish()
    }
}
