//! Applies a caller-supplied ordering to extracted values.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use collate_contracts::{Introspect, Value};
use collate_model::normalize_path;

use super::traits::{ObjectComparator, ValueOrderFn};
use crate::error::{ComparatorError, Result};
use crate::extractor::{DefaultValueExtractor, ValueExtractor};

/// Extracts the value at `path` from both objects and hands the pair to a
/// supplied ordering function. Nulls are passed through untouched.
#[derive(Clone)]
pub struct DelegatingComparator {
    path: Option<String>,
    extractor: Arc<dyn ValueExtractor>,
    compare: Arc<ValueOrderFn>,
}

impl DelegatingComparator {
    /// Delegate to `compare` using the strict default extractor.
    pub fn new<F>(path: Option<&str>, compare: F) -> Self
    where
        F: Fn(&Value<'_>, &Value<'_>) -> Result<Ordering> + Send + Sync + 'static,
    {
        let extractor = Arc::new(DefaultValueExtractor::new());
        Self::with_extractor(path, extractor, Arc::new(compare))
    }

    /// Fails with a configuration error when no ordering function is given.
    pub fn try_new(
        path: Option<&str>,
        extractor: Option<Arc<dyn ValueExtractor>>,
        compare: Option<Arc<ValueOrderFn>>,
    ) -> Result<Self> {
        let compare = compare.ok_or_else(|| {
            ComparatorError::Configuration(
                "a delegating comparator needs an ordering function".to_string(),
            )
        })?;
        let extractor = extractor.unwrap_or_else(|| Arc::new(DefaultValueExtractor::new()));
        Ok(Self::with_extractor(path, extractor, compare))
    }

    /// Delegate to `compare` with values read by `extractor`.
    pub fn with_extractor(
        path: Option<&str>,
        extractor: Arc<dyn ValueExtractor>,
        compare: Arc<ValueOrderFn>,
    ) -> Self {
        Self {
            path: normalize_path(path),
            extractor,
            compare,
        }
    }

    /// Normalized path, `None` for the whole object.
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }
}

impl ObjectComparator for DelegatingComparator {
    fn compare(&self, a: &dyn Introspect, b: &dyn Introspect) -> Result<Ordering> {
        let path = self.path.as_deref();
        let va = self.extractor.resolve(a, path)?;
        let vb = self.extractor.resolve(b, path)?;
        (self.compare)(&va, &vb)
    }
}

impl fmt::Debug for DelegatingComparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DelegatingComparator")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}
