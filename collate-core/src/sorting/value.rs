//! Field-level ordering driven by a [`SortField`].

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use collate_contracts::{Introspect, Value, cmp_ignore_case};
use collate_model::SortField;

use super::traits::ObjectComparator;
use crate::error::{ComparatorError, Result};
use crate::extractor::{DefaultValueExtractor, ValueExtractor};

/// Where a null value lands relative to a non-null one.
///
/// Returns the ordering of the null operand when it is the left-hand side.
pub fn null_placement(asc: bool, nulls_first: bool) -> Ordering {
    match (asc, nulls_first) {
        (true, true) => Ordering::Less,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Greater,
        (false, false) => Ordering::Less,
    }
}

/// Compares the values found at one path of two objects.
#[derive(Clone)]
pub struct ValueComparator {
    field: SortField,
    extractor: Arc<dyn ValueExtractor>,
}

impl ValueComparator {
    /// Use the strict [`DefaultValueExtractor`].
    pub fn new(field: SortField) -> Self {
        Self::with_extractor(field, Arc::new(DefaultValueExtractor::new()))
    }

    /// Read values with `extractor` instead of the default.
    pub fn with_extractor(field: SortField, extractor: Arc<dyn ValueExtractor>) -> Self {
        Self { field, extractor }
    }

    /// The descriptor this comparator applies.
    pub fn field(&self) -> &SortField {
        &self.field
    }

    /// Order two resolved values under this comparator's policy.
    ///
    /// Null handling comes first and ignores the values entirely. For two
    /// present values the operands are swapped for descending order rather
    /// than reversing the result.
    pub fn compare_values(&self, va: &Value<'_>, vb: &Value<'_>) -> Result<Ordering> {
        let asc = self.field.is_ascending();
        match (va.is_null(), vb.is_null()) {
            (true, true) => return Ok(Ordering::Equal),
            (true, false) => return Ok(null_placement(asc, self.field.is_nulls_first())),
            (false, true) => {
                return Ok(null_placement(asc, self.field.is_nulls_first()).reverse());
            }
            (false, false) => {}
        }

        let (first, second) = if asc { (va, vb) } else { (vb, va) };
        if self.field.is_ignore_case()
            && let (Some(x), Some(y)) = (first.as_text(), second.as_text())
        {
            return Ok(cmp_ignore_case(x, y));
        }

        first
            .natural_cmp(second)
            .ok_or_else(|| ComparatorError::NotComparable {
                path: self.field.path().map(str::to_owned),
            })
    }
}

impl ObjectComparator for ValueComparator {
    fn compare(&self, a: &dyn Introspect, b: &dyn Introspect) -> Result<Ordering> {
        let path = self.field.path();
        let va = self.extractor.resolve(a, path)?;
        let vb = self.extractor.resolve(b, path)?;
        self.compare_values(&va, &vb)
    }
}

impl From<SortField> for ValueComparator {
    fn from(field: SortField) -> Self {
        Self::new(field)
    }
}

impl fmt::Debug for ValueComparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueComparator")
            .field("field", &self.field.to_wkt())
            .finish_non_exhaustive()
    }
}
