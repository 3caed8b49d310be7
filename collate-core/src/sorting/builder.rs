//! Fluent construction of comparator chains.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use collate_contracts::{Introspect, Value};
use collate_model::{SortField, SortFields, WktParser};
use tracing::debug;

use super::chain::ComparatorChain;
use super::delegating::DelegatingComparator;
use super::traits::{FnComparator, ObjectComparator};
use super::value::ValueComparator;
use crate::error::Result;
use crate::extractor::{DefaultValueExtractor, ValueExtractor};

/// Accumulates comparison links in call order.
///
/// ```
/// use collate_core::prelude::*;
///
/// let chain = ComparatorBuilder::new()
///     .field("lastName", true, true, false)
///     .from_wkt("age,false|id")
///     .build();
/// assert_eq!(chain.len(), 3);
/// ```
#[derive(Clone)]
pub struct ComparatorBuilder {
    links: Vec<Arc<dyn ObjectComparator>>,
    extractor: Arc<dyn ValueExtractor>,
    parser: WktParser,
}

impl Default for ComparatorBuilder {
    fn default() -> Self {
        Self {
            links: Vec::new(),
            extractor: Arc::new(DefaultValueExtractor::new()),
            parser: WktParser::default(),
        }
    }
}

impl fmt::Debug for ComparatorBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComparatorBuilder")
            .field("pending_links", &self.links.len())
            .field("parser", &self.parser)
            .finish_non_exhaustive()
    }
}

impl ComparatorBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Extractor used by field and delegating links added after this call.
    pub fn with_extractor(mut self, extractor: impl ValueExtractor + 'static) -> Self {
        self.extractor = Arc::new(extractor);
        self
    }

    /// Parser used by [`from_wkt`](Self::from_wkt) and
    /// [`from_wkt_with`](Self::from_wkt_with).
    pub fn with_parser(mut self, parser: WktParser) -> Self {
        self.parser = parser;
        self
    }

    /// Append an opaque whole-object link.
    pub fn comparator(self, comparator: impl ObjectComparator + 'static) -> Self {
        self.shared(Arc::new(comparator))
    }

    /// Append a link that is already shared.
    pub fn shared(mut self, comparator: Arc<dyn ObjectComparator>) -> Self {
        self.links.push(comparator);
        self
    }

    /// Append a closure over whole objects.
    pub fn comparator_fn<F>(self, compare: F) -> Self
    where
        F: Fn(&dyn Introspect, &dyn Introspect) -> Result<Ordering> + Send + Sync + 'static,
    {
        self.comparator(FnComparator::new(compare))
    }

    /// Append a link that applies `compare` to the values found at `path`.
    pub fn comparator_on<F>(self, path: &str, compare: F) -> Self
    where
        F: Fn(&Value<'_>, &Value<'_>) -> Result<Ordering> + Send + Sync + 'static,
    {
        let extractor = self.extractor.clone();
        let link = DelegatingComparator::with_extractor(Some(path), extractor, Arc::new(compare));
        self.comparator(link)
    }

    /// Append a field link built from the individual flags.
    pub fn field(self, path: &str, asc: bool, ignore_case: bool, nulls_first: bool) -> Self {
        self.sort_field(&SortField::new(path, asc, ignore_case, nulls_first))
    }

    /// Append a field link for `field`.
    pub fn sort_field(self, field: &SortField) -> Self {
        let link = ValueComparator::with_extractor(field.clone(), self.extractor.clone());
        self.comparator(link)
    }

    /// Append one field link per descriptor, in list order.
    pub fn sort_fields(self, fields: &SortFields) -> Self {
        let mut builder = self;
        for field in fields {
            builder = builder.sort_field(field);
        }
        builder
    }

    /// Parse `text` and append one field link per descriptor.
    pub fn from_wkt(self, text: &str) -> Self {
        let fields = self.parser.parse_fields(text);
        self.sort_fields(&fields)
    }

    /// Parse `text` and let `factory` map each descriptor to a link.
    ///
    /// Descriptors for which the factory returns `None` are skipped.
    pub fn from_wkt_with<F>(self, text: &str, mut factory: F) -> Self
    where
        F: FnMut(&SortField) -> Option<Arc<dyn ObjectComparator>>,
    {
        let fields = self.parser.parse_fields(text);
        let mut builder = self;
        for field in &fields {
            match factory(field) {
                Some(link) => builder = builder.shared(link),
                None => debug!(field = %field, "factory skipped sort field"),
            }
        }
        builder
    }

    /// Number of links added so far.
    pub fn len(&self) -> usize {
        self.links.len()
    }

    /// Whether no links were added.
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Snapshot the links added so far into an immutable chain.
    ///
    /// Can be called repeatedly; snapshots share the underlying links.
    pub fn build(&self) -> ComparatorChain {
        debug!(links = self.links.len(), "building comparator chain");
        ComparatorChain::new(self.links.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ComparatorError;
    use serde_json::json;

    #[test]
    fn links_are_added_in_call_order() {
        let builder = ComparatorBuilder::new()
            .field("a", true, true, false)
            .sort_field(&SortField::descending("b"))
            .sort_fields(&"c|d,false".parse().unwrap())
            .comparator_fn(|_, _| Ok(Ordering::Equal));
        assert_eq!(builder.len(), 5);
        assert_eq!(builder.build().len(), 5);
    }

    #[test]
    fn build_snapshots_are_independent() {
        let builder = ComparatorBuilder::new().field("a", true, true, false);
        let first = builder.build();
        let builder = builder.field("b", true, true, false);
        let second = builder.build();
        assert_eq!(first.len(), 1);
        assert_eq!(second.len(), 2);
        assert_eq!(builder.build().len(), 2);
    }

    #[test]
    fn blank_wkt_adds_nothing() {
        assert!(ComparatorBuilder::new().from_wkt("  ").is_empty());
    }

    #[test]
    fn wkt_fields_follow_parser_defaults() {
        let parser = WktParser::with_defaults(collate_model::WktDefaults {
            asc: false,
            ignore_case: true,
            nulls_first: false,
        });
        let chain = ComparatorBuilder::new()
            .with_parser(parser)
            .from_wkt("rank")
            .build();
        let low = json!({ "rank": 1 });
        let high = json!({ "rank": 2 });
        assert_eq!(chain.compare(&low, &high).unwrap(), Ordering::Greater);
    }

    #[test]
    fn factory_can_replace_or_skip_descriptors() {
        let mut seen = Vec::new();
        let chain = ComparatorBuilder::new()
            .from_wkt_with("name|skip|rank,false", |field| {
                seen.push(field.to_wkt());
                if field.path() == Some("skip") {
                    return None;
                }
                let link = ValueComparator::from(field.clone());
                Some(Arc::new(link) as Arc<dyn ObjectComparator>)
            })
            .build();
        assert_eq!(chain.len(), 2);
        assert_eq!(
            seen,
            [
                "name,asc,true,false",
                "skip,asc,true,false",
                "rank,desc,true,false",
            ]
        );
    }

    #[test]
    fn comparator_on_uses_configured_extractor() {
        let chain = ComparatorBuilder::new()
            .with_extractor(DefaultValueExtractor::lenient())
            .comparator_on("missing", |a: &Value<'_>, b: &Value<'_>| {
                assert!(a.is_null() && b.is_null());
                Ok(Ordering::Less)
            })
            .build();
        let empty = json!({});
        assert_eq!(chain.compare(&empty, &empty).unwrap(), Ordering::Less);

        let strict = ComparatorBuilder::new()
            .comparator_on("missing", |_: &Value<'_>, _: &Value<'_>| Ok(Ordering::Less))
            .build();
        let err = strict.compare(&json!({}), &json!({})).unwrap_err();
        assert!(matches!(err, ComparatorError::ValueResolution { .. }));
    }
}
