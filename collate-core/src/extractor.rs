//! Path-based value extraction.
//!
//! A path is a dot-separated list of segment names. Each segment is
//! resolved against the value produced by the previous one, starting from
//! the instance itself. Blank segments are skipped, so `". a..b."` and
//! `"a.b"` address the same value. Nothing is cached between calls.

use collate_contracts::{Introspect, Value};
use tracing::{debug, trace};

use crate::error::{ComparatorError, Result};

/// Separator between path segments.
pub const PATH_DELIMITER: char = '.';

/// Resolves a path against an instance.
pub trait ValueExtractor: Send + Sync {
    /// Resolve `path` against `instance`.
    ///
    /// A missing or blank path yields the instance itself. Resolution stops
    /// with [`Value::Null`] as soon as an intermediate value is null.
    fn resolve<'a>(&self, instance: &'a dyn Introspect, path: Option<&str>) -> Result<Value<'a>>;
}

/// Accessor names tried for a segment, in lookup order: the bare name,
/// `get` + capitalized name, `is` + capitalized name.
pub fn possible_accessor_names(name: &str) -> Vec<String> {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return Vec::new();
    };
    let capitalized: String = first.to_uppercase().chain(chars).collect();
    vec![
        name.to_string(),
        format!("get{capitalized}"),
        format!("is{capitalized}"),
    ]
}

/// Member lookup first, then accessor lookup, each walking the ancestor
/// chain of the current value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefaultValueExtractor {
    strict: bool,
}

impl Default for DefaultValueExtractor {
    fn default() -> Self {
        Self { strict: true }
    }
}

impl DefaultValueExtractor {
    /// Unresolvable segments are errors.
    pub fn new() -> Self {
        Self::default()
    }

    /// Unresolvable segments resolve to [`Value::Null`].
    pub fn lenient() -> Self {
        Self { strict: false }
    }

    /// Whether unresolvable segments are errors.
    pub fn is_strict(&self) -> bool {
        self.strict
    }

    fn resolve_segment<'a>(&self, current: &Value<'a>, segment: &str) -> Result<Value<'a>> {
        if let Some(value) = current.as_object().and_then(|o| find_segment(o, segment)) {
            return Ok(value);
        }

        let type_name = current.type_name();
        if self.strict {
            trace!(segment, type_name, "path segment did not resolve");
            Err(ComparatorError::ValueResolution {
                segment: segment.to_string(),
                type_name: type_name.to_string(),
            })
        } else {
            debug!(segment, type_name, "unresolved path segment, using null");
            Ok(Value::Null)
        }
    }
}

impl ValueExtractor for DefaultValueExtractor {
    fn resolve<'a>(&self, instance: &'a dyn Introspect, path: Option<&str>) -> Result<Value<'a>> {
        let mut current = Value::object(instance);
        let Some(path) = path else {
            return Ok(current);
        };

        for segment in path.split(PATH_DELIMITER).map(str::trim) {
            if segment.is_empty() {
                continue;
            }
            if current.is_null() {
                break;
            }
            current = self.resolve_segment(&current, segment)?;
        }
        Ok(current)
    }
}

fn ancestors(object: &dyn Introspect) -> impl Iterator<Item = &dyn Introspect> {
    std::iter::successors(Some(object), |t| t.ancestor())
}

fn find_segment<'a>(object: &'a dyn Introspect, name: &str) -> Option<Value<'a>> {
    find_member(object, name).or_else(|| find_accessor(object, name))
}

fn find_member<'a>(object: &'a dyn Introspect, name: &str) -> Option<Value<'a>> {
    ancestors(object).find_map(|t| t.member(name))
}

fn find_accessor<'a>(object: &'a dyn Introspect, name: &str) -> Option<Value<'a>> {
    possible_accessor_names(name)
        .iter()
        .find_map(|candidate| ancestors(object).find_map(|t| t.accessor(candidate)))
}
