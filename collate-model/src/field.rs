//! Sort descriptors.
//!
//! A [`SortField`] describes how one key of an object is ordered; a
//! [`SortFields`] list gives the tie-break precedence of several keys. Both
//! are immutable once built and encode to the "well-known text" form
//! `path,asc|desc,ignoreCase,nullIsFirst` (fields joined by `|`).

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;
use crate::wkt::WktParser;

/// Separator between the parts of one field description.
pub const PART_DELIMITER: char = ',';

/// Separator between field descriptions in a list.
pub const FIELD_DELIMITER: char = '|';

/// Trim a path and map blank input to `None`.
pub fn normalize_path(path: Option<&str>) -> Option<String> {
    path.map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_owned)
}

fn blank_path_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(normalize_path(raw.as_deref()))
}

/// One sort key: which value to look at and how to order it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct SortField {
    #[serde(
        rename = "field",
        skip_serializing_if = "Option::is_none",
        deserialize_with = "blank_path_as_none"
    )]
    path: Option<String>,
    asc: bool,
    #[serde(rename = "ignoreCase")]
    ignore_case: bool,
    #[serde(rename = "nullIsFirst")]
    nulls_first: bool,
}

impl Default for SortField {
    fn default() -> Self {
        Self {
            path: None,
            asc: true,
            ignore_case: true,
            nulls_first: false,
        }
    }
}

impl SortField {
    /// Create a descriptor. A blank `path` means "the whole object".
    pub fn new(path: impl AsRef<str>, asc: bool, ignore_case: bool, nulls_first: bool) -> Self {
        Self {
            path: normalize_path(Some(path.as_ref())),
            asc,
            ignore_case,
            nulls_first,
        }
    }

    /// Ascending, case-insensitive, nulls last.
    pub fn ascending(path: impl AsRef<str>) -> Self {
        Self::new(path, true, true, false)
    }

    /// Descending, case-insensitive, nulls last.
    pub fn descending(path: impl AsRef<str>) -> Self {
        Self::new(path, false, true, false)
    }

    /// Dot-separated member path, `None` for the whole object.
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// `false` for descending order.
    pub fn is_ascending(&self) -> bool {
        self.asc
    }

    /// Whether text values are compared case-insensitively.
    pub fn is_ignore_case(&self) -> bool {
        self.ignore_case
    }

    /// Whether null values sort before all others.
    pub fn is_nulls_first(&self) -> bool {
        self.nulls_first
    }

    /// Canonical text form: `path,asc|desc,ignoreCase,nullIsFirst`.
    pub fn to_wkt(&self) -> String {
        format!(
            "{}{PART_DELIMITER}{}{PART_DELIMITER}{}{PART_DELIMITER}{}",
            self.path.as_deref().unwrap_or_default(),
            if self.asc { "asc" } else { "desc" },
            self.ignore_case,
            self.nulls_first
        )
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_wkt())
    }
}

impl FromStr for SortField {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WktParser::default().parse_field(s)
    }
}

/// An ordered list of sort keys. Earlier entries take precedence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct SortFields {
    fields: Vec<SortField>,
}

impl SortFields {
    /// Wrap fields in precedence order.
    pub fn new(fields: Vec<SortField>) -> Self {
        Self { fields }
    }

    /// The fields, highest precedence first.
    pub fn fields(&self) -> &[SortField] {
        &self.fields
    }

    /// Iterate the fields in precedence order.
    pub fn iter(&self) -> std::slice::Iter<'_, SortField> {
        self.fields.iter()
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether there are no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Field encodings joined by `|`.
    pub fn to_wkt(&self) -> String {
        self.fields
            .iter()
            .map(SortField::to_wkt)
            .collect::<Vec<_>>()
            .join(&FIELD_DELIMITER.to_string())
    }
}

impl fmt::Display for SortFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_wkt())
    }
}

impl FromStr for SortFields {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(WktParser::default().parse_fields(s))
    }
}

impl From<Vec<SortField>> for SortFields {
    fn from(fields: Vec<SortField>) -> Self {
        Self::new(fields)
    }
}

impl FromIterator<SortField> for SortFields {
    fn from_iter<I: IntoIterator<Item = SortField>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for SortFields {
    type Item = SortField;
    type IntoIter = std::vec::IntoIter<SortField>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

impl<'a> IntoIterator for &'a SortFields {
    type Item = &'a SortField;
    type IntoIter = std::slice::Iter<'a, SortField>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_path_is_normalized_to_none() {
        assert_eq!(SortField::new("   ", true, true, false).path(), None);
        assert_eq!(
            SortField::new(" name ", true, true, false).path(),
            Some("name")
        );
        assert_eq!(SortField::new("", true, true, false), SortField::default());
    }

    #[test]
    fn to_wkt_uses_canonical_layout() {
        let field = SortField::new("address.city", false, true, false);
        assert_eq!(field.to_wkt(), "address.city,desc,true,false");
        assert_eq!(SortField::default().to_wkt(), ",asc,true,false");
        assert_eq!(field.to_string(), field.to_wkt());
    }

    #[test]
    fn list_wkt_joins_with_pipe() {
        let fields = SortFields::new(vec![
            SortField::new("i0", true, false, true),
            SortField::new("i1", false, true, false),
        ]);
        assert_eq!(fields.to_wkt(), "i0,asc,false,true|i1,desc,true,false");
        assert_eq!(SortFields::default().to_wkt(), "");
    }

    #[test]
    fn equality_is_structural() {
        let a = SortField::new("field0", true, true, false);
        assert_eq!(a, SortField::ascending("field0"));
        assert_ne!(a, SortField::descending("field0"));
        assert_ne!(a, SortField::new("field0", true, false, false));
        assert_ne!(a, SortField::new("field0", true, true, true));

        let list = SortFields::new(vec![a.clone(), SortField::default()]);
        assert_ne!(list, SortFields::new(vec![SortField::default(), a]));
    }

    #[test]
    fn json_uses_wire_names_and_defaults() {
        let field = SortField::new("number", false, false, true);
        let json = serde_json::to_value(&field).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "field": "number",
                "asc": false,
                "ignoreCase": false,
                "nullIsFirst": true
            })
        );

        let raw = r#"{"field": "  ", "asc": false}"#;
        let parsed: SortField = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed, SortField::new("", false, true, false));

        let raw = r#"{"fields": [{"field": "a"}, {"field": "b", "asc": false}]}"#;
        let list: SortFields = serde_json::from_str(raw).unwrap();
        assert_eq!(list.to_wkt(), "a,asc,true,false|b,desc,true,false");
    }
}
