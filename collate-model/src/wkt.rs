//! Parser for the well-known-text form of sort descriptors.
//!
//! Syntax: `path,ascOrDesc,ignoreCase,nullIsFirst`, several descriptions
//! separated by `|`. Trailing parts may be omitted and take the parser's
//! [`WktDefaults`]. Boolean parts are matched case-insensitively against a
//! small set of truthy tokens; anything else reads as `false`.

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::field::{FIELD_DELIMITER, PART_DELIMITER, SortField, SortFields};

const ASC_TOKENS: &[&str] = &["asc", "true", "1"];
const IGNORE_CASE_TOKENS: &[&str] = &["ignoreCase", "true", "1"];
const NULLS_FIRST_TOKENS: &[&str] = &["nullIsFirst", "true", "1"];

/// Values used for parts a description leaves out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WktDefaults {
    /// Direction when the second part is missing.
    pub asc: bool,
    /// Case policy when the third part is missing.
    pub ignore_case: bool,
    /// Null placement when the fourth part is missing.
    pub nulls_first: bool,
}

impl Default for WktDefaults {
    fn default() -> Self {
        Self {
            asc: true,
            ignore_case: true,
            nulls_first: false,
        }
    }
}

/// Turns well-known text into [`SortField`]s.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WktParser {
    defaults: WktDefaults,
}

impl WktParser {
    /// Parser with ascending, case-insensitive, nulls-last defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parser that fills omitted parts from `defaults`.
    pub fn with_defaults(defaults: WktDefaults) -> Self {
        Self { defaults }
    }

    /// Flags used for omitted parts.
    pub fn defaults(&self) -> WktDefaults {
        self.defaults
    }

    /// Parse a single field description.
    ///
    /// Blank text yields a whole-object descriptor with the default flags.
    /// Text containing `|` is rejected; use [`WktParser::parse_fields`].
    pub fn parse_field(&self, text: &str) -> Result<SortField> {
        if text.contains(FIELD_DELIMITER) {
            return Err(ModelError::MultipleFields(text.to_owned()));
        }
        Ok(self.describe(text))
    }

    /// Parse a `|`-separated list. Blank text yields an empty list.
    pub fn parse_fields(&self, text: &str) -> SortFields {
        if text.trim().is_empty() {
            return SortFields::default();
        }
        text.split(FIELD_DELIMITER)
            .map(|description| self.describe(description))
            .collect()
    }

    fn describe(&self, description: &str) -> SortField {
        let d = self.defaults;
        if description.trim().is_empty() {
            return SortField::new("", d.asc, d.ignore_case, d.nulls_first);
        }
        SortField::new(
            part(description, 0).unwrap_or_default(),
            flag(description, 1, d.asc, ASC_TOKENS),
            flag(description, 2, d.ignore_case, IGNORE_CASE_TOKENS),
            flag(description, 3, d.nulls_first, NULLS_FIRST_TOKENS),
        )
    }
}

/// Parse one description with the default flags.
pub fn parse_field(text: &str) -> Result<SortField> {
    WktParser::default().parse_field(text)
}

/// Parse a description list with the default flags.
pub fn parse_fields(text: &str) -> SortFields {
    WktParser::default().parse_fields(text)
}

fn part(text: &str, index: usize) -> Option<&str> {
    text.split(PART_DELIMITER).nth(index).map(str::trim)
}

fn flag(text: &str, index: usize, default: bool, truthy: &[&str]) -> bool {
    match part(text, index) {
        Some(p) if !p.is_empty() => truthy.iter().any(|token| token.eq_ignore_ascii_case(p)),
        _ => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_description() {
        let field = parse_field("i0,asc,true,false").unwrap();
        assert_eq!(field, SortField::new("i0", true, true, false));

        let field = parse_field(" i1 , desc , false , true ").unwrap();
        assert_eq!(field, SortField::new("i1", false, false, true));
    }

    #[test]
    fn omitted_parts_take_defaults() {
        assert_eq!(parse_field("name").unwrap(), SortField::ascending("name"));
        assert_eq!(
            parse_field("name,desc").unwrap(),
            SortField::descending("name")
        );
        assert_eq!(
            parse_field("name,,,").unwrap(),
            SortField::ascending("name")
        );
        assert_eq!(parse_field("  ").unwrap(), SortField::default());
        assert_eq!(parse_field(",desc").unwrap().path(), None);
    }

    #[test]
    fn boolean_tokens_are_lenient() {
        let field = parse_field("a,TRUE,1,NullIsFirst").unwrap();
        assert_eq!(field, SortField::new("a", true, true, true));

        let field = parse_field("a,1,IGNORECASE,yes").unwrap();
        assert_eq!(field, SortField::new("a", true, true, false));

        let field = parse_field("a,descending,no,0").unwrap();
        assert_eq!(field, SortField::new("a", false, false, false));
    }

    #[test]
    fn pipe_in_single_description_is_rejected() {
        let err = parse_field("a,asc|b,desc").unwrap_err();
        assert!(matches!(err, ModelError::MultipleFields(_)));
        assert!(err.to_string().contains("parse_fields"));
    }

    #[test]
    fn parses_lists() {
        let fields = parse_fields("i0,asc,false,true|i1,desc");
        assert_eq!(
            fields,
            SortFields::new(vec![
                SortField::new("i0", true, false, true),
                SortField::new("i1", false, true, false),
            ])
        );
        assert!(parse_fields("").is_empty());
        assert!(parse_fields("   ").is_empty());
    }

    #[test]
    fn custom_defaults_apply_to_omitted_parts() {
        let parser = WktParser::with_defaults(WktDefaults {
            asc: false,
            ignore_case: false,
            nulls_first: true,
        });
        assert_eq!(
            parser.parse_field("rank").unwrap(),
            SortField::new("rank", false, false, true)
        );
        assert_eq!(
            parser.parse_field("rank,asc").unwrap(),
            SortField::new("rank", true, false, true)
        );
    }

    #[test]
    fn encoding_parses_back_to_same_descriptor() {
        let samples = [
            SortField::default(),
            SortField::new("simple.number", false, false, true),
            SortField::new("value", true, false, false),
            SortField::new("", false, true, true),
        ];
        for field in samples {
            let parsed = parse_fields(&field.to_wkt());
            assert_eq!(parsed, SortFields::new(vec![field.clone()]), "{field}");
        }

        let list: SortFields = samples_list().to_wkt().parse().unwrap();
        assert_eq!(list, samples_list());
    }

    fn samples_list() -> SortFields {
        vec![
            SortField::new("a", true, true, false),
            SortField::new("b.c", false, false, true),
        ]
        .into()
    }
}
