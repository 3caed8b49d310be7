//! Borrowed view of a resolved value.
//!
//! [`Value`] is the small capability set comparators work with: a value is
//! either absent, a scalar with a natural ordering, text (which may also be
//! compared case-insensitively), or an opaque object that may or may not
//! provide an ordering of its own.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;

use chrono::{DateTime, Utc};
use ordered_float::OrderedFloat;
use uuid::Uuid;

use crate::introspect::Introspect;

/// A value resolved from an object graph.
#[derive(Clone)]
pub enum Value<'a> {
    /// Absent value; placed by the null policy, never by natural ordering.
    Null,
    /// Boolean; `false` sorts first.
    Bool(bool),
    /// Signed integer.
    Int(i64),
    /// Unsigned integer.
    UInt(u64),
    /// Floating point number.
    Float(f64),
    /// Text, borrowed from the source where possible.
    Text(Cow<'a, str>),
    /// Point in time.
    Timestamp(DateTime<Utc>),
    /// Identifier, ordered by its bytes.
    Uuid(Uuid),
    /// Any other introspectable instance.
    Object(&'a dyn Introspect),
}

impl<'a> Value<'a> {
    /// View an introspectable instance as a value.
    ///
    /// Types that stand for a scalar (numbers, strings, `Option`, ...) are
    /// unwrapped through [`Introspect::scalar`]; everything else becomes
    /// [`Value::Object`].
    pub fn object(instance: &'a dyn Introspect) -> Self {
        instance.scalar().unwrap_or(Value::Object(instance))
    }

    /// `None` maps to [`Value::Null`].
    pub fn optional<T: Introspect>(instance: Option<&'a T>) -> Self {
        match instance {
            Some(inner) => Value::object(inner),
            None => Value::Null,
        }
    }

    /// Whether this is [`Value::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Borrow the text of a [`Value::Text`].
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(text) => Some(&**text),
            _ => None,
        }
    }

    /// The instance behind a [`Value::Object`].
    pub fn as_object(&self) -> Option<&'a dyn Introspect> {
        match self {
            Value::Object(object) => Some(*object),
            _ => None,
        }
    }

    /// Name of the value's kind, or the object's type name.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "i64",
            Value::UInt(_) => "u64",
            Value::Float(_) => "f64",
            Value::Text(_) => "str",
            Value::Timestamp(_) => "DateTime<Utc>",
            Value::Uuid(_) => "Uuid",
            Value::Object(object) => object.type_name(),
        }
    }

    /// Natural ordering between two values.
    ///
    /// Numbers compare across the integer and float variants without loss of
    /// precision; floats use a total order where NaN sorts above every other
    /// number. Text compares by code point. Objects defer to
    /// [`Introspect::natural_cmp`]. `None` means the pair has no natural
    /// ordering, which includes `Null`.
    pub fn natural_cmp(&self, other: &Value<'_>) -> Option<Ordering> {
        match (self, other) {
            (Value::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),
            (Value::Int(a), Value::Int(b)) => Some(a.cmp(b)),
            (Value::UInt(a), Value::UInt(b)) => Some(a.cmp(b)),
            (Value::Int(a), Value::UInt(b)) => Some(i128::from(*a).cmp(&i128::from(*b))),
            (Value::UInt(a), Value::Int(b)) => Some(i128::from(*a).cmp(&i128::from(*b))),
            (Value::Float(a), Value::Float(b)) => Some(OrderedFloat(*a).cmp(&OrderedFloat(*b))),
            (Value::Int(a), Value::Float(b)) => Some(cmp_int_float(i128::from(*a), *b)),
            (Value::UInt(a), Value::Float(b)) => Some(cmp_int_float(i128::from(*a), *b)),
            (Value::Float(a), Value::Int(b)) => {
                Some(cmp_int_float(i128::from(*b), *a).reverse())
            }
            (Value::Float(a), Value::UInt(b)) => {
                Some(cmp_int_float(i128::from(*b), *a).reverse())
            }
            (Value::Text(a), Value::Text(b)) => Some(str::cmp(a, b)),
            (Value::Timestamp(a), Value::Timestamp(b)) => Some(a.cmp(b)),
            (Value::Uuid(a), Value::Uuid(b)) => Some(a.cmp(b)),
            (Value::Object(a), Value::Object(b)) => a.natural_cmp(*b),
            _ => None,
        }
    }
}

/// Every `i64` and `u64` lies in `[-2^63, 2^64)`.
const INT_LOWER: f64 = -9_223_372_036_854_775_808.0;
const INT_UPPER: f64 = 18_446_744_073_709_551_616.0;

/// Exact ordering of an integer against a float, NaN being the greatest.
fn cmp_int_float(int: i128, float: f64) -> Ordering {
    if float.is_nan() || float >= INT_UPPER {
        return Ordering::Less;
    }
    if float < INT_LOWER {
        return Ordering::Greater;
    }
    let whole = float.trunc();
    int.cmp(&(whole as i128)).then_with(|| {
        let fraction = float - whole;
        if fraction > 0.0 {
            Ordering::Less
        } else if fraction < 0.0 {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    })
}

/// Compare text ignoring case.
///
/// Characters are folded one at a time: upper-cased, then lower-cased. A
/// mapping that does not yield exactly one character leaves the character
/// unchanged, so `ß` never folds to `ss`.
pub fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars().map(fold_case).cmp(b.chars().map(fold_case))
}

fn fold_case(c: char) -> char {
    let upper = single_char(c.to_uppercase()).unwrap_or(c);
    single_char(upper.to_lowercase()).unwrap_or(upper)
}

fn single_char(mut mapped: impl Iterator<Item = char>) -> Option<char> {
    match (mapped.next(), mapped.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

impl fmt::Debug for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("Null"),
            Value::Bool(v) => f.debug_tuple("Bool").field(v).finish(),
            Value::Int(v) => f.debug_tuple("Int").field(v).finish(),
            Value::UInt(v) => f.debug_tuple("UInt").field(v).finish(),
            Value::Float(v) => f.debug_tuple("Float").field(v).finish(),
            Value::Text(v) => f.debug_tuple("Text").field(v).finish(),
            Value::Timestamp(v) => f.debug_tuple("Timestamp").field(v).finish(),
            Value::Uuid(v) => f.debug_tuple("Uuid").field(v).finish(),
            Value::Object(object) => {
                f.debug_tuple("Object").field(&object.type_name()).finish()
            }
        }
    }
}

/// Equality follows the natural ordering; `Null` equals only `Null`.
impl PartialEq for Value<'_> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            _ => self.natural_cmp(other) == Some(Ordering::Equal),
        }
    }
}

macro_rules! value_from_signed {
    ($($ty:ty),*) => {
        $(impl From<$ty> for Value<'_> {
            fn from(v: $ty) -> Self {
                Value::Int(i64::from(v))
            }
        })*
    };
}

macro_rules! value_from_unsigned {
    ($($ty:ty),*) => {
        $(impl From<$ty> for Value<'_> {
            fn from(v: $ty) -> Self {
                Value::UInt(u64::from(v))
            }
        })*
    };
}

value_from_signed!(i8, i16, i32, i64);
value_from_unsigned!(u8, u16, u32, u64);

impl From<isize> for Value<'_> {
    fn from(v: isize) -> Self {
        Value::Int(v as i64)
    }
}

impl From<usize> for Value<'_> {
    fn from(v: usize) -> Self {
        Value::UInt(v as u64)
    }
}

impl From<f32> for Value<'_> {
    fn from(v: f32) -> Self {
        Value::Float(f64::from(v))
    }
}

impl From<f64> for Value<'_> {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<bool> for Value<'_> {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<char> for Value<'_> {
    fn from(v: char) -> Self {
        Value::Text(Cow::Owned(v.to_string()))
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(v: &'a str) -> Self {
        Value::Text(Cow::Borrowed(v))
    }
}

impl From<String> for Value<'_> {
    fn from(v: String) -> Self {
        Value::Text(Cow::Owned(v))
    }
}

impl<'a> From<Cow<'a, str>> for Value<'a> {
    fn from(v: Cow<'a, str>) -> Self {
        Value::Text(v)
    }
}

impl From<DateTime<Utc>> for Value<'_> {
    fn from(v: DateTime<Utc>) -> Self {
        Value::Timestamp(v)
    }
}

impl From<Uuid> for Value<'_> {
    fn from(v: Uuid) -> Self {
        Value::Uuid(v)
    }
}

impl<'a, V: Into<Value<'a>>> From<Option<V>> for Value<'a> {
    fn from(v: Option<V>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}
