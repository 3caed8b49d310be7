//! `Introspect` implementations for std and ecosystem types.
//!
//! Scalars report themselves through [`Introspect::scalar`] so that a
//! whole-object comparison of two numbers or two strings uses their natural
//! ordering. Wrappers (`Option`, boxed trait objects) forward to the value
//! they hold.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::introspect::Introspect;
use crate::value::Value;

macro_rules! scalar_introspect {
    ($($ty:ty),* $(,)?) => {
        $(impl Introspect for $ty {
            fn scalar(&self) -> Option<Value<'_>> {
                Some(Value::from(*self))
            }
        })*
    };
}

scalar_introspect!(
    i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64, bool, char,
);

impl Introspect for String {
    fn scalar(&self) -> Option<Value<'_>> {
        Some(Value::from(self.as_str()))
    }
}

impl Introspect for &'static str {
    fn scalar(&self) -> Option<Value<'_>> {
        Some(Value::from(*self))
    }
}

impl Introspect for DateTime<Utc> {
    fn scalar(&self) -> Option<Value<'_>> {
        Some(Value::Timestamp(*self))
    }
}

impl Introspect for Uuid {
    fn scalar(&self) -> Option<Value<'_>> {
        Some(Value::Uuid(*self))
    }
}

impl<T: Introspect> Introspect for Option<T> {
    fn scalar(&self) -> Option<Value<'_>> {
        Some(Value::optional(self.as_ref()))
    }
}

impl Introspect for Box<dyn Introspect> {
    fn type_name(&self) -> &'static str {
        (**self).type_name()
    }

    fn scalar(&self) -> Option<Value<'_>> {
        Some(Value::object(&**self))
    }
}

#[cfg(feature = "json")]
mod json {
    use serde_json::{Number, Value as Json};

    use super::*;

    fn number(n: &Number) -> Value<'static> {
        if let Some(v) = n.as_i64() {
            Value::Int(v)
        } else if let Some(v) = n.as_u64() {
            Value::UInt(v)
        } else {
            Value::Float(n.as_f64().unwrap_or(f64::NAN))
        }
    }

    impl Introspect for Json {
        fn type_name(&self) -> &'static str {
            match self {
                Json::Null => "json null",
                Json::Bool(_) => "json bool",
                Json::Number(_) => "json number",
                Json::String(_) => "json string",
                Json::Array(_) => "json array",
                Json::Object(_) => "json object",
            }
        }

        fn member(&self, name: &str) -> Option<Value<'_>> {
            self.as_object()?.get(name).map(|v| Value::object(v))
        }

        fn scalar(&self) -> Option<Value<'_>> {
            match self {
                Json::Null => Some(Value::Null),
                Json::Bool(b) => Some(Value::Bool(*b)),
                Json::Number(n) => Some(number(n)),
                Json::String(s) => Some(Value::from(s.as_str())),
                Json::Array(_) | Json::Object(_) => None,
            }
        }
    }
}
