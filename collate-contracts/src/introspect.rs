//! Introspection surface for path-based value extraction.

use std::any::Any;
use std::cmp::Ordering;

use crate::value::Value;

/// A type whose members can be looked up by name at runtime.
///
/// Implementations stand in for reflection: `member` exposes stored
/// fields, `accessor` exposes zero-argument computed values, and `ancestor`
/// points at an embedded value whose members this type inherits. All
/// lookups are expected to be cheap and side-effect free.
///
/// ```
/// use collate_contracts::{Introspect, Value, natural_order_by_ord};
/// use std::cmp::Ordering;
///
/// #[derive(PartialEq, Eq, PartialOrd, Ord)]
/// struct Person {
///     name: String,
///     age: u32,
/// }
///
/// impl Introspect for Person {
///     fn member(&self, name: &str) -> Option<Value<'_>> {
///         match name {
///             "name" => Some(Value::from(self.name.as_str())),
///             "age" => Some(Value::from(self.age)),
///             _ => None,
///         }
///     }
///
///     fn natural_cmp(&self, other: &dyn Introspect) -> Option<Ordering> {
///         natural_order_by_ord(self, other)
///     }
/// }
/// ```
pub trait Introspect: Any {
    /// Name used in error messages.
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// A directly accessible member.
    ///
    /// `None` means there is no such member; a member holding no value is
    /// `Some(Value::Null)`.
    fn member(&self, name: &str) -> Option<Value<'_>> {
        let _ = name;
        None
    }

    /// A zero-argument accessor looked up by its full name, e.g. `getName`.
    fn accessor(&self, name: &str) -> Option<Value<'_>> {
        let _ = name;
        None
    }

    /// The embedded value whose members and accessors this type inherits.
    fn ancestor(&self) -> Option<&dyn Introspect> {
        None
    }

    /// The scalar this instance stands for, if any.
    ///
    /// Primitive wrappers return their value here so they compare naturally;
    /// structured types keep the default and are seen as objects.
    fn scalar(&self) -> Option<Value<'_>> {
        None
    }

    /// The type's natural ordering against another instance.
    fn natural_cmp(&self, other: &dyn Introspect) -> Option<Ordering> {
        let _ = other;
        None
    }
}

/// Natural ordering for `Ord` types: compares when `other` has the same
/// concrete type and yields `None` otherwise.
pub fn natural_order_by_ord<T>(this: &T, other: &dyn Introspect) -> Option<Ordering>
where
    T: Introspect + Ord,
{
    let other: &dyn Any = other;
    other.downcast_ref::<T>().map(|other| this.cmp(other))
}
