//! Trait surfaces that let Collate look inside arbitrary values.

pub mod impls;
pub mod introspect;
pub mod value;

pub use introspect::{Introspect, natural_order_by_ord};
pub use value::{Value, cmp_ignore_case};

/// Frequently used items for types that implement [`Introspect`].
pub mod prelude {
    pub use super::introspect::{Introspect, natural_order_by_ord};
    pub use super::value::Value;
}
