//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have **no identity**: two instances holding the same values are
/// the same value. In the storefront, a category name or a cart line snapshot is
/// a value object, while a product (keyed by its id) is an entity.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Category(String);
///
/// impl ValueObject for Category {}
///
/// assert_eq!(Category("Audio".into()), Category("Audio".into()));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
