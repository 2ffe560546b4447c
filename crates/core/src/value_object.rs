//! Value object trait: equality by value, not identity.
//!
//! Value objects are domain objects that have **no identity** - they are defined entirely
//! by their attribute values. Two value objects with the same values are considered equal.

/// Marker trait for value objects.
///
/// An `Item` is the canonical example here: it carries no identifier of its own (the
/// store keys it by an externally supplied `ItemId`), and replacing an item means storing
/// a new value rather than mutating the old one in place.
///
/// ## Usage Pattern
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct Item {
///     name: String,
///     description: String,
///     price: f64,
/// }
///
/// impl ValueObject for Item {}
///
/// let a = Item { name: "Pen".into(), description: "Blue pen".into(), price: 1.5 };
/// let b = a.clone();
/// assert_eq!(a, b);  // Equal by value, not identity
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
