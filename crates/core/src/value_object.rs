//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**: two instances
/// with the same attribute values are the same value. To "modify" one, create
/// a new one. This keeps them safe to share across threads and predictable in
/// tests.
///
/// `Money { minor_units: 1299 }` is a value object; a catalog record carrying
/// a `ProductId` is an entity.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
