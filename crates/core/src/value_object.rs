//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value** — two value
/// objects with the same attributes are the same value. `Balance` is a value
/// object; an `Invoice` snapshot is an entity (same id, same record).
///
/// To "modify" a value object, create a new one. This keeps values safe to
/// copy around and share.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
