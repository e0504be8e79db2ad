//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and defined entirely by their attribute
/// values; to "modify" one, construct a new value. The bounds keep them cheap
/// to copy, comparable by value, and debuggable.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
