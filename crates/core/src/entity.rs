//! Entity trait: identity + continuity across state changes.

/// Marker trait for domain objects that carry an identity.
///
/// Two entities with the same `Id` refer to the same domain object, even when
/// their other attributes differ. Contrast with [`crate::ValueObject`], where
/// only the attribute values matter.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    /// Whether `other` refers to the same domain object.
    fn same_identity(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}
