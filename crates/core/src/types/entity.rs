//! Identity and value semantics shared by the order types.

/// An object with an identity that is distinct from its attribute values.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> Self::Id;
}

/// Marker trait for value objects.
///
/// Value objects are immutable and compared by their contained values.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
