//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Larder entities are identified by their canonical name, which is also the
/// key they are stored under in their owning collection.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: ?Sized + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
