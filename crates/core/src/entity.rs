//! Entity trait: domain objects known by a key rather than their attributes.

/// Entity marker + minimal interface.
///
/// A play is an entity: its name could be corrected and it would still be the
/// same catalog entry, addressed by the same `PlayId`.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
