//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Variant drafts are edited in place many times during a session; they are
/// addressed by identity rather than by position so that removing one draft
/// never retargets edits meant for another.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
