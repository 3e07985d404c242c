//! Entity trait: identity + continuity across state changes.

/// Marker + minimal interface for records with identity.
///
/// Two snapshots of the same document are the same entity even when their
/// statuses differ; two budgets with identical amounts are still distinct
/// records. Identity lives in the id, not in the attribute values.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
