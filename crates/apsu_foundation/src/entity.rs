//! Opaque entity identifiers.

use std::fmt;

/// Opaque handle for one thing that can have components.
///
/// An entity carries no payload beyond its identity: equality and hashing
/// are pure functions of the underlying value. Identifiers are handed out
/// by the allocator in `apsu_storage` and are never reclaimed or reused,
/// so two distinct allocations never compare equal.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct EntityId(u64);

impl EntityId {
    /// Creates an entity ID from a raw value.
    ///
    /// Intended for the allocator and for tests; two IDs built from the
    /// same raw value are the same entity.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw identifier value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EntityId({})", self.0)
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Entity({})", self.0)
    }
}
