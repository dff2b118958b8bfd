//! Entity identifier allocation.
//!
//! The `EntityAllocator` hands out monotonically increasing identifiers.
//! Identifiers are never reclaimed or reused: deleting an entity leaves a
//! hole in the sequence rather than returning the value to a free list, so
//! every allocation is distinct from every allocation before it.

use apsu_foundation::EntityId;

/// Allocates unique entity identifiers.
///
/// Entities are pure handles: the allocator tracks no liveness, because
/// the component and nickname maps are the only per-entity state. An
/// entity "exists" exactly to the extent that those maps mention it.
#[derive(Debug, Clone, Default)]
pub struct EntityAllocator {
    /// Next identifier to hand out.
    next: u64,
}

impl EntityAllocator {
    /// Creates a new allocator starting at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates a fresh entity identifier.
    ///
    /// Never fails and never returns a previously allocated value.
    pub fn allocate(&mut self) -> EntityId {
        let id = EntityId::new(self.next);
        self.next += 1;
        id
    }

    /// Returns the number of identifiers allocated so far.
    #[must_use]
    pub fn allocated(&self) -> u64 {
        self.next
    }
}
