//! The entity manager facade.
//!
//! `EntityManager` owns all entity-associated state: the identifier
//! allocator, the per-type component maps, and the nickname index. It is
//! ordinary mutable state with a single logical owner; embedders that need
//! concurrent access must layer their own synchronization on top.

use apsu_foundation::{EntityId, Error, Result};

use crate::component::{Component, ComponentStore};
use crate::entity::EntityAllocator;
use crate::nickname::NicknameIndex;

/// Owns entities, their components, and their nicknames.
#[derive(Debug, Default)]
pub struct EntityManager {
    /// Entity identifier allocation.
    allocator: EntityAllocator,
    /// Component data storage.
    components: ComponentStore,
    /// Bidirectional nickname index.
    nicknames: NicknameIndex,
}

impl EntityManager {
    /// Creates a new empty manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Entity lifecycle ---

    /// Creates a new entity.
    ///
    /// Registration is lazy: nothing is stored for the entity until a
    /// component or nickname is attached. Always succeeds.
    pub fn create(&mut self) -> EntityId {
        self.allocator.allocate()
    }

    /// Creates a new entity and assigns it a nickname in one step.
    ///
    /// Creation and naming succeed or fail together: the nickname is
    /// checked before an identifier is allocated, so a failed call leaves
    /// no nickname-less entity behind.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateNickname`] if the nickname already names
    /// another entity. No entity is created.
    pub fn create_with_nickname(&mut self, nickname: impl Into<String>) -> Result<EntityId> {
        let nickname = nickname.into();
        if let Some(existing) = self.nicknames.resolve(&nickname) {
            return Err(Error::duplicate_nickname(nickname, existing));
        }
        let entity = self.allocator.allocate();
        // Cannot fail: availability was checked above and nothing has
        // touched the index since.
        self.nicknames.set(entity, nickname)?;
        Ok(entity)
    }

    /// Deletes an entity.
    ///
    /// Removes the entity's entry from every per-type component map, then
    /// clears its nickname. Idempotent: deleting an unknown or already
    /// deleted entity is a no-op. The identifier is not reused.
    pub fn delete(&mut self, entity: EntityId) {
        self.components.remove_entity(entity);
        self.nicknames.clear(entity);
    }

    /// Returns the number of entities created so far.
    ///
    /// Deleted entities still count; identifiers are never reclaimed.
    #[must_use]
    pub fn created(&self) -> u64 {
        self.allocator.allocated()
    }

    // --- Components ---

    /// Sets a component on an entity, returning the previous value if any.
    pub fn set<T: Component>(&mut self, entity: EntityId, component: T) -> Option<T> {
        self.components.set(entity, component)
    }

    /// Gets the component of type `T` for an entity.
    #[must_use]
    pub fn get<T: Component>(&self, entity: EntityId) -> Option<&T> {
        self.components.get(entity)
    }

    /// Gets a mutable reference to the component of type `T` for an entity.
    pub fn get_mut<T: Component>(&mut self, entity: EntityId) -> Option<&mut T> {
        self.components.get_mut(entity)
    }

    /// Removes and returns the entity's component of type `T`.
    pub fn remove<T: Component>(&mut self, entity: EntityId) -> Option<T> {
        self.components.remove(entity)
    }

    /// Checks whether the entity has a component of type `T`.
    #[must_use]
    pub fn has<T: Component>(&self, entity: EntityId) -> bool {
        self.components.has::<T>(entity)
    }

    /// Returns the number of stored components of type `T`.
    #[must_use]
    pub fn count_of<T: Component>(&self) -> usize {
        self.components.count_of::<T>()
    }

    /// Iterates every (entity, component) pair stored under type `T`.
    ///
    /// Order is unspecified; a type with no stored components yields an
    /// empty iterator.
    pub fn all_of<T: Component>(&self) -> impl Iterator<Item = (EntityId, &T)> + '_ {
        self.components.all_of()
    }

    /// Iterates every (entity, component) pair of type `T` mutably.
    pub fn all_of_mut<T: Component>(&mut self) -> impl Iterator<Item = (EntityId, &mut T)> + '_ {
        self.components.all_of_mut()
    }

    // --- Nicknames ---

    /// Gets the nickname for an entity, if it has one.
    #[must_use]
    pub fn nickname(&self, entity: EntityId) -> Option<&str> {
        self.nicknames.get(entity)
    }

    /// Assigns a nickname to an entity, returning its previous nickname.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateNickname`] if the nickname is bound to a
    /// different entity; state is unchanged.
    pub fn set_nickname(
        &mut self,
        entity: EntityId,
        nickname: impl Into<String>,
    ) -> Result<Option<String>> {
        self.nicknames.set(entity, nickname)
    }

    /// Clears an entity's nickname, returning the removed name.
    pub fn clear_nickname(&mut self, entity: EntityId) -> Option<String> {
        self.nicknames.clear(entity)
    }

    /// Resolves a nickname to the entity that holds it.
    #[must_use]
    pub fn resolve(&self, nickname: &str) -> Option<EntityId> {
        self.nicknames.resolve(nickname)
    }
}
