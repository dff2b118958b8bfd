//! Nickname storage with a bidirectional index.
//!
//! Nicknames are unique human-readable aliases for entities. The index
//! maintains two maps mutated in lockstep:
//! - Forward: entity -> nickname (at most one nickname per entity)
//! - Reverse: nickname -> entity (at most one entity per nickname)
//!
//! Every operation takes `&mut self` and updates both maps before
//! returning, so no half-updated state is ever observable.

use std::collections::HashMap;

use apsu_foundation::{EntityId, Error, Result};

/// Bidirectional entity/nickname index.
///
/// Invariant: `forward[e] == n` exactly when `reverse[n] == e`.
#[derive(Debug, Clone, Default)]
pub struct NicknameIndex {
    /// Forward index: entity -> nickname.
    forward: HashMap<EntityId, String>,
    /// Reverse index: nickname -> entity, used to enforce global uniqueness.
    reverse: HashMap<String, EntityId>,
}

impl NicknameIndex {
    /// Creates a new empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the nickname for an entity, if it has one.
    #[must_use]
    pub fn get(&self, entity: EntityId) -> Option<&str> {
        self.forward.get(&entity).map(String::as_str)
    }

    /// Resolves a nickname to the entity that holds it.
    #[must_use]
    pub fn resolve(&self, nickname: &str) -> Option<EntityId> {
        self.reverse.get(nickname).copied()
    }

    /// Assigns a nickname to an entity, returning its previous nickname.
    ///
    /// Re-assigning the nickname an entity already holds is idempotent.
    /// Assigning a new nickname unbinds the entity's old one, so a later
    /// assignment of the old name to another entity succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateNickname`] if the nickname is bound to a
    /// *different* entity. The index is left unchanged in that case.
    pub fn set(&mut self, entity: EntityId, nickname: impl Into<String>) -> Result<Option<String>> {
        let nickname = nickname.into();

        if let Some(&existing) = self.reverse.get(&nickname) {
            if existing != entity {
                return Err(Error::duplicate_nickname(nickname, existing));
            }
        }

        let old = self.forward.insert(entity, nickname.clone());
        if let Some(old) = &old {
            if *old != nickname {
                self.reverse.remove(old);
            }
        }
        self.reverse.insert(nickname, entity);
        Ok(old)
    }

    /// Clears an entity's nickname, returning the removed name.
    ///
    /// Returns `None` if the entity had no nickname; that is absence, not
    /// an error.
    pub fn clear(&mut self, entity: EntityId) -> Option<String> {
        let old = self.forward.remove(&entity)?;
        self.reverse.remove(&old);
        Some(old)
    }

    /// Returns the number of nicknamed entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    /// Checks whether the index is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }
}
