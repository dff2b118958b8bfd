//! Component storage with per-type maps.
//!
//! Components are stored by declared type rather than by entity: one inner
//! map per component type, keyed by entity. This keeps heterogeneous data
//! from scattering across entities and answers "all entities with component
//! T" in O(count of T) instead of a scan over all entities.
//!
//! The outer table is keyed by [`TypeId`] and holds type-erased boxes. Each
//! box is recovered through a checked downcast at the boundary; because the
//! key *is* the type, a mismatch is unreachable short of an internal bug,
//! and such a bug surfaces as a panic rather than silent misbehavior.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;

use apsu_foundation::EntityId;

/// Marker trait for component types.
///
/// Any `'static` data type can be a component; implement this trait to opt
/// a type in. A component type identifies exactly one logical map in the
/// store, and each entity holds at most one value per component type.
pub trait Component: 'static {}

/// Object-safe view of a single per-type map.
///
/// Lets the store fan deletion out across every map without knowing the
/// component types involved, and provides the `Any` upcasts used to recover
/// the concrete map.
trait ComponentMap {
    /// Removes the entity's entry if present.
    fn remove_entity(&mut self, entity: EntityId);
    /// Number of entries in this map.
    fn len(&self) -> usize;
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Concrete map for a single component type.
struct TypedMap<T: Component> {
    entries: HashMap<EntityId, T>,
}

impl<T: Component> TypedMap<T> {
    fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<T: Component> ComponentMap for TypedMap<T> {
    fn remove_entity(&mut self, entity: EntityId) {
        self.entries.remove(&entity);
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Stores all component data, one map per component type.
///
/// Maps are created lazily on the first `set` for a type and are not
/// pruned when their last entry is removed.
#[derive(Default)]
pub struct ComponentStore {
    /// Component data: type -> entity -> value.
    maps: HashMap<TypeId, Box<dyn ComponentMap>>,
}

impl ComponentStore {
    /// Creates a new empty component store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a component on an entity, returning the previous value if any.
    ///
    /// Creates the per-type map if this is the first component of `T` ever
    /// stored. Always succeeds.
    ///
    /// # Panics
    ///
    /// Panics if the map registered under `T`'s type key holds a different
    /// type. This indicates an internal bug, not a caller error.
    pub fn set<T: Component>(&mut self, entity: EntityId, component: T) -> Option<T> {
        self.maps
            .entry(TypeId::of::<T>())
            .or_insert_with(|| Box::new(TypedMap::<T>::new()))
            .as_any_mut()
            .downcast_mut::<TypedMap<T>>()
            .expect("component map does not match its type key")
            .entries
            .insert(entity, component)
    }

    /// Gets the component of type `T` for an entity.
    ///
    /// Absence (no map for `T`, or no entry for `entity`) is `None`, never
    /// an error.
    ///
    /// # Panics
    ///
    /// Panics on a corrupted type registry (internal bug).
    #[must_use]
    pub fn get<T: Component>(&self, entity: EntityId) -> Option<&T> {
        self.map_of::<T>()?.entries.get(&entity)
    }

    /// Gets a mutable reference to the component of type `T` for an entity.
    ///
    /// # Panics
    ///
    /// Panics on a corrupted type registry (internal bug).
    pub fn get_mut<T: Component>(&mut self, entity: EntityId) -> Option<&mut T> {
        self.map_of_mut::<T>()?.entries.get_mut(&entity)
    }

    /// Removes and returns the entity's component of type `T`.
    ///
    /// Missing map or missing entry is `None`, never an error. The
    /// per-type map is left in place even if this removes its last entry.
    ///
    /// # Panics
    ///
    /// Panics on a corrupted type registry (internal bug).
    pub fn remove<T: Component>(&mut self, entity: EntityId) -> Option<T> {
        self.map_of_mut::<T>()?.entries.remove(&entity)
    }

    /// Checks whether the entity has a component of type `T`.
    ///
    /// # Panics
    ///
    /// Panics on a corrupted type registry (internal bug).
    #[must_use]
    pub fn has<T: Component>(&self, entity: EntityId) -> bool {
        self.map_of::<T>()
            .is_some_and(|m| m.entries.contains_key(&entity))
    }

    /// Returns the number of stored components of type `T`.
    ///
    /// # Panics
    ///
    /// Panics on a corrupted type registry (internal bug).
    #[must_use]
    pub fn count_of<T: Component>(&self) -> usize {
        self.map_of::<T>().map_or(0, |m| m.entries.len())
    }

    /// Iterates every (entity, component) pair stored under type `T`.
    ///
    /// The iterator is lazy, finite, and restartable (call again for a
    /// fresh pass); order is unspecified. A type with no map yields an
    /// empty iterator, not an error.
    ///
    /// # Panics
    ///
    /// Panics on a corrupted type registry (internal bug).
    pub fn all_of<T: Component>(&self) -> impl Iterator<Item = (EntityId, &T)> + '_ {
        self.map_of::<T>()
            .into_iter()
            .flat_map(|m| m.entries.iter().map(|(id, c)| (*id, c)))
    }

    /// Iterates every (entity, component) pair of type `T` mutably.
    ///
    /// # Panics
    ///
    /// Panics on a corrupted type registry (internal bug).
    pub fn all_of_mut<T: Component>(&mut self) -> impl Iterator<Item = (EntityId, &mut T)> + '_ {
        self.map_of_mut::<T>()
            .into_iter()
            .flat_map(|m| m.entries.iter_mut().map(|(id, c)| (*id, c)))
    }

    /// Removes the entity's entry from every per-type map.
    ///
    /// Called when an entity is deleted. Maps that never mentioned the
    /// entity are unaffected; this is a no-op per map, not an error.
    pub fn remove_entity(&mut self, entity: EntityId) {
        for map in self.maps.values_mut() {
            map.remove_entity(entity);
        }
    }

    // --- Private helpers ---

    fn map_of<T: Component>(&self) -> Option<&TypedMap<T>> {
        self.maps.get(&TypeId::of::<T>()).map(|m| {
            m.as_any()
                .downcast_ref::<TypedMap<T>>()
                .expect("component map does not match its type key")
        })
    }

    fn map_of_mut<T: Component>(&mut self) -> Option<&mut TypedMap<T>> {
        self.maps.get_mut(&TypeId::of::<T>()).map(|m| {
            m.as_any_mut()
                .downcast_mut::<TypedMap<T>>()
                .expect("component map does not match its type key")
        })
    }
}

impl fmt::Debug for ComponentStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentStore")
            .field("types", &self.maps.len())
            .field("entries", &self.maps.values().map(|m| m.len()).sum::<usize>())
            .finish()
    }
}
