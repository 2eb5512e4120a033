//! Collidable world
//!
//! Owns collidable objects together with the mechanical states that drive
//! them, and keeps the two in sync. It decides which objects may collide
//! (by type and mask) but never computes contacts.

use slotmap::{new_key_type, SlotMap};

use crate::collidable_object::CollidableObject;
use crate::data_type::DataType;
use crate::error::FrameworkError;
use crate::mechanical_state::MechanicalState;

new_key_type! {
    /// Key to a collidable object in a [`CollidableWorld`]
    ///
    /// Keys are generational: a key to a removed object stays invalid even
    /// after its slot is reused.
    pub struct CollidableKey;
}

#[derive(Debug)]
struct Entry<D: DataType> {
    object: Box<dyn CollidableObject<D>>,
    state: MechanicalState<D>,
}

/// Collidable objects and their mechanical states
#[derive(Debug)]
pub struct CollidableWorld<D: DataType> {
    entries: SlotMap<CollidableKey, Entry<D>>,
}

impl<D: DataType> Default for CollidableWorld<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: DataType> CollidableWorld<D> {
    /// Create an empty world
    pub fn new() -> Self {
        Self {
            entries: SlotMap::with_key(),
        }
    }

    /// Add an object driven by `state` and return its key
    pub fn add<O: CollidableObject<D> + 'static>(
        &mut self,
        object: O,
        state: MechanicalState<D>,
    ) -> CollidableKey {
        self.add_boxed(Box::new(object), state)
    }

    /// Add an already boxed object
    pub fn add_boxed(
        &mut self,
        object: Box<dyn CollidableObject<D>>,
        state: MechanicalState<D>,
    ) -> CollidableKey {
        self.entries.insert(Entry { object, state })
    }

    /// Remove an object, returning it with its state
    pub fn remove(
        &mut self,
        key: CollidableKey,
    ) -> Option<(Box<dyn CollidableObject<D>>, MechanicalState<D>)> {
        self.entries
            .remove(key)
            .map(|entry| (entry.object, entry.state))
    }

    /// Object by key
    pub fn get(&self, key: CollidableKey) -> Option<&dyn CollidableObject<D>> {
        self.entries.get(key).map(|entry| entry.object.as_ref())
    }

    /// Object by key, mutable
    pub fn get_mut(
        &mut self,
        key: CollidableKey,
    ) -> Option<&mut (dyn CollidableObject<D> + 'static)> {
        self.entries.get_mut(key).map(|entry| entry.object.as_mut())
    }

    /// Mechanical state of an object
    pub fn state(&self, key: CollidableKey) -> Option<&MechanicalState<D>> {
        self.entries.get(key).map(|entry| &entry.state)
    }

    /// Mechanical state of an object, mutable
    pub fn state_mut(&mut self, key: CollidableKey) -> Option<&mut MechanicalState<D>> {
        self.entries.get_mut(key).map(|entry| &mut entry.state)
    }

    /// Number of objects
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the world holds no objects
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all object keys
    pub fn keys(&self) -> impl Iterator<Item = CollidableKey> + '_ {
        self.entries.keys()
    }

    /// Initialize every object, stopping at the first failure
    pub fn initialize_all(&mut self) -> Result<(), FrameworkError> {
        for entry in self.entries.values_mut() {
            entry.object.initialize()?;
        }
        log::info!(
            "Initialized {} collidable objects ({})",
            self.entries.len(),
            D::NAME
        );
        Ok(())
    }

    /// Mechanical states -> collidable objects
    pub fn sync_collidables(&mut self) -> Result<(), FrameworkError> {
        for entry in self.entries.values_mut() {
            entry.object.update_collidable_object(&entry.state)?;
        }
        Ok(())
    }

    /// Collidable objects -> mechanical states
    pub fn sync_mechanical_states(&mut self) -> Result<(), FrameworkError> {
        for entry in self.entries.values_mut() {
            entry.object.update_mechanical_state(&mut entry.state)?;
        }
        Ok(())
    }

    /// Pairs of objects whose types and masks accept each other
    ///
    /// Each unordered pair appears once. No contact test is made.
    pub fn candidate_pairs(&self) -> Vec<(CollidableKey, CollidableKey)> {
        let entries: Vec<_> = self.entries.iter().collect();
        let mut pairs = Vec::new();

        for (i, (key_a, a)) in entries.iter().enumerate() {
            for (key_b, b) in &entries[i + 1..] {
                if a.object.accepts(b.object.as_ref()) {
                    pairs.push((*key_a, *key_b));
                }
            }
        }

        log::debug!(
            "{} candidate pairs among {} collidable objects",
            pairs.len(),
            entries.len()
        );
        pairs
    }
}
