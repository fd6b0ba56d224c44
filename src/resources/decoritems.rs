//! Fixed-size collection of decorative items.
//!
//! [`DecorItems`] owns the entity ids of every decorative item, in index
//! order. It is filled once by
//! [`spawn_decor`](crate::systems::setup::spawn_decor) and never resized
//! afterwards.

use arrayvec::ArrayVec;
use bevy_ecs::prelude::*;

/// Upper bound on the number of decorative items.
pub const MAX_DECOR_ITEMS: usize = 32;

#[derive(Resource, Debug, Default)]
pub struct DecorItems {
    entities: ArrayVec<Entity, MAX_DECOR_ITEMS>,
    sealed: bool,
}

impl DecorItems {
    /// Store the spawned items and seal the collection.
    ///
    /// Returns `false` (and changes nothing) if the collection was already
    /// sealed. Entities beyond [`MAX_DECOR_ITEMS`] are ignored; callers clamp
    /// their counts before spawning.
    pub fn seal(&mut self, entities: impl IntoIterator<Item = Entity>) -> bool {
        if self.sealed {
            return false;
        }
        self.entities.extend(entities.into_iter().take(MAX_DECOR_ITEMS));
        self.sealed = true;
        true
    }

    /// Whether initialization already ran.
    pub fn is_sealed(&self) -> bool {
        self.sealed
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Item entity at `index`.
    pub fn get(&self, index: usize) -> Option<Entity> {
        self.entities.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = Entity> + '_ {
        self.entities.iter().copied()
    }
}
