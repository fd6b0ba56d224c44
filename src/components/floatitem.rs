//! Idle-floating decorative item marker.
//!
//! A [`FloatItem`] is one member of the fixed decoration collection. Its
//! `index` selects the spin direction and bob frequency used by
//! [`idle_motion_system`](crate::systems::idle::idle_motion_system).

use bevy_ecs::prelude::Component;

/// Ordinal and resting height of a floating decorative item.
///
/// Both fields are set once at spawn time and never change afterwards.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct FloatItem {
    /// 0-based position in the decoration collection.
    pub index: usize,
    /// Vertical offset the item bobs around.
    pub base_y: f32,
}

impl FloatItem {
    pub fn new(index: usize, base_y: f32) -> Self {
        Self { index, base_y }
    }
}
