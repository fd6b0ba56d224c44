//! Idle motion of the scene items.
//!
//! Every frame, [`idle_motion_system`] rewrites the
//! [`IdleTransform`](crate::components::idletransform::IdleTransform) of each
//! [`FloatItem`](crate::components::floatitem::FloatItem) from its index and
//! the elapsed time:
//!
//! - even items spin at +0.5 rad/s, odd items at -0.5 rad/s
//! - each item bobs ±0.5 around its `base_y`, item `i` at `0.5 + 0.1 i` rad/s
//!
//! Nothing is accumulated between frames.

use crate::components::floatitem::FloatItem;
use crate::components::idletransform::IdleTransform;
use crate::resources::worldtime::WorldTime;
use bevy_ecs::prelude::*;

/// Angular speed magnitude in radians per second.
pub const SPIN_SPEED: f32 = 0.5;
/// Half the peak-to-peak bob height.
pub const BOB_AMPLITUDE: f32 = 0.5;
const BOB_BASE_FREQUENCY: f32 = 0.5;
const BOB_FREQUENCY_STEP: f32 = 0.1;

/// Signed spin speed of item `index`.
pub fn spin_speed(index: usize) -> f32 {
    if index % 2 == 0 { SPIN_SPEED } else { -SPIN_SPEED }
}

/// Rotation in radians of item `index` at elapsed time `t`.
pub fn idle_rotation(index: usize, t: f32) -> f32 {
    t * spin_speed(index)
}

/// Vertical position of item `index` at elapsed time `t`.
pub fn idle_offset(index: usize, base_y: f32, t: f32) -> f32 {
    let frequency = BOB_BASE_FREQUENCY + index as f32 * BOB_FREQUENCY_STEP;
    (t * frequency).sin() * BOB_AMPLITUDE + base_y
}

/// Full transform of `item` at elapsed time `t`.
pub fn idle_transform(item: &FloatItem, t: f32) -> IdleTransform {
    IdleTransform {
        rotation: idle_rotation(item.index, t),
        offset_x: 0.0,
        offset_y: idle_offset(item.index, item.base_y, t),
    }
}

/// Recompute the transform of every floating item.
pub fn idle_motion_system(
    world_time: Res<WorldTime>,
    mut query: Query<(&FloatItem, &mut IdleTransform)>,
) {
    let t = world_time.elapsed;
    for (item, mut transform) in query.iter_mut() {
        *transform = idle_transform(item, t);
    }
}
