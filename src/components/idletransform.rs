//! Per-frame derived transform.
//!
//! [`IdleTransform`] is recomputed from scratch every frame by the idle
//! systems. Nothing reads a previous frame's value, so the animation can be
//! restarted from any time value.

use bevy_ecs::prelude::Component;

/// Rotation and positional offset for the current frame.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
pub struct IdleTransform {
    /// Rotation in radians (around Y for scene models, screen plane for icons).
    pub rotation: f32,
    /// Horizontal offset. Always 0 for scene models; pixels for icons.
    pub offset_x: f32,
    /// Vertical position for scene models (world units, includes `base_y`);
    /// vertical drift in pixels for icons.
    pub offset_y: f32,
}
