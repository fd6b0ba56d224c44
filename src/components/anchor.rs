use bevy_ecs::prelude::Component;
use raylib::prelude::Vector3;

/// Fixed base position of a decorative item.
///
/// Scene items use world units. Icons use percentages of the surface
/// (`x`, `y` in `0..100`, `z` unused).
#[derive(Component, Clone, Copy, Debug)]
pub struct Anchor {
    pub pos: Vector3,
}

impl Anchor {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self {
            pos: Vector3 { x, y, z },
        }
    }
}
