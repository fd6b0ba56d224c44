//! Palette color of a decorative icon.
//!
//! The [`Tint`] carries the icon's palette color. The render system fades it
//! with [`Tint::faded`] so icons stay in the background.

use bevy_ecs::prelude::Component;
use raylib::prelude::Color;

/// Icon color taken from the layout palette.
#[derive(Component, Clone, Debug, Copy)]
pub struct Tint {
    pub color: Color,
}

impl Tint {
    pub fn new(color: Color) -> Self {
        Self { color }
    }

    /// The tint with its alpha scaled by `opacity` (clamped to `0.0..=1.0`).
    pub fn faded(&self, opacity: f32) -> Color {
        let opacity = opacity.clamp(0.0, 1.0);
        Color::new(
            self.color.r,
            self.color.g,
            self.color.b,
            (self.color.a as f32 * opacity).round() as u8,
        )
    }
}

impl Default for Tint {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_white() {
        let t = Tint::default();
        assert_eq!((t.color.r, t.color.g, t.color.b, t.color.a), (255, 255, 255, 255));
    }

    #[test]
    fn test_faded_keeps_rgb() {
        let t = Tint::new(Color::new(0xFF, 0x6B, 0x6B, 255));
        let c = t.faded(0.2);
        assert_eq!((c.r, c.g, c.b), (0xFF, 0x6B, 0x6B));
        assert_eq!(c.a, 51);
    }

    #[test]
    fn test_faded_clamps_opacity() {
        let t = Tint::new(Color::new(10, 20, 30, 200));
        assert_eq!(t.faded(2.0).a, 200);
        assert_eq!(t.faded(-1.0).a, 0);
    }
}
