//! Flat food icons for the icon-field decoration.
//!
//! Each icon has a [`FoodIcon`] (what to draw) and an [`IconDrift`] (how it
//! wanders). The drift is evaluated from elapsed time by
//! [`icon_drift_system`](crate::systems::drift::icon_drift_system).

use bevy_ecs::prelude::Component;
use fastrand::Rng;
use serde::{Deserialize, Serialize};

/// Glyphs available to the icon field.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconGlyph {
    Hamburger,
    PizzaSlice,
    Hotdog,
    Cookie,
    Cheese,
    DrumstickBite,
    Fish,
    BreadSlice,
    PepperHot,
    Egg,
}

impl IconGlyph {
    /// Default glyph rotation used when no layout overrides it.
    pub const ALL: [IconGlyph; 10] = [
        IconGlyph::Hamburger,
        IconGlyph::PizzaSlice,
        IconGlyph::Hotdog,
        IconGlyph::Cookie,
        IconGlyph::Cheese,
        IconGlyph::DrumstickBite,
        IconGlyph::Fish,
        IconGlyph::BreadSlice,
        IconGlyph::PepperHot,
        IconGlyph::Egg,
    ];

    /// Side count of the polygon used to draw this glyph.
    pub fn sides(self) -> i32 {
        match self {
            IconGlyph::PizzaSlice | IconGlyph::Cheese | IconGlyph::PepperHot => 3,
            IconGlyph::BreadSlice | IconGlyph::Hotdog => 4,
            IconGlyph::Fish | IconGlyph::DrumstickBite => 5,
            IconGlyph::Hamburger => 8,
            IconGlyph::Cookie | IconGlyph::Egg => 12,
        }
    }

    /// Short label drawn in the middle of the icon.
    pub fn label(self) -> &'static str {
        match self {
            IconGlyph::Hamburger => "HB",
            IconGlyph::PizzaSlice => "PZ",
            IconGlyph::Hotdog => "HD",
            IconGlyph::Cookie => "CK",
            IconGlyph::Cheese => "CH",
            IconGlyph::DrumstickBite => "DS",
            IconGlyph::Fish => "FI",
            IconGlyph::BreadSlice => "BR",
            IconGlyph::PepperHot => "PP",
            IconGlyph::Egg => "EG",
        }
    }
}

#[derive(Component, Clone, Copy, Debug)]
pub struct FoodIcon {
    pub glyph: IconGlyph,
}

/// Yoyo drift parameters of one icon.
///
/// Starting `delay` seconds after load, the icon eases from rest to
/// `(dx, dy)` pixels and `spin_degrees` of rotation over `duration` seconds,
/// then back, forever.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct IconDrift {
    pub dx: f32,
    pub dy: f32,
    pub spin_degrees: f32,
    pub delay: f32,
    pub duration: f32,
}

pub const MAX_DRIFT_DELAY: f32 = 5.0;
pub const MIN_DRIFT_DURATION: f32 = 5.0;
pub const DRIFT_DURATION_SPREAD: f32 = 20.0;
pub const MAX_DRIFT_DISTANCE: f32 = 100.0;
pub const MAX_DRIFT_SPIN: f32 = 360.0;

impl IconDrift {
    /// Draw drift parameters from `rng`.
    pub fn random(rng: &mut Rng) -> Self {
        Self {
            dy: -MAX_DRIFT_DISTANCE + rng.f32() * MAX_DRIFT_DISTANCE * 2.0,
            dx: -MAX_DRIFT_DISTANCE + rng.f32() * MAX_DRIFT_DISTANCE * 2.0,
            spin_degrees: -MAX_DRIFT_SPIN + rng.f32() * MAX_DRIFT_SPIN * 2.0,
            delay: rng.f32() * MAX_DRIFT_DELAY,
            duration: MIN_DRIFT_DURATION + rng.f32() * DRIFT_DURATION_SPREAD,
        }
    }
}
