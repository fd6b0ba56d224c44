//! 3D food models assembled from primitive shapes.
//!
//! A [`FoodModel`] is a small list of [`ModelPart`]s (cylinders, cones and
//! spheres) positioned relative to the model's origin. The render system
//! places the model at its [`Anchor`](super::anchor::Anchor), applies the
//! frame's [`IdleTransform`](super::idletransform::IdleTransform) and draws
//! every part.
//!
//! Builders:
//! - [`FoodModel::pizza`] – crust, sauce, cheese and randomly scattered pepperoni
//! - [`FoodModel::burger`] – six stacked layers
//! - [`FoodModel::orange`] – sphere with a leaf on top

use bevy_ecs::prelude::Component;
use fastrand::Rng;
use raylib::prelude::{Color, Vector3};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::f32::consts::PI;

/// Pepperoni are scattered strictly inside this radius.
pub const TOPPING_MAX_RADIUS: f32 = 2.0;
/// Default number of pepperoni slices on a pizza.
pub const DEFAULT_TOPPINGS: usize = 10;

const CRUST: u32 = 0xe2b971;
const TOMATO_RED: u32 = 0xd63031;
const MOZZARELLA: u32 = 0xf9ca24;
const PATTY: u32 = 0x6d4534;
const CHEDDAR: u32 = 0xfdcb6e;
const TOMATO_SLICE: u32 = 0xe74c3c;
const LETTUCE: u32 = 0x2ecc71;
const ORANGE_PEEL: u32 = 0xf39c12;

/// Build an opaque color from a `0xRRGGBB` value.
pub fn rgb(hex: u32) -> Color {
    Color::new(
        ((hex >> 16) & 0xff) as u8,
        ((hex >> 8) & 0xff) as u8,
        (hex & 0xff) as u8,
        255,
    )
}

/// Which food a model represents.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FoodKind {
    Pizza,
    Burger,
    Orange,
}

/// Geometry of a single part, centered on the part's local position.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Primitive {
    /// Cylinder along Y. A zero radius on one end makes a cone.
    Cylinder {
        radius_top: f32,
        radius_bottom: f32,
        height: f32,
        slices: i32,
    },
    Sphere {
        radius: f32,
        rings: i32,
        slices: i32,
    },
}

/// One colored primitive placed relative to the model origin.
#[derive(Copy, Clone, Debug)]
pub struct ModelPart {
    pub primitive: Primitive,
    pub local: Vector3,
    pub color: Color,
}

impl ModelPart {
    fn cylinder(radius_top: f32, radius_bottom: f32, height: f32, slices: i32, y: f32, hex: u32) -> Self {
        Self {
            primitive: Primitive::Cylinder {
                radius_top,
                radius_bottom,
                height,
                slices,
            },
            local: Vector3 { x: 0.0, y, z: 0.0 },
            color: rgb(hex),
        }
    }

    /// Local position rotated by `angle` radians around the model's Y axis.
    pub fn rotated_about_y(&self, angle: f32) -> Vector3 {
        let (s, c) = angle.sin_cos();
        Vector3 {
            x: self.local.x * c + self.local.z * s,
            y: self.local.y,
            z: -self.local.x * s + self.local.z * c,
        }
    }
}

/// A food model made of primitive parts.
#[derive(Component, Clone, Debug)]
pub struct FoodModel {
    pub kind: FoodKind,
    pub parts: SmallVec<[ModelPart; 16]>,
}

impl FoodModel {
    /// Build the model for `kind`. Only pizzas consume randomness.
    pub fn build(kind: FoodKind, toppings: usize, rng: &mut Rng) -> Self {
        match kind {
            FoodKind::Pizza => Self::pizza(toppings, rng),
            FoodKind::Burger => Self::burger(),
            FoodKind::Orange => Self::orange(),
        }
    }

    pub fn pizza(toppings: usize, rng: &mut Rng) -> Self {
        let mut parts = SmallVec::new();
        for _ in 0..toppings {
            let mut pepperoni = ModelPart::cylinder(0.3, 0.3, 0.05, 16, 0.3, TOMATO_RED);
            let offset = topping_offset(rng);
            pepperoni.local.x = offset.x;
            pepperoni.local.z = offset.z;
            parts.push(pepperoni);
        }
        parts.push(ModelPart::cylinder(3.0, 3.0, 0.3, 32, 0.0, CRUST));
        parts.push(ModelPart::cylinder(2.8, 2.8, 0.1, 32, 0.2, TOMATO_RED));
        parts.push(ModelPart::cylinder(2.8, 2.8, 0.05, 32, 0.275, MOZZARELLA));
        Self {
            kind: FoodKind::Pizza,
            parts,
        }
    }

    pub fn burger() -> Self {
        let parts = SmallVec::from_slice(&[
            ModelPart::cylinder(2.0, 1.8, 0.6, 32, 0.0, CRUST),
            ModelPart::cylinder(1.8, 1.8, 0.4, 32, 0.5, PATTY),
            ModelPart::cylinder(1.9, 1.9, 0.1, 32, 0.75, CHEDDAR),
            ModelPart::cylinder(1.7, 1.7, 0.15, 32, 0.875, TOMATO_SLICE),
            ModelPart::cylinder(1.9, 1.9, 0.1, 32, 1.0, LETTUCE),
            ModelPart::cylinder(1.8, 2.0, 0.6, 32, 1.35, CRUST),
        ]);
        Self {
            kind: FoodKind::Burger,
            parts,
        }
    }

    pub fn orange() -> Self {
        let peel = ModelPart {
            primitive: Primitive::Sphere {
                radius: 1.5,
                rings: 32,
                slices: 32,
            },
            local: Vector3::zero(),
            color: rgb(ORANGE_PEEL),
        };
        // Leaf is a cone hanging point-down into the top of the peel.
        let leaf = ModelPart::cylinder(0.4, 0.0, 0.8, 32, 1.5, LETTUCE);
        Self {
            kind: FoodKind::Orange,
            parts: SmallVec::from_slice(&[peel, leaf]),
        }
    }
}

/// Random pepperoni position on the pizza's top plane (`y` is left at 0).
pub fn topping_offset(rng: &mut Rng) -> Vector3 {
    let angle = rng.f32() * PI * 2.0;
    let radius = rng.f32() * TOPPING_MAX_RADIUS;
    Vector3 {
        x: angle.cos() * radius,
        y: 0.0,
        z: angle.sin() * radius,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_rgb_splits_channels() {
        let c = rgb(0xe2b971);
        assert_eq!((c.r, c.g, c.b, c.a), (0xe2, 0xb9, 0x71, 255));
    }

    #[test]
    fn test_pizza_has_toppings_plus_three_layers() {
        let mut rng = Rng::with_seed(3);
        let pizza = FoodModel::pizza(DEFAULT_TOPPINGS, &mut rng);
        assert_eq!(pizza.kind, FoodKind::Pizza);
        assert_eq!(pizza.parts.len(), DEFAULT_TOPPINGS + 3);
    }

    #[test]
    fn test_toppings_stay_inside_crust() {
        let mut rng = Rng::with_seed(11);
        for _ in 0..500 {
            let p = topping_offset(&mut rng);
            let r = (p.x * p.x + p.z * p.z).sqrt();
            assert!(r < TOPPING_MAX_RADIUS + EPSILON, "radius {} out of bounds", r);
            assert!(approx_eq(p.y, 0.0));
        }
    }

    #[test]
    fn test_same_seed_same_toppings() {
        let a = FoodModel::pizza(5, &mut Rng::with_seed(99));
        let b = FoodModel::pizza(5, &mut Rng::with_seed(99));
        for (pa, pb) in a.parts.iter().zip(b.parts.iter()) {
            assert!(approx_eq(pa.local.x, pb.local.x));
            assert!(approx_eq(pa.local.z, pb.local.z));
        }
    }

    #[test]
    fn test_burger_and_orange_are_deterministic() {
        assert_eq!(FoodModel::burger().parts.len(), 6);
        let orange = FoodModel::orange();
        assert_eq!(orange.parts.len(), 2);
        assert!(matches!(orange.parts[0].primitive, Primitive::Sphere { .. }));
        match orange.parts[1].primitive {
            Primitive::Cylinder {
                radius_top,
                radius_bottom,
                ..
            } => {
                assert!(approx_eq(radius_top, 0.4));
                assert!(approx_eq(radius_bottom, 0.0));
            }
            _ => panic!("leaf should be a cone"),
        }
    }

    #[test]
    fn test_rotation_keeps_axis_parts_in_place() {
        let burger = FoodModel::burger();
        let p = burger.parts[1].rotated_about_y(1.3);
        assert!(approx_eq(p.x, 0.0));
        assert!(approx_eq(p.y, 0.5));
        assert!(approx_eq(p.z, 0.0));
    }

    #[test]
    fn test_quarter_turn_moves_x_to_negative_z() {
        let mut part = FoodModel::burger().parts[0];
        part.local = Vector3 { x: 1.0, y: 0.0, z: 0.0 };
        let p = part.rotated_about_y(PI / 2.0);
        assert!(approx_eq(p.x, 0.0));
        assert!(approx_eq(p.z, -1.0));
    }
}
