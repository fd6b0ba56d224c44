//! Decoration initialization.
//!
//! [`spawn_decor`] builds the fixed collection of decorative items for the
//! current [`Stage`] variant and records them in [`DecorItems`]. It runs once
//! from the startup schedule; later runs leave the sealed collection alone.
//!
//! # Spawned components
//!
//! Scene variant, one entity per layout model:
//! `FloatItem`, `Anchor`, `FoodModel`, `IdleTransform`.
//!
//! Icons variant, `icon_count` entities:
//! `FoodIcon`, `Tint`, `Anchor` (percent of the surface), `IconDrift`,
//! `IdleTransform`.

use bevy_ecs::prelude::*;
use fastrand::Rng;
use log::{info, warn};
use raylib::prelude::Color;

use crate::components::anchor::Anchor;
use crate::components::floatitem::FloatItem;
use crate::components::foodicon::{FoodIcon, IconDrift};
use crate::components::foodmodel::FoodModel;
use crate::components::idletransform::IdleTransform;
use crate::components::tint::Tint;
use crate::resources::decorconfig::DecorConfig;
use crate::resources::decoritems::{DecorItems, MAX_DECOR_ITEMS};
use crate::resources::decorlayout::{DecorLayout, IconSpec};
use crate::resources::stage::{Stage, StageVariant};

/// Random generator for cosmetic placement, seeded when the config asks for it.
pub fn placement_rng(seed: Option<u64>) -> Rng {
    match seed {
        Some(seed) => Rng::with_seed(seed),
        None => Rng::new(),
    }
}

/// Clamp a requested item count to the collection capacity.
fn clamp_count(requested: usize, what: &str) -> usize {
    if requested > MAX_DECOR_ITEMS {
        warn!(
            "{} {} requested, only {} fit in the decoration",
            requested, what, MAX_DECOR_ITEMS
        );
        MAX_DECOR_ITEMS
    } else {
        requested
    }
}

/// Spawn the decorative items onto the stage.
///
/// Without a [`Stage`] this is a logged no-op and the collection stays empty.
pub fn spawn_decor(
    mut commands: Commands,
    stage: Option<Res<Stage>>,
    layout: Res<DecorLayout>,
    config: Res<DecorConfig>,
    mut items: ResMut<DecorItems>,
) {
    let Some(stage) = stage else {
        warn!("No render surface present, skipping decoration setup");
        return;
    };
    if items.is_sealed() {
        info!(
            "Decoration already set up with {} items, not spawning again",
            items.len()
        );
        return;
    }

    let mut rng = placement_rng(config.seed);
    let spawned = match stage.variant {
        StageVariant::Scene => spawn_models(&mut commands, &layout, &mut rng),
        StageVariant::Icons => spawn_icons(
            &mut commands,
            &layout.icons,
            config.icon_count,
            &mut rng,
        ),
    };
    items.seal(spawned);
    info!(
        "Spawned {} decorative items for the {} variant",
        items.len(),
        stage.variant
    );
}

fn spawn_models(commands: &mut Commands, layout: &DecorLayout, rng: &mut Rng) -> Vec<Entity> {
    let count = clamp_count(layout.models.len(), "models");
    layout
        .models
        .iter()
        .take(count)
        .enumerate()
        .map(|(index, spec)| {
            let [x, y, z] = spec.anchor;
            commands
                .spawn((
                    FloatItem::new(index, y),
                    Anchor::new(x, y, z),
                    FoodModel::build(spec.kind, layout.toppings, rng),
                    IdleTransform {
                        offset_y: y,
                        ..Default::default()
                    },
                ))
                .id()
        })
        .collect()
}

fn spawn_icons(
    commands: &mut Commands,
    spec: &IconSpec,
    icon_count: usize,
    rng: &mut Rng,
) -> Vec<Entity> {
    let count = clamp_count(icon_count, "icons");
    if spec.glyphs.is_empty() {
        warn!("Layout has no icon glyphs, spawning no icons");
        return Vec::new();
    }
    let palette = match spec.palette_colors() {
        Ok(colors) if !colors.is_empty() => colors,
        Ok(_) => vec![Color::WHITE],
        Err(e) => {
            warn!("Bad icon palette ({}), falling back to white", e);
            vec![Color::WHITE]
        }
    };

    (0..count)
        .map(|i| {
            let glyph = spec.glyphs[i % spec.glyphs.len()];
            let color = palette[i % palette.len()];
            let anchor = Anchor::new(rng.f32() * 100.0, rng.f32() * 100.0, 0.0);
            let drift = IconDrift::random(rng);
            commands
                .spawn((
                    FoodIcon { glyph },
                    Tint::new(color),
                    anchor,
                    drift,
                    IdleTransform::default(),
                ))
                .id()
        })
        .collect()
}
