//! World assembly shared by the windowed loop and the headless trace.
//!
//! [`init_world`] inserts the decoration resources and observers,
//! [`startup_schedule`] spawns the items once, and [`update_schedule`] holds
//! the per-frame update systems that do not need a window.

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use log::{error, info};

use crate::events::resize::surface_resized_observer;
use crate::events::switchdebug::switch_debug_observer;
use crate::resources::decorconfig::DecorConfig;
use crate::resources::decoritems::DecorItems;
use crate::resources::decorlayout::DecorLayout;
use crate::resources::scenecamera::SceneCamera;
use crate::resources::stage::Stage;
use crate::resources::worldtime::WorldTime;
use crate::systems::drift::icon_drift_system;
use crate::systems::idle::idle_motion_system;
use crate::systems::setup::spawn_decor;

/// Layout from the configured JSON file, or the built-in one.
///
/// A file that cannot be loaded is logged and replaced by the default.
pub fn load_layout(config: &DecorConfig) -> DecorLayout {
    let Some(path) = &config.layout_path else {
        return DecorLayout::default();
    };
    match DecorLayout::load_from_file(&path.to_string_lossy()) {
        Ok(layout) => {
            info!("Loaded layout from {}", path.display());
            layout
        }
        Err(e) => {
            error!(
                "Failed to load layout {}: {}. Using the built-in layout",
                path.display(),
                e
            );
            DecorLayout::default()
        }
    }
}

/// Insert the decoration resources and observers into `world`.
///
/// `stage` is the render surface; pass `None` when there is nothing to draw
/// on and initialization will be skipped.
pub fn init_world(world: &mut World, config: DecorConfig, layout: DecorLayout, stage: Option<Stage>) {
    world.insert_resource(WorldTime::default().with_time_scale(config.time_scale));
    world.insert_resource(DecorItems::default());
    world.insert_resource(SceneCamera::from(&layout.camera));
    world.insert_resource(layout);
    world.insert_resource(config);
    if let Some(stage) = stage {
        world.insert_resource(stage);
    }

    world.spawn(Observer::new(surface_resized_observer));
    world.spawn(Observer::new(switch_debug_observer));
    // Ensure the observers are registered before anything triggers events.
    world.flush();
}

/// Schedule run once before the first frame.
pub fn startup_schedule() -> Schedule {
    let mut startup = Schedule::default();
    startup.add_systems(spawn_decor);
    startup
}

/// Per-frame update systems that need no window.
pub fn update_schedule() -> Schedule {
    let mut update = Schedule::default();
    update.add_systems(idle_motion_system);
    update.add_systems(icon_drift_system);
    update
}
