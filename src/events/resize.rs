//! Surface resize event and observer.
//!
//! The main loop triggers [`SurfaceResizedEvent`] when the window geometry
//! changes. [`surface_resized_observer`] applies the new size to the
//! [`Stage`] once per event; the per-frame update rules are not involved.

use crate::resources::stage::Stage;
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{info, warn};

/// New surface size in pixels.
#[derive(Event, Debug, Clone, Copy)]
pub struct SurfaceResizedEvent {
    pub w: i32,
    pub h: i32,
}

/// Observer that resizes the [`Stage`].
///
/// Without a stage there is nothing to resize; the event is logged and dropped.
pub fn surface_resized_observer(trigger: On<SurfaceResizedEvent>, stage: Option<ResMut<Stage>>) {
    let event = trigger.event();
    let Some(mut stage) = stage else {
        warn!(
            "Surface resized to {}x{} but no stage is present",
            event.w, event.h
        );
        return;
    };
    stage.resize(event.w, event.h);
    info!(
        "Surface resized to {}x{} (aspect {:.3}, revision {})",
        stage.w,
        stage.h,
        stage.aspect(),
        stage.revision
    );
}
