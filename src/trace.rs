//! Headless frame trace.
//!
//! Runs the decoration without a window against a virtual surface and
//! streams every item's transform per frame as JSON lines. Used by the
//! `--trace` CLI flag.

use bevy_ecs::prelude::*;
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::components::idletransform::IdleTransform;
use crate::decor::{init_world, startup_schedule, update_schedule};
use crate::resources::decorconfig::DecorConfig;
use crate::resources::decoritems::DecorItems;
use crate::resources::decorlayout::DecorLayout;
use crate::resources::stage::Stage;
use crate::resources::worldtime::WorldTime;
use crate::systems::time::sync_world_time;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ItemTrace {
    pub index: usize,
    pub rotation: f32,
    pub offset_x: f32,
    pub offset_y: f32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FrameTrace {
    pub frame: u64,
    pub elapsed: f32,
    pub items: Vec<ItemTrace>,
}

/// Capture the transforms of every item in collection order.
pub fn snapshot(world: &World, frame: u64) -> FrameTrace {
    let elapsed = world.resource::<WorldTime>().elapsed;
    let items = world
        .resource::<DecorItems>()
        .iter()
        .enumerate()
        .filter_map(|(index, entity)| {
            world.get::<IdleTransform>(entity).map(|tr| ItemTrace {
                index,
                rotation: tr.rotation,
                offset_x: tr.offset_x,
                offset_y: tr.offset_y,
            })
        })
        .collect();
    FrameTrace {
        frame,
        elapsed,
        items,
    }
}

/// Clock reading of `frame` at `fps`, computed from the frame index alone.
pub fn frame_time(frame: u64, fps: u32) -> f64 {
    frame as f64 / fps.max(1) as f64
}

/// Run `frames` frames at `fps`, starting at frame `start`, writing one JSON
/// line per frame to `out` as soon as it is computed.
///
/// Every frame's time is `frame / fps`, so any frame can be reproduced by
/// starting there. Frame 0 is evaluated at elapsed time 0. Returns the
/// number of frames written.
pub fn run_trace(
    out: &mut impl Write,
    config: DecorConfig,
    layout: DecorLayout,
    start: u64,
    frames: u64,
    fps: u32,
) -> Result<u64, Box<dyn std::error::Error>> {
    let (w, h) = config.window_size_px();
    let stage = Stage::new(config.variant, w, h);
    let mut world = World::new();
    init_world(&mut world, config, layout, Some(stage));

    startup_schedule().run(&mut world);
    let mut update = update_schedule();

    let end = start.saturating_add(frames);
    for frame in start..end {
        sync_world_time(&mut world, frame_time(frame, fps));
        update.run(&mut world);
        write_frame(out, &snapshot(&world, frame))?;
    }
    out.flush()?;
    Ok(end - start)
}

/// Write one trace as a JSON line.
pub fn write_frame(out: &mut impl Write, trace: &FrameTrace) -> Result<(), Box<dyn std::error::Error>> {
    serde_json::to_writer(&mut *out, trace)?;
    writeln!(out)?;
    Ok(())
}
