//! FoodFlex decoration main entry point.
//!
//! Opens a window and runs the idle food animation from the FoodFlex landing
//! page, built on:
//! - **raylib** for windowing and drawing
//! - **bevy_ecs** for the item collection and per-frame systems
//!
//! # Main Loop
//!
//! 1. Load `decor.ini` (defaults if missing) and apply CLI overrides
//! 2. Open the window and create the render texture (the render surface)
//! 3. Spawn the decorative items once
//! 4. Each frame until the window closes (or `--max-frames` is reached):
//!    - forward window resizes to the stage
//!    - sync the time source with the raylib clock
//!    - recompute every item's transform, then redraw
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --variant icons
//! cargo run -- --trace 120 --seed 7 > frames.jsonl
//! cargo run -- --trace 60 --trace-start 360000 --seed 7
//! ```

use bevy_ecs::prelude::*;
use clap::Parser;
use log::{error, info};
use std::io::BufWriter;
use std::path::PathBuf;

use foodflex_decor::decor::{init_world, load_layout, startup_schedule, update_schedule};
use foodflex_decor::events::resize::SurfaceResizedEvent;
use foodflex_decor::resources::decorconfig::DecorConfig;
use foodflex_decor::resources::rendertarget::RenderTarget;
use foodflex_decor::resources::stage::{Stage, StageVariant};
use foodflex_decor::systems::drift::icon_drift_system;
use foodflex_decor::systems::idle::idle_motion_system;
use foodflex_decor::systems::input::debug_toggle_system;
use foodflex_decor::systems::render::render_system;
use foodflex_decor::systems::time::sync_world_time;
use foodflex_decor::trace::run_trace;

/// FoodFlex landing page decoration
#[derive(Parser)]
#[command(version, about = "Idle food animation from the FoodFlex landing page")]
struct Cli {
    /// Path to the INI configuration file.
    #[arg(long, value_name = "PATH", default_value = "./decor.ini")]
    config: PathBuf,

    /// Decoration variant: `scene` or `icons`. Overrides the config file.
    #[arg(long)]
    variant: Option<StageVariant>,

    /// Seed for cosmetic placement. Overrides the config file.
    #[arg(long)]
    seed: Option<u64>,

    /// Number of icons in the icon field. Overrides the config file.
    #[arg(long, value_name = "N")]
    icon_count: Option<usize>,

    /// JSON layout file. Overrides the config file.
    #[arg(long, value_name = "PATH")]
    layout: Option<PathBuf>,

    /// Stop after this many frames.
    #[arg(long, value_name = "N")]
    max_frames: Option<u64>,

    /// Run headless for this many frames, print transforms as JSON lines and exit.
    #[arg(long, value_name = "FRAMES")]
    trace: Option<u64>,

    /// First frame of the headless trace.
    #[arg(long, value_name = "FRAME", default_value_t = 0)]
    trace_start: u64,

    /// Speed multiplier of the animation clock. Overrides the config file.
    #[arg(long, value_name = "SCALE")]
    time_scale: Option<f32>,

    /// Frame rate of the headless trace.
    #[arg(long, default_value_t = 60, value_parser = clap::value_parser!(u32).range(1..))]
    fps: u32,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = DecorConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        info!("{}. Using default settings", e);
    }
    if let Some(variant) = cli.variant {
        config.variant = variant;
    }
    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }
    if let Some(icon_count) = cli.icon_count {
        config.icon_count = icon_count;
    }
    if let Some(layout) = cli.layout {
        config.layout_path = Some(layout);
    }
    if let Some(time_scale) = cli.time_scale {
        if time_scale.is_finite() && time_scale >= 0.0 {
            config.time_scale = time_scale;
        } else {
            error!("Ignoring invalid --time-scale {}", time_scale);
        }
    }
    let layout = load_layout(&config);

    // Early-exit: headless trace (no window needed)
    if let Some(frames) = cli.trace {
        let mut out = BufWriter::new(std::io::stdout().lock());
        if let Err(e) = run_trace(&mut out, config, layout, cli.trace_start, frames, cli.fps) {
            eprintln!("Error writing trace: {e}");
            std::process::exit(1);
        }
        return;
    }

    // --------------- Raylib window ---------------
    let (window_width, window_height) = config.window_size_px();
    let mut builder = raylib::init();
    builder
        .size(window_width, window_height)
        .resizable()
        .msaa_4x()
        .title(&config.title);
    if config.vsync {
        builder.vsync();
    }
    let (mut rl, thread) = builder.build();
    if config.target_fps > 0 {
        rl.set_target_fps(config.target_fps);
    }

    // --------------- Render surface ---------------
    let (screen_w, screen_h) = (rl.get_screen_width(), rl.get_screen_height());
    let render_target = match RenderTarget::new(&mut rl, &thread, screen_w as u32, screen_h as u32) {
        Ok(target) => Some(target),
        Err(e) => {
            error!("{}. Running without a render surface", e);
            None
        }
    };
    let stage = render_target
        .as_ref()
        .map(|_| Stage::new(config.variant, screen_w, screen_h));

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    init_world(&mut world, config, layout, stage);
    if let Some(target) = render_target {
        world.insert_non_send_resource(target);
    }
    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    startup_schedule().run(&mut world);

    let mut update = update_schedule();
    update.add_systems(debug_toggle_system);
    update.add_systems(render_system.after(idle_motion_system).after(icon_drift_system));

    // --------------- Main loop ---------------
    let mut frames: u64 = 0;
    loop {
        let (should_close, resized, now) = {
            let rl = world.non_send_resource::<raylib::RaylibHandle>();
            let resized = rl
                .is_window_resized()
                .then(|| (rl.get_screen_width(), rl.get_screen_height()));
            (rl.window_should_close(), resized, rl.get_time())
        };
        if should_close || cli.max_frames.is_some_and(|max| frames >= max) {
            break;
        }
        if let Some((w, h)) = resized {
            world.trigger(SurfaceResizedEvent { w, h });
        }

        sync_world_time(&mut world, now);
        update.run(&mut world);
        world.clear_trackers();
        frames += 1;
    }
    info!("Decoration stopped after {} frames", frames);
}
