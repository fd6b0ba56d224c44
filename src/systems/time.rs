//! Time update functions.
//!
//! Update the shared [`WorldTime`](crate::resources::worldtime::WorldTime)
//! resource once per frame from a clock reading: the raylib clock in the
//! window, the frame index over the frame rate in the headless trace.
use bevy_ecs::prelude::*;

use crate::resources::worldtime::WorldTime;

/// Set `WorldTime` from a monotonic clock reading `now` (seconds since start).
///
/// `elapsed` becomes `now * time_scale`, so the value depends only on the
/// clock and never drifts from accumulated rounding. A clock that goes
/// backwards yields a zero delta.
pub fn sync_world_time(world: &mut World, now: f64) {
    let mut wt = world.resource_mut::<WorldTime>();
    let elapsed = (now * wt.time_scale as f64) as f32;
    wt.delta = (elapsed - wt.elapsed).max(0.0);
    wt.elapsed = elapsed;
    wt.frame_count += 1;
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn world_with_time(time_scale: f32) -> World {
        let mut world = World::new();
        world.insert_resource(WorldTime::default().with_time_scale(time_scale));
        world
    }

    #[test]
    fn test_sync_applies_time_scale() {
        let mut world = world_with_time(2.0);
        sync_world_time(&mut world, 0.25);
        sync_world_time(&mut world, 0.5);
        let wt = world.resource::<WorldTime>();
        assert!((wt.elapsed - 1.0).abs() < EPSILON);
        assert!((wt.delta - 0.5).abs() < EPSILON);
        assert_eq!(wt.frame_count, 2);
    }

    #[test]
    fn test_sync_is_exact_far_from_start() {
        let mut world = world_with_time(1.0);
        sync_world_time(&mut world, 360_000.0 / 60.0);
        assert_eq!(world.resource::<WorldTime>().elapsed, 6000.0);
    }

    #[test]
    fn test_sync_follows_clock() {
        let mut world = world_with_time(1.0);
        sync_world_time(&mut world, 1.5);
        sync_world_time(&mut world, 2.0);
        let wt = world.resource::<WorldTime>();
        assert!((wt.elapsed - 2.0).abs() < EPSILON);
        assert!((wt.delta - 0.5).abs() < EPSILON);
        assert_eq!(wt.frame_count, 2);
    }

    #[test]
    fn test_sync_backwards_clock_has_zero_delta() {
        let mut world = world_with_time(1.0);
        sync_world_time(&mut world, 3.0);
        sync_world_time(&mut world, 1.0);
        let wt = world.resource::<WorldTime>();
        assert!((wt.elapsed - 1.0).abs() < EPSILON);
        assert_eq!(wt.delta, 0.0);
    }
}
