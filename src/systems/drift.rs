//! Yoyo drift of the icon field.
//!
//! Each icon eases from rest to its drift target and back, forever, after an
//! initial delay. [`icon_drift_system`] evaluates that cycle directly from the
//! elapsed time, so an icon's transform depends only on its [`IconDrift`] and
//! the clock.

use crate::components::foodicon::IconDrift;
use crate::components::idletransform::IdleTransform;
use crate::resources::worldtime::WorldTime;
use bevy_ecs::prelude::*;
use std::f32::consts::PI;

/// Sine ease-in-out on `t` clamped to `[0, 1]`.
pub fn sine_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    (1.0 - (PI * t).cos()) * 0.5
}

/// Linear progress in `[0, 1]` of a repeating yoyo cycle.
///
/// Before `delay` the progress is 0. Afterwards it rises to 1 over
/// `duration` seconds, falls back to 0 over the next `duration`, and so on.
pub fn yoyo_progress(t: f32, delay: f32, duration: f32) -> f32 {
    let local = t - delay;
    if local <= 0.0 || duration <= 0.0 {
        return 0.0;
    }
    let cycle = local / duration;
    let leg = cycle.floor();
    let frac = cycle - leg;
    if (leg as u64) % 2 == 0 { frac } else { 1.0 - frac }
}

/// Transform of an icon with `drift` at elapsed time `t`.
pub fn drift_transform(drift: &IconDrift, t: f32) -> IdleTransform {
    let eased = sine_in_out(yoyo_progress(t, drift.delay, drift.duration));
    IdleTransform {
        rotation: (drift.spin_degrees * eased).to_radians(),
        offset_x: drift.dx * eased,
        offset_y: drift.dy * eased,
    }
}

/// Recompute the transform of every drifting icon.
pub fn icon_drift_system(
    world_time: Res<WorldTime>,
    mut query: Query<(&IconDrift, &mut IdleTransform)>,
) {
    let t = world_time.elapsed;
    for (drift, mut transform) in query.iter_mut() {
        *transform = drift_transform(drift, t);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn drift() -> IconDrift {
        IconDrift {
            dx: 80.0,
            dy: -40.0,
            spin_degrees: 180.0,
            delay: 2.0,
            duration: 10.0,
        }
    }

    #[test]
    fn test_sine_in_out_endpoints_and_midpoint() {
        assert!(approx_eq(sine_in_out(0.0), 0.0));
        assert!(approx_eq(sine_in_out(0.5), 0.5));
        assert!(approx_eq(sine_in_out(1.0), 1.0));
        assert!(approx_eq(sine_in_out(-3.0), 0.0));
        assert!(approx_eq(sine_in_out(7.0), 1.0));
    }

    #[test]
    fn test_sine_in_out_is_monotonic() {
        let mut prev = sine_in_out(0.0);
        for i in 1..=100 {
            let v = sine_in_out(i as f32 / 100.0);
            assert!(v >= prev);
            prev = v;
        }
    }

    #[test]
    fn test_rest_before_delay() {
        let tr = drift_transform(&drift(), 1.5);
        assert_eq!(tr, IdleTransform::default());
    }

    #[test]
    fn test_reaches_target_then_returns() {
        let d = drift();
        let peak = drift_transform(&d, 12.0);
        assert!(approx_eq(peak.offset_x, 80.0));
        assert!(approx_eq(peak.offset_y, -40.0));
        assert!(approx_eq(peak.rotation, PI));

        let back = drift_transform(&d, 22.0);
        assert!(approx_eq(back.offset_x, 0.0));
        assert!(approx_eq(back.offset_y, 0.0));
    }

    #[test]
    fn test_yoyo_legs_mirror_each_other() {
        for k in 0..20 {
            let s = k as f32 * 0.5;
            let up = yoyo_progress(2.0 + s, 2.0, 10.0);
            let down = yoyo_progress(22.0 - s, 2.0, 10.0);
            assert!((up - down).abs() < 1e-4, "at {}: {} vs {}", s, up, down);
        }
    }

    #[test]
    fn test_offsets_bounded_by_target() {
        let d = drift();
        let mut t = 0.0;
        while t < 100.0 {
            let tr = drift_transform(&d, t);
            assert!(tr.offset_x >= -EPSILON && tr.offset_x <= d.dx + EPSILON);
            assert!(tr.offset_y <= EPSILON && tr.offset_y >= d.dy - EPSILON);
            t += 0.33;
        }
    }

    #[test]
    fn test_zero_duration_stays_at_rest() {
        assert_eq!(yoyo_progress(50.0, 0.0, 0.0), 0.0);
    }
}
