//! Locomotion domain: horizontal speed smoothing.

use bevy::prelude::*;

use crate::locomotion::LocomotionTuning;

/// Move `current` toward `target` by at most `max_delta`, never overshooting.
pub fn move_towards(current: f32, target: f32, max_delta: f32) -> f32 {
    let delta = target - current;
    if delta.abs() <= max_delta {
        target
    } else {
        current + delta.signum() * max_delta
    }
}

/// Ramp the scalar speed toward `max_speed` while there is a move direction,
/// or toward zero when there is none.
pub fn smooth_speed(
    current_speed: f32,
    move_direction: Vec3,
    dt: f32,
    tuning: &LocomotionTuning,
) -> f32 {
    let (target, rate) = if move_direction == Vec3::ZERO {
        (0.0, tuning.deceleration)
    } else {
        (tuning.max_speed, tuning.acceleration)
    };

    move_towards(current_speed, target, rate * dt).max(0.0)
}
