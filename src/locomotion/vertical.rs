//! Locomotion domain: vertical velocity integration (gravity, jump, release).

use crate::locomotion::LocomotionTuning;

/// Downward velocity held while grounded so the character stays pressed to
/// uneven ground instead of hovering at zero.
pub const GROUND_STICK_VELOCITY: f32 = -2.0;

/// Advance `vertical_velocity` by one tick and return the new value.
///
/// Grounded: a negative velocity is clamped to [`GROUND_STICK_VELOCITY`], and a
/// jump press replaces the velocity with `jump_speed`.
///
/// Airborne: gravity is applied, and while still ascending without a jump press
/// an extra `gravity * release_gravity_scale` is applied on top. Falling never
/// receives the extra term.
pub fn integrate_vertical(
    vertical_velocity: f32,
    grounded: bool,
    jump_pressed: bool,
    dt: f32,
    tuning: &LocomotionTuning,
) -> f32 {
    let mut velocity = vertical_velocity;

    if grounded {
        if velocity < 0.0 {
            velocity = GROUND_STICK_VELOCITY;
        }
        if jump_pressed {
            velocity = tuning.jump_speed;
        }
    } else {
        velocity += tuning.gravity * dt;

        if !jump_pressed && velocity > 0.0 {
            velocity += tuning.gravity * tuning.release_gravity_scale * dt;
        }
    }

    velocity
}
