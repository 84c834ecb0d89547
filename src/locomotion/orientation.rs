//! Locomotion domain: yaw-only facing toward the travel direction.

use bevy::prelude::*;

use crate::locomotion::LocomotionTuning;

/// Yaw rotation whose forward (-Z) points along the planar part of `direction`.
///
/// Returns `None` when there is no planar component to face.
pub fn facing_for(direction: Vec3) -> Option<Quat> {
    let planar = Vec3::new(direction.x, 0.0, direction.z);
    if planar.length_squared() <= f32::EPSILON {
        return None;
    }

    // Rotating -Z by yaw gives (-sin yaw, 0, -cos yaw).
    let yaw = (-planar.x).atan2(-planar.z);
    Some(Quat::from_rotation_y(yaw))
}

/// Rotate `from` toward `to` by at most `max_radians`, landing exactly on `to`
/// when it is within reach.
pub fn rotate_towards(from: Quat, to: Quat, max_radians: f32) -> Quat {
    let angle = from.angle_between(to);
    if angle <= max_radians || angle <= f32::EPSILON {
        return to;
    }
    from.slerp(to, max_radians / angle)
}

/// Turn `facing` toward `move_direction` at `rotation_speed` degrees per second.
/// With no move direction the current facing is kept.
pub fn orient(facing: Quat, move_direction: Vec3, dt: f32, tuning: &LocomotionTuning) -> Quat {
    match facing_for(move_direction) {
        Some(target) => rotate_towards(facing, target, tuning.rotation_speed.to_radians() * dt),
        None => facing,
    }
}
