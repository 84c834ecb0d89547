//! Locomotion domain: tuning and input resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::content::TuningError;

/// Tunable locomotion parameters. Immutable once handed to a controller.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocomotionTuning {
    pub max_speed: f32,
    /// Degrees per second.
    pub rotation_speed: f32,
    pub acceleration: f32,
    pub deceleration: f32,
    /// Negative is downward.
    pub gravity: f32,
    pub jump_speed: f32,
    pub dash_speed: f32,
    pub dash_duration: f32,
    pub dash_cooldown: f32,
    /// Horizontal authority while airborne (1.0 = same as grounded).
    pub air_control: f32,
    /// Extra gravity multiplier while ascending without a jump press.
    pub release_gravity_scale: f32,
}

impl Default for LocomotionTuning {
    fn default() -> Self {
        Self {
            max_speed: 8.0,
            rotation_speed: 360.0,
            acceleration: 5.0,
            deceleration: 10.0,
            gravity: -9.81,
            jump_speed: 5.0,
            dash_speed: 30.0,
            dash_duration: 0.3,
            dash_cooldown: 1.5,
            air_control: 0.6,
            release_gravity_scale: 2.0,
        }
    }
}

fn ensure(condition: bool, field: &'static str, reason: &'static str) -> Result<(), TuningError> {
    if condition {
        Ok(())
    } else {
        Err(TuningError::Invalid { field, reason })
    }
}

impl LocomotionTuning {
    /// Reject values the controller cannot run with.
    pub fn validate(&self) -> Result<(), TuningError> {
        let fields = [
            ("max_speed", self.max_speed),
            ("rotation_speed", self.rotation_speed),
            ("acceleration", self.acceleration),
            ("deceleration", self.deceleration),
            ("gravity", self.gravity),
            ("jump_speed", self.jump_speed),
            ("dash_speed", self.dash_speed),
            ("dash_duration", self.dash_duration),
            ("dash_cooldown", self.dash_cooldown),
            ("air_control", self.air_control),
            ("release_gravity_scale", self.release_gravity_scale),
        ];
        for (field, value) in fields {
            ensure(value.is_finite(), field, "must be finite")?;
        }

        ensure(self.max_speed >= 0.0, "max_speed", "must not be negative")?;
        ensure(
            self.rotation_speed >= 0.0,
            "rotation_speed",
            "must not be negative",
        )?;
        ensure(self.acceleration >= 0.0, "acceleration", "must not be negative")?;
        ensure(self.deceleration >= 0.0, "deceleration", "must not be negative")?;
        ensure(self.gravity <= 0.0, "gravity", "must point downward")?;
        ensure(self.dash_speed >= 0.0, "dash_speed", "must not be negative")?;
        ensure(
            self.dash_duration > 0.0,
            "dash_duration",
            "must be greater than zero",
        )?;
        ensure(
            self.dash_cooldown >= 0.0,
            "dash_cooldown",
            "must not be negative",
        )?;
        ensure(
            (0.0..=1.0).contains(&self.air_control),
            "air_control",
            "must be between 0 and 1",
        )?;
        ensure(
            self.release_gravity_scale >= 0.0,
            "release_gravity_scale",
            "must not be negative",
        )
    }

    /// Apex height of a jump held for its full arc: h = v² / (2g).
    pub fn single_jump_height(&self) -> f32 {
        if self.gravity == 0.0 {
            return f32::INFINITY;
        }
        self.jump_speed * self.jump_speed / (2.0 * self.gravity.abs())
    }
}

/// Latest sampled player input. Edge flags are true for exactly one frame.
#[derive(Resource, Debug, Default, Clone, PartialEq)]
pub struct MovementInput {
    pub axis: Vec2,
    pub jump_just_pressed: bool,
    pub dash_just_pressed: bool,
}
