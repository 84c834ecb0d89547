//! Locomotion domain: translating raw input into a world-space move direction.

use bevy::prelude::*;

use crate::locomotion::MovementInput;

/// Normalized input at or below this magnitude counts as no input.
pub const INPUT_DEADZONE: f32 = 0.01;

/// The world's visual axes sit this far (about +Y) from the logical input axes.
pub const ISOMETRIC_YAW_DEGREES: f32 = 45.0;

/// Per-tick input collaborator. Pressed flags must be edge-triggered.
pub trait InputSource {
    fn raw_direction(&self) -> Vec2;
    fn jump_pressed_this_tick(&self) -> bool;
    fn dash_pressed_this_tick(&self) -> bool;
}

impl InputSource for MovementInput {
    fn raw_direction(&self) -> Vec2 {
        self.axis
    }

    fn jump_pressed_this_tick(&self) -> bool {
        self.jump_just_pressed
    }

    fn dash_pressed_this_tick(&self) -> bool {
        self.dash_just_pressed
    }
}

/// Input polled once at the start of a tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    pub raw_direction: Vec2,
    pub jump_pressed: bool,
    pub dash_pressed: bool,
}

impl TickInput {
    pub fn sample<S: InputSource + ?Sized>(source: &S) -> Self {
        Self {
            raw_direction: source.raw_direction(),
            jump_pressed: source.jump_pressed_this_tick(),
            dash_pressed: source.dash_pressed_this_tick(),
        }
    }

    pub fn move_direction(&self) -> Vec3 {
        translate_direction(self.raw_direction)
    }
}

/// Map a raw 2D stick/keyboard vector to a unit direction in the XZ plane,
/// rotated into the isometric world frame. Returns `Vec3::ZERO` inside the deadzone.
pub fn translate_direction(raw: Vec2) -> Vec3 {
    // Zero and non-finite input both normalize to zero here.
    let input = Vec3::new(raw.x, 0.0, raw.y).normalize_or_zero();
    if input.length() <= INPUT_DEADZONE {
        return Vec3::ZERO;
    }

    let iso = Quat::from_rotation_y(ISOMETRIC_YAW_DEGREES.to_radians());
    (iso * input).normalize_or_zero()
}
