//! Locomotion domain: the per-tick driver that composes all sub-steps and
//! submits the resulting displacement to a [`Mover`].

use bevy::prelude::*;

use crate::locomotion::dash::{DashPhase, DashState};
use crate::locomotion::horizontal::smooth_speed;
use crate::locomotion::input::{InputSource, TickInput};
use crate::locomotion::orientation::orient;
use crate::locomotion::vertical::integrate_vertical;
use crate::locomotion::LocomotionTuning;

/// Collision-aware displacement collaborator. Authoritative for collision
/// response and ground detection.
pub trait Mover {
    fn is_grounded(&self) -> bool;
    fn move_by(&mut self, displacement: Vec3);
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionState {
    /// Negative is downward.
    pub vertical_velocity: f32,
    /// Horizontal speed magnitude, never negative.
    pub current_speed: f32,
    /// Unit vector in the XZ plane, or zero without input.
    pub move_direction: Vec3,
    pub facing: Quat,
}

impl Default for MotionState {
    fn default() -> Self {
        Self {
            vertical_velocity: 0.0,
            current_speed: 0.0,
            move_direction: Vec3::ZERO,
            facing: Quat::IDENTITY,
        }
    }
}

/// What a single tick did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickReport {
    /// Displacement handed to the mover (zero for a skipped tick).
    pub displacement: Vec3,
    /// Dash phase that governed this tick.
    pub dash_phase: DashPhase,
    pub grounded_before: bool,
    pub grounded_after: bool,
}

/// Locomotion state for one character.
#[derive(Component, Debug, Clone)]
pub struct LocomotionController {
    tuning: LocomotionTuning,
    motion: MotionState,
    dash: DashState,
}

impl LocomotionController {
    pub fn new(tuning: LocomotionTuning) -> Self {
        Self {
            tuning,
            motion: MotionState::default(),
            dash: DashState::default(),
        }
    }

    pub fn with_facing(mut self, facing: Quat) -> Self {
        self.motion.facing = facing;
        self
    }

    pub fn tuning(&self) -> &LocomotionTuning {
        &self.tuning
    }

    pub fn motion(&self) -> &MotionState {
        &self.motion
    }

    pub fn dash(&self) -> &DashState {
        &self.dash
    }

    pub fn cancel_dash(&mut self) {
        self.dash.cancel();
    }

    /// Run one tick in fixed order: sample input, integrate vertical velocity,
    /// smooth speed, advance the dash, orient, then compose and submit the
    /// displacement.
    ///
    /// A non-positive or non-finite `dt` leaves all state untouched and does not
    /// call [`Mover::move_by`].
    pub fn tick<I, M>(&mut self, input: &I, mover: &mut M, dt: f32) -> TickReport
    where
        I: InputSource + ?Sized,
        M: Mover + ?Sized,
    {
        let grounded = mover.is_grounded();
        if !dt.is_finite() || dt <= 0.0 {
            return TickReport {
                displacement: Vec3::ZERO,
                dash_phase: self.dash.phase(),
                grounded_before: grounded,
                grounded_after: grounded,
            };
        }

        let input = TickInput::sample(input);
        let direction = input.move_direction();
        self.motion.move_direction = direction;

        self.motion.vertical_velocity = integrate_vertical(
            self.motion.vertical_velocity,
            grounded,
            input.jump_pressed,
            dt,
            &self.tuning,
        );
        if grounded && input.jump_pressed {
            debug!("Jump: vertical_velocity={}", self.motion.vertical_velocity);
        }

        self.motion.current_speed =
            smooth_speed(self.motion.current_speed, direction, dt, &self.tuning);

        let dash_phase = self.dash.advance(input.dash_pressed, dt, &self.tuning);

        self.motion.facing = orient(self.motion.facing, direction, dt, &self.tuning);

        let displacement =
            compose_displacement(&self.motion, dash_phase, grounded, dt, &self.tuning);
        mover.move_by(displacement);

        let grounded_after = mover.is_grounded();
        if grounded_after && !grounded {
            debug!("Landed: vertical_velocity={}", self.motion.vertical_velocity);
        } else if !grounded_after && grounded {
            debug!("Left ground: vertical_velocity={}", self.motion.vertical_velocity);
        }

        TickReport {
            displacement,
            dash_phase,
            grounded_before: grounded,
            grounded_after,
        }
    }
}

/// Combine horizontal and vertical motion into one displacement for `dt`.
///
/// While dashing, `dash_speed` replaces the smoothed speed and air control is
/// not applied. Vertical motion is never scaled.
pub fn compose_displacement(
    motion: &MotionState,
    dash_phase: DashPhase,
    grounded: bool,
    dt: f32,
    tuning: &LocomotionTuning,
) -> Vec3 {
    let horizontal = if dash_phase == DashPhase::Dashing {
        motion.move_direction * tuning.dash_speed * dt
    } else {
        let air_control = if grounded { 1.0 } else { tuning.air_control };
        motion.move_direction * motion.current_speed * air_control * dt
    };

    horizontal + Vec3::Y * motion.vertical_velocity * dt
}

/// Clamp `position` onto a flat ground plane. Returns whether it is resting on it.
pub(crate) fn settle_on_plane(position: &mut Vec3, ground_height: f32) -> bool {
    if position.y <= ground_height {
        position.y = ground_height;
        true
    } else {
        false
    }
}

/// Reference mover over an infinite flat floor. Not a collision solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneMover {
    position: Vec3,
    ground_height: f32,
    grounded: bool,
}

impl PlaneMover {
    pub fn new(position: Vec3, ground_height: f32) -> Self {
        let mut position = position;
        let grounded = settle_on_plane(&mut position, ground_height);
        Self {
            position,
            ground_height,
            grounded,
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }
}

impl Mover for PlaneMover {
    fn is_grounded(&self) -> bool {
        self.grounded
    }

    fn move_by(&mut self, displacement: Vec3) {
        self.position += displacement;
        self.grounded = settle_on_plane(&mut self.position, self.ground_height);
    }
}
