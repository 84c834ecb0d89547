//! Per-tick locomotion for an isometric player character: input remapping,
//! gravity and variable-height jumps, speed smoothing, facing, and a timed
//! dash with cooldown.

pub mod content;
pub mod locomotion;

pub use content::{TuningError, load_tuning, parse_tuning};
pub use locomotion::{
    DashPhase, DashState, InputSource, KinematicBody, LocomotionController, LocomotionPlugin,
    LocomotionTuning, MotionState, Mover, MovementInput, PlaneMover, TickReport,
};
