//! Locomotion domain: per-tick character controller and its bevy wiring.
//!
//! The controller itself ([`LocomotionController`]) is engine-agnostic apart
//! from bevy's math types: it takes an [`InputSource`], a [`Mover`] and a
//! delta time. [`LocomotionPlugin`] drives it for ECS entities.

mod components;
pub mod controller;
pub mod dash;
pub mod horizontal;
pub mod input;
pub mod orientation;
mod resources;
mod systems;
pub mod vertical;


pub use components::{KinematicBody, locomotion_bundle};
pub use controller::{
    LocomotionController, MotionState, Mover, PlaneMover, TickReport, compose_displacement,
};
pub use dash::{DashPhase, DashState};
pub use input::{InputSource, TickInput, translate_direction};
pub use resources::{LocomotionTuning, MovementInput};

use bevy::prelude::*;
use std::path::PathBuf;

use crate::content::load_tuning;

#[derive(Debug, Clone, Default)]
pub struct LocomotionPlugin {
    /// RON tuning file. Defaults are used when unset or when loading fails.
    pub tuning_path: Option<PathBuf>,
}

impl LocomotionPlugin {
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Self {
            tuning_path: Some(path.into()),
        }
    }

    fn resolve_tuning(&self) -> LocomotionTuning {
        let Some(path) = &self.tuning_path else {
            return LocomotionTuning::default();
        };

        match load_tuning(path) {
            Ok(tuning) => {
                info!("Loaded locomotion tuning from {}", path.display());
                tuning
            }
            Err(e) => {
                warn!("{}; using default locomotion tuning", e);
                LocomotionTuning::default()
            }
        }
    }
}

impl Plugin for LocomotionPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.resolve_tuning())
            .init_resource::<MovementInput>()
            .add_systems(
                Update,
                (
                    systems::read_input,
                    systems::tick_controllers,
                    systems::consume_input_edges,
                )
                    .chain(),
            );
    }
}
