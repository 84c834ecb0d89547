//! Locomotion domain: ECS components adapting entities to the controller.

use bevy::prelude::*;

use crate::locomotion::controller::settle_on_plane;
use crate::locomotion::{LocomotionController, LocomotionTuning, Mover};

/// Ground contact for an entity moved by its `Transform` over a flat floor.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct KinematicBody {
    pub grounded: bool,
    pub ground_height: f32,
}

/// Borrows an entity's transform and body as a [`Mover`] for one tick.
pub(crate) struct TransformMover<'a> {
    pub transform: &'a mut Transform,
    pub body: &'a mut KinematicBody,
}

impl Mover for TransformMover<'_> {
    fn is_grounded(&self) -> bool {
        self.body.grounded
    }

    fn move_by(&mut self, displacement: Vec3) {
        self.transform.translation += displacement;
        self.body.grounded =
            settle_on_plane(&mut self.transform.translation, self.body.ground_height);
    }
}

/// Components for a controllable character standing at `position`.
pub fn locomotion_bundle(
    tuning: &LocomotionTuning,
    position: Vec3,
    ground_height: f32,
) -> (LocomotionController, KinematicBody, Transform) {
    let mut translation = position;
    let grounded = settle_on_plane(&mut translation, ground_height);

    (
        LocomotionController::new(tuning.clone()),
        KinematicBody {
            grounded,
            ground_height,
        },
        Transform::from_translation(translation),
    )
}
