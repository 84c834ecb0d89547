//! Locomotion domain: driving every controller once per frame.

use bevy::prelude::*;

use crate::locomotion::components::TransformMover;
use crate::locomotion::{KinematicBody, LocomotionController, MovementInput};

pub(crate) fn tick_controllers(
    time: Res<Time>,
    input: Res<MovementInput>,
    mut query: Query<(&mut LocomotionController, &mut KinematicBody, &mut Transform)>,
) {
    let dt = time.delta_secs();

    for (mut controller, mut body, mut transform) in &mut query {
        let mut mover = TransformMover {
            transform: &mut transform,
            body: &mut body,
        };
        controller.tick(&*input, &mut mover, dt);

        transform.rotation = controller.motion().facing;
    }
}
