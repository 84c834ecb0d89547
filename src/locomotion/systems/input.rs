//! Locomotion domain: input sampling for locomotion.

use bevy::prelude::*;

use crate::locomotion::MovementInput;

/// Fill [`MovementInput`] from the keyboard. Leaves it untouched when no
/// keyboard input is registered, so other sources can write it instead.
pub(crate) fn read_input(
    keyboard: Option<Res<ButtonInput<KeyCode>>>,
    mut input: ResMut<MovementInput>,
) {
    let Some(keyboard) = keyboard else {
        return;
    };

    let mut x = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        x += 1.0;
    }

    let mut y = 0.0;
    if keyboard.pressed(KeyCode::KeyS) || keyboard.pressed(KeyCode::ArrowDown) {
        y -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyW) || keyboard.pressed(KeyCode::ArrowUp) {
        y += 1.0;
    }

    input.axis = Vec2::new(x, y);
    input.jump_just_pressed =
        keyboard.just_pressed(KeyCode::Space) || keyboard.just_pressed(KeyCode::KeyK);
    input.dash_just_pressed =
        keyboard.just_pressed(KeyCode::ShiftLeft) || keyboard.just_pressed(KeyCode::KeyJ);
}

/// Clear the edge flags once every controller has seen them.
pub(crate) fn consume_input_edges(mut input: ResMut<MovementInput>) {
    input.jump_just_pressed = false;
    input.dash_just_pressed = false;
}
