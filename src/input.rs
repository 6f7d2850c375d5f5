use bevy::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RotationCommand {
    #[default]
    None,
    Left,
    Right,
}

/// Control state sampled once per frame. The default is neutral, so a frame
/// with no usable input (nothing held, device noise, window unfocused) steps
/// the simulation as if the player touched nothing; input problems never
/// surface as errors.
#[derive(Resource, Debug, Clone, Default)]
pub struct ControlInput {
    pub thrust: bool,
    pub rotation: RotationCommand,
    pub restart: bool,
    pub toggle_pause: bool,
}

/// Reduces the event-driven keyboard to a polled control snapshot at the top
/// of the frame. The simulation only ever sees this resource.
pub fn read_controls(keyboard: Res<ButtonInput<KeyCode>>, mut controls: ResMut<ControlInput>) {
    controls.thrust =
        keyboard.pressed(KeyCode::ArrowUp) || keyboard.pressed(KeyCode::Space);

    let left = keyboard.pressed(KeyCode::ArrowLeft) || keyboard.pressed(KeyCode::KeyA);
    let right = keyboard.pressed(KeyCode::ArrowRight) || keyboard.pressed(KeyCode::KeyD);
    controls.rotation = match (left, right) {
        (true, false) => RotationCommand::Left,
        (false, true) => RotationCommand::Right,
        // Both held cancel out.
        _ => RotationCommand::None,
    };

    controls.restart = keyboard.just_pressed(KeyCode::KeyR);
    controls.toggle_pause =
        keyboard.just_pressed(KeyCode::KeyP) || keyboard.just_pressed(KeyCode::Escape);
}
