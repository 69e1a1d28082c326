use crate::components::Player;
use bevy::prelude::*;
use bevy_rapier3d::prelude::Velocity;

// Vertical speed below which the player counts as standing
const GROUNDED_EPSILON: f32 = 0.05;

pub fn player_input_system(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    mut query: Query<(&Player, &mut Velocity)>,
) {
    for (player, mut velocity) in query.iter_mut() {
        let mut direction = Vec3::ZERO;

        if keyboard_input.pressed(KeyCode::KeyW) || keyboard_input.pressed(KeyCode::ArrowUp) {
            direction.z -= 1.0;
        }
        if keyboard_input.pressed(KeyCode::KeyS) || keyboard_input.pressed(KeyCode::ArrowDown) {
            direction.z += 1.0;
        }
        if keyboard_input.pressed(KeyCode::KeyA) || keyboard_input.pressed(KeyCode::ArrowLeft) {
            direction.x -= 1.0;
        }
        if keyboard_input.pressed(KeyCode::KeyD) || keyboard_input.pressed(KeyCode::ArrowRight) {
            direction.x += 1.0;
        }

        // Diagonals are as fast as straight lines
        let horizontal = direction.normalize_or_zero() * player.speed;
        velocity.linvel.x = horizontal.x;
        velocity.linvel.z = horizontal.z;

        if keyboard_input.just_pressed(KeyCode::Space) && velocity.linvel.y.abs() < GROUNDED_EPSILON
        {
            velocity.linvel.y = player.jump_speed;
        }
    }
}
