use crate::components::Player;
use crate::events::{PlayerDeathEvent, PlayerDeathReason};
use crate::resources::KillPlane;
use bevy::prelude::*;

pub fn kill_plane_system(
    kill_plane: Res<KillPlane>,
    player_query: Query<(Entity, &Transform), With<Player>>,
    mut death_events: EventWriter<PlayerDeathEvent>,
) {
    for (player_entity, transform) in player_query.iter() {
        if transform.translation.y < kill_plane.height {
            death_events.send(PlayerDeathEvent {
                player_entity,
                reason: PlayerDeathReason::FellOutOfWorld,
            });
        }
    }
}

// Keeps the camera trailing the player at a fixed offset
pub fn follow_camera_system(
    player_query: Query<&Transform, (With<Player>, Without<Camera3d>)>,
    mut camera_query: Query<&mut Transform, With<Camera3d>>,
) {
    let Ok(player) = player_query.get_single() else {
        return;
    };

    for mut camera in camera_query.iter_mut() {
        camera.translation = player.translation + Vec3::new(0.0, 6.0, 12.0);
        camera.look_at(player.translation, Vec3::Y);
    }
}
