use crate::components::{Checkpoint, Player};
use crate::events::{PlayerDeathEvent, PlayerDeathReason, RespawnEffectEvent};
use crate::resources::{CheckpointRegistry, CheckpointSettings};
use bevy::prelude::*;
use bevy_rapier3d::prelude::Velocity;

// System that handles player death events
pub fn handle_player_death(
    mut death_events: EventReader<PlayerDeathEvent>,
    registry: Res<CheckpointRegistry>,
    settings: Res<CheckpointSettings>,
    checkpoints: Query<&GlobalTransform, With<Checkpoint>>,
    mut player_query: Query<(&mut Transform, Option<&mut Velocity>), With<Player>>,
    mut effects: EventWriter<RespawnEffectEvent>,
) {
    for event in death_events.read() {
        match event.reason {
            PlayerDeathReason::FellOutOfWorld => info!("Player fell out of the world"),
            PlayerDeathReason::Scripted => info!("Player was killed"),
        }

        let Some(checkpoint) = registry.current else {
            warn!("No current checkpoint, player stays where it died");
            continue;
        };
        let Ok(checkpoint_transform) = checkpoints.get(checkpoint) else {
            warn!("Current checkpoint {checkpoint} no longer exists");
            continue;
        };
        let Ok((mut transform, velocity)) = player_query.get_mut(event.player_entity) else {
            continue;
        };

        transform.translation = checkpoint_transform.translation() + settings.respawn_offset;
        if let Some(mut velocity) = velocity {
            *velocity = Velocity::zero();
        }

        effects.send(RespawnEffectEvent { checkpoint });
        info!("Player respawned at checkpoint {checkpoint}");
    }
}
