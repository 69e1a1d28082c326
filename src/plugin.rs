use crate::events::*;
use crate::resources::{CheckpointRegistry, CheckpointSettings, KillPlane};
use crate::systems::checkpoint::*;
use crate::systems::collision::detect_checkpoint_touches;
use crate::systems::input::player_input_system;
use crate::systems::movement::{follow_camera_system, kill_plane_system};
use crate::systems::player::handle_player_death;
use crate::systems::presentation::{
    autoplay_looping_sound, sync_looping_sound, tick_bursts, update_emitter_visibility,
};
use bevy::prelude::*;
use bevy_rapier3d::prelude::CollisionEvent;

#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum RespawnSet {
    Player,
    Checkpoints,
}

/// Checkpoint state machine, registry and effect playback.
pub struct CheckpointPlugin;

impl Plugin for CheckpointPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CheckpointRegistry>()
            .init_resource::<CheckpointSettings>()
            // Registered by rapier too; harmless when both are present
            .add_event::<CollisionEvent>()
            .add_event::<CheckpointTouchedEvent>()
            .add_event::<CheckpointActivatedEvent>()
            .add_event::<RespawnEffectEvent>()
            .configure_sets(Update, RespawnSet::Player.before(RespawnSet::Checkpoints))
            .add_systems(
                Update,
                (
                    initialize_checkpoints,
                    detect_checkpoint_touches,
                    apply_checkpoint_touches,
                    // Before firing, so fresh bursts and decays get their full time
                    tick_light_decay,
                    tick_bursts,
                    fire_respawn_effects,
                    update_emitter_visibility,
                    autoplay_looping_sound,
                    sync_looping_sound,
                )
                    .chain()
                    .in_set(RespawnSet::Checkpoints),
            );
    }
}

/// Player input, kill plane and respawning at the current checkpoint.
pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<KillPlane>()
            .init_resource::<CheckpointSettings>()
            .init_resource::<CheckpointRegistry>()
            .init_resource::<ButtonInput<KeyCode>>()
            .add_event::<PlayerDeathEvent>()
            .add_event::<RespawnEffectEvent>()
            .add_systems(
                Update,
                (
                    player_input_system,
                    kill_plane_system,
                    handle_player_death,
                    follow_camera_system,
                )
                    .chain()
                    .in_set(RespawnSet::Player),
            );
    }
}
