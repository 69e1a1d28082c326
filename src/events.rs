use bevy::prelude::*;

// Something entered a checkpoint's trigger volume
#[derive(Event, Debug, Clone, Copy)]
pub struct CheckpointTouchedEvent {
    pub checkpoint: Entity,
    pub other: Entity,
}

// A checkpoint became the current respawn point
#[derive(Event, Debug, Clone, Copy)]
pub struct CheckpointActivatedEvent {
    pub checkpoint: Entity,
    pub previous: Option<Entity>,
}

// Request the respawn burst on a checkpoint
#[derive(Event, Debug, Clone, Copy)]
pub struct RespawnEffectEvent {
    pub checkpoint: Entity,
}

// Event that gets triggered when a player should be killed and respawned
#[derive(Event, Debug, Clone, Copy)]
pub struct PlayerDeathEvent {
    pub player_entity: Entity,
    pub reason: PlayerDeathReason,
}

// Enum to track the reason for player death
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerDeathReason {
    FellOutOfWorld, // Player dropped below the kill plane
    Scripted,       // Gameplay code killed the player
}
