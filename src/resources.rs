// resources.rs
use bevy::prelude::*;
use std::time::Duration;

/// The level's single current checkpoint. Checkpoints never own each other,
/// they only look each other up through this.
#[derive(Resource, Debug, Default)]
pub struct CheckpointRegistry {
    pub current: Option<Entity>,
}

/// Spotlight intensities in lumens.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightLevels {
    // Used for both Active and Inactive
    pub active: f32,
    pub burst: f32,
    pub decayed: f32,
}

impl Default for LightLevels {
    fn default() -> Self {
        Self {
            active: 150_000.0,
            burst: 350_000.0,
            decayed: 200_000.0,
        }
    }
}

#[derive(Resource, Debug, Clone)]
pub struct CheckpointSettings {
    pub light: LightLevels,
    pub burst_decay_delay: Duration,
    pub respawn_offset: Vec3,
}

impl Default for CheckpointSettings {
    fn default() -> Self {
        Self {
            light: LightLevels::default(),
            burst_decay_delay: Duration::from_secs(2),
            respawn_offset: Vec3::Y,
        }
    }
}

#[derive(Resource, Debug, Clone, Copy)]
pub struct KillPlane {
    pub height: f32,
}

impl Default for KillPlane {
    fn default() -> Self {
        Self { height: -20.0 }
    }
}
