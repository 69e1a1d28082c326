//! Checkpoints for a 3D platformer: a single current respawn point shared by
//! every checkpoint in the level, with emitter, light and audio feedback.

pub mod components;
pub mod error;
pub mod events;
pub mod plugin;
pub mod resources;
pub mod state;
pub mod systems;

pub mod prelude {
    pub use crate::components::*;
    pub use crate::error::CheckpointError;
    pub use crate::events::*;
    pub use crate::plugin::{CheckpointPlugin, PlayerPlugin, RespawnSet};
    pub use crate::resources::*;
    pub use crate::state::CheckpointState;
}
