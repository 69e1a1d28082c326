// error.rs
use bevy::prelude::*;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CheckpointError {
    #[error("checkpoint {checkpoint} has no child named `{name}`")]
    MissingEffect {
        checkpoint: Entity,
        name: &'static str,
    },

    #[error("node `{name}` under checkpoint {checkpoint} has no {component} component")]
    MissingComponent {
        checkpoint: Entity,
        name: &'static str,
        component: &'static str,
    },
}
