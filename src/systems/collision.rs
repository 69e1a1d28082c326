use crate::components::Checkpoint;
use crate::events::CheckpointTouchedEvent;
use bevy::prelude::*;
use bevy_rapier3d::prelude::CollisionEvent;

// Turns trigger-volume overlaps into checkpoint touches. Any body counts.
pub fn detect_checkpoint_touches(
    mut collisions: EventReader<CollisionEvent>,
    checkpoints: Query<(), With<Checkpoint>>,
    mut touches: EventWriter<CheckpointTouchedEvent>,
) {
    for event in collisions.read() {
        let CollisionEvent::Started(a, b, _) = *event else {
            continue;
        };

        for (checkpoint, other) in [(a, b), (b, a)] {
            if checkpoints.contains(checkpoint) {
                touches.send(CheckpointTouchedEvent { checkpoint, other });
            }
        }
    }
}
