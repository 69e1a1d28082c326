//! Shared helpers for the headless checkpoint tests.

#![allow(dead_code)]

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use bevy_rapier3d::prelude::CollisionEvent;
use bevy_rapier3d::rapier::geometry::CollisionEventFlags;
use respawn_points::prelude::*;
use std::time::Duration;

// Fixed frame length; stays under the virtual clock's max delta
pub const STEP: Duration = Duration::from_millis(200);

/// Every activation announced so far, in order.
#[derive(Resource, Default)]
pub struct Activations(pub Vec<CheckpointActivatedEvent>);

fn record_activations(
    mut events: EventReader<CheckpointActivatedEvent>,
    mut activations: ResMut<Activations>,
) {
    activations.0.extend(events.read().copied());
}

/// Create a headless app with the checkpoint and player plugins.
pub fn create_test_app() -> App {
    let mut app = App::new();

    app.add_plugins(MinimalPlugins);
    app.add_plugins(TransformPlugin);
    app.add_plugins((CheckpointPlugin, PlayerPlugin));
    app.insert_resource(TimeUpdateStrategy::ManualDuration(STEP));
    app.init_resource::<Activations>();
    app.add_systems(Update, record_activations.after(RespawnSet::Checkpoints));

    app.finish();
    app.cleanup();
    app
}

/// Sound configuration with every clip present.
pub fn full_sfx() -> CheckpointSfx {
    CheckpointSfx {
        activate: Some(Handle::default()),
        respawn: Some(Handle::default()),
        ambient_loop: Some(Handle::default()),
        volume: 0.5,
    }
}

/// Spawn a checkpoint with the complete set of effect nodes.
pub fn spawn_checkpoint(app: &mut App, position: Vec3, initial: InitialCheckpoint) -> Entity {
    spawn_checkpoint_with(app, position, initial, full_sfx(), true)
}

pub fn spawn_checkpoint_with(
    app: &mut App,
    position: Vec3,
    initial: InitialCheckpoint,
    sfx: CheckpointSfx,
    with_light: bool,
) -> Entity {
    let transform = Transform::from_translation(position);
    let mut entity = app.world_mut().spawn((
        Checkpoint::new(initial),
        sfx,
        transform,
        GlobalTransform::from(transform),
    ));

    entity.with_children(|parent| {
        parent.spawn((Name::new(EMITTER_ACTIVE), ParticleEmitter::default()));
        parent.spawn((Name::new(EMITTER_INACTIVE), ParticleEmitter::default()));
        for name in EMITTER_RESPAWN {
            parent.spawn((Name::new(name), ParticleEmitter::default()));
        }
        if with_light {
            parent.spawn((Name::new(SPOTLIGHT), SpotLight::default()));
        }
    });

    entity.id()
}

/// Report that `other` entered the checkpoint's trigger volume, then run a frame.
pub fn touch(app: &mut App, checkpoint: Entity, other: Entity) {
    app.world_mut().send_event(CollisionEvent::Started(
        other,
        checkpoint,
        CollisionEventFlags::SENSOR,
    ));
    app.update();
}

pub fn fire(app: &mut App, checkpoint: Entity) {
    app.world_mut().send_event(RespawnEffectEvent { checkpoint });
    app.update();
}

pub fn state(app: &App, checkpoint: Entity) -> CheckpointState {
    app.world().get::<Checkpoint>(checkpoint).unwrap().state
}

pub fn effects(app: &App, checkpoint: Entity) -> CheckpointEffects {
    *app.world()
        .get::<CheckpointEffects>(checkpoint)
        .expect("checkpoint was not initialized")
}

pub fn emitter(app: &App, entity: Entity) -> ParticleEmitter {
    app.world().get::<ParticleEmitter>(entity).unwrap().clone()
}

pub fn light(app: &App, checkpoint: Entity) -> f32 {
    let light = effects(app, checkpoint).light;
    app.world().get::<SpotLight>(light).unwrap().intensity
}

pub fn current(app: &App) -> Option<Entity> {
    app.world().resource::<CheckpointRegistry>().current
}

pub fn activations(app: &App) -> Vec<CheckpointActivatedEvent> {
    app.world().resource::<Activations>().0.clone()
}

pub fn settings(app: &App) -> CheckpointSettings {
    app.world().resource::<CheckpointSettings>().clone()
}

pub fn one_shots(app: &mut App, cue: SoundCue) -> usize {
    let world = app.world_mut();
    world
        .query::<&OneShotSound>()
        .iter(world)
        .filter(|sound| sound.cue == cue)
        .count()
}

pub fn live_count(app: &mut App) -> usize {
    let world = app.world_mut();
    world
        .query::<&Checkpoint>()
        .iter(world)
        .filter(|checkpoint| checkpoint.state.is_live())
        .count()
}

/// Ambient presentation of an Active checkpoint.
pub fn assert_shows_active(app: &App, checkpoint: Entity) {
    let fx = effects(app, checkpoint);
    assert!(emitter(app, fx.ambient_active).emission);
    assert!(!emitter(app, fx.ambient_inactive).emission);
    assert!(app.world().get::<LoopingSound>(checkpoint).unwrap().playing);
}

/// Ambient presentation of an Inactive checkpoint.
pub fn assert_shows_inactive(app: &App, checkpoint: Entity) {
    let fx = effects(app, checkpoint);
    assert!(!emitter(app, fx.ambient_active).emission);
    assert!(emitter(app, fx.ambient_inactive).emission);
    assert!(!app.world().get::<LoopingSound>(checkpoint).unwrap().playing);
}
