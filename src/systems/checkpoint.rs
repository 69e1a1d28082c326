use crate::components::*;
use crate::error::CheckpointError;
use crate::events::{CheckpointActivatedEvent, CheckpointTouchedEvent, RespawnEffectEvent};
use crate::resources::{CheckpointRegistry, CheckpointSettings};
use crate::state::{bootstrap, can_fire, resolve_touch, CheckpointState, Touch};
use bevy::audio::Volume;
use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

type CheckpointItem = (
    &'static mut Checkpoint,
    &'static CheckpointEffects,
    &'static mut LoopingSound,
    &'static CheckpointSfx,
    &'static GlobalTransform,
);

/// Writes checkpoint state out to the emitters, light and audio it drives.
#[derive(SystemParam)]
pub struct Feedback<'w, 's> {
    commands: Commands<'w, 's>,
    settings: Res<'w, CheckpointSettings>,
    emitters: Query<'w, 's, &'static mut ParticleEmitter>,
    lights: Query<'w, 's, &'static mut SpotLight>,
}

impl Feedback<'_, '_> {
    pub fn show_active(&mut self, effects: &CheckpointEffects, sound: &mut LoopingSound) {
        self.set_emission(effects.ambient_active, true);
        self.set_emission(effects.ambient_inactive, false);
        self.set_light(effects.light, self.settings.light.active);
        sound.play();
    }

    pub fn show_inactive(
        &mut self,
        checkpoint: Entity,
        effects: &CheckpointEffects,
        sound: &mut LoopingSound,
    ) {
        self.set_emission(effects.ambient_active, false);
        self.set_emission(effects.ambient_inactive, true);
        self.set_light(effects.light, self.settings.light.active);
        sound.stop();
        self.commands
            .entity(checkpoint)
            .remove::<PendingLightDecay>();
    }

    pub fn burst(&mut self, checkpoint: Entity, effects: &CheckpointEffects) {
        for burst in effects.bursts {
            if let Ok(mut emitter) = self.emitters.get_mut(burst) {
                emitter.play();
            }
        }
        self.set_light(effects.light, self.settings.light.burst);
        // Replacing an existing decay restarts the delay
        self.commands.entity(checkpoint).insert(PendingLightDecay {
            timer: Timer::new(self.settings.burst_decay_delay, TimerMode::Once),
            intensity: self.settings.light.decayed,
        });
    }

    pub fn play_at(
        &mut self,
        clip: &Handle<AudioSource>,
        position: Vec3,
        volume: f32,
        cue: SoundCue,
        source: Entity,
    ) {
        self.commands.spawn((
            OneShotSound { cue, source },
            AudioPlayer(clip.clone()),
            PlaybackSettings::DESPAWN
                .with_volume(Volume::new(volume))
                .with_spatial(true),
            Transform::from_translation(position),
        ));
    }

    fn set_emission(&mut self, emitter: Entity, on: bool) {
        if let Ok(mut emitter) = self.emitters.get_mut(emitter) {
            if on {
                emitter.enable();
            } else {
                emitter.disable();
            }
        }
    }

    fn set_light(&mut self, light: Entity, intensity: f32) {
        if let Ok(mut light) = self.lights.get_mut(light) {
            light.intensity = intensity;
        }
    }

    fn has_emitter(&self, entity: Entity) -> bool {
        self.emitters.contains(entity)
    }

    fn has_light(&self, entity: Entity) -> bool {
        self.lights.contains(entity)
    }
}

fn find_named(
    checkpoint: Entity,
    name: &'static str,
    children: &Query<&Children>,
    names: &Query<&Name>,
) -> Result<Entity, CheckpointError> {
    children
        .iter_descendants(checkpoint)
        .find(|node| names.get(*node).is_ok_and(|n| n.as_str() == name))
        .ok_or(CheckpointError::MissingEffect { checkpoint, name })
}

fn resolve_effects(
    checkpoint: Entity,
    children: &Query<&Children>,
    names: &Query<&Name>,
    feedback: &Feedback,
) -> Result<CheckpointEffects, CheckpointError> {
    let emitter = |name: &'static str| {
        let node = find_named(checkpoint, name, children, names)?;
        if feedback.has_emitter(node) {
            Ok(node)
        } else {
            Err(CheckpointError::MissingComponent {
                checkpoint,
                name,
                component: "ParticleEmitter",
            })
        }
    };

    let light = find_named(checkpoint, SPOTLIGHT, children, names)?;
    if !feedback.has_light(light) {
        return Err(CheckpointError::MissingComponent {
            checkpoint,
            name: SPOTLIGHT,
            component: "SpotLight",
        });
    }

    Ok(CheckpointEffects {
        ambient_active: emitter(EMITTER_ACTIVE)?,
        ambient_inactive: emitter(EMITTER_INACTIVE)?,
        bursts: [
            emitter(EMITTER_RESPAWN[0])?,
            emitter(EMITTER_RESPAWN[1])?,
            emitter(EMITTER_RESPAWN[2])?,
        ],
        light,
    })
}

// Brings newly spawned checkpoints up: resolves their effect nodes, claims the
// registry for the level start and shows the starting state.
pub fn initialize_checkpoints(
    mut registry: ResMut<CheckpointRegistry>,
    mut pending: Query<
        (Entity, &mut Checkpoint, &mut LoopingSound, &CheckpointSfx),
        (Without<CheckpointEffects>, Without<CheckpointFault>),
    >,
    children: Query<&Children>,
    names: Query<&Name>,
    mut feedback: Feedback,
    mut exit: EventWriter<AppExit>,
) {
    for (entity, mut checkpoint, mut sound, sfx) in pending.iter_mut() {
        let effects = match resolve_effects(entity, &children, &names, &feedback) {
            Ok(effects) => effects,
            Err(err) => {
                error!("Checkpoint setup failed: {err}");
                feedback.commands.entity(entity).insert(CheckpointFault(err));
                exit.send(AppExit::error());
                continue;
            }
        };

        if let Some(clip) = &sfx.ambient_loop {
            sound.clip = Some(clip.clone());
            sound.looped = true;
            sound.autoplay = false;
        }

        let boot = bootstrap(registry.current, checkpoint.initial.resolve(entity), entity);
        registry.current = Some(boot.current);
        checkpoint.state = boot.state;

        match boot.state {
            CheckpointState::Inactive => feedback.show_inactive(entity, &effects, &mut sound),
            _ => feedback.show_active(&effects, &mut sound),
        }

        feedback.commands.entity(entity).insert(effects);
        debug!("Checkpoint {entity} initialized as {:?}", boot.state);
    }
}

pub fn apply_checkpoint_touches(
    mut touches: EventReader<CheckpointTouchedEvent>,
    mut activated: EventWriter<CheckpointActivatedEvent>,
    mut registry: ResMut<CheckpointRegistry>,
    mut checkpoints: Query<CheckpointItem, Without<CheckpointFault>>,
    mut feedback: Feedback,
) {
    for touch in touches.read() {
        if !checkpoints.contains(touch.checkpoint) {
            // Not initialized yet
            continue;
        }

        let previous = match resolve_touch(registry.current, touch.checkpoint) {
            Touch::AlreadyCurrent => {
                debug!("Checkpoint {} is already current", touch.checkpoint);
                continue;
            }
            Touch::Activate { previous } => previous,
        };

        // Turn the old checkpoint off
        match previous {
            Some(entity) => match checkpoints.get_mut(entity) {
                Ok((mut old, effects, mut sound, _, _)) => {
                    old.state = CheckpointState::Inactive;
                    feedback.show_inactive(entity, effects, &mut sound);
                }
                Err(_) => warn!("Current checkpoint {entity} is gone, nothing to deactivate"),
            },
            None => warn!("No current checkpoint when {} was touched", touch.checkpoint),
        }

        let Ok((mut checkpoint, effects, mut sound, sfx, transform)) =
            checkpoints.get_mut(touch.checkpoint)
        else {
            continue;
        };

        if let Some(clip) = &sfx.activate {
            feedback.play_at(
                clip,
                transform.translation(),
                sfx.volume,
                SoundCue::Activate,
                touch.checkpoint,
            );
        }

        registry.current = Some(touch.checkpoint);
        checkpoint.state = CheckpointState::Active;
        feedback.show_active(effects, &mut sound);

        info!("Checkpoint {} activated", touch.checkpoint);
        activated.send(CheckpointActivatedEvent {
            checkpoint: touch.checkpoint,
            previous,
        });
    }
}

pub fn fire_respawn_effects(
    mut requests: EventReader<RespawnEffectEvent>,
    mut checkpoints: Query<CheckpointItem, Without<CheckpointFault>>,
    mut feedback: Feedback,
) {
    for request in requests.read() {
        let Ok((mut checkpoint, effects, _, sfx, transform)) =
            checkpoints.get_mut(request.checkpoint)
        else {
            warn!("Respawn effect requested on unknown checkpoint {}", request.checkpoint);
            continue;
        };

        if !can_fire(checkpoint.state) {
            warn!(
                "Ignoring respawn effect on inactive checkpoint {}",
                request.checkpoint
            );
            continue;
        }

        feedback.burst(request.checkpoint, effects);
        if let Some(clip) = &sfx.respawn {
            feedback.play_at(
                clip,
                transform.translation(),
                sfx.volume,
                SoundCue::Respawn,
                request.checkpoint,
            );
        }
        checkpoint.state = CheckpointState::Respawning;
        info!("Respawn effect fired at checkpoint {}", request.checkpoint);
    }
}

// Only the light changes when the decay fires; the checkpoint stays
// Respawning until another checkpoint takes over.
pub fn tick_light_decay(
    mut commands: Commands,
    time: Res<Time>,
    mut pending: Query<(Entity, &mut PendingLightDecay, &CheckpointEffects)>,
    mut lights: Query<&mut SpotLight>,
) {
    for (entity, mut decay, effects) in pending.iter_mut() {
        decay.timer.tick(time.delta());
        if !decay.timer.finished() {
            continue;
        }

        if let Ok(mut light) = lights.get_mut(effects.light) {
            light.intensity = decay.intensity;
        }
        commands.entity(entity).remove::<PendingLightDecay>();
    }
}
