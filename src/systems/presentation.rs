use crate::components::{LoopingSound, ParticleEmitter};
use bevy::audio::AudioSinkPlayback;
use bevy::prelude::*;

// Ages running bursts. Runs before new bursts are fired so a burst gets its
// full lifetime starting from the frame after it was played.
pub fn tick_bursts(time: Res<Time>, mut emitters: Query<&mut ParticleEmitter>) {
    for mut emitter in emitters.iter_mut() {
        let burst_done = emitter
            .burst
            .as_mut()
            .is_some_and(|burst| burst.tick(time.delta()).finished());
        if burst_done {
            emitter.burst = None;
        }
    }
}

// Shows each emitter node only while it emits or bursts
pub fn update_emitter_visibility(
    mut emitters: Query<(&ParticleEmitter, &mut Visibility), Changed<ParticleEmitter>>,
) {
    for (emitter, mut visibility) in emitters.iter_mut() {
        let wanted = if emitter.is_visible() {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };
        visibility.set_if_neq(wanted);
    }
}

pub fn autoplay_looping_sound(mut sounds: Query<&mut LoopingSound, Added<LoopingSound>>) {
    for mut sound in sounds.iter_mut() {
        if sound.autoplay {
            sound.play();
        }
    }
}

// Mirrors LoopingSound onto the audio player/sink pair the host plays
pub fn sync_looping_sound(
    mut commands: Commands,
    sounds: Query<(Entity, &LoopingSound, Option<&AudioSink>), Changed<LoopingSound>>,
) {
    for (entity, sound, sink) in sounds.iter() {
        match (sound.playing, sink) {
            (true, Some(sink)) => sink.play(),
            (true, None) => {
                if let Some(clip) = &sound.clip {
                    let settings = if sound.looped {
                        PlaybackSettings::LOOP
                    } else {
                        PlaybackSettings::ONCE
                    };
                    commands
                        .entity(entity)
                        .insert((AudioPlayer(clip.clone()), settings));
                }
            }
            (false, Some(sink)) => {
                sink.stop();
                commands.entity(entity).remove::<(AudioPlayer, AudioSink)>();
            }
            (false, None) => {
                commands.entity(entity).remove::<AudioPlayer>();
            }
        }
    }
}
