// components.rs
use crate::error::CheckpointError;
use crate::state::CheckpointState;
use bevy::prelude::*;
use std::time::Duration;

// Names of the effect nodes every checkpoint scene carries below its root
pub const EMITTER_ACTIVE: &str = "ParticlesActive";
pub const EMITTER_INACTIVE: &str = "ParticlesInactive";
pub const EMITTER_RESPAWN: [&str; 3] = [
    "ParticlesRespawn1",
    "ParticlesRespawn2",
    "ParticlesRespawn3",
];
pub const SPOTLIGHT: &str = "Spotlight";

/// Which checkpoint a level starts from, as seen by one checkpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitialCheckpoint {
    /// This checkpoint is the level start.
    This,
    Other(Entity),
}

impl InitialCheckpoint {
    pub fn resolve(self, this: Entity) -> Entity {
        match self {
            InitialCheckpoint::This => this,
            InitialCheckpoint::Other(entity) => entity,
        }
    }
}

#[derive(Component, Debug)]
#[require(Transform, Visibility, LoopingSound, CheckpointSfx)]
pub struct Checkpoint {
    pub state: CheckpointState,
    pub initial: InitialCheckpoint,
}

impl Checkpoint {
    pub fn new(initial: InitialCheckpoint) -> Self {
        Self {
            state: CheckpointState::Inactive,
            initial,
        }
    }

    pub fn start() -> Self {
        Self::new(InitialCheckpoint::This)
    }

    pub fn following(initial: Entity) -> Self {
        Self::new(InitialCheckpoint::Other(initial))
    }
}

/// Effect nodes resolved from the checkpoint's subtree. Present only on
/// checkpoints that finished initialization.
#[derive(Component, Debug, Clone, Copy)]
pub struct CheckpointEffects {
    pub ambient_active: Entity,
    pub ambient_inactive: Entity,
    pub bursts: [Entity; 3],
    pub light: Entity,
}

/// A checkpoint whose scene is broken. It never reacts again.
#[derive(Component, Debug)]
pub struct CheckpointFault(pub CheckpointError);

#[derive(Component, Debug, Clone)]
pub struct CheckpointSfx {
    pub activate: Option<Handle<AudioSource>>,
    pub respawn: Option<Handle<AudioSource>>,
    pub ambient_loop: Option<Handle<AudioSource>>,
    // Volume for one-shot sounds
    pub volume: f32,
}

impl Default for CheckpointSfx {
    fn default() -> Self {
        Self {
            activate: None,
            respawn: None,
            ambient_loop: None,
            volume: 1.0,
        }
    }
}

// How long a burst stays visible after play()
pub const BURST_LIFETIME: Duration = Duration::from_millis(1200);

/// Host-side particle system. Ambient emitters use the emission flag, burst
/// emitters are fired with `play`.
#[derive(Component, Debug, Default, Clone)]
#[require(Visibility)]
pub struct ParticleEmitter {
    pub emission: bool,
    pub plays: u32,
    pub burst: Option<Timer>,
}

impl ParticleEmitter {
    pub fn enable(&mut self) {
        self.emission = true;
    }

    pub fn disable(&mut self) {
        self.emission = false;
    }

    pub fn play(&mut self) {
        self.plays += 1;
        self.burst = Some(Timer::new(BURST_LIFETIME, TimerMode::Once));
    }

    pub fn is_visible(&self) -> bool {
        self.emission || self.burst.is_some()
    }
}

/// Audio emitter living on the checkpoint itself.
#[derive(Component, Debug, Default, Clone)]
pub struct LoopingSound {
    pub clip: Option<Handle<AudioSource>>,
    pub looped: bool,
    // Start playing as soon as the sound is added
    pub autoplay: bool,
    pub playing: bool,
}

impl LoopingSound {
    pub fn play(&mut self) {
        self.playing = true;
    }

    pub fn stop(&mut self) {
        self.playing = false;
    }
}

/// Light decay scheduled after a respawn burst. Removing it cancels the decay.
#[derive(Component, Debug)]
pub struct PendingLightDecay {
    pub timer: Timer,
    pub intensity: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    Activate,
    Respawn,
}

/// Marks a fire-and-forget clip spawned at a world position.
#[derive(Component, Debug, Clone, Copy)]
pub struct OneShotSound {
    pub cue: SoundCue,
    pub source: Entity,
}

#[derive(Component)]
pub struct Player {
    pub speed: f32,
    pub jump_speed: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            speed: 6.0,
            jump_speed: 7.0,
        }
    }
}
