// state.rs
use bevy::prelude::*;

/// Visual and functional mode of a single checkpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckpointState {
    /// Not reached yet, or superseded by another checkpoint.
    #[default]
    Inactive,
    /// The player will respawn here.
    Active,
    /// A player is respawning here right now.
    Respawning,
}

impl CheckpointState {
    /// Active and Respawning both mean "this is where players come back".
    pub fn is_live(self) -> bool {
        matches!(self, CheckpointState::Active | CheckpointState::Respawning)
    }
}

/// What a player overlap on a checkpoint should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Touch {
    /// The touched checkpoint is already current.
    AlreadyCurrent,
    /// Switch over to the touched checkpoint, deactivating `previous` first.
    Activate { previous: Option<Entity> },
}

pub fn resolve_touch(current: Option<Entity>, touched: Entity) -> Touch {
    if current == Some(touched) {
        Touch::AlreadyCurrent
    } else {
        Touch::Activate { previous: current }
    }
}

/// Result of bringing one checkpoint up during level load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bootstrap {
    pub current: Entity,
    pub state: CheckpointState,
}

/// A checkpoint claims the registry for its initial checkpoint only while
/// nothing is current yet, so late spawns never override player progress.
pub fn bootstrap(current: Option<Entity>, initial: Entity, this: Entity) -> Bootstrap {
    let current = current.unwrap_or(initial);
    let state = if current == this {
        CheckpointState::Active
    } else {
        CheckpointState::Inactive
    };
    Bootstrap { current, state }
}

/// Whether a respawn burst may start from `state`.
pub fn can_fire(state: CheckpointState) -> bool {
    state.is_live()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entities() -> (Entity, Entity) {
        (Entity::from_raw(1), Entity::from_raw(2))
    }

    #[test]
    fn touching_the_current_checkpoint_does_nothing() {
        let (a, _) = entities();
        assert_eq!(resolve_touch(Some(a), a), Touch::AlreadyCurrent);
    }

    #[test]
    fn touching_another_checkpoint_hands_over() {
        let (a, b) = entities();
        assert_eq!(
            resolve_touch(Some(a), b),
            Touch::Activate { previous: Some(a) }
        );
    }

    #[test]
    fn touching_with_no_current_has_nothing_to_deactivate() {
        let (_, b) = entities();
        assert_eq!(resolve_touch(None, b), Touch::Activate { previous: None });
    }

    #[test]
    fn initial_checkpoint_boots_active() {
        let (a, _) = entities();
        let boot = bootstrap(None, a, a);
        assert_eq!(boot.current, a);
        assert_eq!(boot.state, CheckpointState::Active);
    }

    #[test]
    fn other_checkpoints_boot_inactive() {
        let (a, b) = entities();
        let boot = bootstrap(None, a, b);
        assert_eq!(boot.current, a);
        assert_eq!(boot.state, CheckpointState::Inactive);
    }

    #[test]
    fn late_spawn_keeps_existing_progress() {
        let (a, b) = entities();
        // b is already current, a spawns later claiming to be the start
        let boot = bootstrap(Some(b), a, a);
        assert_eq!(boot.current, b);
        assert_eq!(boot.state, CheckpointState::Inactive);
    }

    #[test]
    fn only_live_checkpoints_fire() {
        assert!(!can_fire(CheckpointState::Inactive));
        assert!(can_fire(CheckpointState::Active));
        assert!(can_fire(CheckpointState::Respawning));
    }
}
