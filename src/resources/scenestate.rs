//! Scene automaton state resource.
//!
//! The driver in [`crate::scene`] sequences the scene through three states:
//! issue load requests, poll for readiness, then update and redraw forever.
//! Transitions happen inside the tick action itself, so this resource only
//! holds the authoritative current value.

use bevy_ecs::prelude::Resource;

/// Discrete states of the scene automaton.
///
/// There is no terminal state; once [`Running`](SceneStates::Running) is
/// reached the scene self-loops until the process ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SceneStates {
    /// Issue asynchronous load requests for every declared image.
    #[default]
    Loading,
    /// Poll until every declared image reports decode complete.
    Waiting,
    /// Steady state: advance every entity, then clear and redraw.
    Running,
}

/// Authoritative current scene state.
#[derive(Resource, Debug, Clone, PartialEq, Eq, Hash)]
pub struct SceneState {
    current: SceneStates,
}

impl Default for SceneState {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneState {
    /// Create a new state initialized to [`SceneStates::Loading`].
    pub fn new() -> Self {
        SceneState {
            current: SceneStates::Loading,
        }
    }

    /// Read-only access to the current state.
    pub fn get(&self) -> SceneStates {
        self.current
    }

    /// Update the current state immediately.
    pub fn set(&mut self, state: SceneStates) {
        self.current = state;
    }
}
