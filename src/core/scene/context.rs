//=========================================================================
// Scene Context
//=========================================================================
//
// Data handed to scenes during their hooks:
// - elapsed: time value of the current refresh tick
// - transitions: navigation requests, applied by the shell afterwards
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

//=== Internal Dependencies ===============================================

use super::{Scene, SceneTransition, TransitionQueue};

//=== SceneContext ========================================================

/// Shared context passed to every scene hook.
#[derive(Debug, Default)]
pub struct SceneContext {
    elapsed: Duration,
    transitions: TransitionQueue,
}

impl SceneContext {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Time since the shell started, as reported by the host on the
    /// latest refresh tick.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub(crate) fn set_elapsed(&mut self, elapsed: Duration) {
        self.elapsed = elapsed;
    }

    //--- Navigation -------------------------------------------------------

    /// Requests that `scene` be pushed and started once the current hook
    /// returns.
    pub fn go_to_next_scene<T>(&mut self, scene: T)
    where
        T: Scene + 'static,
    {
        self.transitions.push(SceneTransition::Next(Box::new(scene)));
    }

    /// Requests a return to the previous scene once the current hook
    /// returns.
    pub fn go_to_previous_scene(&mut self) {
        self.transitions.push(SceneTransition::Previous);
    }

    /// Number of navigation requests waiting to be applied.
    pub fn pending_transitions(&self) -> usize {
        self.transitions.len()
    }

    pub(crate) fn take_transitions(&mut self) -> Vec<SceneTransition> {
        self.transitions.take()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
