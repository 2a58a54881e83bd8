//=========================================================================
// Transition Queue
//=========================================================================
//
// Navigation requests issued by scenes from inside their hooks.
//
// A scene cannot navigate directly while the shell is calling into it, so
// it queues a transition here. The shell applies the queue in FIFO order as
// soon as the hook returns.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt;

//=== Internal Dependencies ===============================================

use super::Scene;

//=== Scene Transition ====================================================

/// A deferred navigation step.
pub enum SceneTransition {
    /// Pushes and starts a new scene.
    Next(Box<dyn Scene>),

    /// Pops the active scene and restarts the one below it.
    Previous,
}

impl fmt::Debug for SceneTransition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Next(_) => f.write_str("Next(..)"),
            Self::Previous => f.write_str("Previous"),
        }
    }
}

//=== Transition Queue ====================================================

#[derive(Debug, Default)]
pub struct TransitionQueue {
    queue: Vec<SceneTransition>,
}

impl TransitionQueue {
    /// Creates a new empty transition queue.
    pub fn new() -> Self {
        Self { queue: Vec::new() }
    }

    /// Queues a transition to be applied when the current hook returns.
    pub fn push(&mut self, transition: SceneTransition) {
        self.queue.push(transition);
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Takes all transitions from the queue, leaving it empty.
    pub fn take(&mut self) -> Vec<SceneTransition> {
        std::mem::take(&mut self.queue)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
