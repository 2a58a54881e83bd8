//=========================================================================
// Core Errors
//=========================================================================
//
// Error taxonomy for the scene navigation core.
//
// Every variant is a violated precondition on the embedding application's
// side. Errors are returned at the offending call and never retried, so the
// navigation stack and the surface composition cannot drift apart.
//
//=========================================================================

//=== External Dependencies ===============================================

use thiserror::Error;

//=== SceneError ==========================================================

/// Failures of the navigation stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SceneError {
    /// `active()` or `pop()` was called before any scene was pushed.
    #[error("scene stack is empty")]
    EmptyStack,

    /// An operation needed at least two scenes on the stack.
    #[error("scene stack holds {depth} scene(s), at least 2 are required")]
    InsufficientDepth { depth: usize },
}

//=== ShellError ==========================================================

/// Failures of the application shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShellError {
    /// `Shell::start` was called a second time.
    #[error("shell has already been started")]
    AlreadyStarted,

    /// A navigation step failed.
    #[error(transparent)]
    Scene(#[from] SceneError),
}

//=========================================================================
// Unit Tests
//=========================================================================
