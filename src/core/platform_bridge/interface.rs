//=========================================================================
// Platform Bridge Interface
//=========================================================================
//
// Requests the shell issues to the windowing host, and the errors a host
// can report.
//
//=========================================================================

//=== External Dependencies ===============================================

use thiserror::Error;

//=== Internal Dependencies ===============================================

use crate::core::render::{Surface, SurfaceId};

//=== WindowHost ==========================================================

/// Window owned by the host windowing system.
///
/// The host creates the window from a [`crate::core::WindowRequest`]
/// before the shell exists and hands it to
/// [`crate::core::Shell::initialize`]. Afterwards the shell only talks to
/// it through these requests, always from the thread that runs the event
/// loop.
pub trait WindowHost {
    /// Attaches a surface in front of every surface attached so far.
    fn attach_surface(&mut self, id: SurfaceId);

    /// Detaches the frontmost surface.
    fn detach_topmost_surface(&mut self);

    /// Makes the window visible.
    fn show(&mut self);

    /// Presents the frontmost surface after a driven frame.
    fn present(&mut self, id: SurfaceId, surface: &Surface);

    /// Asks for another refresh tick.
    fn request_redraw(&mut self);
}

//=== PlatformError =======================================================

/// Platform initialization and runtime errors.
///
/// These are fatal: without an event loop or a window the game cannot run.
#[derive(Debug, Error)]
pub enum PlatformError {
    /// Event loop creation failed (OS-level issue).
    #[error("Event loop creation failed: {0}")]
    EventLoopCreation(String),

    /// Event loop execution error.
    #[error("Event loop error: {0}")]
    EventLoopExecution(String),

    /// The OS refused to create the window.
    #[error("Window creation failed: {0}")]
    WindowCreation(String),

    /// The shell reported a navigation failure.
    #[error("Shell failure: {0}")]
    Shell(#[from] crate::core::ShellError),
}

//=========================================================================
// Unit Tests
//=========================================================================
