//=========================================================================
// Platform Subsystem
//
// Bridges winit (OS window and event loop) with the scene shell.
//
// Architecture:
// ```text
//  Main Thread:
//  ┌───────────────────────────────────────────────┐
//  │  Winit Event Loop                             │
//  │   ├─ resumed()                                │
//  │   │    └─ create window → WinitHost           │
//  │   │         └─ Shell::initialize + start      │
//  │   ├─ RedrawRequested                          │
//  │   │    └─ Shell::tick(elapsed)                │
//  │   │         ├─ Scene::on_frame                │
//  │   │         ├─ WindowHost::present            │
//  │   │         └─ WindowHost::request_redraw     │
//  │   └─ CloseRequested → exit                    │
//  └───────────────────────────────────────────────┘
// ```
//
// Key Design Decisions:
// - **RedrawRequested = frame tick**: the display refresh drives the
//   active scene; the core keeps no clock of its own
// - **Single thread**: window, shell and scenes all live on the event loop
//   thread, so no channel or lock is involved
// - **Fail fast**: a failed transition is logged, stored and returned from
//   `run()` after the loop exits
// - **Main thread requirement**: Winit mandates main thread on macOS/iOS,
//   so this runs on the thread that called `Game::run()`
//
//=========================================================================

//=== Submodules ==========================================================

mod winit_host;

//=== External Crates =====================================================

use std::time::Instant;

use log::*;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{WindowAttributes, WindowId},
};

//=== Internal Imports ====================================================

use crate::core::{PlatformError, Scene, Shell, ShellError, WindowSettings};
use winit_host::WinitHost;

//=== Platform ============================================================

/// Window owner and frame ticker.
///
/// # Lifecycle
///
/// 1. **Construction**: `Platform::new(settings, first_scene)`
/// 2. **Execution**: `platform.run()` - starts the event loop
/// 3. **Resume**: window created, shell initialized and started
/// 4. **Redraw**: shell ticked once per refresh
/// 5. **Shutdown**: window closed or failure → loop exits → `run()` returns
///
/// # Fields
///
/// - `first_scene`: taken when the shell starts
/// - `shell`: created lazily in `resumed()` (mobile compatibility)
/// - `clock`: start time used for the elapsed value passed to scenes
/// - `failure`: first fatal error, reported by `run()`
pub(crate) struct Platform {
    settings: WindowSettings,
    first_scene: Option<Box<dyn Scene>>,
    shell: Option<Shell>,
    clock: Option<Instant>,
    failure: Option<PlatformError>,
}

impl Platform {
    //--- Construction -----------------------------------------------------

    /// Creates a new platform instance.
    ///
    /// Does not create the window yet - that happens lazily in `resumed()`.
    pub fn new(settings: WindowSettings, first_scene: Option<Box<dyn Scene>>) -> Self {
        info!(target: "platform", "Platform subsystem initialized");
        Self {
            settings,
            first_scene,
            shell: None,
            clock: None,
            failure: None,
        }
    }

    //--- Execution --------------------------------------------------------

    /// Runs the event loop until the window closes or a failure occurs.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] if the event loop cannot be created or
    /// fails, if the window cannot be created, or if the shell reports a
    /// navigation failure.
    pub fn run(mut self) -> Result<(), PlatformError> {
        debug!(target: "platform", "Starting Winit event loop");

        let event_loop = EventLoop::new()
            .map_err(|e| PlatformError::EventLoopCreation(e.to_string()))?;

        event_loop
            .run_app(&mut self)
            .map_err(|e| PlatformError::EventLoopExecution(e.to_string()))?;

        match self.failure.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    //--- Internal Helpers -------------------------------------------------

    fn window_attributes(&self) -> WindowAttributes {
        let request = self.settings.window_request();

        WindowAttributes::default()
            .with_title(request.title)
            .with_inner_size(LogicalSize::new(request.width, request.height))
            .with_resizable(request.resizable)
            .with_decorations(request.decorated)
            .with_visible(false)
    }

    /// Records the first fatal error and stops the event loop.
    fn fail(&mut self, event_loop: &ActiveEventLoop, err: PlatformError) {
        error!(target: "platform", "{}", err);
        if self.failure.is_none() {
            self.failure = Some(err);
        }
        event_loop.exit();
    }

    //--- Test Accessors ---------------------------------------------------

    #[cfg(test)]
    pub(crate) fn shell(&self) -> Option<&Shell> {
        self.shell.as_ref()
    }
}

//=== Winit Integration ===================================================

impl ApplicationHandler for Platform {
    /// Called when app becomes active (startup or mobile resume).
    ///
    /// Creates the window and starts the shell if that has not happened
    /// yet. On mobile, this may be called multiple times.
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.shell.is_some() {
            debug!(target: "platform", "Window already exists (mobile resume?)");
            return;
        }

        let window = match event_loop.create_window(self.window_attributes()) {
            Ok(window) => window,
            Err(e) => {
                self.fail(event_loop, PlatformError::WindowCreation(e.to_string()));
                return;
            }
        };

        info!(
            target: "platform",
            "Window created: {}x{} @ {}x DPI",
            window.inner_size().width,
            window.inner_size().height,
            window.scale_factor()
        );

        let host = WinitHost::new(window);
        let mut shell = Shell::initialize(self.settings.clone(), Box::new(host));

        if let Err(e) = shell.start(self.first_scene.take()) {
            self.fail(event_loop, e.into());
            return;
        }

        self.clock = Some(Instant::now());
        self.shell = Some(shell);
    }

    /// Handles per-window events.
    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested");
                event_loop.exit();
            }

            WindowEvent::RedrawRequested => {
                let elapsed = self.clock.map(|clock| clock.elapsed()).unwrap_or_default();

                let result = match self.shell.as_mut() {
                    Some(shell) => shell.tick(elapsed),
                    None => return,
                };

                if let Err(e) = result {
                    self.fail(event_loop, ShellError::from(e).into());
                }
            }

            _ => {
                // Ignore: input, focus, etc. (not handled by the framework)
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
