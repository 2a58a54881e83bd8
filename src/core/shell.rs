//=========================================================================
// Application Shell
//=========================================================================
//
// Owns the window host, the navigation stack and the surface composition,
// and orchestrates every scene transition.
//
// Architecture:
// ```text
//     Shell
//       ├─ host: Box<dyn WindowHost>   (window created by the platform)
//       ├─ stack: SceneStack           (navigation history)
//       ├─ composition: Composition    (surfaces, mirrors the stack)
//       └─ context: SceneContext       (elapsed time + transition queue)
// ```
//
// Invariants:
// - stack and composition always have the same depth
// - a scene's surface is sized to the window before `start` runs
// - only the active scene is driven by refresh ticks
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

use log::{debug, info, trace, warn};

//=== Internal Dependencies ===============================================

use crate::core::error::{SceneError, ShellError};
use crate::core::frame_driver::FrameDriver;
use crate::core::placeholder::PlaceholderScene;
use crate::core::platform_bridge::WindowHost;
use crate::core::render::{Composition, SurfaceId};
use crate::core::scene::{Scene, SceneContext, SceneStack, SceneTransition};
use crate::core::settings::WindowSettings;

//=== Shell ===============================================================

/// The single application context.
///
/// Built once per window with [`Shell::initialize`]; every navigation
/// operation goes through it. All calls must come from the thread that runs
/// the window's event loop.
pub struct Shell {
    settings: WindowSettings,
    host: Box<dyn WindowHost>,
    stack: SceneStack,
    composition: Composition,
    context: SceneContext,
    next_surface_id: u64,
    running: bool,
}

impl Shell {
    //--- Construction -----------------------------------------------------

    /// Creates the shell for a window the host has already created from
    /// `settings.window_request()`.
    ///
    /// The composition starts empty.
    pub fn initialize(settings: WindowSettings, host: Box<dyn WindowHost>) -> Self {
        info!(
            "Initializing shell for \"{}\" ({}x{}, decorated: {})",
            settings.title(),
            settings.width(),
            settings.height(),
            settings.has_decorations()
        );

        Self {
            settings,
            host,
            stack: SceneStack::new(),
            composition: Composition::new(),
            context: SceneContext::new(),
            next_surface_id: 0,
            running: false,
        }
    }

    //--- Lifecycle --------------------------------------------------------

    /// Enters the running state.
    ///
    /// Pushes `first_scene`, or the built-in [`PlaceholderScene`] when
    /// `None`, then makes the window visible.
    ///
    /// The shell counts as started from the first call on, even when that
    /// call fails; the window then stays hidden.
    ///
    /// # Errors
    ///
    /// [`ShellError::AlreadyStarted`] on a second call, or any error raised
    /// while applying transitions queued by the first scene.
    pub fn start(&mut self, first_scene: Option<Box<dyn Scene>>) -> Result<(), ShellError> {
        if self.running {
            return Err(ShellError::AlreadyStarted);
        }

        let scene: Box<dyn Scene> = match first_scene {
            Some(scene) => scene,
            None => {
                info!("No first scene supplied, using placeholder");
                Box::new(PlaceholderScene::new(&self.settings))
            }
        };

        self.running = true;
        self.go_to_next_scene(scene)?;
        self.host.show();

        info!("Shell started");
        Ok(())
    }

    /// Runs one refresh tick.
    ///
    /// Calls the active scene's frame hook if its frame driver is running,
    /// presents its surface, applies queued transitions and asks the host
    /// for the next tick.
    ///
    /// # Errors
    ///
    /// [`SceneError::EmptyStack`] before [`Shell::start`], or any error
    /// raised while applying queued transitions.
    pub fn tick(&mut self, elapsed: Duration) -> Result<(), SceneError> {
        self.context.set_elapsed(elapsed);

        let scene = self.stack.active_mut()?;
        if scene.frame_driver().is_some_and(FrameDriver::is_running) {
            trace!(target: "scene", "Frame at {:?} for {}", elapsed, scene.name());
            scene.on_frame(&mut self.context);

            let surface = scene.surface();
            if let Some(id) = surface.id() {
                self.host.present(id, surface);
            }
        }

        self.apply_transitions()?;
        self.host.request_redraw();
        Ok(())
    }

    //--- Navigation -------------------------------------------------------

    /// Sizes `scene` to the window, pushes it, puts its surface in front
    /// and starts it.
    ///
    /// # Errors
    ///
    /// Only errors raised while applying transitions the scene queued.
    pub fn go_to_next_scene(&mut self, scene: Box<dyn Scene>) -> Result<(), SceneError> {
        self.enter(scene)?;
        self.apply_transitions()
    }

    /// Discards the active scene, removes its surface and restarts the
    /// scene below it.
    ///
    /// # Errors
    ///
    /// [`SceneError::InsufficientDepth`] when fewer than two scenes are on
    /// the stack; nothing is changed in that case.
    pub fn go_to_previous_scene(&mut self) -> Result<(), SceneError> {
        self.leave()?;
        self.apply_transitions()
    }

    //--- Accessors --------------------------------------------------------

    pub fn settings(&self) -> &WindowSettings {
        &self.settings
    }

    /// Navigation history.
    pub fn stack(&self) -> &SceneStack {
        &self.stack
    }

    /// Surfaces attached to the window, back to front.
    pub fn composition(&self) -> &Composition {
        &self.composition
    }

    /// `true` once [`Shell::start`] has been called.
    pub fn is_running(&self) -> bool {
        self.running
    }

    //--- Internal Helpers -------------------------------------------------

    fn enter(&mut self, mut scene: Box<dyn Scene>) -> Result<(), SceneError> {
        let id = SurfaceId(self.next_surface_id);
        self.next_surface_id += 1;

        scene
            .surface_mut()
            .bind(id, self.settings.width(), self.settings.height());

        debug!(target: "scene", "Entering scene {} (surface {})", scene.name(), id.get());
        self.stack.push(scene);
        self.composition.append(id);
        self.host.attach_surface(id);

        self.stack.active_mut()?.start(&mut self.context);
        Ok(())
    }

    fn leave(&mut self) -> Result<(), SceneError> {
        self.stack.previous()?;

        self.stack.pop()?;
        if let Some(id) = self.composition.remove_topmost() {
            debug!(target: "scene", "Detached surface {}", id.get());
        }
        self.host.detach_topmost_surface();

        let scene = self.stack.active_mut()?;
        debug!(target: "scene", "Restarting scene {}", scene.name());
        scene.restart(&mut self.context);
        Ok(())
    }

    /// Applies queued transitions in FIFO order until the queue stays
    /// empty. Transitions queued while applying go to the back.
    ///
    /// The first failure aborts; whatever is still queued is discarded.
    fn apply_transitions(&mut self) -> Result<(), SceneError> {
        loop {
            let transitions = self.context.take_transitions();
            if transitions.is_empty() {
                return Ok(());
            }

            let mut pending = transitions.into_iter();

            while let Some(transition) = pending.next() {
                debug!(target: "scene", "Applying transition {:?}", transition);

                let result = match transition {
                    SceneTransition::Next(scene) => self.enter(scene),
                    SceneTransition::Previous => self.leave(),
                };

                if let Err(err) = result {
                    let discarded = pending.len() + self.context.take_transitions().len();
                    if discarded > 0 {
                        warn!(
                            target: "scene",
                            "Transition failed ({}), discarding {} queued transition(s)",
                            err,
                            discarded
                        );
                    }
                    return Err(err);
                }
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
