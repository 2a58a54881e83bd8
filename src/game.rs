//=========================================================================
// JGame Entry Point
//
// Configures the window and the first scene, then hands both to the
// platform event loop.
//
// Architecture:
// ```text
//     GameBuilder  ──build()──>  Game  ──run()──>  [Event Loop]
//         │                        │
//         ├─ with_settings()       └─ creates window
//         └─ with_first_scene()       starts Shell
//                                     blocks until exit
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use log::info;

//=== Internal Dependencies ===============================================

use crate::core::{PlatformError, Scene, WindowSettings};
use crate::platform::Platform;

//=== GameBuilder =========================================================

/// Builder for configuring and constructing a [`Game`].
///
/// # Default Values
///
/// - **Settings**: [`WindowSettings::new`] (`"JGame"`, 500×500, decorated)
/// - **First scene**: none, the built-in placeholder scene is shown
///
/// # Examples
///
/// Simple usage with defaults:
/// ```no_run
/// use jgame::GameBuilder;
///
/// GameBuilder::new().build().run().unwrap();
/// ```
///
/// Custom window and first scene:
/// ```no_run
/// use jgame::prelude::*;
///
/// struct Title { surface: Surface }
///
/// impl Scene for Title {
///     fn surface(&self) -> &Surface { &self.surface }
///     fn surface_mut(&mut self) -> &mut Surface { &mut self.surface }
///     fn start(&mut self, _ctx: &mut SceneContext) {}
///     fn restart(&mut self, _ctx: &mut SceneContext) {}
/// }
///
/// GameBuilder::new()
///     .with_settings(WindowSettings::sized("Breakout", 800.0, 600.0))
///     .with_first_scene(Title { surface: Surface::new() })
///     .build()
///     .run()
///     .unwrap();
/// ```
pub struct GameBuilder {
    settings: WindowSettings,
    first_scene: Option<Box<dyn Scene>>,
}

impl GameBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            settings: WindowSettings::new(),
            first_scene: None,
        }
    }

    /// Sets the window settings.
    pub fn with_settings(mut self, settings: WindowSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Sets the scene shown when the game starts.
    pub fn with_first_scene<T>(mut self, scene: T) -> Self
    where
        T: Scene + 'static,
    {
        self.first_scene = Some(Box::new(scene));
        self
    }

    /// Builds the game instance.
    pub fn build(self) -> Game {
        info!(
            "Building game \"{}\" (first scene: {})",
            self.settings.title(),
            self.first_scene
                .as_ref()
                .map_or("placeholder", |scene| scene.name())
        );

        Game {
            settings: self.settings,
            first_scene: self.first_scene,
        }
    }
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== Game ================================================================

/// A configured game, ready to run.
pub struct Game {
    settings: WindowSettings,
    first_scene: Option<Box<dyn Scene>>,
}

impl Game {
    /// Opens the window and runs the event loop until the window closes.
    ///
    /// # Lifecycle
    ///
    /// 1. Creates the event loop
    /// 2. On resume: creates the window, initializes the shell, starts the
    ///    first scene and shows the window
    /// 3. Every redraw: ticks the shell, driving the active scene
    /// 4. On close: exits the event loop and returns
    ///
    /// # Errors
    ///
    /// [`PlatformError`] if the event loop or the window cannot be created,
    /// or if a scene transition fails while running.
    ///
    /// # Panics
    ///
    /// Panics if called off the main thread on platforms where winit
    /// requires it (macOS/iOS).
    pub fn run(self) -> Result<(), PlatformError> {
        info!("Starting game \"{}\"", self.settings.title());

        let platform = Platform::new(self.settings, self.first_scene);
        let result = platform.run();

        info!("Game shutdown complete");
        result
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
