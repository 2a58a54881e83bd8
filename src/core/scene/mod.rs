//=========================================================================
// Scene System
//=========================================================================
//
// Scene lifecycle contract and LIFO navigation history.
//
// Architecture:
//   SceneStack
//     └─ scenes: Vec<Box<dyn Scene>>   (index 0 = root, last = active)
//   SceneContext
//     └─ transitions: TransitionQueue  (applied by the shell after hooks)
//
// Flow:
//   Shell::go_to_next_scene()     → push      → Scene::start()
//   Shell::go_to_previous_scene() → pop       → Scene::restart()
//   Shell::tick()                 → active    → Scene::on_frame()
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::frame_driver::FrameDriver;
use crate::core::render::Surface;

//=== Module Declarations =================================================

mod context;
mod scene_stack;
mod transition_queue;

//=== Public API ==========================================================

pub use context::SceneContext;
pub use scene_stack::SceneStack;
pub use transition_queue::{SceneTransition, TransitionQueue};

//=== Scene Trait =========================================================

/// A full-window unit of game content.
///
/// Scenes are built by the application and handed to the shell, which
/// sizes their surface to the window, pushes them onto the navigation
/// stack and calls [`Scene::start`]. When a scene pushed on top of this
/// one is popped again, [`Scene::restart`] runs instead.
///
/// # Minimal Implementation
///
/// ```rust
/// use jgame::prelude::*;
///
/// struct Menu {
///     surface: Surface,
/// }
///
/// impl Scene for Menu {
///     fn surface(&self) -> &Surface { &self.surface }
///     fn surface_mut(&mut self) -> &mut Surface { &mut self.surface }
///
///     fn start(&mut self, _ctx: &mut SceneContext) {
///         let (w, h) = (self.surface.width(), self.surface.height());
///         self.surface.clear(Color::BLACK);
///         self.surface.fill_rect(Rect::new(0.0, 0.0, w / 2.0, h / 2.0), Color::BLUE);
///     }
///
///     fn restart(&mut self, _ctx: &mut SceneContext) {}
/// }
/// ```
pub trait Scene {
    /// Name used in log output.
    ///
    /// Default implementation returns the type name.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// The surface owned by this scene.
    fn surface(&self) -> &Surface;

    fn surface_mut(&mut self) -> &mut Surface;

    /// Called exactly once, right after the scene is pushed.
    ///
    /// The surface already has the window's dimensions at this point and
    /// keeps them for the life of the scene.
    fn start(&mut self, ctx: &mut SceneContext);

    /// Called each time the scene becomes active again because the scene
    /// above it was popped.
    fn restart(&mut self, ctx: &mut SceneContext);

    /// Per-refresh driver of this scene, if it animates.
    ///
    /// Default implementation returns `None`, so the scene is never driven.
    fn frame_driver(&self) -> Option<&FrameDriver> {
        None
    }

    /// Called once per display refresh while this scene is active and its
    /// frame driver is running.
    fn on_frame(&mut self, _ctx: &mut SceneContext) {}
}
