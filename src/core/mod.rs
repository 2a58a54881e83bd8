//=========================================================================
// Core
//
// Platform-independent part of the framework: the scene contract, the
// navigation stack, the application shell that orchestrates transitions,
// and the primitives scenes draw with.
//
// Responsibilities:
// - Keep the navigation stack and the surface composition in lockstep
// - Run scene lifecycle hooks (`start`, `restart`) at the right moments
// - Drive the active scene once per refresh tick
// - Talk to the windowing host only through `WindowHost`
//
// Notes:
// Nothing in here depends on winit. The platform layer creates the window,
// wraps it in a `WindowHost`, builds the `Shell` and feeds it ticks.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod error;
pub mod frame_driver;
pub mod placeholder;
pub mod platform_bridge;
pub mod render;
pub mod scene;
pub mod settings;
pub mod shell;

#[cfg(test)]
pub(crate) mod testing;

//=== Public API ==========================================================

pub use error::{SceneError, ShellError};
pub use frame_driver::FrameDriver;
pub use placeholder::{DecorationInset, PlaceholderScene};
pub use platform_bridge::{PlatformError, WindowHost};
pub use render::{Color, Composition, DrawCommand, Rect, Surface, SurfaceId, TextAlign};
pub use scene::{Scene, SceneContext, SceneStack, SceneTransition};
pub use settings::{WindowRequest, WindowSettings};
pub use shell::Shell;
