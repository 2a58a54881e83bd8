//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use jgame::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Entry point
pub use crate::game::{Game, GameBuilder};

// Scene system
pub use crate::core::scene::{Scene, SceneContext};
pub use crate::core::FrameDriver;

// Drawing
pub use crate::core::render::{Color, Rect, Surface, TextAlign};

// Configuration
pub use crate::core::WindowSettings;
