//=========================================================================
// Render Primitives
//=========================================================================
//
// Drawable surfaces owned by scenes and the composition that stacks them
// inside the window.
//
// Architecture:
//   Scene ──owns──> Surface (retained draw list)
//   Shell ──owns──> Composition (SurfaceId per pushed scene)
//
// Rasterization is the windowing host's job. A surface only records what
// the scene asked to draw during the current frame.
//
//=========================================================================

//=== Module Declarations =================================================

mod composition;
mod surface;

//=== Public API ==========================================================

pub use composition::Composition;
pub use surface::{DrawCommand, Surface, SurfaceId, TextAlign};

//=== Color ===============================================================

/// Opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const ORANGE: Color = Color::rgb(255, 165, 0);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const GREEN: Color = Color::rgb(0, 128, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const PURPLE: Color = Color::rgb(128, 0, 128);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Packs the color as `0x00RRGGBB`.
    pub const fn to_u32(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }
}

//=== Rect ================================================================

/// Axis-aligned rectangle in surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
