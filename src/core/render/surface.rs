//=========================================================================
// Surface
//=========================================================================
//
// Per-scene drawable surface.
//
// The shell sizes the surface and assigns its id when the owning scene is
// pushed; after that the dimensions never change. Drawing appends to a
// retained command list that the host presents after every driven frame.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::{Color, Rect};

//=== SurfaceId ===========================================================

/// Identifies a surface inside the window composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SurfaceId(pub(crate) u64);

impl SurfaceId {
    pub fn get(self) -> u64 {
        self.0
    }
}

//=== TextAlign ===========================================================

/// Horizontal anchoring of a text line around its x coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

//=== DrawCommand =========================================================

/// A single recorded drawing operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Fills the whole surface.
    Clear(Color),

    FillRect { rect: Rect, color: Color },

    FillText {
        text: String,
        x: f64,
        y: f64,
        font_size: f64,
        align: TextAlign,
        color: Color,
    },
}

//=== Surface =============================================================

/// Drawable area exclusively owned by one scene.
#[derive(Debug, Default)]
pub struct Surface {
    id: Option<SurfaceId>,
    width: f64,
    height: f64,
    font_size: f64,
    text_align: TextAlign,
    commands: Vec<DrawCommand>,
}

impl Surface {
    //--- Construction -----------------------------------------------------

    /// Creates an unsized surface. The shell sizes it on push.
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds the surface to the window composition.
    pub(crate) fn bind(&mut self, id: SurfaceId, width: f64, height: f64) {
        self.id = Some(id);
        self.width = width;
        self.height = height;
    }

    //--- Accessors --------------------------------------------------------

    /// Composition id, `None` until the owning scene is pushed.
    pub fn id(&self) -> Option<SurfaceId> {
        self.id
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Commands recorded since the last [`Surface::clear`].
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    //--- Text State -------------------------------------------------------

    pub fn set_font_size(&mut self, font_size: f64) {
        self.font_size = font_size;
    }

    pub fn font_size(&self) -> f64 {
        self.font_size
    }

    pub fn set_text_align(&mut self, align: TextAlign) {
        self.text_align = align;
    }

    pub fn text_align(&self) -> TextAlign {
        self.text_align
    }

    //--- Drawing ----------------------------------------------------------

    /// Fills the whole surface, dropping everything drawn before.
    pub fn clear(&mut self, color: Color) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear(color));
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    /// Draws one line of text using the current font size and alignment.
    pub fn fill_text(&mut self, text: impl Into<String>, x: f64, y: f64, color: Color) {
        self.commands.push(DrawCommand::FillText {
            text: text.into(),
            x,
            y,
            font_size: self.font_size,
            align: self.text_align,
            color,
        });
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_surface_is_unbound() {
        let surface = Surface::new();
        assert!(surface.id().is_none());
        assert_eq!(surface.width(), 0.0);
        assert!(surface.commands().is_empty());
    }

    #[test]
    fn bind_sets_id_and_size() {
        let mut surface = Surface::new();
        surface.bind(SurfaceId(3), 640.0, 480.0);
        assert_eq!(surface.id(), Some(SurfaceId(3)));
        assert_eq!(surface.width(), 640.0);
        assert_eq!(surface.height(), 480.0);
    }

    #[test]
    fn clear_discards_previous_frame() {
        let mut surface = Surface::new();
        surface.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::RED);
        surface.clear(Color::BLACK);
        assert_eq!(surface.commands(), &[DrawCommand::Clear(Color::BLACK)]);
    }

    #[test]
    fn fill_text_captures_text_state() {
        let mut surface = Surface::new();
        surface.set_font_size(40.0);
        surface.set_text_align(TextAlign::Center);
        surface.fill_text("Hi", 10.0, 20.0, Color::YELLOW);

        assert_eq!(
            surface.commands(),
            &[DrawCommand::FillText {
                text: "Hi".to_owned(),
                x: 10.0,
                y: 20.0,
                font_size: 40.0,
                align: TextAlign::Center,
                color: Color::YELLOW,
            }]
        );
    }
}
