//=========================================================================
// Placeholder Scene
//=========================================================================
//
// Built-in scene shown when the application supplies no first scene.
//
// Draws a square bouncing inside the window, changing color on every
// bounce, under a "- Coming Soon -" / "Your Game!" banner. Nothing can
// navigate back past it, so `restart` does nothing.
//
//=========================================================================

//=== External Dependencies ===============================================

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

//=== Internal Dependencies ===============================================

use crate::core::frame_driver::FrameDriver;
use crate::core::render::{Color, Rect, Surface, TextAlign};
use crate::core::scene::{Scene, SceneContext};
use crate::core::settings::WindowSettings;

//=== Constants ===========================================================

/// Colors the square cycles through.
pub const PALETTE: [Color; 5] = [
    Color::RED,
    Color::ORANGE,
    Color::GREEN,
    Color::BLUE,
    Color::PURPLE,
];

/// Upper bound on re-rolls when picking a color different from the
/// current one.
pub const MAX_COLOR_REROLLS: usize = 64;

const BACKGROUND: Color = Color::BLACK;
const TEXT_COLOR: Color = Color::YELLOW;
const HEADLINE: &str = "- Coming Soon -";
const TAGLINE: &str = "Your Game!";

/// Distance travelled per frame along each axis.
const STEP: f64 = 1.0;

//=== Color Picking =======================================================

/// Picks a palette color that differs from `current`.
///
/// Draws uniformly and rejects the current color. After
/// [`MAX_COLOR_REROLLS`] rejected draws the first differing palette entry
/// is returned instead. A single-color palette always yields that color.
///
/// # Panics
///
/// Panics if `palette` is empty.
pub fn pick_color<R>(rng: &mut R, palette: &[Color], current: Option<Color>) -> Color
where
    R: Rng + ?Sized,
{
    assert!(!palette.is_empty(), "Color palette must not be empty");

    for _ in 0..MAX_COLOR_REROLLS {
        let candidate = palette[rng.gen_range(0..palette.len())];
        if Some(candidate) != current {
            return candidate;
        }
    }

    palette
        .iter()
        .copied()
        .find(|&color| Some(color) != current)
        .unwrap_or(palette[0])
}

//=== DecorationInset =====================================================

/// Area lost to the title bar and borders of a decorated window.
///
/// The values are fixed estimates, not measured decoration sizes. The
/// winit host sizes the inner (client) area to the requested dimensions,
/// so there the inset only narrows the bounce area. Use
/// [`PlaceholderScene::with_inset`] with [`DecorationInset::NONE`] to bounce
/// across the full surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecorationInset {
    pub horizontal: f64,
    pub vertical: f64,
}

impl DecorationInset {
    pub const NONE: DecorationInset = DecorationInset { horizontal: 0.0, vertical: 0.0 };
    pub const STANDARD: DecorationInset = DecorationInset { horizontal: 5.0, vertical: 26.0 };

    /// [`DecorationInset::STANDARD`] for decorated windows, otherwise
    /// [`DecorationInset::NONE`].
    pub fn for_settings(settings: &WindowSettings) -> Self {
        if settings.has_decorations() {
            Self::STANDARD
        } else {
            Self::NONE
        }
    }
}

//=== BouncingSquare ======================================================

#[derive(Debug, Clone)]
struct BouncingSquare {
    x: f64,
    y: f64,
    size: f64,
    x_bound: f64,
    y_bound: f64,
    going_right: bool,
    going_down: bool,
    color: Color,
}

impl BouncingSquare {
    /// Bounces off the edges, then moves one step along each axis.
    fn advance<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if self.x <= 0.0 {
            self.going_right = true;
            self.color = pick_color(rng, &PALETTE, Some(self.color));
        } else if self.x >= self.x_bound {
            self.going_right = false;
            self.color = pick_color(rng, &PALETTE, Some(self.color));
        }

        if self.y <= 0.0 {
            self.going_down = true;
            self.color = pick_color(rng, &PALETTE, Some(self.color));
        } else if self.y >= self.y_bound {
            self.going_down = false;
            self.color = pick_color(rng, &PALETTE, Some(self.color));
        }

        self.x += if self.going_right { STEP } else { -STEP };
        self.y += if self.going_down { STEP } else { -STEP };
    }

    fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.size, self.size)
    }
}

//=== PlaceholderScene ====================================================

/// The default first scene.
pub struct PlaceholderScene {
    surface: Surface,
    driver: FrameDriver,
    rng: StdRng,
    width: f64,
    height: f64,
    square: BouncingSquare,
}

impl PlaceholderScene {
    //--- Construction -----------------------------------------------------

    /// Creates the scene for a window described by `settings`.
    pub fn new(settings: &WindowSettings) -> Self {
        Self::with_rng(settings, StdRng::from_entropy())
    }

    /// Creates the scene with a deterministic random sequence.
    pub fn seeded(settings: &WindowSettings, seed: u64) -> Self {
        Self::with_rng(settings, StdRng::seed_from_u64(seed))
    }

    fn with_rng(settings: &WindowSettings, mut rng: StdRng) -> Self {
        let width = settings.width();
        let height = settings.height();
        let size = (width + height) / 20.0;
        let inset = DecorationInset::for_settings(settings);

        let color = pick_color(&mut rng, &PALETTE, None);
        let x = random_offset(&mut rng, width - size);
        let y = random_offset(&mut rng, height - size);

        let mut surface = Surface::new();
        surface.set_text_align(TextAlign::Center);
        surface.set_font_size((width + height) / 25.0);

        Self {
            surface,
            driver: FrameDriver::new(),
            rng,
            width,
            height,
            square: BouncingSquare {
                x,
                y,
                size,
                x_bound: width - size - inset.horizontal,
                y_bound: height - size - inset.vertical,
                going_right: true,
                going_down: true,
                color,
            },
        }
    }

    /// Replaces the decoration compensation used for the bounce bounds.
    pub fn with_inset(mut self, inset: DecorationInset) -> Self {
        self.square.x_bound = self.width - self.square.size - inset.horizontal;
        self.square.y_bound = self.height - self.square.size - inset.vertical;
        self
    }

    //--- Accessors --------------------------------------------------------

    /// Side length of the square, fixed at construction.
    pub fn square_size(&self) -> f64 {
        self.square.size
    }

    /// Banner font size, fixed at construction.
    pub fn font_size(&self) -> f64 {
        self.surface.font_size()
    }

    /// Top-left corner of the square.
    pub fn square_position(&self) -> (f64, f64) {
        (self.square.x, self.square.y)
    }

    pub fn square_color(&self) -> Color {
        self.square.color
    }

    //--- Drawing ----------------------------------------------------------

    fn draw(&mut self) {
        let center_x = self.width / 2.0;
        let center_y = self.height / 2.0;

        self.surface.clear(BACKGROUND);
        self.surface.fill_rect(self.square.rect(), self.square.color);
        self.surface.fill_text(
            HEADLINE,
            center_x,
            center_y - (self.width + self.height) / 20.0,
            TEXT_COLOR,
        );
        self.surface.fill_text(TAGLINE, center_x, center_y, TEXT_COLOR);
    }
}

/// Uniform whole-number offset in `[0, span)`, or 0 when `span < 1`.
fn random_offset<R: Rng + ?Sized>(rng: &mut R, span: f64) -> f64 {
    let span = span as i64;
    if span > 0 {
        rng.gen_range(0..span) as f64
    } else {
        0.0
    }
}

impl Scene for PlaceholderScene {
    fn name(&self) -> &str {
        "placeholder"
    }

    fn surface(&self) -> &Surface {
        &self.surface
    }

    fn surface_mut(&mut self) -> &mut Surface {
        &mut self.surface
    }

    fn start(&mut self, _ctx: &mut SceneContext) {
        self.driver.start();
    }

    fn restart(&mut self, _ctx: &mut SceneContext) {}

    fn frame_driver(&self) -> Option<&FrameDriver> {
        Some(&self.driver)
    }

    fn on_frame(&mut self, ctx: &mut SceneContext) {
        self.driver.record(ctx.elapsed());
        self.square.advance(&mut self.rng);
        self.draw();
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::render::DrawCommand;

    fn scene_500() -> PlaceholderScene {
        PlaceholderScene::seeded(&WindowSettings::new(), 7)
    }

    //--- Derived Sizes ----------------------------------------------------

    #[test]
    fn sizes_derive_from_window_dimensions() {
        let scene = scene_500();
        assert_eq!(scene.square_size(), 50.0);
        assert_eq!(scene.font_size(), 40.0);
    }

    #[test]
    fn decorated_bounds_subtract_standard_inset() {
        let scene = scene_500();
        assert_eq!(scene.square.x_bound, 445.0);
        assert_eq!(scene.square.y_bound, 424.0);
    }

    #[test]
    fn undecorated_bounds_have_no_inset() {
        let settings = WindowSettings::with_decorations("Bare", 500.0, 500.0, false);
        let scene = PlaceholderScene::seeded(&settings, 7);
        assert_eq!(scene.square.x_bound, 450.0);
        assert_eq!(scene.square.y_bound, 450.0);
    }

    #[test]
    fn custom_inset_replaces_bounds() {
        let scene = scene_500().with_inset(DecorationInset { horizontal: 10.0, vertical: 30.0 });
        assert_eq!(scene.square.x_bound, 440.0);
        assert_eq!(scene.square.y_bound, 420.0);
    }

    #[test]
    fn initial_position_is_whole_and_inside_window() {
        for seed in 0..32 {
            let scene = PlaceholderScene::seeded(&WindowSettings::new(), seed);
            let (x, y) = scene.square_position();
            assert_eq!(x.fract(), 0.0);
            assert_eq!(y.fract(), 0.0);
            assert!((0.0..450.0).contains(&x));
            assert!((0.0..450.0).contains(&y));
        }
    }

    #[test]
    fn tiny_window_places_square_at_origin() {
        let settings = WindowSettings::sized("Tiny", 1.0, 1.0);
        let scene = PlaceholderScene::seeded(&settings, 3);
        assert_eq!(scene.square_position(), (0.0, 0.0));
    }

    //--- Bouncing ---------------------------------------------------------

    #[test]
    fn reaching_left_edge_flips_rightward_with_new_color() {
        let mut scene = scene_500();
        scene.square.x = 0.0;
        scene.square.y = 200.0;
        scene.square.going_right = false;
        scene.square.color = Color::RED;

        scene.square.advance(&mut scene.rng);

        assert!(scene.square.going_right);
        assert_ne!(scene.square.color, Color::RED);
        assert!(PALETTE.contains(&scene.square.color));
        assert_eq!(scene.square.x, 1.0);
    }

    #[test]
    fn reaching_right_bound_flips_leftward() {
        let mut scene = scene_500();
        scene.square.x = scene.square.x_bound;
        scene.square.y = 200.0;
        scene.square.going_right = true;
        scene.square.color = Color::BLUE;

        scene.square.advance(&mut scene.rng);

        assert!(!scene.square.going_right);
        assert_ne!(scene.square.color, Color::BLUE);
        assert_eq!(scene.square.x, 444.0);
    }

    #[test]
    fn reaching_bottom_bound_flips_upward() {
        let mut scene = scene_500();
        scene.square.x = 200.0;
        scene.square.y = 424.0;
        scene.square.going_down = true;

        scene.square.advance(&mut scene.rng);

        assert!(!scene.square.going_down);
        assert_eq!(scene.square.y, 423.0);
    }

    #[test]
    fn bounce_frame_draws_square_with_new_color() {
        let mut scene = scene_500();
        let mut ctx = SceneContext::new();
        scene.start(&mut ctx);
        scene.square.x = 0.0;
        scene.square.y = 200.0;
        scene.square.going_right = false;
        scene.square.color = Color::RED;

        scene.on_frame(&mut ctx);

        let drawn = match &scene.surface().commands()[1] {
            DrawCommand::FillRect { color, .. } => *color,
            other => panic!("expected square, got {:?}", other),
        };
        assert_ne!(drawn, Color::RED);
        assert_eq!(drawn, scene.square_color());
    }

    #[test]
    fn interior_move_keeps_direction_and_color() {
        let mut scene = scene_500();
        scene.square.x = 100.0;
        scene.square.y = 100.0;
        scene.square.going_right = false;
        scene.square.going_down = true;
        let color = scene.square.color;

        scene.square.advance(&mut scene.rng);

        assert_eq!(scene.square_position(), (99.0, 101.0));
        assert_eq!(scene.square.color, color);
    }

    //--- Color Picking ----------------------------------------------------

    #[test]
    fn pick_color_never_repeats_current() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut current = pick_color(&mut rng, &PALETTE, None);
        for _ in 0..500 {
            let next = pick_color(&mut rng, &PALETTE, Some(current));
            assert_ne!(next, current);
            current = next;
        }
    }

    #[test]
    fn pick_color_single_entry_palette_terminates() {
        let mut rng = StdRng::seed_from_u64(1);
        let color = pick_color(&mut rng, &[Color::GREEN], Some(Color::GREEN));
        assert_eq!(color, Color::GREEN);
    }

    #[test]
    fn pick_color_two_entry_palette_alternates() {
        let mut rng = StdRng::seed_from_u64(5);
        let palette = [Color::RED, Color::BLUE];
        assert_eq!(pick_color(&mut rng, &palette, Some(Color::RED)), Color::BLUE);
        assert_eq!(pick_color(&mut rng, &palette, Some(Color::BLUE)), Color::RED);
    }

    #[test]
    #[should_panic(expected = "Color palette must not be empty")]
    fn pick_color_panics_on_empty_palette() {
        let mut rng = StdRng::seed_from_u64(1);
        pick_color(&mut rng, &[], None);
    }

    //--- Lifecycle and Drawing --------------------------------------------

    #[test]
    fn start_arms_frame_driver() {
        let mut scene = scene_500();
        let mut ctx = SceneContext::new();
        assert!(!scene.frame_driver().unwrap().is_running());

        scene.start(&mut ctx);

        assert!(scene.frame_driver().unwrap().is_running());
    }

    #[test]
    fn restart_changes_nothing() {
        let mut scene = scene_500();
        let mut ctx = SceneContext::new();
        let before = scene.square_position();

        scene.restart(&mut ctx);

        assert_eq!(scene.square_position(), before);
        assert!(!scene.frame_driver().unwrap().is_running());
        assert_eq!(ctx.pending_transitions(), 0);
    }

    #[test]
    fn frame_draws_background_square_and_banner() {
        let mut scene = scene_500();
        let mut ctx = SceneContext::new();
        scene.start(&mut ctx);
        scene.on_frame(&mut ctx);

        let commands = scene.surface().commands();
        assert_eq!(commands.len(), 4);
        assert_eq!(commands[0], DrawCommand::Clear(Color::BLACK));
        assert_eq!(
            commands[1],
            DrawCommand::FillRect {
                rect: scene.square.rect(),
                color: scene.square_color(),
            }
        );
        assert_eq!(
            commands[2],
            DrawCommand::FillText {
                text: "- Coming Soon -".to_owned(),
                x: 250.0,
                y: 200.0,
                font_size: 40.0,
                align: TextAlign::Center,
                color: Color::YELLOW,
            }
        );
        assert_eq!(
            commands[3],
            DrawCommand::FillText {
                text: "Your Game!".to_owned(),
                x: 250.0,
                y: 250.0,
                font_size: 40.0,
                align: TextAlign::Center,
                color: Color::YELLOW,
            }
        );
        assert_eq!(scene.frame_driver().unwrap().frames(), 1);
    }

    #[test]
    fn square_stays_within_bounds_over_many_frames() {
        let mut scene = scene_500();
        let mut ctx = SceneContext::new();
        scene.start(&mut ctx);

        for _ in 0..2_000 {
            scene.on_frame(&mut ctx);
            let (x, y) = scene.square_position();
            assert!((0.0..=450.0).contains(&x), "x out of range: {}", x);
            assert!((0.0..=450.0).contains(&y), "y out of range: {}", y);
        }
    }
}
