//=========================================================================
// Window Settings
//=========================================================================
//
// Immutable description of the game window.
//
// Read once when the window is created and again whenever a scene is
// sized to the window.
//
//=========================================================================

//=== Constants ===========================================================

const DEFAULT_TITLE: &str = "JGame";
const DEFAULT_WINDOW_SIZE: f64 = 500.0;

//=== WindowSettings ======================================================

/// Title, size and decoration flag of the game window.
///
/// Four constructors of increasing specificity are provided. Omitted
/// values fall back to the defaults: `"JGame"`, 500×500, decorated.
///
/// ```
/// use jgame::core::WindowSettings;
///
/// let settings = WindowSettings::sized("Pong", 640.0, 480.0);
/// assert_eq!(settings.title(), "Pong");
/// assert!(settings.has_decorations());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct WindowSettings {
    title: String,
    width: f64,
    height: f64,
    decorated: bool,
}

impl WindowSettings {
    //--- Construction -----------------------------------------------------

    /// Creates the default settings.
    pub fn new() -> Self {
        Self {
            title: DEFAULT_TITLE.to_owned(),
            width: DEFAULT_WINDOW_SIZE,
            height: DEFAULT_WINDOW_SIZE,
            decorated: true,
        }
    }

    /// Creates default settings with the given window title.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::new()
        }
    }

    /// Creates decorated settings with the given title and size.
    ///
    /// # Panics
    ///
    /// Panics if `width` or `height` is not a positive finite number.
    pub fn sized(title: impl Into<String>, width: f64, height: f64) -> Self {
        assert!(
            width.is_finite() && width > 0.0,
            "Window width must be positive, got {}",
            width
        );
        assert!(
            height.is_finite() && height > 0.0,
            "Window height must be positive, got {}",
            height
        );

        Self {
            width,
            height,
            ..Self::titled(title)
        }
    }

    /// Creates settings with every field given explicitly.
    ///
    /// # Panics
    ///
    /// Panics if `width` or `height` is not a positive finite number.
    pub fn with_decorations(
        title: impl Into<String>,
        width: f64,
        height: f64,
        decorated: bool,
    ) -> Self {
        Self {
            decorated,
            ..Self::sized(title, width, height)
        }
    }

    //--- Accessors --------------------------------------------------------

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// `true` when the window has a title bar and borders.
    pub fn has_decorations(&self) -> bool {
        self.decorated
    }

    /// Builds the request handed to the windowing host.
    ///
    /// The window is always fixed-size.
    pub fn window_request(&self) -> WindowRequest {
        WindowRequest {
            title: self.title.clone(),
            width: self.width,
            height: self.height,
            resizable: false,
            decorated: self.decorated,
        }
    }
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self::new()
    }
}

//=== WindowRequest =======================================================

/// Window creation request sent to the windowing host.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowRequest {
    pub title: String,
    pub width: f64,
    pub height: f64,
    pub resizable: bool,
    pub decorated: bool,
}

//=========================================================================
// Unit Tests
//=========================================================================
