//=========================================================================
// Test Doubles
//=========================================================================
//
// Recording host and probe scene shared by the unit tests.
//
//=========================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::core::frame_driver::FrameDriver;
use crate::core::platform_bridge::WindowHost;
use crate::core::render::{Surface, SurfaceId};
use crate::core::scene::{Scene, SceneContext};

//=== Journal =============================================================

/// Shared, ordered log of everything the doubles observed.
pub(crate) type Journal = Rc<RefCell<Vec<String>>>;

pub(crate) fn journal() -> Journal {
    Rc::new(RefCell::new(Vec::new()))
}

pub(crate) fn entries(journal: &Journal) -> Vec<String> {
    journal.borrow().clone()
}

//=== RecordingHost =======================================================

/// Host that records every request instead of touching a real window.
pub(crate) struct RecordingHost {
    journal: Journal,
}

impl RecordingHost {
    pub(crate) fn new(journal: Journal) -> Self {
        Self { journal }
    }

    fn log(&self, entry: String) {
        self.journal.borrow_mut().push(entry);
    }
}

impl WindowHost for RecordingHost {
    fn attach_surface(&mut self, id: SurfaceId) {
        self.log(format!("attach:{}", id.get()));
    }

    fn detach_topmost_surface(&mut self) {
        self.log("detach".to_owned());
    }

    fn show(&mut self) {
        self.log("show".to_owned());
    }

    fn present(&mut self, id: SurfaceId, surface: &Surface) {
        self.log(format!("present:{}:{}", id.get(), surface.commands().len()));
    }

    fn request_redraw(&mut self) {}
}

//=== ProbeScene ==========================================================

type Hook = Box<dyn FnMut(&mut SceneContext)>;

/// Scene that journals its lifecycle as `"<event>:<name>"` entries.
pub(crate) struct ProbeScene {
    name: &'static str,
    journal: Journal,
    surface: Surface,
    driver: Option<FrameDriver>,
    on_start: Option<Hook>,
    on_frame: Option<Hook>,
}

impl ProbeScene {
    pub(crate) fn new(name: &'static str, journal: &Journal) -> Self {
        Self {
            name,
            journal: Rc::clone(journal),
            surface: Surface::new(),
            driver: None,
            on_start: None,
            on_frame: None,
        }
    }

    /// Probe with a private journal, for tests that only need a scene.
    pub(crate) fn detached(name: &'static str) -> Self {
        Self::new(name, &journal())
    }

    /// Arms a frame driver when started.
    pub(crate) fn animated(mut self) -> Self {
        self.driver = Some(FrameDriver::new());
        self
    }

    /// Runs `hook` after journaling `start`.
    pub(crate) fn on_start(mut self, hook: impl FnMut(&mut SceneContext) + 'static) -> Self {
        self.on_start = Some(Box::new(hook));
        self
    }

    /// Runs `hook` after journaling each frame.
    pub(crate) fn on_each_frame(mut self, hook: impl FnMut(&mut SceneContext) + 'static) -> Self {
        self.on_frame = Some(Box::new(hook));
        self
    }

    fn log(&self, event: &str) {
        self.journal.borrow_mut().push(format!("{}:{}", event, self.name));
    }
}

impl Scene for ProbeScene {
    fn name(&self) -> &str {
        self.name
    }

    fn surface(&self) -> &Surface {
        &self.surface
    }

    fn surface_mut(&mut self) -> &mut Surface {
        &mut self.surface
    }

    fn start(&mut self, ctx: &mut SceneContext) {
        self.log("start");
        if let Some(driver) = self.driver.as_mut() {
            driver.start();
        }
        if let Some(hook) = self.on_start.as_mut() {
            hook(ctx);
        }
    }

    fn restart(&mut self, _ctx: &mut SceneContext) {
        self.log("restart");
    }

    fn frame_driver(&self) -> Option<&FrameDriver> {
        self.driver.as_ref()
    }

    fn on_frame(&mut self, ctx: &mut SceneContext) {
        self.log("frame");
        if let Some(driver) = self.driver.as_mut() {
            driver.record(ctx.elapsed());
        }
        self.surface.clear(crate::core::render::Color::BLACK);
        if let Some(hook) = self.on_frame.as_mut() {
            hook(ctx);
        }
    }
}

impl Drop for ProbeScene {
    fn drop(&mut self) {
        self.log("drop");
    }
}
