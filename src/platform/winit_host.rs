//=========================================================================
// Winit Host
//
// `WindowHost` implementation over a winit window.
//
// Keeps the attach order of scene surfaces so presentation knows which
// layer is frontmost. Rasterizing the recorded draw lists is left to a
// renderer plugged in here.
//
//=========================================================================

//=== External Crates =====================================================

use log::{debug, trace, warn};
use winit::window::Window;

//=== Internal Imports ====================================================

use crate::core::{Surface, SurfaceId, WindowHost};

//=== WinitHost ===========================================================

pub(crate) struct WinitHost {
    window: Window,
    layers: Vec<SurfaceId>,
}

impl WinitHost {
    pub fn new(window: Window) -> Self {
        Self {
            window,
            layers: Vec::new(),
        }
    }
}

impl WindowHost for WinitHost {
    fn attach_surface(&mut self, id: SurfaceId) {
        self.layers.push(id);
        debug!(target: "platform", "Attached surface {} ({} layers)", id.get(), self.layers.len());
    }

    fn detach_topmost_surface(&mut self) {
        match self.layers.pop() {
            Some(id) => debug!(target: "platform", "Detached surface {}", id.get()),
            None => warn!(target: "platform", "Detach requested with no surface attached"),
        }
    }

    fn show(&mut self) {
        self.window.set_visible(true);
        self.window.request_redraw();
    }

    fn present(&mut self, id: SurfaceId, surface: &Surface) {
        if self.layers.last() != Some(&id) {
            warn!(target: "platform", "Surface {} presented while not frontmost", id.get());
        }

        self.window.pre_present_notify();
        trace!(
            target: "platform::render",
            "Presenting surface {} ({}x{}, {} commands)",
            id.get(),
            surface.width(),
            surface.height(),
            surface.commands().len()
        );
    }

    fn request_redraw(&mut self) {
        self.window.request_redraw();
    }
}
