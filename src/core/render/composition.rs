//=========================================================================
// Composition
//=========================================================================
//
// Ordered set of scene surfaces attached to the window.
//
// Mirrors the navigation stack: the last appended surface is the frontmost
// one. Only append and remove-topmost are supported.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::SurfaceId;

//=== Composition =========================================================

#[derive(Debug, Default)]
pub struct Composition {
    layers: Vec<SurfaceId>,
}

impl Composition {
    pub fn new() -> Self {
        Self::default()
    }

    /// Places `id` in front of every attached surface.
    pub(crate) fn append(&mut self, id: SurfaceId) {
        self.layers.push(id);
    }

    /// Detaches the frontmost surface.
    pub(crate) fn remove_topmost(&mut self) -> Option<SurfaceId> {
        self.layers.pop()
    }

    /// The visible surface.
    pub fn topmost(&self) -> Option<SurfaceId> {
        self.layers.last().copied()
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Surfaces from back to front.
    pub fn iter(&self) -> impl Iterator<Item = SurfaceId> + '_ {
        self.layers.iter().copied()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
