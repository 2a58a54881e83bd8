//=========================================================================
// Frame Driver
//=========================================================================
//
// Per-scene switch for the per-refresh callback.
//
// A scene owns its driver and arms it (usually from `start`). While the
// scene is the active one and its driver is armed, the shell calls
// `Scene::on_frame` once per display refresh with the elapsed time
// reported by the host. Covered scenes are never driven.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

//=== FrameDriver =========================================================

#[derive(Debug, Default, Clone)]
pub struct FrameDriver {
    armed: bool,
    frames: u64,
    last_tick: Option<Duration>,
}

impl FrameDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests a callback on every refresh tick.
    pub fn start(&mut self) {
        self.armed = true;
    }

    /// Stops the callbacks. Frame statistics are kept.
    pub fn stop(&mut self) {
        self.armed = false;
    }

    pub fn is_running(&self) -> bool {
        self.armed
    }

    /// Number of frames delivered since construction.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Time value of the most recent frame.
    pub fn last_tick(&self) -> Option<Duration> {
        self.last_tick
    }

    /// Time since the previous frame, zero on the first one.
    pub fn delta(&self, now: Duration) -> Duration {
        self.last_tick
            .map(|last| now.saturating_sub(last))
            .unwrap_or_default()
    }

    /// Records a delivered frame.
    ///
    /// Scenes call this at the start of `on_frame` when they want the
    /// statistics above to be tracked.
    pub fn record(&mut self, now: Duration) {
        self.frames += 1;
        self.last_tick = Some(now);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
