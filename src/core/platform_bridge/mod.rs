//=========================================================================
// Platform Bridge
//=========================================================================
//
// Bridges the windowing host (winit/SDL/etc.) with the scene shell.
//
// This module defines the contract between platform implementations and
// core logic, enabling hosts to be swapped without changing core code.
//
// Components:
// - `interface`: WindowHost trait and platform error definitions
//
//=========================================================================

//=== Module Declarations =================================================

mod interface;

//=== Public API ==========================================================

pub use interface::{PlatformError, WindowHost};
