//=========================================================================
// JGame — Library Root
//
// This crate defines the public API surface of the JGame framework.
//
// Responsibilities:
// - Expose the game entry point (`Game` / `GameBuilder`)
// - Expose the scene contract and the shell that navigates between scenes
// - Keep the winit integration (`platform`) hidden from end users
//
// Typical usage:
// ```no_run
// use jgame::GameBuilder;
//
// fn main() {
//     GameBuilder::new().build().run().unwrap();
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds the scene stack, the shell and the drawing primitives.
// It is platform independent and exposed for embedding and testing, but
// normal application code only needs the `prelude`.
//
pub mod core;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `platform` contains the winit window and event loop and is not part of
// the public API surface.
//
// `game` defines the builder and the blocking `run()` entry point.
//
mod game;
mod platform;

//--- Public Exports ------------------------------------------------------

pub use game::{Game, GameBuilder};
