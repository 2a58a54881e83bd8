//=========================================================================
// JGame Demo
//
// Opens the default 500×500 window with the built-in placeholder scene.
// Set RUST_LOG (e.g. `RUST_LOG=debug`) to see navigation and frame logs.
//
//=========================================================================

use jgame::GameBuilder;
use log::error;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = GameBuilder::new().build().run() {
        error!("{}", e);
        std::process::exit(1);
    }
}
