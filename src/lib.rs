//=========================================================================
// Vantage Engine — Library Root
//
// This crate defines the public API surface of the Vantage Engine.
//
// Responsibilities:
// - Expose the engine facade (`EngineBuilder` / `Engine`)
// - Keep OS integration (`platform`) hidden from end users
// - Provide clean separation between the high-level facade and the
//   lower-level subsystems (input, camera, states)
//
// Typical usage:
// ```no_run
// use vantage_engine::EngineBuilder;
//
// fn main() -> Result<(), Box<dyn std::error::Error>> {
//     let mut engine = EngineBuilder::new()
//         .with_title("My Game")
//         .build()?;
//
//     engine.install_default_states();
//     engine.run();
//     Ok(())
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` contains the engine systems (input, camera, state machine) and
// the Window contract. `states` contains the shipped play and pause
// states. Both are exposed for extensibility; normal application code
// mostly uses the top-level `Engine` facade.
//
pub mod core;
pub mod states;

//--- Internal Modules ----------------------------------------------------
//
// `platform` contains OS-specific logic (window, Winit integration,
// event loop) and is kept private; only its error type escapes through
// the builder.
//
// `engine` defines the main engine entry point and the frame loop.
//
mod engine;
mod platform;

//--- Public Exports ------------------------------------------------------

pub use engine::{Engine, EngineBuilder};
pub use platform::PlatformError;
