//! RAMPART headless runner.
//!
//! Drives a `SimulationEngine` on its own thread, feeding it player commands
//! over a channel and streaming snapshots back.

pub mod game_loop;
pub mod logging;
pub mod state;

pub use rampart_core as core;
