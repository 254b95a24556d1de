//! Simulation engine for RAMPART.
//!
//! Owns the battlefield collections, runs systems at a fixed frame rate,
//! and produces GameStateSnapshots for whatever drives it.

pub mod base;
pub mod battlefield;
pub mod economy;
pub mod enemy;
pub mod engine;
pub mod projectile;
pub mod scenario;
pub mod structures;
pub mod systems;
pub mod weapon;
pub mod world_setup;

pub use engine::{CommandOutcome, SimConfig, SimulationEngine};
pub use rampart_core as core;
pub use scenario::Scenario;
