//! Per-frame systems that operate on the battlefield.
//!
//! Systems are plain functions over explicitly passed collections.
//! They do not own state; all state lives in the entities and the engine.

pub mod cleanup;
pub mod combat;
pub mod movement;
pub mod render;
pub mod snapshot;
pub mod wave_spawner;
pub mod weapons;
