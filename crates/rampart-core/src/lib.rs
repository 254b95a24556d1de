//! Core types and definitions for the RAMPART tower-defense simulation.
//!
//! This crate defines the vocabulary shared across the other crates:
//! geometry helpers, ids and paths, presets, commands, events, state
//! snapshots, the draw-surface abstraction, errors, and constants.
//! It holds no per-frame logic.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod draw;
pub mod enums;
pub mod error;
pub mod events;
pub mod geometry;
pub mod state;
pub mod types;

pub use types::Vec2;

#[cfg(test)]
mod tests;
