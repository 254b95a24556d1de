//! Fundamental geometric and simulation types.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// 2D vector used for every position and direction (screen units, y down).
pub type Vec2 = glam::DVec2;

/// Handle to an enemy owned by the engine's enemy list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EnemyId(pub u32);

/// Handle to a wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WallId(pub u32);

/// Handle to a defense area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DefenseAreaId(pub u32);

/// Handle to a base platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BaseId(pub u32);

/// A single point on an enemy route, as written in scenario files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub x: f64,
    pub y: f64,
}

impl Waypoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<Waypoint> for Vec2 {
    fn from(w: Waypoint) -> Self {
        Vec2::new(w.x, w.y)
    }
}

impl From<Vec2> for Waypoint {
    fn from(v: Vec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

/// An ordered, non-empty route shared read-only by every enemy that follows it.
///
/// Cloning a `Path` is cheap; all clones point at the same waypoint storage.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    waypoints: Arc<[Vec2]>,
}

impl Path {
    /// Build a path from its waypoints. Fails if `waypoints` is empty.
    pub fn new(waypoints: Vec<Vec2>) -> Result<Self, ConfigError> {
        if waypoints.is_empty() {
            return Err(ConfigError::EmptyPath);
        }
        Ok(Self {
            waypoints: waypoints.into(),
        })
    }

    /// Build a path from scenario-file waypoints.
    pub fn from_waypoints(waypoints: &[Waypoint]) -> Result<Self, ConfigError> {
        Self::new(waypoints.iter().map(|&w| w.into()).collect())
    }

    /// Spawn point (first waypoint).
    pub fn start(&self) -> Vec2 {
        self.waypoints[0]
    }

    /// Last waypoint.
    pub fn end(&self) -> Vec2 {
        self.waypoints[self.waypoints.len() - 1]
    }

    pub fn get(&self, index: usize) -> Option<Vec2> {
        self.waypoints.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    /// Always false; kept for API symmetry with slices.
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// Index of the final waypoint.
    pub fn last_index(&self) -> usize {
        self.waypoints.len() - 1
    }

    pub fn waypoints(&self) -> &[Vec2] {
        &self.waypoints
    }

    /// Whether two handles share the same underlying route.
    pub fn shares_route_with(&self, other: &Path) -> bool {
        Arc::ptr_eq(&self.waypoints, &other.waypoints)
    }
}

/// Frame counter. One frame is one invocation of the update cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameClock {
    /// Current frame number (increments by 1 each tick).
    pub frame: u64,
}

impl FrameClock {
    /// Advance by one frame.
    pub fn advance(&mut self) {
        self.frame += 1;
    }

    /// Elapsed time in seconds at the nominal frame rate.
    pub fn elapsed_secs(&self) -> f64 {
        self.frame as f64 / crate::constants::TICK_RATE as f64
    }
}
