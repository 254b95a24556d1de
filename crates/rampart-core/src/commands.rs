//! Player commands sent from a frontend to the simulation.
//!
//! Commands are validated and queued for processing at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::BaseId;

/// All possible player actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Construction ---
    /// Buy an empty base platform centered at (x, y).
    PlaceBase { x: f64, y: f64 },
    /// Buy a weapon module and mount it on an existing base.
    AttachModule { base: BaseId, kind: WeaponKind },
    /// Buy a wall centered at (x, y).
    PlaceWall { x: f64, y: f64 },

    // --- Simulation control ---
    /// Leave the setup phase and start the wave clock.
    StartMission,
    Pause,
    Resume,
}
