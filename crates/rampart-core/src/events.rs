//! Events emitted by the simulation for audio and UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::{BaseId, DefenseAreaId, EnemyId, Vec2, WallId};

/// Something notable that happened during a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    EnemySpawned {
        enemy: EnemyId,
        kind: EnemyKind,
        position: Vec2,
    },
    ProjectileFired {
        base: BaseId,
        target: EnemyId,
        weapon: WeaponKind,
    },
    /// A projectile arrived and dealt damage.
    ProjectileHit {
        target: EnemyId,
        damage: f64,
        /// Other enemies caught in the splash (always empty with inert splash).
        splashed: Vec<EnemyId>,
    },
    /// A projectile's target vanished before it arrived.
    ProjectileExpired { target: EnemyId },
    EnemyKilled {
        enemy: EnemyId,
        kind: EnemyKind,
        reward: u32,
    },
    WallDestroyed { wall: WallId },
    DefenseAreaBreached { area: DefenseAreaId },
    CommandRejected { reason: String },
    GameOver { phase: GamePhase },
}
