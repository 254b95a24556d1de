//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

use crate::types::{DefenseAreaId, WallId};

/// Weapon module variant attached to a base.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeaponKind {
    /// Fast single-target gun.
    #[default]
    MachineGun,
    /// Slow, heavy shell carrying a splash radius.
    Cannon,
}

/// Enemy preset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    /// Baseline infantry unit.
    #[default]
    Grunt,
    /// Slow, armored unit.
    Tank,
}

/// Whether a projectile's splash radius deals area damage on arrival.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SplashPolicy {
    /// Splash radius is carried as data only; only the target is damaged.
    #[default]
    Inert,
    /// Every enemy within the splash radius of the impact point is damaged.
    AreaDamage,
}

/// Per-frame result of advancing a projectile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectileStatus {
    /// Still travelling.
    InFlight,
    /// Snapped onto the target this frame.
    Arrived,
    /// Target no longer exists; the projectile should be dropped.
    Expired,
}

/// What an enemy did during one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyAction {
    /// Damaged an overlapping wall and held position.
    AttackingWall(WallId),
    /// Damaged an overlapping defense area and held position.
    AttackingDefenseArea(DefenseAreaId),
    /// Moved toward the next waypoint.
    FollowingPath,
    /// Came within one step of a waypoint; the path cursor now points at it.
    ReachedWaypoint(usize),
    /// Path exhausted; moved toward the target defense area.
    Assaulting,
    /// No movement possible (target area missing, or already on it).
    Idle,
}

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Scenario loaded, player may build before starting.
    #[default]
    Setup,
    Active,
    Paused,
    /// All waves spawned and cleared.
    Victory,
    /// A defense area fell.
    Defeat,
}

impl GamePhase {
    /// Victory and Defeat accept no further commands or ticks.
    pub fn is_over(self) -> bool {
        matches!(self, GamePhase::Victory | GamePhase::Defeat)
    }
}

/// Built-in scenario selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScenarioId {
    /// Single path, grunts with a late tank.
    #[default]
    Skirmish,
    /// Two converging paths, tank-heavy.
    Siege,
}

/// Something a defense area can contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContainedUnit {
    Base(crate::types::BaseId),
    Wall(WallId),
}
