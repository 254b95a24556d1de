//! Game state snapshot: the complete visible state sent to a frontend each tick.

use serde::{Deserialize, Serialize};

use crate::components::Health;
use crate::enums::*;
use crate::events::GameEvent;
use crate::types::*;

/// Complete game state produced after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub clock: FrameClock,
    pub phase: GamePhase,
    pub gold: u32,
    pub enemies: Vec<EnemyView>,
    pub walls: Vec<WallView>,
    pub bases: Vec<BaseView>,
    pub defense_areas: Vec<DefenseAreaView>,
    pub projectiles: Vec<ProjectileView>,
    pub events: Vec<GameEvent>,
    pub score: ScoreView,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub id: EnemyId,
    pub kind: EnemyKind,
    pub position: Vec2,
    pub health: Health,
    pub path_index: usize,
    pub is_attacking_wall: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WallView {
    pub id: WallId,
    pub position: Vec2,
    pub health: Health,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaseView {
    pub id: BaseId,
    pub position: Vec2,
    pub module: Option<ModuleView>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModuleView {
    pub kind: WeaponKind,
    pub range: f64,
    /// Frames until the module may fire again.
    pub cooldown: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefenseAreaView {
    pub id: DefenseAreaId,
    pub position: Vec2,
    pub width: f64,
    pub height: f64,
    pub health: Health,
    pub contained_units: Vec<ContainedUnit>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub position: Vec2,
    pub target: EnemyId,
    pub weapon: WeaponKind,
}

/// Running score for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreView {
    pub enemies_killed: u32,
    pub enemies_spawned: u32,
    pub enemies_total: u32,
    pub gold_earned: u32,
    pub projectiles_fired: u32,
}
