//! Snapshot system: builds a complete GameStateSnapshot from the battlefield.
//!
//! This system is read-only; it never modifies the battlefield.

use rampart_core::enums::GamePhase;
use rampart_core::events::GameEvent;
use rampart_core::state::*;
use rampart_core::types::FrameClock;

use crate::battlefield::Battlefield;
use crate::economy::ScoreState;

pub fn build_snapshot(
    battlefield: &Battlefield,
    clock: &FrameClock,
    phase: GamePhase,
    gold: u32,
    events: Vec<GameEvent>,
    score: &ScoreState,
) -> GameStateSnapshot {
    GameStateSnapshot {
        clock: *clock,
        phase,
        gold,
        enemies: build_enemies(battlefield),
        walls: build_walls(battlefield),
        bases: build_bases(battlefield),
        defense_areas: build_defense_areas(battlefield),
        projectiles: build_projectiles(battlefield),
        events,
        score: score.view(),
    }
}

fn build_enemies(battlefield: &Battlefield) -> Vec<EnemyView> {
    battlefield
        .enemies
        .iter()
        .map(|e| EnemyView {
            id: e.id,
            kind: e.kind,
            position: e.position,
            health: e.health,
            path_index: e.path_index,
            is_attacking_wall: e.is_attacking_wall,
        })
        .collect()
}

fn build_walls(battlefield: &Battlefield) -> Vec<WallView> {
    battlefield
        .walls
        .iter()
        .map(|w| WallView {
            id: w.id,
            position: w.position,
            health: w.health,
        })
        .collect()
}

fn build_bases(battlefield: &Battlefield) -> Vec<BaseView> {
    battlefield
        .bases
        .iter()
        .map(|b| BaseView {
            id: b.id,
            position: b.position,
            module: b.module.as_ref().map(|m| ModuleView {
                kind: m.kind,
                range: m.spec.range,
                cooldown: m.cooldown,
            }),
        })
        .collect()
}

fn build_defense_areas(battlefield: &Battlefield) -> Vec<DefenseAreaView> {
    battlefield
        .defense_areas
        .iter()
        .map(|a| DefenseAreaView {
            id: a.id,
            position: a.position,
            width: a.width,
            height: a.height,
            health: a.health,
            contained_units: a.contained_units.clone(),
        })
        .collect()
}

fn build_projectiles(battlefield: &Battlefield) -> Vec<ProjectileView> {
    battlefield
        .projectiles
        .iter()
        .map(|p| ProjectileView {
            position: p.position,
            target: p.target,
            weapon: p.weapon,
        })
        .collect()
}
