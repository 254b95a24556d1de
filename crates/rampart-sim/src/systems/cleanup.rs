//! Cleanup system: removes dead enemies and destroyed walls, pays rewards,
//! and reports fallen defense areas.

use log::{debug, info};

use rampart_core::enums::ContainedUnit;
use rampart_core::events::GameEvent;

use crate::battlefield::Battlefield;
use crate::economy::{ScoreState, Treasury};

/// Returns true if any defense area is at or below zero health.
pub fn run(
    battlefield: &mut Battlefield,
    treasury: &mut Treasury,
    score: &mut ScoreState,
    events: &mut Vec<GameEvent>,
) -> bool {
    // Dead enemies pay out exactly once, on removal.
    battlefield.enemies.retain(|enemy| {
        if !enemy.is_dead() {
            return true;
        }
        debug!("enemy {:?} ({:?}) killed, reward {}", enemy.id, enemy.kind, enemy.reward);
        treasury.earn(enemy.reward);
        score.enemies_killed += 1;
        score.gold_earned += enemy.reward;
        events.push(GameEvent::EnemyKilled {
            enemy: enemy.id,
            kind: enemy.kind,
            reward: enemy.reward,
        });
        false
    });

    let mut destroyed_walls = Vec::new();
    battlefield.walls.retain(|wall| {
        if wall.is_destroyed() {
            destroyed_walls.push(wall.id);
            false
        } else {
            true
        }
    });
    for wall in destroyed_walls {
        debug!("wall {wall:?} destroyed");
        for area in &mut battlefield.defense_areas {
            area.unregister_unit(ContainedUnit::Wall(wall));
        }
        events.push(GameEvent::WallDestroyed { wall });
    }

    let mut breached = false;
    for area in battlefield.defense_areas.iter().filter(|a| a.is_destroyed()) {
        info!("defense area {:?} breached", area.id);
        events.push(GameEvent::DefenseAreaBreached { area: area.id });
        breached = true;
    }
    breached
}
