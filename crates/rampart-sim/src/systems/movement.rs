//! Enemy movement system.
//!
//! Runs every enemy's collision-then-move step in spawn order.

use rampart_core::enums::EnemyAction;

use crate::enemy::Enemy;
use crate::structures::{DefenseArea, Wall};

/// Advance every enemy one frame. Returns the actions in enemy order.
pub fn run(
    enemies: &mut [Enemy],
    walls: &mut [Wall],
    defense_areas: &mut [DefenseArea],
) -> Vec<EnemyAction> {
    enemies
        .iter_mut()
        .map(|enemy| enemy.advance(walls, defense_areas))
        .collect()
}
