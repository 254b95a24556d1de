//! Entity spawn factories for setting up the battlefield.

use rampart_core::config::Presets;
use rampart_core::enums::{ContainedUnit, EnemyKind, WeaponKind};
use rampart_core::types::*;

use crate::base::Base;
use crate::battlefield::{Battlefield, IdAllocator};
use crate::enemy::Enemy;
use crate::scenario::Scenario;
use crate::structures::{DefenseArea, Wall};
use crate::weapon::WeaponModule;

/// Populate an empty battlefield from a validated scenario.
pub fn setup_scenario(battlefield: &mut Battlefield, ids: &mut IdAllocator, scenario: &Scenario) {
    battlefield.paths = scenario.paths.clone();

    for spec in &scenario.defense_areas {
        let id = ids.defense_area();
        battlefield.defense_areas.push(DefenseArea::from_spec(id, spec));
    }

    for &position in &scenario.walls {
        place_wall(battlefield, ids, &scenario.presets, position);
    }

    for prebuilt in &scenario.bases {
        let id = place_base(battlefield, ids, &scenario.presets, prebuilt.position);
        if let (Some(kind), Some(base)) = (prebuilt.module, battlefield.base_mut(id)) {
            base.module = Some(build_module(&scenario.presets, kind));
        }
    }
}

/// Spawn an enemy at the start of path `path_index`.
///
/// Returns `None` if the path does not exist.
pub fn spawn_enemy(
    battlefield: &mut Battlefield,
    ids: &mut IdAllocator,
    presets: &Presets,
    kind: EnemyKind,
    path_index: usize,
    target_area: DefenseAreaId,
) -> Option<EnemyId> {
    let path = battlefield.paths.get(path_index)?.clone();
    let id = ids.enemy();
    let enemy = Enemy::with_preset(
        id,
        kind,
        presets.enemy(kind),
        path.start(),
        path,
        target_area,
    );
    battlefield.enemies.push(enemy);
    Some(id)
}

/// Place an empty base and register it with any defense area containing it.
pub fn place_base(
    battlefield: &mut Battlefield,
    ids: &mut IdAllocator,
    presets: &Presets,
    position: Vec2,
) -> BaseId {
    let id = ids.base();
    battlefield
        .bases
        .push(Base::with_spec(id, position, &presets.base));
    register_contained(battlefield, position, ContainedUnit::Base(id));
    id
}

/// Place a wall and register it with any defense area containing it.
pub fn place_wall(
    battlefield: &mut Battlefield,
    ids: &mut IdAllocator,
    presets: &Presets,
    position: Vec2,
) -> WallId {
    let id = ids.wall();
    battlefield
        .walls
        .push(Wall::with_spec(id, position, &presets.wall));
    register_contained(battlefield, position, ContainedUnit::Wall(id));
    id
}

pub fn build_module(presets: &Presets, kind: WeaponKind) -> WeaponModule {
    WeaponModule::with_spec(kind, presets.weapon(kind).clone())
}

fn register_contained(battlefield: &mut Battlefield, position: Vec2, unit: ContainedUnit) {
    for area in battlefield
        .defense_areas
        .iter_mut()
        .filter(|a| a.contains(position))
    {
        area.register_unit(unit);
    }
}
