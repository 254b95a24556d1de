//! Enemy units: path following, collision with defenses, and attacking.
//!
//! Tanks and grunts are the same type with different presets.

use rampart_core::components::Health;
use rampart_core::config::EnemyPreset;
use rampart_core::constants::*;
use rampart_core::draw::{health_bar, Color, DrawSurface};
use rampart_core::enums::{EnemyAction, EnemyKind};
use rampart_core::geometry::{step_toward, Bounds, Step};
use rampart_core::types::{DefenseAreaId, EnemyId, Path, Vec2};

use crate::structures::{DefenseArea, Wall};

#[derive(Debug, Clone, PartialEq)]
pub struct Enemy {
    pub id: EnemyId,
    pub kind: EnemyKind,
    pub position: Vec2,
    pub width: f64,
    pub height: f64,
    /// Units per frame.
    pub speed: f64,
    pub health: Health,
    pub reward: u32,
    pub color: Color,
    /// Shared, read-only route.
    pub path: Path,
    pub target_area: DefenseAreaId,
    /// Index of the last waypoint reached; always `<= path.last_index()`.
    pub path_index: usize,
    /// Set on any frame spent attacking a wall or defense area.
    pub is_attacking_wall: bool,
}

impl Enemy {
    /// Enemy with the default preset for `kind`.
    pub fn new(
        id: EnemyId,
        kind: EnemyKind,
        position: Vec2,
        path: Path,
        target_area: DefenseAreaId,
    ) -> Self {
        Self::with_preset(
            id,
            kind,
            &EnemyPreset::for_kind(kind),
            position,
            path,
            target_area,
        )
    }

    pub fn with_preset(
        id: EnemyId,
        kind: EnemyKind,
        preset: &EnemyPreset,
        position: Vec2,
        path: Path,
        target_area: DefenseAreaId,
    ) -> Self {
        Self {
            id,
            kind,
            position,
            width: preset.width,
            height: preset.height,
            speed: preset.speed,
            health: Health::full(preset.health),
            reward: preset.reward,
            color: preset.color,
            path,
            target_area,
            path_index: 0,
            is_attacking_wall: false,
        }
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Box used for collision tests against structures.
    pub fn probe(&self) -> Bounds {
        Bounds::probe(self.position, self.size())
    }

    pub fn has_finished_path(&self) -> bool {
        self.path_index >= self.path.last_index()
    }

    pub fn is_dead(&self) -> bool {
        self.health.is_depleted()
    }

    /// Run one frame of movement and combat.
    ///
    /// Walls are checked before defense areas; within each list the first
    /// overlap wins. A colliding enemy deals fixed damage and does not move.
    pub fn advance(
        &mut self,
        walls: &mut [Wall],
        defense_areas: &mut [DefenseArea],
    ) -> EnemyAction {
        let probe = self.probe();

        if let Some(wall) = walls.iter_mut().find(|w| probe.overlaps(&w.bounds())) {
            self.is_attacking_wall = true;
            wall.health.apply_damage(ENEMY_STRUCTURE_DAMAGE_PER_FRAME);
            return EnemyAction::AttackingWall(wall.id);
        }

        if let Some(area) = defense_areas
            .iter_mut()
            .find(|a| probe.overlaps(&a.bounds()))
        {
            self.is_attacking_wall = true;
            area.health.apply_damage(ENEMY_STRUCTURE_DAMAGE_PER_FRAME);
            return EnemyAction::AttackingDefenseArea(area.id);
        }

        self.is_attacking_wall = false;

        if let Some(next) = self.path.get(self.path_index + 1) {
            // Waypoint arrival advances the cursor without snapping.
            match step_toward(self.position, next, self.speed) {
                Step::Reached => {
                    self.path_index += 1;
                    EnemyAction::ReachedWaypoint(self.path_index)
                }
                Step::Moved(position) => {
                    self.position = position;
                    EnemyAction::FollowingPath
                }
            }
        } else {
            self.assault(defense_areas)
        }
    }

    /// Head straight for the target area once the path is exhausted.
    fn assault(&mut self, defense_areas: &[DefenseArea]) -> EnemyAction {
        let Some(area) = defense_areas.iter().find(|a| a.id == self.target_area) else {
            return EnemyAction::Idle;
        };

        let delta = area.position - self.position;
        let distance = delta.length();
        if distance > 0.0 {
            self.position += delta / distance * self.speed;
            EnemyAction::Assaulting
        } else {
            EnemyAction::Idle
        }
    }

    pub fn draw(&self, surface: &mut impl DrawSurface) {
        let left = self.position.x - self.width / 2.0;
        let top = self.position.y - self.height / 2.0;
        surface.fill_rect(left, top, self.width, self.height, self.color);
        health_bar(
            surface,
            left,
            top - ENEMY_HEALTH_BAR_OFFSET,
            self.width,
            ENEMY_HEALTH_BAR_HEIGHT,
            self.health.fraction(),
            Color::GREY,
            Color::LIME,
        );
    }
}

/// Look up an enemy by handle.
pub fn find_enemy(enemies: &[Enemy], id: EnemyId) -> Option<&Enemy> {
    enemies.iter().find(|e| e.id == id)
}

pub fn find_enemy_mut(enemies: &mut [Enemy], id: EnemyId) -> Option<&mut Enemy> {
    enemies.iter_mut().find(|e| e.id == id)
}
