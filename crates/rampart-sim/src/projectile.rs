//! Homing projectile fired by a weapon module.

use rampart_core::config::WeaponSpec;
use rampart_core::constants::PROJECTILE_RADIUS;
use rampart_core::draw::{Color, DrawSurface};
use rampart_core::enums::{ProjectileStatus, WeaponKind};
use rampart_core::geometry::{step_toward, Step};
use rampart_core::types::{EnemyId, Vec2};

use crate::enemy::{find_enemy, Enemy};

/// A shot in flight toward one enemy.
///
/// The target is a handle, not a reference: the enemy may be removed from
/// the engine's list before the projectile arrives.
#[derive(Debug, Clone, PartialEq)]
pub struct Projectile {
    pub position: Vec2,
    pub target: EnemyId,
    pub damage: f64,
    /// Units per frame.
    pub speed: f64,
    /// Carried for area damage; only used under `SplashPolicy::AreaDamage`.
    pub splash_radius: f64,
    pub radius: f64,
    pub weapon: WeaponKind,
}

impl Projectile {
    pub fn new(origin: Vec2, target: EnemyId, weapon: WeaponKind, spec: &WeaponSpec) -> Self {
        Self {
            position: origin,
            target,
            damage: spec.damage,
            speed: spec.projectile_speed,
            splash_radius: spec.splash_radius,
            radius: PROJECTILE_RADIUS,
            weapon,
        }
    }

    /// Move `speed` units toward `target`.
    ///
    /// Returns `true` when the remaining distance was below `speed`; the
    /// projectile then sits exactly on `target`.
    pub fn advance_toward(&mut self, target: Vec2) -> bool {
        match step_toward(self.position, target, self.speed) {
            Step::Reached => {
                self.position = target;
                true
            }
            Step::Moved(next) => {
                self.position = next;
                false
            }
        }
    }

    /// Home on the target's current position, looked up in `enemies`.
    pub fn advance(&mut self, enemies: &[Enemy]) -> ProjectileStatus {
        let Some(target) = find_enemy(enemies, self.target) else {
            return ProjectileStatus::Expired;
        };
        if self.advance_toward(target.position) {
            ProjectileStatus::Arrived
        } else {
            ProjectileStatus::InFlight
        }
    }

    pub fn draw(&self, surface: &mut impl DrawSurface) {
        surface.fill_circle(self.position, self.radius, Color::GOLD);
    }
}
