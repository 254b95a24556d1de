//! Projectile system: advances every projectile and resolves arrivals.

use log::debug;

use rampart_core::enums::{ProjectileStatus, SplashPolicy};
use rampart_core::events::GameEvent;
use rampart_core::types::EnemyId;

use crate::enemy::{find_enemy_mut, Enemy};
use crate::projectile::Projectile;

/// Damage dealt by one arriving projectile.
#[derive(Debug, Clone, PartialEq)]
pub struct HitReport {
    pub target: EnemyId,
    pub damage: f64,
    /// Other enemies damaged by splash.
    pub splashed: Vec<EnemyId>,
}

/// Apply an arrived projectile's damage.
///
/// The target always takes full damage. Under `SplashPolicy::AreaDamage`,
/// every other enemy within `splash_radius` of the impact point takes the
/// same damage. Returns `None` if the target is gone.
pub fn resolve_arrival(
    projectile: &Projectile,
    enemies: &mut [Enemy],
    policy: SplashPolicy,
) -> Option<HitReport> {
    let target = find_enemy_mut(enemies, projectile.target)?;
    target.health.apply_damage(projectile.damage);

    let mut splashed = Vec::new();
    if policy == SplashPolicy::AreaDamage && projectile.splash_radius > 0.0 {
        for enemy in enemies.iter_mut() {
            if enemy.id == projectile.target {
                continue;
            }
            if enemy.position.distance(projectile.position) <= projectile.splash_radius {
                enemy.health.apply_damage(projectile.damage);
                splashed.push(enemy.id);
            }
        }
    }

    Some(HitReport {
        target: projectile.target,
        damage: projectile.damage,
        splashed,
    })
}

/// Advance all projectiles; drop those that arrived or expired.
pub fn run(
    projectiles: &mut Vec<Projectile>,
    enemies: &mut [Enemy],
    policy: SplashPolicy,
    events: &mut Vec<GameEvent>,
) {
    projectiles.retain_mut(|projectile| match projectile.advance(enemies) {
        ProjectileStatus::InFlight => true,
        ProjectileStatus::Arrived => {
            if let Some(hit) = resolve_arrival(projectile, enemies, policy) {
                events.push(GameEvent::ProjectileHit {
                    target: hit.target,
                    damage: hit.damage,
                    splashed: hit.splashed,
                });
            }
            false
        }
        ProjectileStatus::Expired => {
            debug!(
                "projectile lost target {:?} at ({:.1}, {:.1})",
                projectile.target, projectile.position.x, projectile.position.y
            );
            events.push(GameEvent::ProjectileExpired {
                target: projectile.target,
            });
            false
        }
    });
}
