//! Weapon modules mounted on bases.
//!
//! Both variants share one algorithm: count the cooldown down, and when it
//! hits zero fire at the first enemy in list order that is within range.
//! Targeting is first-in-list, not nearest.

use rampart_core::config::WeaponSpec;
use rampart_core::constants::RANGE_CIRCLE_LINE_WIDTH;
use rampart_core::draw::DrawSurface;
use rampart_core::enums::WeaponKind;
use rampart_core::types::{EnemyId, Vec2};

use crate::enemy::Enemy;
use crate::projectile::Projectile;

/// A weapon attached to exactly one base.
///
/// The owning base passes its position into `update` and `draw`.
#[derive(Debug, Clone, PartialEq)]
pub struct WeaponModule {
    pub kind: WeaponKind,
    pub spec: WeaponSpec,
    /// Frames left before the module may fire.
    pub cooldown: u32,
}

impl WeaponModule {
    /// Module with the default preset for `kind`.
    pub fn new(kind: WeaponKind) -> Self {
        Self::with_spec(kind, WeaponSpec::for_kind(kind))
    }

    pub fn with_spec(kind: WeaponKind, spec: WeaponSpec) -> Self {
        Self {
            kind,
            spec,
            cooldown: 0,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.cooldown == 0
    }

    pub fn cost(&self) -> u32 {
        self.spec.cost
    }

    /// Run one frame. Returns the targeted enemy if a projectile was fired.
    pub fn update(
        &mut self,
        origin: Vec2,
        enemies: &[Enemy],
        projectiles: &mut Vec<Projectile>,
    ) -> Option<EnemyId> {
        if self.cooldown > 0 {
            self.cooldown -= 1;
            return None;
        }

        let target = acquire_target(origin, self.spec.range, enemies)?;
        projectiles.push(Projectile::new(origin, target.id, self.kind, &self.spec));
        self.cooldown = self.spec.attack_speed;
        Some(target.id)
    }

    pub fn draw(&self, origin: Vec2, surface: &mut impl DrawSurface) {
        let half = self.spec.footprint / 2.0;
        surface.fill_rect(
            origin.x - half,
            origin.y - half,
            self.spec.footprint,
            self.spec.footprint,
            self.spec.color,
        );
        surface.stroke_circle(
            origin,
            self.spec.range,
            self.spec.range_color,
            RANGE_CIRCLE_LINE_WIDTH,
        );
    }
}

/// First enemy, in list order, within `range` of `origin` (inclusive).
pub fn acquire_target(origin: Vec2, range: f64, enemies: &[Enemy]) -> Option<&Enemy> {
    enemies
        .iter()
        .find(|enemy| enemy.position.distance(origin) <= range)
}
