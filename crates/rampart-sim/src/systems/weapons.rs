//! Weapon system: every base gets one update per frame, in placement order.

use rampart_core::events::GameEvent;

use crate::base::Base;
use crate::economy::ScoreState;
use crate::enemy::Enemy;
use crate::projectile::Projectile;

pub fn run(
    bases: &mut [Base],
    enemies: &[Enemy],
    projectiles: &mut Vec<Projectile>,
    events: &mut Vec<GameEvent>,
    score: &mut ScoreState,
) {
    for base in bases.iter_mut() {
        let Some(target) = base.update(enemies, projectiles) else {
            continue;
        };
        let Some(module) = &base.module else {
            continue;
        };

        score.projectiles_fired += 1;
        events.push(GameEvent::ProjectileFired {
            base: base.id,
            target,
            weapon: module.kind,
        });
    }
}
