//! Render pass: paints the battlefield back to front.

use rampart_core::draw::DrawSurface;

use crate::battlefield::Battlefield;

/// Defense areas, walls, bases (with modules), enemies, then projectiles.
pub fn draw_battlefield(battlefield: &Battlefield, surface: &mut impl DrawSurface) {
    for area in &battlefield.defense_areas {
        area.draw(surface);
    }
    for wall in &battlefield.walls {
        wall.draw(surface);
    }
    for base in &battlefield.bases {
        base.draw(surface);
    }
    for enemy in &battlefield.enemies {
        enemy.draw(surface);
    }
    for projectile in &battlefield.projectiles {
        projectile.draw(surface);
    }
}
