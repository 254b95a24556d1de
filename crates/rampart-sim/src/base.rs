//! Base platforms: the mount point for a single weapon module.

use rampart_core::config::BaseSpec;
use rampart_core::draw::{Color, DrawSurface};
use rampart_core::error::CommandError;
use rampart_core::geometry::Bounds;
use rampart_core::types::{BaseId, EnemyId, Vec2};

use crate::enemy::Enemy;
use crate::projectile::Projectile;
use crate::weapon::WeaponModule;

#[derive(Debug, Clone, PartialEq)]
pub struct Base {
    pub id: BaseId,
    pub position: Vec2,
    pub size: f64,
    pub cost: u32,
    /// At most one module per base.
    pub module: Option<WeaponModule>,
}

impl Base {
    pub fn new(id: BaseId, position: Vec2) -> Self {
        Self::with_spec(id, position, &BaseSpec::default())
    }

    pub fn with_spec(id: BaseId, position: Vec2, spec: &BaseSpec) -> Self {
        Self {
            id,
            position,
            size: spec.size,
            cost: spec.cost,
            module: None,
        }
    }

    /// Mount `module`. Fails without replacing anything if a module is present.
    pub fn attach_module(&mut self, module: WeaponModule) -> Result<(), CommandError> {
        if self.module.is_some() {
            return Err(CommandError::ModuleSlotOccupied(self.id));
        }
        self.module = Some(module);
        Ok(())
    }

    pub fn has_module(&self) -> bool {
        self.module.is_some()
    }

    /// Delegate to the module, if any.
    pub fn update(
        &mut self,
        enemies: &[Enemy],
        projectiles: &mut Vec<Projectile>,
    ) -> Option<EnemyId> {
        let origin = self.position;
        self.module.as_mut()?.update(origin, enemies, projectiles)
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::centered(self.position, Vec2::splat(self.size))
    }

    /// Platform first, then the module on top.
    pub fn draw(&self, surface: &mut impl DrawSurface) {
        let half = self.size / 2.0;
        surface.fill_rect(
            self.position.x - half,
            self.position.y - half,
            self.size,
            self.size,
            Color::PLATFORM_GREY,
        );
        if let Some(module) = &self.module {
            module.draw(self.position, surface);
        }
    }
}
