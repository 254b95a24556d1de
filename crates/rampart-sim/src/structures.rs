//! Passive health-bearing structures: walls and defense areas.
//!
//! Neither has an update step. Enemies mutate their health on contact and
//! nothing clamps it at zero.

use rampart_core::components::Health;
use rampart_core::config::{DefenseAreaSpec, WallSpec};
use rampart_core::constants::*;
use rampart_core::draw::{health_bar, Color, DrawSurface};
use rampart_core::enums::ContainedUnit;
use rampart_core::geometry::Bounds;
use rampart_core::types::{DefenseAreaId, Vec2, WallId};

#[derive(Debug, Clone, PartialEq)]
pub struct Wall {
    pub id: WallId,
    pub position: Vec2,
    pub size: f64,
    pub health: Health,
    pub cost: u32,
}

impl Wall {
    pub fn new(id: WallId, position: Vec2) -> Self {
        Self::with_spec(id, position, &WallSpec::default())
    }

    pub fn with_spec(id: WallId, position: Vec2, spec: &WallSpec) -> Self {
        Self {
            id,
            position,
            size: spec.size,
            health: Health::full(spec.health),
            cost: spec.cost,
        }
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::centered(self.position, Vec2::splat(self.size))
    }

    pub fn is_destroyed(&self) -> bool {
        self.health.is_depleted()
    }

    pub fn draw(&self, surface: &mut impl DrawSurface) {
        let left = self.position.x - self.size / 2.0;
        let top = self.position.y - self.size / 2.0;
        surface.fill_rect(left, top, self.size, self.size, Color::BROWN);
        health_bar(
            surface,
            left,
            top - WALL_HEALTH_BAR_OFFSET,
            self.size,
            WALL_HEALTH_BAR_HEIGHT,
            self.health.fraction(),
            Color::GREY,
            Color::LIME,
        );
    }
}

/// The protected zone. Its health reaching zero loses the game.
#[derive(Debug, Clone, PartialEq)]
pub struct DefenseArea {
    pub id: DefenseAreaId,
    pub position: Vec2,
    pub width: f64,
    pub height: f64,
    pub health: Health,
    /// Bases and walls placed inside the area. Bookkeeping only.
    pub contained_units: Vec<ContainedUnit>,
}

impl DefenseArea {
    pub fn new(id: DefenseAreaId, position: Vec2, width: f64, height: f64) -> Self {
        Self {
            id,
            position,
            width,
            height,
            health: Health::full(DEFENSE_AREA_HEALTH),
            contained_units: Vec::new(),
        }
    }

    pub fn from_spec(id: DefenseAreaId, spec: &DefenseAreaSpec) -> Self {
        Self {
            health: Health::full(spec.health),
            ..Self::new(id, Vec2::new(spec.x, spec.y), spec.width, spec.height)
        }
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::centered(self.position, Vec2::new(self.width, self.height))
    }

    pub fn contains(&self, point: Vec2) -> bool {
        self.bounds().contains(point)
    }

    /// Track a unit placed inside the area. Duplicates are ignored.
    pub fn register_unit(&mut self, unit: ContainedUnit) {
        if !self.contained_units.contains(&unit) {
            self.contained_units.push(unit);
        }
    }

    pub fn unregister_unit(&mut self, unit: ContainedUnit) {
        self.contained_units.retain(|u| *u != unit);
    }

    pub fn is_destroyed(&self) -> bool {
        self.health.is_depleted()
    }

    pub fn draw(&self, surface: &mut impl DrawSurface) {
        let left = self.position.x - self.width / 2.0;
        let top = self.position.y - self.height / 2.0;
        surface.stroke_rect(
            left,
            top,
            self.width,
            self.height,
            Color::PURPLE,
            DEFENSE_AREA_LINE_WIDTH,
        );
        health_bar(
            surface,
            left,
            top - DEFENSE_AREA_HEALTH_BAR_OFFSET,
            self.width,
            DEFENSE_AREA_HEALTH_BAR_HEIGHT,
            self.health.fraction(),
            Color::DARK_GREY,
            Color::GREEN,
        );
    }
}

#[cfg(test)]
mod tests {
    use rampart_core::draw::{DrawCommand, DrawList};
    use rampart_core::types::BaseId;

    use super::*;

    #[test]
    fn test_wall_health_bar_tracks_damage() {
        let mut wall = Wall::new(WallId(0), Vec2::new(100.0, 100.0));
        wall.health.apply_damage(50.0);

        let mut list = DrawList::new();
        wall.draw(&mut list);
        assert_eq!(list.len(), 3);
        match &list.commands[2] {
            DrawCommand::FillRect { x, y, width, .. } => {
                assert_eq!(*x, 80.0);
                assert_eq!(*y, 70.0);
                assert_eq!(*width, 30.0);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_contained_units_deduplicated() {
        let mut area = DefenseArea::new(DefenseAreaId(0), Vec2::new(500.0, 300.0), 200.0, 100.0);
        assert!(area.contains(Vec2::new(420.0, 260.0)));
        assert!(!area.contains(Vec2::new(380.0, 260.0)));

        area.register_unit(ContainedUnit::Base(BaseId(2)));
        area.register_unit(ContainedUnit::Base(BaseId(2)));
        area.register_unit(ContainedUnit::Wall(WallId(2)));
        assert_eq!(area.contained_units.len(), 2);

        area.unregister_unit(ContainedUnit::Wall(WallId(2)));
        assert_eq!(area.contained_units, vec![ContainedUnit::Base(BaseId(2))]);
    }

    #[test]
    fn test_defense_area_from_spec() {
        let spec = DefenseAreaSpec {
            x: 10.0,
            y: 20.0,
            width: 30.0,
            height: 40.0,
            health: 250.0,
        };
        let area = DefenseArea::from_spec(DefenseAreaId(3), &spec);
        assert_eq!(area.position, Vec2::new(10.0, 20.0));
        assert_eq!(area.health.max, 250.0);
        assert_eq!(area.bounds().size(), Vec2::new(30.0, 40.0));
    }
}
