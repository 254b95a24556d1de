//! Entity collections owned by the engine, plus handle allocation.
//!
//! Every per-entity API takes these collections explicitly; `Battlefield`
//! only groups them so the engine can pass them around.

use rampart_core::types::*;

use crate::base::Base;
use crate::enemy::Enemy;
use crate::projectile::Projectile;
use crate::structures::{DefenseArea, Wall};

#[derive(Debug, Clone, Default)]
pub struct Battlefield {
    /// Routes indexed by wave entries.
    pub paths: Vec<Path>,
    /// In spawn order; targeting and collision rely on this order.
    pub enemies: Vec<Enemy>,
    pub walls: Vec<Wall>,
    pub bases: Vec<Base>,
    pub defense_areas: Vec<DefenseArea>,
    pub projectiles: Vec<Projectile>,
}

impl Battlefield {
    pub fn enemy(&self, id: EnemyId) -> Option<&Enemy> {
        crate::enemy::find_enemy(&self.enemies, id)
    }

    pub fn wall(&self, id: WallId) -> Option<&Wall> {
        self.walls.iter().find(|w| w.id == id)
    }

    pub fn base(&self, id: BaseId) -> Option<&Base> {
        self.bases.iter().find(|b| b.id == id)
    }

    pub fn base_mut(&mut self, id: BaseId) -> Option<&mut Base> {
        self.bases.iter_mut().find(|b| b.id == id)
    }

    pub fn defense_area(&self, id: DefenseAreaId) -> Option<&DefenseArea> {
        self.defense_areas.iter().find(|a| a.id == id)
    }
}

/// Monotonic handle counters. Handles are never reused.
#[derive(Debug, Clone, Default)]
pub struct IdAllocator {
    next_enemy: u32,
    next_wall: u32,
    next_base: u32,
    next_area: u32,
}

impl IdAllocator {
    pub fn enemy(&mut self) -> EnemyId {
        let id = EnemyId(self.next_enemy);
        self.next_enemy += 1;
        id
    }

    pub fn wall(&mut self) -> WallId {
        let id = WallId(self.next_wall);
        self.next_wall += 1;
        id
    }

    pub fn base(&mut self) -> BaseId {
        let id = BaseId(self.next_base);
        self.next_base += 1;
        id
    }

    pub fn defense_area(&mut self) -> DefenseAreaId {
        let id = DefenseAreaId(self.next_area);
        self.next_area += 1;
        id
    }
}
