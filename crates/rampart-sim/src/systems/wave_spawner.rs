//! Wave spawning system: releases scheduled enemies onto their paths.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use rampart_core::config::Presets;
use rampart_core::enums::EnemyKind;
use rampart_core::events::GameEvent;
use rampart_core::types::DefenseAreaId;

use crate::battlefield::{Battlefield, IdAllocator};
use crate::economy::ScoreState;
use crate::world_setup;

/// A group of identical enemies released on one path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaveEntry {
    /// Frame at which the first enemy of this group spawns.
    pub spawn_at_frame: u64,
    pub kind: EnemyKind,
    pub count: u32,
    /// Index into the scenario's path list.
    #[serde(default)]
    pub path: usize,
    /// Frames between consecutive spawns within the group.
    #[serde(default)]
    pub interval_frames: u64,
    /// How many of `count` have been spawned so far.
    #[serde(skip)]
    pub emitted: u32,
}

impl WaveEntry {
    pub fn new(
        spawn_at_frame: u64,
        kind: EnemyKind,
        count: u32,
        path: usize,
        interval_frames: u64,
    ) -> Self {
        Self {
            spawn_at_frame,
            kind,
            count,
            path,
            interval_frames,
            emitted: 0,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.emitted >= self.count
    }

    /// Frame at which the next enemy of this group is due.
    fn next_due_frame(&self) -> u64 {
        self.spawn_at_frame + self.emitted as u64 * self.interval_frames
    }
}

/// The complete wave schedule for a mission.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WaveSchedule {
    pub waves: Vec<WaveEntry>,
}

impl WaveSchedule {
    /// Total number of enemies across all waves.
    pub fn total_enemies(&self) -> u32 {
        self.waves.iter().map(|w| w.count).sum()
    }

    /// True once every enemy in the schedule has been spawned.
    pub fn is_exhausted(&self) -> bool {
        self.waves.iter().all(WaveEntry::is_complete)
    }
}

/// Spawn every enemy whose due frame has arrived.
#[allow(clippy::too_many_arguments)]
pub fn run(
    schedule: &mut WaveSchedule,
    current_frame: u64,
    battlefield: &mut Battlefield,
    ids: &mut IdAllocator,
    presets: &Presets,
    target_area: DefenseAreaId,
    events: &mut Vec<GameEvent>,
    score: &mut ScoreState,
) {
    for (index, wave) in schedule.waves.iter_mut().enumerate() {
        if wave.emitted == 0 && wave.count > 0 && current_frame >= wave.spawn_at_frame {
            info!(
                "wave {index}: releasing {} x {:?} on path {}",
                wave.count, wave.kind, wave.path
            );
        }

        while !wave.is_complete() && current_frame >= wave.next_due_frame() {
            wave.emitted += 1;
            let Some(id) = world_setup::spawn_enemy(
                battlefield,
                ids,
                presets,
                wave.kind,
                wave.path,
                target_area,
            ) else {
                debug!("wave {index}: path {} missing, spawn skipped", wave.path);
                continue;
            };

            score.enemies_spawned += 1;
            if let Some(enemy) = battlefield.enemy(id) {
                events.push(GameEvent::EnemySpawned {
                    enemy: id,
                    kind: enemy.kind,
                    position: enemy.position,
                });
            }
        }
    }
}
