//! Scenario definitions: built-in missions and JSON scenario files.
//!
//! A scenario supplies everything the core treats as external input: paths,
//! defense areas, the wave schedule, starting gold, pre-placed structures and
//! preset overrides. `ScenarioFile` is the raw, serde-facing form; `Scenario`
//! is the validated form the engine consumes.

use std::fs;

use serde::{Deserialize, Serialize};

use rampart_core::config::{DefenseAreaSpec, Presets};
use rampart_core::constants::{DEFAULT_STARTING_GOLD, TICK_RATE};
use rampart_core::enums::{EnemyKind, ScenarioId, SplashPolicy, WeaponKind};
use rampart_core::error::ConfigError;
use rampart_core::types::{DefenseAreaId, Path, Vec2, Waypoint};

use crate::systems::wave_spawner::{WaveEntry, WaveSchedule};

/// Base placed before the mission starts, optionally already armed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrebuiltBaseFile {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub module: Option<WeaponKind>,
}

/// Scenario as written on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioFile {
    pub name: String,
    pub starting_gold: u32,
    pub paths: Vec<Vec<Waypoint>>,
    pub defense_areas: Vec<DefenseAreaSpec>,
    /// Index into `defense_areas` of the area every spawned enemy attacks.
    pub target_area: usize,
    pub waves: Vec<WaveEntry>,
    pub splash_policy: SplashPolicy,
    pub walls: Vec<Waypoint>,
    pub bases: Vec<PrebuiltBaseFile>,
    pub presets: Presets,
}

impl Default for ScenarioFile {
    fn default() -> Self {
        Self {
            name: "custom".to_string(),
            starting_gold: DEFAULT_STARTING_GOLD,
            paths: Vec::new(),
            defense_areas: Vec::new(),
            target_area: 0,
            waves: Vec::new(),
            splash_policy: SplashPolicy::default(),
            walls: Vec::new(),
            bases: Vec::new(),
            presets: Presets::default(),
        }
    }
}

impl ScenarioFile {
    /// Raw data for a built-in scenario.
    pub fn builtin(id: ScenarioId) -> Self {
        match id {
            ScenarioId::Skirmish => build_skirmish(),
            ScenarioId::Siege => build_siege(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PrebuiltBase {
    pub position: Vec2,
    pub module: Option<WeaponKind>,
}

/// Validated scenario.
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub name: String,
    pub starting_gold: u32,
    pub paths: Vec<Path>,
    pub defense_areas: Vec<DefenseAreaSpec>,
    /// Areas receive handles in list order, starting from zero.
    pub target_area: DefenseAreaId,
    pub schedule: WaveSchedule,
    pub splash_policy: SplashPolicy,
    pub walls: Vec<Vec2>,
    pub bases: Vec<PrebuiltBase>,
    pub presets: Presets,
}

impl Scenario {
    pub fn builtin(id: ScenarioId) -> Result<Self, ConfigError> {
        Self::from_file(ScenarioFile::builtin(id))
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let file: ScenarioFile = serde_json::from_str(json)?;
        Self::from_file(file)
    }

    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Check invariants and convert raw waypoints into shared paths.
    pub fn from_file(file: ScenarioFile) -> Result<Self, ConfigError> {
        if file.defense_areas.is_empty() {
            return Err(ConfigError::NoDefenseArea);
        }
        let target_area = DefenseAreaId(file.target_area as u32);
        if file.target_area >= file.defense_areas.len() {
            return Err(ConfigError::UnknownDefenseArea(target_area));
        }
        for area in &file.defense_areas {
            area.validate()?;
        }
        file.presets.validate()?;

        let paths = file
            .paths
            .iter()
            .map(|waypoints| Path::from_waypoints(waypoints))
            .collect::<Result<Vec<_>, _>>()?;

        if let Some(wave) = file.waves.iter().find(|w| w.path >= paths.len()) {
            return Err(ConfigError::UnknownPath {
                index: wave.path,
                available: paths.len(),
            });
        }

        Ok(Self {
            name: file.name,
            starting_gold: file.starting_gold,
            paths,
            defense_areas: file.defense_areas,
            target_area,
            schedule: WaveSchedule { waves: file.waves },
            splash_policy: file.splash_policy,
            walls: file.walls.into_iter().map(Vec2::from).collect(),
            bases: file
                .bases
                .into_iter()
                .map(|b| PrebuiltBase {
                    position: Vec2::new(b.x, b.y),
                    module: b.module,
                })
                .collect(),
            presets: file.presets,
        })
    }
}

fn secs_to_frames(secs: f64) -> u64 {
    (secs * TICK_RATE as f64) as u64
}

fn route(points: &[(f64, f64)]) -> Vec<Waypoint> {
    points.iter().map(|&(x, y)| Waypoint::new(x, y)).collect()
}

/// Skirmish: "Single Lane"
/// One winding path, grunts throughout, two tanks in the last wave.
/// One pre-armed machine gun covers the first bend.
fn build_skirmish() -> ScenarioFile {
    ScenarioFile {
        name: "Skirmish".to_string(),
        starting_gold: 300,
        paths: vec![route(&[
            (0.0, 300.0),
            (200.0, 300.0),
            (200.0, 100.0),
            (500.0, 100.0),
            (500.0, 400.0),
            (700.0, 400.0),
        ])],
        defense_areas: vec![DefenseAreaSpec {
            x: 750.0,
            y: 400.0,
            width: 100.0,
            height: 150.0,
            ..Default::default()
        }],
        waves: vec![
            WaveEntry::new(0, EnemyKind::Grunt, 5, 0, secs_to_frames(1.0)),
            WaveEntry::new(secs_to_frames(10.0), EnemyKind::Grunt, 8, 0, secs_to_frames(0.75)),
            WaveEntry::new(secs_to_frames(20.0), EnemyKind::Tank, 2, 0, secs_to_frames(2.0)),
            WaveEntry::new(secs_to_frames(22.0), EnemyKind::Grunt, 6, 0, secs_to_frames(0.5)),
        ],
        bases: vec![PrebuiltBaseFile {
            x: 300.0,
            y: 200.0,
            module: Some(WeaponKind::MachineGun),
        }],
        ..Default::default()
    }
}

/// Siege: "Converging Columns"
/// Two lanes merge before a walled choke point. Tank-heavy.
fn build_siege() -> ScenarioFile {
    ScenarioFile {
        name: "Siege".to_string(),
        starting_gold: 500,
        paths: vec![
            route(&[(0.0, 100.0), (300.0, 100.0), (300.0, 300.0), (650.0, 300.0)]),
            route(&[(0.0, 500.0), (300.0, 500.0), (300.0, 300.0), (650.0, 300.0)]),
        ],
        defense_areas: vec![DefenseAreaSpec {
            x: 720.0,
            y: 300.0,
            width: 120.0,
            height: 160.0,
            health: 1500.0,
        }],
        waves: vec![
            WaveEntry::new(0, EnemyKind::Grunt, 4, 0, secs_to_frames(1.0)),
            WaveEntry::new(0, EnemyKind::Grunt, 4, 1, secs_to_frames(1.0)),
            WaveEntry::new(secs_to_frames(12.0), EnemyKind::Tank, 2, 0, secs_to_frames(3.0)),
            WaveEntry::new(secs_to_frames(12.0), EnemyKind::Tank, 2, 1, secs_to_frames(3.0)),
            WaveEntry::new(secs_to_frames(25.0), EnemyKind::Grunt, 10, 0, secs_to_frames(0.5)),
            WaveEntry::new(secs_to_frames(25.0), EnemyKind::Tank, 3, 1, secs_to_frames(2.5)),
        ],
        walls: vec![Waypoint::new(560.0, 300.0)],
        bases: vec![
            PrebuiltBaseFile {
                x: 250.0,
                y: 300.0,
                module: Some(WeaponKind::Cannon),
            },
            PrebuiltBaseFile {
                x: 400.0,
                y: 220.0,
                module: Some(WeaponKind::MachineGun),
            },
        ],
        ..Default::default()
    }
}
