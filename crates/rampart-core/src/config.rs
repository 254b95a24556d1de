//! Per-entity tunables with documented defaults.
//!
//! Every struct deserializes with `#[serde(default)]`, so scenario files only
//! need to name the fields they override.

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize};

use crate::constants::*;
use crate::draw::Color;
use crate::enums::{EnemyKind, WeaponKind};
use crate::error::ConfigError;

/// Enemy stats and appearance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyPreset {
    /// Units per frame.
    pub speed: f64,
    pub health: f64,
    pub width: f64,
    pub height: f64,
    /// Gold paid out when killed.
    pub reward: u32,
    pub color: Color,
}

impl Default for EnemyPreset {
    fn default() -> Self {
        Self::for_kind(EnemyKind::Grunt)
    }
}

impl EnemyPreset {
    pub fn for_kind(kind: EnemyKind) -> Self {
        match kind {
            EnemyKind::Grunt => Self {
                speed: GRUNT_SPEED,
                health: GRUNT_HEALTH,
                width: GRUNT_SIZE,
                height: GRUNT_SIZE,
                reward: GRUNT_REWARD,
                color: Color::RED,
            },
            EnemyKind::Tank => Self {
                speed: TANK_SPEED,
                health: TANK_HEALTH,
                width: TANK_SIZE,
                height: TANK_SIZE,
                reward: TANK_REWARD,
                color: Color::PURPLE,
            },
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("enemy speed", self.speed)?;
        positive("enemy health", self.health)?;
        positive("enemy width", self.width)?;
        positive("enemy height", self.height)
    }
}

/// Weapon module parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeaponSpec {
    pub range: f64,
    pub damage: f64,
    /// Cooldown period in frames.
    pub attack_speed: u32,
    pub projectile_speed: f64,
    pub splash_radius: f64,
    pub cost: u32,
    /// Side length of the square drawn on the base.
    pub footprint: f64,
    pub color: Color,
    pub range_color: Color,
}

impl Default for WeaponSpec {
    fn default() -> Self {
        Self::for_kind(WeaponKind::MachineGun)
    }
}

impl WeaponSpec {
    pub fn for_kind(kind: WeaponKind) -> Self {
        match kind {
            WeaponKind::MachineGun => Self {
                range: MACHINE_GUN_RANGE,
                damage: MACHINE_GUN_DAMAGE,
                attack_speed: MACHINE_GUN_ATTACK_SPEED,
                projectile_speed: MACHINE_GUN_PROJECTILE_SPEED,
                splash_radius: MACHINE_GUN_SPLASH_RADIUS,
                cost: MACHINE_GUN_COST,
                footprint: MACHINE_GUN_FOOTPRINT,
                color: Color::BLUE,
                range_color: Color::BLUE_RANGE,
            },
            WeaponKind::Cannon => Self {
                range: CANNON_RANGE,
                damage: CANNON_DAMAGE,
                attack_speed: CANNON_ATTACK_SPEED,
                projectile_speed: CANNON_PROJECTILE_SPEED,
                splash_radius: CANNON_SPLASH_RADIUS,
                cost: CANNON_COST,
                footprint: CANNON_FOOTPRINT,
                color: Color::DARK_GREEN,
                range_color: Color::DARK_GREEN_RANGE,
            },
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("weapon range", self.range)?;
        positive("projectile speed", self.projectile_speed)
    }
}

/// Base platform parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BaseSpec {
    pub size: f64,
    pub cost: u32,
}

impl Default for BaseSpec {
    fn default() -> Self {
        Self {
            size: BASE_SIZE,
            cost: BASE_COST,
        }
    }
}

/// Wall parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WallSpec {
    pub size: f64,
    pub health: f64,
    pub cost: u32,
}

impl Default for WallSpec {
    fn default() -> Self {
        Self {
            size: WALL_SIZE,
            health: WALL_HEALTH,
            cost: WALL_COST,
        }
    }
}

/// Defense area parameters (position is given by the scenario).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefenseAreaSpec {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub health: f64,
}

impl Default for DefenseAreaSpec {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: 100.0,
            height: 100.0,
            health: DEFENSE_AREA_HEALTH,
        }
    }
}

impl DefenseAreaSpec {
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("defense area width", self.width)?;
        positive("defense area height", self.height)?;
        positive("defense area health", self.health)
    }
}

/// One preset per entity type, overridable from scenario files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Presets {
    pub grunt: EnemyPreset,
    #[serde(deserialize_with = "tank_overrides")]
    pub tank: EnemyPreset,
    pub machine_gun: WeaponSpec,
    #[serde(deserialize_with = "cannon_overrides")]
    pub cannon: WeaponSpec,
    pub base: BaseSpec,
    pub wall: WallSpec,
}

impl Default for Presets {
    fn default() -> Self {
        Self {
            grunt: EnemyPreset::for_kind(EnemyKind::Grunt),
            tank: EnemyPreset::for_kind(EnemyKind::Tank),
            machine_gun: WeaponSpec::for_kind(WeaponKind::MachineGun),
            cannon: WeaponSpec::for_kind(WeaponKind::Cannon),
            base: BaseSpec::default(),
            wall: WallSpec::default(),
        }
    }
}

impl Presets {
    pub fn enemy(&self, kind: EnemyKind) -> &EnemyPreset {
        match kind {
            EnemyKind::Grunt => &self.grunt,
            EnemyKind::Tank => &self.tank,
        }
    }

    pub fn weapon(&self, kind: WeaponKind) -> &WeaponSpec {
        match kind {
            WeaponKind::MachineGun => &self.machine_gun,
            WeaponKind::Cannon => &self.cannon,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.grunt.validate()?;
        self.tank.validate()?;
        self.machine_gun.validate()?;
        self.cannon.validate()?;
        positive("base size", self.base.size)?;
        positive("wall size", self.wall.size)?;
        positive("wall health", self.wall.health)
    }
}

fn tank_overrides<'de, D: Deserializer<'de>>(deserializer: D) -> Result<EnemyPreset, D::Error> {
    overlay(EnemyPreset::for_kind(EnemyKind::Tank), deserializer)
}

fn cannon_overrides<'de, D: Deserializer<'de>>(deserializer: D) -> Result<WeaponSpec, D::Error> {
    overlay(WeaponSpec::for_kind(WeaponKind::Cannon), deserializer)
}

/// Apply a partial JSON object on top of `base`. Needed where a field's
/// defaults differ from its type's `Default`.
fn overlay<'de, T, D>(base: T, deserializer: D) -> Result<T, D::Error>
where
    T: Serialize + DeserializeOwned,
    D: Deserializer<'de>,
{
    let overrides = serde_json::Map::<String, serde_json::Value>::deserialize(deserializer)?;
    let mut merged = serde_json::to_value(base).map_err(D::Error::custom)?;
    if let serde_json::Value::Object(fields) = &mut merged {
        fields.extend(overrides);
    }
    serde_json::from_value(merged).map_err(D::Error::custom)
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { field, value })
    }
}
