//! Simulation constants and tuning parameters.

/// Nominal frame rate (Hz). All speeds are units per frame.
pub const TICK_RATE: u32 = 60;

// --- Projectiles ---

/// Projectile collision/draw radius.
pub const PROJECTILE_RADIUS: f64 = 3.0;

/// Projectile speed when a weapon does not override it (units per frame).
pub const DEFAULT_PROJECTILE_SPEED: f64 = 5.0;

// --- Machine gun ---

pub const MACHINE_GUN_RANGE: f64 = 150.0;
pub const MACHINE_GUN_DAMAGE: f64 = 20.0;
/// Frames between shots.
pub const MACHINE_GUN_ATTACK_SPEED: u32 = 60;
pub const MACHINE_GUN_PROJECTILE_SPEED: f64 = DEFAULT_PROJECTILE_SPEED;
pub const MACHINE_GUN_SPLASH_RADIUS: f64 = 0.0;
pub const MACHINE_GUN_COST: u32 = 100;
pub const MACHINE_GUN_FOOTPRINT: f64 = 30.0;

// --- Cannon ---

pub const CANNON_RANGE: f64 = 120.0;
pub const CANNON_DAMAGE: f64 = 40.0;
/// Frames between shots.
pub const CANNON_ATTACK_SPEED: u32 = 180;
pub const CANNON_PROJECTILE_SPEED: f64 = 4.0;
pub const CANNON_SPLASH_RADIUS: f64 = 50.0;
pub const CANNON_COST: u32 = 250;
pub const CANNON_FOOTPRINT: f64 = 40.0;

// --- Structures ---

pub const BASE_SIZE: f64 = 40.0;
pub const BASE_COST: u32 = 50;

pub const WALL_SIZE: f64 = 40.0;
pub const WALL_HEALTH: f64 = 200.0;
pub const WALL_COST: u32 = 20;

pub const DEFENSE_AREA_HEALTH: f64 = 1000.0;

// --- Enemies ---

pub const GRUNT_SPEED: f64 = 1.0;
pub const GRUNT_HEALTH: f64 = 100.0;
pub const GRUNT_SIZE: f64 = 20.0;
pub const GRUNT_REWARD: u32 = 10;

pub const TANK_SPEED: f64 = 0.5;
pub const TANK_HEALTH: f64 = 400.0;
pub const TANK_SIZE: f64 = 30.0;
pub const TANK_REWARD: u32 = 50;

/// Health removed from a wall or defense area per frame of enemy contact.
/// Identical for every enemy kind.
pub const ENEMY_STRUCTURE_DAMAGE_PER_FRAME: f64 = 1.0;

// --- Health bars ---

pub const WALL_HEALTH_BAR_HEIGHT: f64 = 5.0;
pub const WALL_HEALTH_BAR_OFFSET: f64 = 10.0;

pub const DEFENSE_AREA_HEALTH_BAR_HEIGHT: f64 = 8.0;
pub const DEFENSE_AREA_HEALTH_BAR_OFFSET: f64 = 15.0;
pub const DEFENSE_AREA_LINE_WIDTH: f64 = 2.0;

pub const ENEMY_HEALTH_BAR_HEIGHT: f64 = 5.0;
pub const ENEMY_HEALTH_BAR_OFFSET: f64 = 7.0;

/// Line width used for weapon range circles.
pub const RANGE_CIRCLE_LINE_WIDTH: f64 = 1.0;

// --- Economy ---

/// Gold available at mission start when a scenario does not specify it.
pub const DEFAULT_STARTING_GOLD: u32 = 300;
