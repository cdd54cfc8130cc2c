//! Simulation constants and tuning parameters.
//!
//! All distances are world units (one tile = 64 units), all durations are
//! ticks, all speeds are units per tick.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

// --- Play field ---

/// Visible play-field width.
pub const SCREEN_WIDTH: f64 = 1280.0;

/// Visible play-field height. A player whose top edge passes this falls out.
pub const SCREEN_HEIGHT: f64 = 720.0;

/// Horizontal extent of every level.
pub const WORLD_WIDTH: f64 = 9000.0;

/// Distance of the goal line from the right edge of the world.
pub const GOAL_MARGIN: f64 = 500.0;

/// Edge length of one grid cell.
pub const TILE_SIZE: f64 = 64.0;

/// Downward acceleration applied every tick.
pub const GRAVITY: f64 = 0.8;

// --- Camera ---

/// Fraction of the remaining distance the camera covers each tick.
pub const CAMERA_SMOOTHING: f64 = 0.08;

// --- Player ---

pub const PLAYER_MAX_HEALTH: i32 = 5;

/// Spawn point (top-left of the hero box) used for every level.
pub const PLAYER_SPAWN_X: f64 = 200.0;
pub const PLAYER_SPAWN_Y: f64 = SCREEN_HEIGHT - 300.0;

pub const HERO_WIDTH: f64 = 60.0;
pub const HERO_HEIGHT: f64 = 90.0;
pub const VEHICLE_WIDTH: f64 = 100.0;
pub const VEHICLE_HEIGHT: f64 = 50.0;

pub const HERO_SPEED: f64 = 6.0;
pub const VEHICLE_SPEED: f64 = 10.0;

/// Vertical velocity set by a jump.
pub const JUMP_IMPULSE: f64 = -16.0;

/// Ticks an early jump press stays armed.
pub const JUMP_BUFFER_TICKS: u32 = 5;

/// Ticks after leaving the ground during which a jump still succeeds.
pub const COYOTE_TICKS: u32 = 6;

pub const WEAPON_COOLDOWN_TICKS: u32 = 15;
pub const WEAPON_COOLDOWN_BOOSTED_TICKS: u32 = 8;

pub const PLAYER_INVINCIBILITY_TICKS: u32 = 60;

/// Length of the Hero <-> Vehicle transformation sequence.
pub const TRANSFORM_DURATION_TICKS: u32 = 30;

/// Lockout after a transformation completes.
pub const TRANSFORM_COOLDOWN_TICKS: u32 = 30;

/// Duration of the boosted weapon after a weapon pickup.
pub const POWERUP_DURATION_TICKS: u32 = 600;

pub const HEALTH_POWERUP_AMOUNT: i32 = 2;

/// Player animation advances every N ticks while moving.
pub const PLAYER_ANIMATION_INTERVAL: u32 = 4;
pub const PLAYER_FRAME_COUNT: u32 = 8;

pub const STARTING_LIVES: u32 = 3;

// --- Projectiles ---

pub const PLAYER_SHOT_SPEED: f64 = 5.0;
pub const PLAYER_SHOT_WIDTH: f64 = 25.0;
pub const PLAYER_SHOT_HEIGHT: f64 = 12.0;
/// Muzzle offset ahead of the player centre.
pub const PLAYER_MUZZLE_OFFSET: f64 = 30.0;

pub const HOSTILE_SHOT_SPEED: f64 = 6.0;
pub const HOSTILE_SHOT_SIZE: f64 = 12.0;

/// Culling window around the camera: behind, ahead and vertical slack.
pub const CULL_MARGIN_BEHIND: f64 = 500.0;
pub const CULL_MARGIN_AHEAD: f64 = 100.0;
pub const CULL_MARGIN_VERTICAL: f64 = 100.0;

pub const STING_SPEED: f64 = 8.0;
pub const HEAVY_BLAST_SPEED: f64 = 4.0;
pub const HEAVY_BLAST_DAMAGE: i32 = 2;
pub const HONEY_FALL_SPEED: f64 = 5.0;
pub const BLADE_SPEED: f64 = 12.0;

// --- Enemies ---

pub const ENEMY_BASE_HEALTH: i32 = 3;
pub const BEETLE_HEALTH: i32 = 10;

/// Ground sensor: reach ahead of the leading edge, drop below the feet, size.
pub const SENSOR_REACH: f64 = 10.0;
pub const SENSOR_DROP: f64 = 5.0;
pub const SENSOR_SIZE: f64 = 2.0;

pub const ENEMY_ANIMATION_INTERVAL: u32 = 6;

pub const CATERPILLAR_TRAIL_INTERVAL: u32 = 60;
pub const SCORPION_FIRE_INTERVAL: u32 = 100;
pub const BEETLE_FIRE_INTERVAL: u32 = 140;
pub const BEE_DROP_INTERVAL: u32 = 60;
pub const MANTIS_FIRE_INTERVAL: u32 = 80;

/// Scorpion skitter cycle: dash for the first part, stop for the rest.
pub const SCORPION_CYCLE_TICKS: u32 = 60;
pub const SCORPION_DASH_TICKS: u32 = 40;

/// Beetle cycle: freeze for the first part, dash for the rest.
pub const BEETLE_CYCLE_TICKS: u32 = 40;
pub const BEETLE_FREEZE_TICKS: u32 = 10;

/// Bee drops honey only when horizontally within this distance of the player.
pub const BEE_ALIGN_RANGE: f64 = 50.0;
pub const BEE_HOVER_AMPLITUDE: f64 = 2.0;
/// Radians per tick of the bee hover wave.
pub const BEE_HOVER_FREQUENCY: f64 = 0.083;

pub const MANTIS_STRIKE_ZONE: f64 = 60.0;
pub const MANTIS_LEAP_RANGE: f64 = 400.0;
pub const MANTIS_FIRE_RANGE: f64 = 500.0;
pub const MANTIS_LEAP_VY: f64 = -15.0;
pub const MANTIS_LEAP_VX: f64 = 10.0;
pub const MANTIS_JUMP_COOLDOWN_TICKS: u32 = 120;
/// Per-tick growth of airborne horizontal speed.
pub const MANTIS_AIR_DASH_FACTOR: f64 = 1.95;
/// Ceiling on airborne horizontal speed.
pub const MANTIS_MAX_AIR_SPEED: f64 = 24.0;

// --- Boss ---

pub const BOSS_MAX_HEALTH: i32 = 100;
pub const BOSS_WIDTH: f64 = 250.0;
pub const BOSS_HEIGHT: f64 = 200.0;
/// Boss box is placed this far up-left of its anchor cell.
pub const BOSS_ANCHOR_OFFSET_X: f64 = 125.0;
pub const BOSS_ANCHOR_OFFSET_Y: f64 = 150.0;

pub const BOSS_PHASE_2_THRESHOLD: f64 = 0.66;
pub const BOSS_PHASE_3_THRESHOLD: f64 = 0.33;

pub const BOSS_PHASE_1_COOLDOWN: u32 = 80;
pub const BOSS_PHASE_2_COOLDOWN: u32 = 60;
pub const BOSS_PHASE_3_COOLDOWN: u32 = 40;

pub const BOSS_INVINCIBILITY_TICKS: u32 = 10;

pub const BOSS_FLOAT_FREQUENCY: f64 = 0.05;
pub const BOSS_FLOAT_AMPLITUDE: f64 = 1.0;
pub const BOSS_DRIFT_FREQUENCY: f64 = 0.02;
pub const BOSS_DRIFT_AMPLITUDE: f64 = 2.0;

/// Web fan angles in degrees.
pub const BOSS_WEB_ANGLES_DEG: [f64; 5] = [-30.0, -15.0, 0.0, 15.0, 30.0];
pub const BOSS_WEB_VERTICAL_SCALE: f64 = 3.0;
pub const BOSS_BURST_COUNT: usize = 5;
pub const BOSS_BURST_VERTICAL_SCALE: f64 = 2.0;
pub const BOSS_BURST_DAMAGE: i32 = 2;
pub const BOSS_AIMED_COUNT: usize = 3;
pub const BOSS_AIMED_DAMAGE: i32 = 3;
/// Spacing between the shots of one aimed burst.
pub const BOSS_AIMED_SPACING: f64 = 20.0;
/// Volleys leave the boss this far below its centre.
pub const BOSS_MUZZLE_DROP: f64 = 20.0;

pub const BOSS_ANIMATION_INTERVAL: u32 = 3;
pub const BOSS_FRAME_COUNT: u32 = 12;

// --- Level furniture ---

pub const MOVING_PLATFORM_COUNT: usize = 3;
pub const MOVING_PLATFORM_FIRST_X: f64 = 500.0;
pub const MOVING_PLATFORM_SPACING: f64 = 800.0;
pub const MOVING_PLATFORM_FIRST_Y: f64 = SCREEN_HEIGHT - 200.0;
pub const MOVING_PLATFORM_STEP_Y: f64 = 100.0;
pub const MOVING_PLATFORM_SPEED: f64 = 2.0;
pub const MOVING_PLATFORM_RANGE: f64 = 200.0;

/// Hits a breakable block absorbs before it shatters.
pub const BREAKABLE_HITS: i32 = 3;

pub const POWERUP_SIZE: f64 = 40.0;
pub const POWERUP_INSET: f64 = 12.0;
pub const POWERUP_BOB_SPEED: f64 = 0.1;
pub const POWERUP_BOB_AMPLITUDE: f64 = 2.0;

pub const STICKY_TRAIL_LIFETIME: u32 = 300;
pub const STICKY_TRAIL_WIDTH: f64 = 40.0;
pub const STICKY_TRAIL_HEIGHT: f64 = 10.0;
/// Chance per contact tick that a sticky trail bites.
pub const STICKY_TRAIL_DAMAGE_CHANCE: f64 = 0.1;

/// Horizontal velocity multiplier from goo or web hits.
pub const SLOW_FACTOR: f64 = 0.3;

// --- Scoring ---

pub const SCORE_SHOT_FIRED: i64 = 5;
pub const SCORE_ENEMY_KILL: i64 = 100;
pub const SCORE_BOSS_HIT: i64 = 50;
pub const SCORE_CONTACT_PENALTY: i64 = -50;
pub const SCORE_PROJECTILE_PENALTY: i64 = -25;
pub const SCORE_LEVEL_BONUS: i64 = 1000;

// --- Particles ---

pub const PARTICLE_GRAVITY: f64 = 0.1;
pub const PARTICLE_DRAG_X: f64 = 0.98;
pub const PARTICLE_DRAG_Y: f64 = 0.99;
pub const KILL_PARTICLES: usize = 25;
pub const PICKUP_PARTICLES: usize = 30;
pub const IMPACT_PARTICLES: usize = 5;
pub const BOSS_HIT_PARTICLES: usize = 10;
