//! Jungle Dash - an endless jungle runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (player movement, obstacles, collisions, session)
//! - `settings`: Data-driven game configuration (difficulty, movement mode, tuning)
//! - `platform`: Browser/native host glue (key mapping, wasm bindings)

pub mod platform;
pub mod settings;
pub mod sim;

pub use settings::{Difficulty, GameConfig, MovementMode};

/// Game configuration constants
///
/// These are the defaults baked into `GameConfig`; sprite-dependent sizes
/// match the artwork the web host draws.
pub mod consts {
    /// Side length of an obstacle sprite (square)
    pub const OBSTACLE_SIZE: f32 = 200.0;
    /// Horizontal scroll per tick for obstacles on Easy
    pub const OBSTACLE_SPEED: f32 = 8.0;

    /// Side length of the player sprite (square)
    pub const PLAYER_SIZE: f32 = 300.0;
    /// Fixed horizontal position of the player's left edge
    pub const PLAYER_X: f32 = 150.0;

    /// Hitbox shrink applied to every side of player and obstacle sprites
    pub const HITBOX_PADDING: f32 = 40.0;

    /// Number of lanes in the lane-switch variant
    pub const LANE_COUNT: usize = 3;
    /// Lane the player starts in (middle)
    pub const START_LANE: usize = 1;
    /// Per-tick Y step while switching lanes
    pub const LANE_MOVE_SPEED: f32 = 15.0;

    /// Downward acceleration per tick (jump variant)
    pub const GRAVITY: f32 = 0.6;
    /// Initial upward velocity of a jump (negative = up)
    ///
    /// With `GRAVITY` this keeps the player's hitbox above an obstacle's for
    /// longer than the two hitboxes take to scroll past each other.
    pub const JUMP_POWER: f32 = -20.0;
    /// Gap between the bottom of the field and the ground line
    pub const GROUND_MARGIN: f32 = 40.0;

    /// Spawn interval before the first randomized redraw (ms)
    pub const INITIAL_SPAWN_INTERVAL_MS: f64 = 2000.0;
    /// Randomized spawn interval range on Easy (ms)
    pub const SPAWN_INTERVAL_MIN_MS: f64 = 1500.0;
    pub const SPAWN_INTERVAL_MAX_MS: f64 = 2500.0;

    /// Score awarded per elapsed interval of play
    pub const SCORE_INTERVAL_MS: f64 = 100.0;
}

/// Y coordinates of the lane rows for a sprite of `sprite_size`
///
/// The field is cut into `LANE_COUNT` horizontal bands and the sprite is
/// centred vertically in each one. Player and obstacles share this layout so
/// that a sprite in lane `n` lines up with an obstacle in lane `n`.
pub fn lane_rows(field_height: f32, sprite_size: f32) -> [f32; consts::LANE_COUNT] {
    let lane_height = field_height / consts::LANE_COUNT as f32;
    std::array::from_fn(|lane| lane_height * (lane as f32 + 0.5) - sprite_size / 2.0)
}

/// Y coordinate at which a sprite of `sprite_size` rests on the ground line
#[inline]
pub fn ground_row(field_height: f32, sprite_size: f32) -> f32 {
    field_height - consts::GROUND_MARGIN - sprite_size
}
