//! Game configuration
//!
//! Difficulty, movement mode and gameplay tuning. Persisted as JSON in
//! LocalStorage on the web; native builds use defaults unless given JSON.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Difficulty levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" | "med" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Obstacle scroll speed multiplier
    pub fn speed_scale(&self) -> f32 {
        match self {
            Difficulty::Easy => 1.0,
            Difficulty::Medium => 1.375,
            Difficulty::Hard => 1.75,
        }
    }

    /// Spawn interval range in ms (min, max)
    pub fn spawn_interval_range(&self) -> (f64, f64) {
        match self {
            Difficulty::Easy => (SPAWN_INTERVAL_MIN_MS, SPAWN_INTERVAL_MAX_MS),
            Difficulty::Medium => (1200.0, 2000.0),
            Difficulty::Hard => (900.0, 1600.0),
        }
    }
}

/// How the player dodges obstacles; fixed for a whole session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum MovementMode {
    /// Jump over obstacles on a single ground line
    Jump,
    /// Switch between three lanes
    #[default]
    Lanes,
}

impl MovementMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            MovementMode::Jump => "Jump",
            MovementMode::Lanes => "Lanes",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "jump" => Some(MovementMode::Jump),
            "lanes" | "lane" => Some(MovementMode::Lanes),
            _ => None,
        }
    }
}

/// Gameplay configuration for a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub difficulty: Difficulty,
    pub movement: MovementMode,

    // === Sprites ===
    /// Player sprite side length
    pub player_size: f32,
    /// Player's fixed left edge
    pub player_x: f32,
    /// Obstacle sprite side length
    pub obstacle_size: f32,
    /// Hitbox shrink per side
    pub hitbox_padding: f32,

    // === Movement ===
    /// Per-tick lane switch step
    pub lane_move_speed: f32,
    /// Per-tick downward acceleration
    pub gravity: f32,
    /// Initial jump velocity (negative is up)
    pub jump_power: f32,

    /// Fixed RNG seed; a fresh seed per session when absent
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Easy,
            movement: MovementMode::Lanes,

            player_size: PLAYER_SIZE,
            player_x: PLAYER_X,
            obstacle_size: OBSTACLE_SIZE,
            hitbox_padding: HITBOX_PADDING,

            lane_move_speed: LANE_MOVE_SPEED,
            gravity: GRAVITY,
            jump_power: JUMP_POWER,

            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a config for a difficulty and movement mode with default tuning
    pub fn new(difficulty: Difficulty, movement: MovementMode) -> Self {
        Self {
            difficulty,
            movement,
            ..Self::default()
        }
    }

    /// Obstacle scroll per tick at this difficulty
    pub fn obstacle_speed(&self) -> f32 {
        OBSTACLE_SPEED * self.difficulty.speed_scale()
    }

    /// Spawn interval range in ms at this difficulty
    pub fn spawn_interval_range(&self) -> (f64, f64) {
        self.difficulty.spawn_interval_range()
    }

    /// Parse from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut config: Self = serde_json::from_str(json)?;
        config.sanitize();
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Replace out-of-range tuning values with defaults
    pub fn sanitize(&mut self) {
        let defaults = Self::default();

        fn positive(name: &str, value: &mut f32, default: f32) {
            if !value.is_finite() || *value <= 0.0 {
                log::warn!("Config {} = {} is invalid, using {}", name, value, default);
                *value = default;
            }
        }

        positive("player_size", &mut self.player_size, defaults.player_size);
        positive("obstacle_size", &mut self.obstacle_size, defaults.obstacle_size);
        positive("lane_move_speed", &mut self.lane_move_speed, defaults.lane_move_speed);
        positive("gravity", &mut self.gravity, defaults.gravity);

        if !self.player_x.is_finite() {
            log::warn!("Config player_x = {} is invalid, using {}", self.player_x, defaults.player_x);
            self.player_x = defaults.player_x;
        }
        if !self.hitbox_padding.is_finite() || self.hitbox_padding < 0.0 {
            log::warn!(
                "Config hitbox_padding = {} is invalid, using {}",
                self.hitbox_padding,
                defaults.hitbox_padding
            );
            self.hitbox_padding = defaults.hitbox_padding;
        }
        // A jump must go up
        if !self.jump_power.is_finite() || self.jump_power >= 0.0 {
            log::warn!("Config jump_power = {} is invalid, using {}", self.jump_power, defaults.jump_power);
            self.jump_power = defaults.jump_power;
        }
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "jungle_dash_config";

    /// Load config from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(config) => {
                        log::info!("Loaded config from LocalStorage");
                        return config;
                    }
                    Err(e) => log::warn!("Stored config unreadable: {}", e),
                }
            }
        }

        log::info!("Using default config");
        Self::default()
    }

    /// Save config to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = self.to_json() {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Config saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}
