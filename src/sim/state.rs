//! Game session state
//!
//! One `GameState` per play session: it owns the player, the obstacle
//! spawner and the run statistics. The host owns the `GameState` and hands
//! it to `tick` once per frame.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::bounds::Bounds;
use super::obstacles::{ObstacleKind, ObstacleSpawner};
use super::player::{Player, PlayerController};
use crate::settings::{GameConfig, MovementMode};

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Created or restarted; the next tick starts the run
    Ready,
    /// Active gameplay
    Playing,
    /// Simulation frozen; simulated time does not advance
    Paused,
    /// Player hit an obstacle
    GameOver,
}

/// Run statistics
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameStats {
    /// One point per `SCORE_INTERVAL_MS` of play
    pub score: u64,
    /// World scroll covered so far
    pub distance: f32,
    /// Obstacles that left the field without a hit
    pub obstacles_avoided: u32,
    /// Ticks simulated while playing
    pub ticks: u64,
    /// Host timestamp of the first tick (ms)
    pub start_time: f64,
    /// Simulated play time, excluding pauses (ms)
    pub duration_ms: f64,
}

/// Notable things that happened during a tick, drained by the host
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Spawned { id: u32 },
    Avoided { count: u32 },
    GameOver { score: u64, obstacle_id: u32 },
}

/// Obstacle as seen by the renderer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObstacleView {
    pub id: u32,
    pub kind: ObstacleKind,
    pub bounds: Bounds,
}

/// Everything the host needs to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub player: Bounds,
    /// Running (true) or jumping/switching (false) sprite
    pub grounded: bool,
    pub lane: Option<usize>,
    pub obstacles: Vec<ObstacleView>,
    pub score: u64,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed of the obstacle RNG
    pub seed: u64,
    pub config: GameConfig,
    pub phase: GamePhase,
    pub player: Player,
    pub spawner: ObstacleSpawner,
    pub stats: GameStats,
    /// Play field size
    pub field: Vec2,
    pub(crate) events: Vec<GameEvent>,
    /// Host timestamp of the previous tick (ms)
    pub(crate) last_time: Option<f64>,
    /// Leftover time toward the next score point (ms)
    pub(crate) score_accumulator: f64,
}

impl GameState {
    /// Create a session for a field of `width` x `height`
    pub fn new(config: GameConfig, width: f32, height: f32, seed: u64) -> Self {
        let player = Player::new(&config, height);
        let spawner = ObstacleSpawner::new(&config, width, height, seed);
        log::info!(
            "New session: {} / {} (seed {})",
            config.difficulty.as_str(),
            config.movement.as_str(),
            seed
        );
        Self {
            seed,
            config,
            phase: GamePhase::Ready,
            player,
            spawner,
            stats: GameStats::default(),
            field: Vec2::new(width, height),
            events: Vec::new(),
            last_time: None,
            score_accumulator: 0.0,
        }
    }

    pub fn movement(&self) -> MovementMode {
        self.player.mode()
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Apply a new field size; the player returns to rest
    pub fn resize(&mut self, width: f32, height: f32) {
        self.field = Vec2::new(width, height);
        self.spawner.update_canvas_size(width, height);
        self.player.reset(height);
        log::debug!("Field resized to {}x{}", width, height);
    }

    /// Start a fresh run on the same field; the RNG stream carries on
    pub fn restart(&mut self) {
        self.spawner.reset();
        self.player.reset(self.field.y);
        self.stats = GameStats::default();
        self.events.clear();
        self.last_time = None;
        self.score_accumulator = 0.0;
        self.phase = GamePhase::Ready;
        log::info!("Session restarted");
    }

    /// Take the events produced since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Render-facing view of the current frame
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase,
            player: self.player.bounds(),
            grounded: self.player.is_grounded(),
            lane: self.player.current_lane(),
            obstacles: self
                .spawner
                .obstacles()
                .iter()
                .map(|o| ObstacleView {
                    id: o.id,
                    kind: o.kind,
                    bounds: o.bounds(),
                })
                .collect(),
            score: self.stats.score,
        }
    }
}
