//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per host frame, driven only by `tick`
//! - Seeded RNG only
//! - Stable iteration order (obstacles kept in spawn order)
//! - No rendering or platform dependencies

pub mod bounds;
pub mod collision;
pub mod obstacles;
pub mod player;
pub mod state;
pub mod tick;

pub use bounds::Bounds;
pub use collision::{check_collision, first_collision, hitbox, hitboxes_overlap};
pub use obstacles::{Obstacle, ObstacleKind, ObstacleSpawner};
pub use player::{JumpPlayer, LanePlayer, LaneState, Player, PlayerController};
pub use state::{GameEvent, GamePhase, GameState, GameStats, ObstacleView, Snapshot};
pub use tick::{MAX_FRAME_MS, TickInput, tick};
