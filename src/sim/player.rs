//! Player movement models
//!
//! Two mutually exclusive variants share the `PlayerController` interface:
//! - `JumpPlayer`: runs along a ground line and jumps under gravity
//! - `LanePlayer`: switches between three horizontal lanes
//!
//! The player never moves horizontally; the world scrolls past instead.
//! Intent methods only record what should happen, and `update` advances
//! exactly one tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::bounds::Bounds;
use crate::consts::{LANE_COUNT, START_LANE};
use crate::settings::{GameConfig, MovementMode};
use crate::{ground_row, lane_rows};

/// Common contract for every movement variant
pub trait PlayerController {
    /// Start a jump (jump variant only)
    fn jump(&mut self) {}

    /// Switch one lane up (lane variant only)
    fn move_up(&mut self) {}

    /// Switch one lane down (lane variant only)
    fn move_down(&mut self) {}

    /// Advance one simulation tick
    fn update(&mut self);

    /// Current sprite bounds; call after `update` within a tick
    fn bounds(&self) -> Bounds;

    /// Recompute the ground line or lane table and return to rest
    fn reset(&mut self, field_height: f32);

    /// True while running on the ground or settled in a lane
    fn is_grounded(&self) -> bool;

    /// Lane index, if this variant has lanes
    fn current_lane(&self) -> Option<usize> {
        None
    }
}

/// Gravity-driven jumping runner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JumpPlayer {
    pub pos: Vec2,
    pub size: Vec2,
    pub velocity_y: f32,
    pub gravity: f32,
    pub jump_power: f32,
    pub is_jumping: bool,
    pub ground_y: f32,
}

impl JumpPlayer {
    pub fn new(config: &GameConfig, field_height: f32) -> Self {
        let size = Vec2::splat(config.player_size);
        let ground_y = ground_row(field_height, size.y);
        Self {
            pos: Vec2::new(config.player_x, ground_y),
            size,
            velocity_y: 0.0,
            gravity: config.gravity,
            jump_power: config.jump_power,
            is_jumping: false,
            ground_y,
        }
    }
}

impl PlayerController for JumpPlayer {
    fn jump(&mut self) {
        // No double jump
        if self.is_jumping {
            return;
        }
        self.velocity_y = self.jump_power;
        self.is_jumping = true;
    }

    fn update(&mut self) {
        self.velocity_y += self.gravity;
        self.pos.y += self.velocity_y;

        // Landing is a threshold crossing of the ground line
        if self.pos.y >= self.ground_y {
            self.pos.y = self.ground_y;
            self.velocity_y = 0.0;
            self.is_jumping = false;
        }
    }

    fn bounds(&self) -> Bounds {
        Bounds::from_pos_size(self.pos, self.size)
    }

    fn reset(&mut self, field_height: f32) {
        self.ground_y = ground_row(field_height, self.size.y);
        self.pos.y = self.ground_y;
        self.velocity_y = 0.0;
        self.is_jumping = false;
    }

    fn is_grounded(&self) -> bool {
        !self.is_jumping
    }
}

/// Observable state of the lane variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LaneState {
    /// Settled in a lane
    AtLane(usize),
    /// Sliding toward the lane recorded in `current_lane`
    Transitioning,
}

/// Three-lane switching runner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanePlayer {
    pub pos: Vec2,
    pub size: Vec2,
    /// 0 = top, 1 = middle, 2 = bottom
    pub current_lane: usize,
    pub lanes: [f32; LANE_COUNT],
    pub is_moving: bool,
    pub target_y: f32,
    pub move_speed: f32,
}

impl LanePlayer {
    pub fn new(config: &GameConfig, field_height: f32) -> Self {
        let size = Vec2::splat(config.player_size);
        let lanes = lane_rows(field_height, size.y);
        let y = lanes[START_LANE];
        Self {
            pos: Vec2::new(config.player_x, y),
            size,
            current_lane: START_LANE,
            lanes,
            is_moving: false,
            target_y: y,
            move_speed: config.lane_move_speed,
        }
    }

    pub fn state(&self) -> LaneState {
        if self.is_moving {
            LaneState::Transitioning
        } else {
            LaneState::AtLane(self.current_lane)
        }
    }

    fn start_transition(&mut self, lane: usize) {
        self.current_lane = lane;
        self.target_y = self.lanes[lane];
        self.is_moving = true;
        log::debug!("Lane switch -> {}", lane);
    }
}

impl PlayerController for LanePlayer {
    fn move_up(&mut self) {
        if self.current_lane > 0 && !self.is_moving {
            self.start_transition(self.current_lane - 1);
        }
    }

    fn move_down(&mut self) {
        if self.current_lane < LANE_COUNT - 1 && !self.is_moving {
            self.start_transition(self.current_lane + 1);
        }
    }

    fn update(&mut self) {
        if !self.is_moving {
            return;
        }
        // Constant-speed slide, snapping once within one step
        let diff = self.target_y - self.pos.y;
        if diff.abs() < self.move_speed {
            self.pos.y = self.target_y;
            self.is_moving = false;
        } else {
            self.pos.y += diff.signum() * self.move_speed;
        }
    }

    fn bounds(&self) -> Bounds {
        Bounds::from_pos_size(self.pos, self.size)
    }

    fn reset(&mut self, field_height: f32) {
        self.lanes = lane_rows(field_height, self.size.y);
        self.current_lane = START_LANE;
        self.pos.y = self.lanes[START_LANE];
        self.target_y = self.pos.y;
        self.is_moving = false;
    }

    fn is_grounded(&self) -> bool {
        !self.is_moving
    }

    fn current_lane(&self) -> Option<usize> {
        Some(self.current_lane)
    }
}

/// The player for one game session, fixed at construction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Player {
    Jump(JumpPlayer),
    Lanes(LanePlayer),
}

impl Player {
    pub fn new(config: &GameConfig, field_height: f32) -> Self {
        match config.movement {
            MovementMode::Jump => Player::Jump(JumpPlayer::new(config, field_height)),
            MovementMode::Lanes => Player::Lanes(LanePlayer::new(config, field_height)),
        }
    }

    pub fn mode(&self) -> MovementMode {
        match self {
            Player::Jump(_) => MovementMode::Jump,
            Player::Lanes(_) => MovementMode::Lanes,
        }
    }

    fn controller(&self) -> &dyn PlayerController {
        match self {
            Player::Jump(p) => p,
            Player::Lanes(p) => p,
        }
    }

    fn controller_mut(&mut self) -> &mut dyn PlayerController {
        match self {
            Player::Jump(p) => p,
            Player::Lanes(p) => p,
        }
    }
}

impl PlayerController for Player {
    fn jump(&mut self) {
        self.controller_mut().jump();
    }

    fn move_up(&mut self) {
        self.controller_mut().move_up();
    }

    fn move_down(&mut self) {
        self.controller_mut().move_down();
    }

    fn update(&mut self) {
        self.controller_mut().update();
    }

    fn bounds(&self) -> Bounds {
        self.controller().bounds()
    }

    fn reset(&mut self, field_height: f32) {
        self.controller_mut().reset(field_height);
    }

    fn is_grounded(&self) -> bool {
        self.controller().is_grounded()
    }

    fn current_lane(&self) -> Option<usize> {
        self.controller().current_lane()
    }
}
