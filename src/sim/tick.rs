//! Per-frame simulation tick
//!
//! The host calls `tick` once per rendered frame. Within a tick the order is
//! fixed: input intents, player update, obstacle update, collision check.

use super::bounds::Bounds;
use super::collision::{first_collision, hitboxes_overlap};
use super::player::{Player, PlayerController};
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::SCORE_INTERVAL_MS;
use crate::settings::MovementMode;

/// Longest frame gap counted toward play time (ms); larger gaps mean the
/// host was suspended
pub const MAX_FRAME_MS: f64 = 250.0;

/// One-shot input intents gathered since the previous tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Jump (space)
    pub jump: bool,
    /// Lane up, or jump in the jump variant (arrow up)
    pub up: bool,
    /// Lane down (arrow down)
    pub down: bool,
    /// Pause toggle
    pub pause: bool,
    /// Idle/demo mode - autopilot dodges obstacles
    pub idle_mode: bool,
}

impl TickInput {
    pub fn is_empty(&self) -> bool {
        !(self.jump || self.up || self.down || self.pause)
    }
}

/// Ticks of warning the lane autopilot wants before an obstacle arrives
const AUTOPILOT_LANE_LEAD_TICKS: f32 = 30.0;
/// Ticks before hitbox contact at which the jump autopilot takes off
const AUTOPILOT_JUMP_LEAD_TICKS: f32 = 12.0;

/// Advance the session by one frame at host time `now` (ms)
///
/// Returns true if this tick ended the run.
pub fn tick(state: &mut GameState, input: &TickInput, now: f64) -> bool {
    // Handle pause toggle
    if input.pause {
        match state.phase {
            GamePhase::Playing => {
                state.phase = GamePhase::Paused;
                log::info!("Paused");
                return false;
            }
            GamePhase::Paused => {
                state.phase = GamePhase::Playing;
                // Drop the paused span from play time
                state.last_time = Some(now);
                log::info!("Resumed");
            }
            _ => {}
        }
    }

    match state.phase {
        GamePhase::Paused | GamePhase::GameOver => return false,
        GamePhase::Ready => {
            state.phase = GamePhase::Playing;
            state.stats.start_time = now;
            state.last_time = Some(now);
            log::info!("Run started");
        }
        GamePhase::Playing => {}
    }

    let dt = state
        .last_time
        .map(|last| (now - last).clamp(0.0, MAX_FRAME_MS))
        .unwrap_or(0.0);
    state.last_time = Some(now);
    state.stats.duration_ms += dt;
    state.stats.ticks += 1;

    // Score accrues with play time
    state.score_accumulator += dt;
    while state.score_accumulator >= SCORE_INTERVAL_MS {
        state.stats.score += 1;
        state.score_accumulator -= SCORE_INTERVAL_MS;
    }

    // Idle/demo mode - autopilot plays the game
    let mut input = input.clone();
    if input.idle_mode {
        let auto = autopilot(state);
        input.jump |= auto.jump;
        input.up |= auto.up;
        input.down |= auto.down;
    }

    apply_input(state, &input);
    state.player.update();

    // Spawner runs on play time so pauses never trigger spawns
    let newest_before = state.spawner.last_spawned();
    let avoided = state.spawner.update(state.stats.duration_ms) as u32;
    if let Some(id) = state.spawner.last_spawned().filter(|&id| Some(id) != newest_before) {
        state.events.push(GameEvent::Spawned { id });
    }
    if avoided > 0 {
        state.stats.obstacles_avoided += avoided;
        state.events.push(GameEvent::Avoided { count: avoided });
    }
    state.stats.distance += state.config.obstacle_speed();

    let hit = first_collision(
        &state.player.bounds(),
        state.spawner.obstacles(),
        state.config.hitbox_padding,
    );
    if let Some(obstacle_id) = hit {
        state.phase = GamePhase::GameOver;
        state.events.push(GameEvent::GameOver {
            score: state.stats.score,
            obstacle_id,
        });
        log::info!(
            "Game over: hit obstacle {} with score {} ({} avoided)",
            obstacle_id,
            state.stats.score,
            state.stats.obstacles_avoided
        );
        return true;
    }

    false
}

fn apply_input(state: &mut GameState, input: &TickInput) {
    let player = &mut state.player;
    match player.mode() {
        MovementMode::Jump => {
            if input.jump || input.up {
                player.jump();
            }
        }
        MovementMode::Lanes => {
            if input.up {
                player.move_up();
            }
            if input.down {
                player.move_down();
            }
        }
    }
}

/// Intents that dodge the nearest threat
///
/// Lane variant: leave a lane that an approaching obstacle will sweep for a
/// free neighbour, trying up first. Jump variant: jump just before an obstacle's
/// hitbox reaches the player's.
pub fn autopilot(state: &GameState) -> TickInput {
    let mut input = TickInput::default();
    let padding = state.config.hitbox_padding;
    let player = state.player.bounds();
    let obstacles = state.spawner.obstacles();

    match &state.player {
        Player::Lanes(lanes) => {
            if lanes.is_moving {
                return input;
            }
            let lookahead = state.config.obstacle_speed() * AUTOPILOT_LANE_LEAD_TICKS;
            let blocked = |y: f32| {
                // Player box stretched forward over the lookahead distance
                let sweep = Bounds::new(player.x, y, player.width + lookahead, player.height);
                obstacles
                    .iter()
                    .any(|o| hitboxes_overlap(&sweep, &o.bounds(), padding))
            };
            let lane = lanes.current_lane;
            if !blocked(lanes.lanes[lane]) {
                return input;
            }
            let up_free = lane > 0 && !blocked(lanes.lanes[lane - 1]);
            let down_free = lane + 1 < lanes.lanes.len() && !blocked(lanes.lanes[lane + 1]);
            if up_free {
                input.up = true;
            } else if down_free {
                input.down = true;
            }
        }
        Player::Jump(jumper) => {
            if jumper.is_jumping {
                return input;
            }
            input.jump = obstacles.iter().any(|o| {
                let gap = (o.pos.x + padding) - (player.right() - padding);
                gap >= 0.0 && gap <= o.speed * AUTOPILOT_JUMP_LEAD_TICKS
            });
        }
    }

    input
}
