//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Input events (key names to intents)
//! - Seeding the obstacle RNG
//! - wasm bindings for the JS renderer (`web`)

#[cfg(target_arch = "wasm32")]
pub mod web;

use crate::sim::TickInput;

/// A discrete input from the keyboard or a touch control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Jump,
    Up,
    Down,
    Pause,
}

impl Intent {
    /// Map a DOM `KeyboardEvent.key` value to an intent
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            " " | "Spacebar" => Some(Intent::Jump),
            "ArrowUp" | "w" | "W" => Some(Intent::Up),
            "ArrowDown" | "s" | "S" => Some(Intent::Down),
            "Escape" | "p" | "P" => Some(Intent::Pause),
            _ => None,
        }
    }
}

impl TickInput {
    /// Record an intent for the next tick
    pub fn push(&mut self, intent: Intent) {
        match intent {
            Intent::Jump => self.jump = true,
            Intent::Up => self.up = true,
            Intent::Down => self.down = true,
            // Two presses in one frame cancel out
            Intent::Pause => self.pause = !self.pause,
        }
    }

    /// Clear one-shot intents after they were processed
    pub fn clear_one_shots(&mut self) {
        self.jump = false;
        self.up = false;
        self.down = false;
        self.pause = false;
    }
}

/// Seed for a session without a configured one
#[cfg(target_arch = "wasm32")]
pub fn entropy_seed() -> u64 {
    let now = js_sys::Date::now() as u64;
    let noise = (js_sys::Math::random() * u32::MAX as f64) as u64;
    now ^ (noise << 32)
}

/// Seed for a session without a configured one
#[cfg(not(target_arch = "wasm32"))]
pub fn entropy_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0x5EED)
}
