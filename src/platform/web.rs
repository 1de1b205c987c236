//! wasm bindings for the browser host
//!
//! The JS side owns the canvas and the animation frame loop. It forwards key
//! presses, calls `tick` once per frame and draws whatever `snapshot` returns.

use wasm_bindgen::prelude::*;

use super::{Intent, entropy_seed};
use crate::settings::GameConfig;
use crate::sim::{GamePhase, GameState, TickInput, tick};

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        // Already initialised by an earlier module instance
        return;
    }
    log::info!("Jungle Dash starting...");
}

/// Game instance handed to JS
#[wasm_bindgen]
pub struct WebGame {
    state: GameState,
    input: TickInput,
}

#[wasm_bindgen]
impl WebGame {
    /// Create a session using the stored config, or `config_json` if given
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32, config_json: Option<String>) -> Result<WebGame, JsError> {
        let config = match config_json {
            Some(json) => GameConfig::from_json(&json)?,
            None => GameConfig::load(),
        };
        let seed = config.seed.unwrap_or_else(entropy_seed);
        Ok(WebGame {
            state: GameState::new(config, width, height, seed),
            input: TickInput::default(),
        })
    }

    /// Forward a `KeyboardEvent.key`; returns true if the key was used
    pub fn key_down(&mut self, key: &str) -> bool {
        match Intent::from_key(key) {
            Some(intent) => {
                self.input.push(intent);
                true
            }
            None => false,
        }
    }

    /// Toggle demo mode
    pub fn set_idle_mode(&mut self, on: bool) {
        self.input.idle_mode = on;
    }

    /// Run one frame at `now` (ms, from `requestAnimationFrame`)
    ///
    /// Returns true on the frame the run ends.
    pub fn tick(&mut self, now: f64) -> bool {
        let ended = tick(&mut self.state, &self.input, now);
        self.input.clear_one_shots();
        ended
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.state.resize(width, height);
    }

    /// Pause when the page is hidden or loses focus
    pub fn auto_pause(&mut self) {
        if self.state.phase == GamePhase::Playing && !self.input.pause {
            self.input.pause = true;
            log::info!("Auto-paused");
        }
    }

    pub fn restart(&mut self) {
        self.state.restart();
        self.input.clear_one_shots();
    }

    pub fn score(&self) -> u64 {
        self.state.stats.score
    }

    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }

    /// Current frame as JSON (`Snapshot`)
    pub fn snapshot(&self) -> Result<String, JsError> {
        Ok(serde_json::to_string(&self.state.snapshot())?)
    }

    /// Events since the last call as a JSON array
    pub fn drain_events(&mut self) -> Result<String, JsError> {
        Ok(serde_json::to_string(&self.state.drain_events())?)
    }

    /// Run statistics as JSON (`GameStats`)
    pub fn stats(&self) -> Result<String, JsError> {
        Ok(serde_json::to_string(&self.state.stats)?)
    }

    /// Persist the active config to LocalStorage
    pub fn save_config(&self) {
        self.state.config.save();
    }
}
