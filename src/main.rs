//! Jungle Dash entry point
//!
//! The browser build is driven from JS through `platform::web`. Natively this
//! runs a headless demo session with the autopilot and logs the outcome.
//!
//! Usage: `jungle-dash [lanes|jump] [easy|medium|hard] [seed]`

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use jungle_dash::platform::entropy_seed;
    use jungle_dash::sim::{GameEvent, GameState, TickInput, tick};
    use jungle_dash::{Difficulty, GameConfig, MovementMode};

    /// Simulated frame length (60 Hz)
    const FRAME_MS: f64 = 1000.0 / 60.0;
    /// Give up after five minutes of play
    const MAX_FRAMES: u32 = 60 * 60 * 5;

    env_logger::init();
    log::info!("Jungle Dash (native) starting...");
    log::info!("Native mode runs a headless demo - serve the wasm build for the real game");

    let mut config = GameConfig::load();
    for arg in std::env::args().skip(1) {
        if let Some(movement) = MovementMode::from_str(&arg) {
            config.movement = movement;
        } else if let Some(difficulty) = Difficulty::from_str(&arg) {
            config.difficulty = difficulty;
        } else if let Ok(seed) = arg.parse::<u64>() {
            config.seed = Some(seed);
        } else {
            log::warn!("Ignoring unknown argument '{}'", arg);
        }
    }

    let seed = config.seed.unwrap_or_else(entropy_seed);
    let mut state = GameState::new(config, 1920.0, 1080.0, seed);
    let input = TickInput {
        idle_mode: true,
        ..Default::default()
    };

    let mut now = 0.0;
    let mut spawned = 0;
    for _ in 0..MAX_FRAMES {
        now += FRAME_MS;
        let ended = tick(&mut state, &input, now);
        for event in state.drain_events() {
            if let GameEvent::Spawned { .. } = event {
                spawned += 1;
            }
        }
        if ended {
            break;
        }
    }

    let stats = &state.stats;
    println!(
        "{} / {} seed {}: {} after {:.1}s, score {}, {} of {} obstacles avoided",
        state.config.difficulty.as_str(),
        state.config.movement.as_str(),
        seed,
        if state.is_over() { "crashed" } else { "survived" },
        stats.duration_ms / 1000.0,
        stats.score,
        stats.obstacles_avoided,
        spawned
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::start, this is just to satisfy the compiler
}
