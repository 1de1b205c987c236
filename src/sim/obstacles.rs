//! Obstacle spawning, scrolling and culling
//!
//! Obstacles enter at the right edge of the field on a randomized timer and
//! scroll left a fixed distance per tick until they leave the field.
//! The random source is injected so that runs are reproducible from a seed.

use glam::Vec2;
use rand::{Rng, RngCore, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::bounds::Bounds;
use crate::consts::INITIAL_SPAWN_INTERVAL_MS;
use crate::settings::{GameConfig, MovementMode};
use crate::{ground_row, lane_rows};

/// Obstacle sprite categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObstacleKind {
    Stone1,
    Stone2,
    Stone3,
    Stone4,
    Axe,
    Hammer,
}

impl ObstacleKind {
    /// Kinds drawn by the spawner
    pub const SPAWNABLE: [ObstacleKind; 4] = [
        ObstacleKind::Stone2,
        ObstacleKind::Stone3,
        ObstacleKind::Axe,
        ObstacleKind::Hammer,
    ];

    /// Sprite key used by the web host
    pub fn as_str(&self) -> &'static str {
        match self {
            ObstacleKind::Stone1 => "stone1",
            ObstacleKind::Stone2 => "stone2",
            ObstacleKind::Stone3 => "stone3",
            ObstacleKind::Stone4 => "stone4",
            ObstacleKind::Axe => "axe",
            ObstacleKind::Hammer => "hammer",
        }
    }
}

/// A live obstacle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    pub pos: Vec2,
    pub size: Vec2,
    /// Leftward scroll per tick
    pub speed: f32,
    pub kind: ObstacleKind,
}

impl Obstacle {
    pub fn bounds(&self) -> Bounds {
        Bounds::from_pos_size(self.pos, self.size)
    }

    /// True while any part of the obstacle is right of the field's left edge
    #[inline]
    pub fn on_field(&self) -> bool {
        self.pos.x + self.size.x > 0.0
    }
}

/// Spawns and advances obstacles; owns the live list and the id counter
#[derive(Debug, Clone)]
pub struct ObstacleSpawner<R: RngCore = Pcg32> {
    obstacles: Vec<Obstacle>,
    rng: R,
    field_width: f32,
    /// Valid spawn Y positions (lane rows, or the single ground row)
    rows: Vec<f32>,
    layout: MovementMode,
    obstacle_size: f32,
    speed: f32,
    /// Range the spawn interval is redrawn from after each spawn (ms)
    interval_range: (f64, f64),
    last_spawn_time: f64,
    spawn_interval: f64,
    next_id: u32,
}

impl ObstacleSpawner<Pcg32> {
    /// Spawner with a seeded PCG random source
    pub fn new(config: &GameConfig, field_width: f32, field_height: f32, seed: u64) -> Self {
        Self::with_rng(config, field_width, field_height, Pcg32::seed_from_u64(seed))
    }
}

impl<R: RngCore> ObstacleSpawner<R> {
    /// Spawner drawing timing, lanes and kinds from `rng`
    pub fn with_rng(config: &GameConfig, field_width: f32, field_height: f32, rng: R) -> Self {
        let mut spawner = Self {
            obstacles: Vec::new(),
            rng,
            field_width,
            rows: Vec::new(),
            layout: config.movement,
            obstacle_size: config.obstacle_size,
            speed: config.obstacle_speed(),
            interval_range: config.spawn_interval_range(),
            last_spawn_time: 0.0,
            spawn_interval: INITIAL_SPAWN_INTERVAL_MS,
            next_id: 0,
        };
        spawner.rows = spawner.rows_for(field_height);
        spawner
    }

    fn rows_for(&self, field_height: f32) -> Vec<f32> {
        match self.layout {
            MovementMode::Lanes => lane_rows(field_height, self.obstacle_size).to_vec(),
            MovementMode::Jump => vec![ground_row(field_height, self.obstacle_size)],
        }
    }

    /// Advance one tick at host time `current_time` (ms)
    ///
    /// Spawns at most one obstacle, then scrolls every obstacle and drops
    /// those that have left the field. Returns how many were dropped.
    pub fn update(&mut self, current_time: f64) -> usize {
        if current_time - self.last_spawn_time > self.spawn_interval {
            self.spawn();
            self.last_spawn_time = current_time;
            let (min, max) = self.interval_range;
            self.spawn_interval = if max > min {
                self.rng.random_range(min..max)
            } else {
                min
            };
        }

        for obstacle in &mut self.obstacles {
            obstacle.pos.x -= obstacle.speed;
        }

        let before = self.obstacles.len();
        self.obstacles.retain(Obstacle::on_field);
        before - self.obstacles.len()
    }

    fn spawn(&mut self) {
        let kind = ObstacleKind::SPAWNABLE[self.rng.random_range(0..ObstacleKind::SPAWNABLE.len())];
        let row = self.rows[self.rng.random_range(0..self.rows.len())];

        let id = self.next_id;
        self.next_id += 1;

        self.obstacles.push(Obstacle {
            id,
            pos: Vec2::new(self.field_width, row),
            size: Vec2::splat(self.obstacle_size),
            speed: self.speed,
            kind,
        });
        log::debug!("Spawned obstacle {} ({}) at y={}", id, kind.as_str(), row);
    }

    /// Live obstacles, oldest first
    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    /// Id of the most recently spawned obstacle
    pub fn last_spawned(&self) -> Option<u32> {
        self.next_id.checked_sub(1)
    }

    /// Forget every obstacle and restart the spawn timer and id counter
    pub fn reset(&mut self) {
        self.obstacles.clear();
        self.last_spawn_time = 0.0;
        self.spawn_interval = INITIAL_SPAWN_INTERVAL_MS;
        self.next_id = 0;
    }

    /// Apply a new field size to future spawns; live obstacles stay put
    pub fn update_canvas_size(&mut self, width: f32, height: f32) {
        self.field_width = width;
        self.rows = self.rows_for(height);
    }

    pub fn spawn_interval(&self) -> f64 {
        self.spawn_interval
    }

    /// Override the current interval (until the next spawn redraws it)
    pub fn set_spawn_interval(&mut self, interval_ms: f64) {
        self.spawn_interval = interval_ms;
    }

    pub fn field_width(&self) -> f32 {
        self.field_width
    }

    /// Valid spawn Y positions
    pub fn rows(&self) -> &[f32] {
        &self.rows
    }

    #[cfg(test)]
    pub(crate) fn insert(&mut self, obstacle: Obstacle) {
        self.next_id = self.next_id.max(obstacle.id + 1);
        self.obstacles.push(obstacle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Difficulty;
    use proptest::prelude::*;

    const WIDTH: f32 = 1920.0;
    const HEIGHT: f32 = 1080.0;

    fn spawner() -> ObstacleSpawner {
        ObstacleSpawner::new(&GameConfig::default(), WIDTH, HEIGHT, 42)
    }

    #[test]
    fn test_spawns_once_per_interval() {
        let mut s = spawner();
        assert_eq!(s.spawn_interval(), 2000.0);

        // Not yet strictly past the interval
        s.update(2000.0);
        assert!(s.obstacles().is_empty());

        s.update(2001.0);
        assert_eq!(s.obstacles().len(), 1);
        let o = &s.obstacles()[0];
        assert_eq!(o.id, 0);
        // Spawned at the right edge, then scrolled once in the same tick
        assert_eq!(o.pos.x, WIDTH - o.speed);

        s.update(2001.0);
        assert_eq!(s.obstacles().len(), 1);
    }

    #[test]
    fn test_interval_redrawn_in_range() {
        let mut s = spawner();
        let mut now = 0.0;
        for _ in 0..50 {
            now += s.spawn_interval() + 1.0;
            s.update(now);
            let interval = s.spawn_interval();
            assert!((1500.0..2500.0).contains(&interval), "interval {interval}");
        }
    }

    #[test]
    fn test_spawn_rows_lanes() {
        let mut s = spawner();
        let rows = lane_rows(HEIGHT, 200.0);
        let mut now = 0.0;
        for _ in 0..30 {
            now += 3000.0;
            s.update(now);
        }
        for o in s.obstacles() {
            assert!(rows.contains(&o.pos.y));
            assert!(ObstacleKind::SPAWNABLE.contains(&o.kind));
        }
    }

    #[test]
    fn test_spawn_rows_ground() {
        let mut config = GameConfig::default();
        config.movement = MovementMode::Jump;
        let mut s = ObstacleSpawner::new(&config, WIDTH, HEIGHT, 7);
        s.update(2001.0);
        assert_eq!(s.obstacles()[0].pos.y, HEIGHT - 40.0 - 200.0);
        // Obstacle bottom lines up with the player's feet
        assert_eq!(
            s.obstacles()[0].bounds().bottom(),
            crate::ground_row(HEIGHT, 300.0) + 300.0
        );
    }

    #[test]
    fn test_obstacles_culled_off_field() {
        let mut s = spawner();
        s.update(2001.0);
        let speed = s.obstacles()[0].speed;
        // Enough ticks to scroll the whole field plus the sprite
        let ticks = ((WIDTH + 200.0) / speed).ceil() as usize;
        let mut culled = 0;
        for _ in 0..ticks {
            s.set_spawn_interval(f64::MAX);
            culled += s.update(2001.0);
        }
        assert!(s.obstacles().is_empty());
        assert_eq!(culled, 1);
    }

    #[test]
    fn test_reset_restarts_ids() {
        let mut s = spawner();
        s.update(2001.0);
        s.set_spawn_interval(100.0);
        s.update(2200.0);
        assert_eq!(s.last_spawned(), Some(1));

        s.reset();
        assert!(s.obstacles().is_empty());
        assert_eq!(s.last_spawned(), None);
        s.update(2001.0);
        assert_eq!(s.obstacles()[0].id, 0);
    }

    #[test]
    fn test_resize_affects_future_spawns_only() {
        let mut s = spawner();
        s.update(2001.0);
        let old = s.obstacles()[0].clone();

        s.update_canvas_size(1000.0, 600.0);
        assert_eq!(s.obstacles()[0].pos.y, old.pos.y);
        assert_eq!(s.rows(), &lane_rows(600.0, 200.0)[..]);

        s.set_spawn_interval(0.0);
        s.update(2002.0);
        let newest = s.obstacles().last().unwrap();
        assert_eq!(newest.pos.x, 1000.0 - newest.speed);
    }

    #[test]
    fn test_difficulty_sets_speed() {
        let mut config = GameConfig::default();
        config.difficulty = Difficulty::Hard;
        let mut s = ObstacleSpawner::new(&config, WIDTH, HEIGHT, 1);
        s.update(2001.0);
        assert_eq!(s.obstacles()[0].speed, config.obstacle_speed());
        assert!(config.obstacle_speed() > GameConfig::default().obstacle_speed());
    }

    #[test]
    fn test_same_seed_same_run() {
        let mut a = spawner();
        let mut b = spawner();
        let mut now = 0.0;
        for _ in 0..500 {
            now += 16.0;
            a.update(now);
            b.update(now);
        }
        assert_eq!(a.obstacles(), b.obstacles());
    }

    proptest! {
        #[test]
        fn prop_live_obstacles_on_field(seed in any::<u64>(), frames in prop::collection::vec(1.0f64..50.0, 1..600)) {
            let mut s = ObstacleSpawner::new(&GameConfig::default(), 800.0, 600.0, seed);
            let mut now = 0.0;
            let mut last_id = None;
            for dt in frames {
                now += dt;
                s.update(now);
                for o in s.obstacles() {
                    prop_assert!(o.pos.x + o.size.x > 0.0);
                }
                // Ids increase monotonically in spawn order
                let ids: Vec<u32> = s.obstacles().iter().map(|o| o.id).collect();
                prop_assert!(ids.windows(2).all(|w| w[0] < w[1]));
                if let Some(id) = s.last_spawned() {
                    if let Some(prev) = last_id {
                        prop_assert!(id >= prev);
                    }
                    last_id = Some(id);
                }
            }
        }
    }
}
