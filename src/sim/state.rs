//! Snake game state and core simulation types

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::trail::Trail;
use crate::consts::BOUNDS;

/// Something noteworthy that happened during a frame step
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// Player reached the enemy; `score` is the new total
    EnemyCaught { score: u32, respawned_at: Vec2 },
}

/// Complete snake state, owned by the render-loop driver
#[derive(Debug, Clone)]
pub struct SnakeState {
    /// Run seed; `None` when built from an external RNG
    pub seed: Option<u64>,
    pub player: Vec2,
    pub enemy: Vec2,
    /// Past player positions (newest first)
    pub trail: Trail,
    /// Number of catches; also the trail length cap
    pub score: u32,
    /// Frame steps taken
    pub frames: u64,
    rng: Pcg32,
}

impl SnakeState {
    /// Create a new state with the given seed and spawn the first enemy
    pub fn new(seed: u64) -> Self {
        let mut state = Self::with_rng(Pcg32::seed_from_u64(seed));
        state.seed = Some(seed);
        state
    }

    /// Create a new state drawing respawn positions from `rng`
    pub fn with_rng(rng: Pcg32) -> Self {
        let mut state = Self {
            seed: None,
            player: Vec2::ZERO,
            enemy: Vec2::ZERO,
            trail: Trail::new(),
            score: 0,
            frames: 0,
            rng,
        };
        state.spawn_enemy();
        state
    }

    /// Move the enemy to a uniform random position in the playfield
    pub fn spawn_enemy(&mut self) -> Vec2 {
        let x = self.rng.random_range(-BOUNDS..=BOUNDS);
        let y = self.rng.random_range(-BOUNDS..=BOUNDS);
        self.enemy = Vec2::new(x, y);
        self.enemy
    }
}
