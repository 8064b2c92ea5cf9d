//! Game state and core simulation types
//!
//! A session owns every entity. Pools are allocated once here and only
//! ever reused, so a frame never allocates.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::bounds::WorldBounds;
use super::enemy::EnemyPool;
use super::player::Ninja;
use super::projectile::ProjectilePool;
use super::spawn::SpawnDirector;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Player died; only [`GameState::reset`] leaves this phase
    GameOver,
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed; reset reseeds from it
    pub seed: u64,
    /// Spawn placement RNG
    pub rng: Pcg32,
    pub tuning: Tuning,
    pub bounds: WorldBounds,
    pub player: Ninja,
    pub projectiles: ProjectilePool,
    pub enemies: EnemyPool,
    pub spawner: SpawnDirector,
    pub score: u64,
    /// Seconds of play since the last reset
    pub game_time: f32,
    pub phase: GamePhase,
}

impl GameState {
    /// Create a new game state with the given seed and default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        log::info!(
            "New session: seed={}, world={}x{}",
            seed,
            tuning.world.width,
            tuning.world.height
        );
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            tuning,
            bounds: WorldBounds::from(tuning.world),
            player: Ninja::new(&tuning.player),
            projectiles: ProjectilePool::new(),
            enemies: EnemyPool::new(),
            spawner: SpawnDirector::new(),
            score: 0,
            game_time: 0.0,
            phase: GamePhase::Playing,
        }
    }

    /// Return to initial conditions without reallocating the pools
    pub fn reset(&mut self) {
        self.rng = Pcg32::seed_from_u64(self.seed);
        self.player.reset(&self.tuning.player);
        self.projectiles.deactivate_all();
        self.enemies.deactivate_all();
        self.spawner.reset();
        self.score = 0;
        self.game_time = 0.0;
        self.phase = GamePhase::Playing;
        log::info!("Session reset (seed {})", self.seed);
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn active_enemy_count(&self) -> usize {
        self.enemies.active_count()
    }

    pub fn active_projectile_count(&self) -> usize {
        self.projectiles.active_count()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(0)
    }
}
