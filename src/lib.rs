//! Ninja Survivor - simulation core for a top-down action game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (player, pools, spawning, frame update)
//! - `tuning`: Data-driven game balance
//! - `snapshot`: Host read-back (sprite instances, HUD)

pub mod sim;
pub mod snapshot;
pub mod tuning;

pub use sim::{GameState, TickInput, advance_frame, tick};
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed step used by the headless runner (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// World dimensions
    pub const WORLD_WIDTH: f32 = 1600.0;
    pub const WORLD_HEIGHT: f32 = 900.0;

    /// Player defaults
    pub const PLAYER_SPEED: f32 = 300.0;
    pub const PLAYER_MAX_HEALTH: u32 = 100;
    pub const ATTACK_COOLDOWN: f32 = 0.3;
    pub const PLAYER_SPAWN: (f32, f32) = (400.0, 300.0);

    /// Projectile (shuriken) defaults
    pub const MAX_PROJECTILES: usize = 10;
    pub const PROJECTILE_SPEED: f32 = 500.0;
    pub const PROJECTILE_LIFETIME: f32 = 2.0;
    pub const PROJECTILE_HIT_RADIUS: f32 = 25.0;
    pub const PROJECTILE_DAMAGE: u32 = 10;

    /// Enemy defaults
    pub const MAX_ENEMIES: usize = 20;
    pub const ENEMY_SPEED: f32 = 150.0;
    pub const ENEMY_MAX_HEALTH: u32 = 30;
    pub const ENEMY_CONTACT_RADIUS: f32 = 40.0;
    pub const ENEMY_CONTACT_DAMAGE: u32 = 10;
    pub const ENEMY_CONTACT_COOLDOWN: f32 = 1.0;
    /// Distance outside the world edge where enemies appear
    pub const ENEMY_EDGE_OFFSET: f32 = 50.0;
    /// Enemies beyond this margin outside the world are despawned
    pub const ENEMY_LEASH_MARGIN: f32 = 100.0;

    /// Spawn director
    pub const SPAWN_INTERVAL: f32 = 1.5;
    /// Game time after which spawns speed up
    pub const SPAWN_RAMP_AFTER: f32 = 30.0;
    /// Accumulator value after a spawn once the ramp is active
    pub const SPAWN_RAMP_RESET: f32 = -0.5;

    /// Scoring
    pub const KILL_SCORE: u64 = 100;
    /// Survival points per second (truncated per frame)
    pub const SURVIVAL_SCORE_RATE: f32 = 10.0;
}

/// Fallback launch direction when there is no input (right)
pub const DEFAULT_DIRECTION: Vec2 = Vec2::X;

/// Normalize in place; zero-length vectors are left unchanged
#[inline]
pub fn normalize_in_place(v: &mut Vec2) {
    let len = v.length();
    if len > 0.0 {
        *v /= len;
    }
}

/// Unit vector along `v`, or `fallback` when `v` has zero length
#[inline]
pub fn direction_or(v: Vec2, fallback: Vec2) -> Vec2 {
    if v.length() > 0.0 {
        v / v.length()
    } else {
        fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_in_place() {
        let mut v = Vec2::new(3.0, 4.0);
        normalize_in_place(&mut v);
        assert!((v.x - 0.6).abs() < 1e-6);
        assert!((v.y - 0.8).abs() < 1e-6);
        assert!((v.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_normalize_zero_is_noop() {
        let mut v = Vec2::ZERO;
        normalize_in_place(&mut v);
        assert_eq!(v, Vec2::ZERO);
    }

    #[test]
    fn test_direction_or_fallback() {
        assert_eq!(direction_or(Vec2::ZERO, DEFAULT_DIRECTION), Vec2::X);
        let d = direction_or(Vec2::new(0.0, -2.0), DEFAULT_DIRECTION);
        assert!((d - Vec2::new(0.0, -1.0)).length() < 1e-6);
    }
}
