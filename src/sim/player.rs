//! The player-controlled ninja

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::bounds::WorldBounds;
use crate::tuning::PlayerTuning;

/// The player character
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ninja {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Always within `[0, max_health]`
    pub health: u32,
    pub max_health: u32,
    /// Seconds until the next throw is allowed (never negative)
    pub attack_cooldown: f32,
    pub alive: bool,
    pub kills: u32,
}

impl Ninja {
    pub fn new(tuning: &PlayerTuning) -> Self {
        Self {
            pos: tuning.spawn,
            vel: Vec2::ZERO,
            health: tuning.max_health,
            max_health: tuning.max_health,
            attack_cooldown: 0.0,
            alive: true,
            kills: 0,
        }
    }

    /// Integrate velocity, clamp to the world and tick the attack cooldown
    pub fn advance(&mut self, dt: f32, bounds: &WorldBounds) {
        if !self.alive {
            return;
        }

        self.pos = bounds.clamp(self.pos + self.vel * dt);
        self.attack_cooldown = (self.attack_cooldown - dt).max(0.0);
    }

    /// Subtract health; reaching zero kills the ninja until [`Ninja::reset`]
    pub fn apply_damage(&mut self, amount: u32) {
        if !self.alive {
            return;
        }

        self.health = self.health.saturating_sub(amount);
        if self.health == 0 {
            self.alive = false;
        }
    }

    #[inline]
    pub fn can_attack(&self) -> bool {
        self.alive && self.attack_cooldown <= 0.0
    }

    pub fn reset(&mut self, tuning: &PlayerTuning) {
        *self = Self::new(tuning);
    }
}

impl Default for Ninja {
    fn default() -> Self {
        Self::new(&PlayerTuning::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> WorldBounds {
        WorldBounds::new(1600.0, 900.0)
    }

    #[test]
    fn test_advance_moves_and_clamps() {
        let mut ninja = Ninja::default();
        ninja.vel = Vec2::new(300.0, 0.0);
        ninja.advance(0.5, &bounds());
        assert_eq!(ninja.pos, Vec2::new(550.0, 300.0));

        ninja.vel = Vec2::new(-300.0, -300.0);
        ninja.advance(10.0, &bounds());
        assert_eq!(ninja.pos, Vec2::ZERO);

        ninja.vel = Vec2::new(10_000.0, 10_000.0);
        ninja.advance(1.0, &bounds());
        assert_eq!(ninja.pos, Vec2::new(1600.0, 900.0));
    }

    #[test]
    fn test_cooldown_never_negative() {
        let mut ninja = Ninja::default();
        ninja.attack_cooldown = 0.3;
        ninja.advance(0.2, &bounds());
        assert!((ninja.attack_cooldown - 0.1).abs() < 1e-6);
        assert!(!ninja.can_attack());
        ninja.advance(0.2, &bounds());
        assert_eq!(ninja.attack_cooldown, 0.0);
        assert!(ninja.can_attack());
    }

    #[test]
    fn test_dead_ninja_does_not_move() {
        let mut ninja = Ninja::default();
        ninja.alive = false;
        ninja.vel = Vec2::new(300.0, 0.0);
        ninja.advance(1.0, &bounds());
        assert_eq!(ninja.pos, Vec2::new(400.0, 300.0));
    }

    #[test]
    fn test_damage_clamps_and_kills() {
        let mut ninja = Ninja::default();
        ninja.apply_damage(30);
        assert_eq!(ninja.health, 70);
        assert!(ninja.alive);

        ninja.apply_damage(500);
        assert_eq!(ninja.health, 0);
        assert!(!ninja.alive);
        assert!(!ninja.can_attack());

        // Dead is terminal
        ninja.apply_damage(10);
        assert_eq!(ninja.health, 0);
        assert!(!ninja.alive);
    }

    #[test]
    fn test_reset() {
        let tuning = PlayerTuning::default();
        let mut ninja = Ninja::new(&tuning);
        ninja.pos = Vec2::new(12.0, 34.0);
        ninja.vel = Vec2::new(1.0, 1.0);
        ninja.kills = 7;
        ninja.attack_cooldown = 0.2;
        ninja.apply_damage(100);

        ninja.reset(&tuning);
        assert_eq!(ninja, Ninja::new(&tuning));
        assert!(ninja.alive);
        assert_eq!(ninja.health, 100);
    }
}
