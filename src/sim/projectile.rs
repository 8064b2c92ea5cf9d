//! Shuriken projectiles and their fixed-size pool

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::bounds::WorldBounds;
use crate::consts::MAX_PROJECTILES;
use crate::tuning::ProjectileTuning;
use crate::{DEFAULT_DIRECTION, direction_or};

/// A thrown shuriken
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub pos: Vec2,
    /// Unit travel direction
    pub dir: Vec2,
    pub active: bool,
    /// Seconds left before expiry
    pub lifetime: f32,
}

impl Default for Projectile {
    fn default() -> Self {
        Self {
            pos: Vec2::ZERO,
            dir: DEFAULT_DIRECTION,
            active: false,
            lifetime: 0.0,
        }
    }
}

impl Projectile {
    /// Launch from `origin`; a zero `dir` falls back to [`DEFAULT_DIRECTION`]
    pub fn activate(&mut self, origin: Vec2, dir: Vec2, tuning: &ProjectileTuning) {
        self.pos = origin;
        self.dir = direction_or(dir, DEFAULT_DIRECTION);
        self.active = true;
        self.lifetime = tuning.lifetime;
    }

    pub fn advance(&mut self, dt: f32, tuning: &ProjectileTuning) {
        if !self.active {
            return;
        }

        self.pos += self.dir * tuning.speed * dt;
        self.lifetime -= dt;
        if self.lifetime <= 0.0 {
            self.active = false;
        }
    }

    /// Hard-edge test, no margin
    #[inline]
    pub fn is_out_of_bounds(&self, bounds: &WorldBounds) -> bool {
        bounds.is_outside(self.pos)
    }
}

/// Fixed-capacity projectile slots, reused in place
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProjectilePool {
    slots: [Projectile; MAX_PROJECTILES],
}

impl ProjectilePool {
    pub const CAPACITY: usize = MAX_PROJECTILES;

    pub fn new() -> Self {
        Self::default()
    }

    /// First inactive slot, `None` when saturated
    pub fn find_free_slot(&mut self) -> Option<&mut Projectile> {
        self.slots.iter_mut().find(|p| !p.active)
    }

    /// Activate a free slot; returns false (and drops the throw) when the pool is full
    pub fn launch(&mut self, origin: Vec2, dir: Vec2, tuning: &ProjectileTuning) -> bool {
        match self.find_free_slot() {
            Some(slot) => {
                slot.activate(origin, dir, tuning);
                true
            }
            None => false,
        }
    }

    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|p| p.active).count()
    }

    pub fn iter_active(&self) -> impl Iterator<Item = &Projectile> {
        self.slots.iter().filter(|p| p.active)
    }

    pub fn slots(&self) -> &[Projectile] {
        &self.slots
    }

    pub fn slots_mut(&mut self) -> &mut [Projectile] {
        &mut self.slots
    }

    pub fn deactivate_all(&mut self) {
        for slot in &mut self.slots {
            slot.active = false;
        }
    }
}
