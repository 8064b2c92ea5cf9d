//! World rectangle geometry
//!
//! The playfield spans `[0, width] x [0, height]`. Three edge rules use it:
//! - player positions are clamped onto it
//! - projectiles expire past the hard edge
//! - enemies are leashed to it with a margin

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::tuning::WorldTuning;

/// Axis-aligned world rectangle anchored at the origin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldBounds {
    pub width: f32,
    pub height: f32,
}

impl WorldBounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Clamp a point onto the rectangle (edges included)
    #[inline]
    pub fn clamp(&self, p: Vec2) -> Vec2 {
        Vec2::new(p.x.clamp(0.0, self.width), p.y.clamp(0.0, self.height))
    }

    /// True when the point is strictly beyond any edge
    #[inline]
    pub fn is_outside(&self, p: Vec2) -> bool {
        self.is_outside_with_margin(p, 0.0)
    }

    /// True when the point is strictly beyond the rectangle grown by `margin` on every side
    pub fn is_outside_with_margin(&self, p: Vec2, margin: f32) -> bool {
        p.x < -margin || p.x > self.width + margin || p.y < -margin || p.y > self.height + margin
    }
}

impl From<WorldTuning> for WorldBounds {
    fn from(world: WorldTuning) -> Self {
        Self::new(world.width, world.height)
    }
}
