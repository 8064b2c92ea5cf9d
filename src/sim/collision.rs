//! Radius-based collision checks
//!
//! All contacts in the game are circle-vs-point: a projectile hits an enemy
//! inside the hit radius, an enemy touches the player inside the contact
//! radius. Both comparisons are strict.

use glam::Vec2;

/// True when `a` and `b` are strictly closer than `radius`
#[inline]
pub fn within_radius(a: Vec2, b: Vec2, radius: f32) -> bool {
    a.distance(b) < radius
}

/// Index of the first candidate (in slice order) within `radius` of `point`
///
/// First match wins, not nearest.
pub fn first_within<I>(point: Vec2, radius: f32, candidates: I) -> Option<usize>
where
    I: IntoIterator<Item = Option<Vec2>>,
{
    candidates
        .into_iter()
        .position(|c| c.is_some_and(|pos| within_radius(point, pos, radius)))
}
