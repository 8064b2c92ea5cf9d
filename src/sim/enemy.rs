//! Pursuing enemies and their fixed-size pool

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::bounds::WorldBounds;
use super::collision::within_radius;
use super::player::Ninja;
use crate::consts::{ENEMY_MAX_HEALTH, MAX_ENEMIES};
use crate::normalize_in_place;
use crate::tuning::EnemyTuning;

/// World edge an enemy enters from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Right, Edge::Bottom, Edge::Left];

    /// Point `offset` units outside this edge; `t` in `[0, 1)` picks the spot along it
    pub fn spawn_point(self, bounds: &WorldBounds, t: f32, offset: f32) -> Vec2 {
        match self {
            Edge::Top => Vec2::new(t * bounds.width, -offset),
            Edge::Right => Vec2::new(bounds.width + offset, t * bounds.height),
            Edge::Bottom => Vec2::new(t * bounds.width, bounds.height + offset),
            Edge::Left => Vec2::new(-offset, t * bounds.height),
        }
    }
}

/// A pursuing enemy
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub pos: Vec2,
    pub vel: Vec2,
    pub health: u32,
    pub max_health: u32,
    pub active: bool,
    /// Seconds until this enemy may hurt the player again
    pub damage_cooldown: f32,
}

impl Default for Enemy {
    fn default() -> Self {
        Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            health: ENEMY_MAX_HEALTH,
            max_health: ENEMY_MAX_HEALTH,
            active: false,
            damage_cooldown: 0.0,
        }
    }
}

impl Enemy {
    /// Place just outside a uniformly chosen edge at a uniform spot along it
    pub fn activate_at_edge<R: Rng>(&mut self, rng: &mut R, bounds: &WorldBounds, tuning: &EnemyTuning) -> Edge {
        let edge = Edge::ALL[rng.random_range(0..Edge::ALL.len())];
        let t: f32 = rng.random();
        self.activate_at(edge.spawn_point(bounds, t, tuning.edge_offset), tuning);
        edge
    }

    pub fn activate_at(&mut self, pos: Vec2, tuning: &EnemyTuning) {
        self.pos = pos;
        self.vel = Vec2::ZERO;
        self.max_health = tuning.max_health;
        self.health = tuning.max_health;
        self.active = true;
        self.damage_cooldown = 0.0;
    }

    /// Chase `target`, tick the contact cooldown and despawn past the leash margin
    pub fn advance(&mut self, dt: f32, target: Vec2, bounds: &WorldBounds, tuning: &EnemyTuning) {
        if !self.active {
            return;
        }

        let mut to_target = target - self.pos;
        if to_target.length() > 0.0 {
            normalize_in_place(&mut to_target);
            self.vel = to_target * tuning.speed;
            self.pos += self.vel * dt;
        }

        self.damage_cooldown = (self.damage_cooldown - dt).max(0.0);

        if bounds.is_outside_with_margin(self.pos, tuning.leash_margin) {
            self.active = false;
        }
    }

    /// Subtract health; returns true if this hit killed the enemy
    pub fn apply_damage(&mut self, amount: u32) -> bool {
        self.health = self.health.saturating_sub(amount);
        if self.health == 0 {
            self.active = false;
            return true;
        }
        false
    }

    pub fn collides_with_player(&self, player: &Ninja, tuning: &EnemyTuning) -> bool {
        player.alive && within_radius(self.pos, player.pos, tuning.contact_radius)
    }

    #[inline]
    pub fn can_damage(&self) -> bool {
        self.damage_cooldown <= 0.0
    }
}

/// Fixed-capacity enemy slots, reused in place
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EnemyPool {
    slots: [Enemy; MAX_ENEMIES],
}

impl EnemyPool {
    pub const CAPACITY: usize = MAX_ENEMIES;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn find_free_slot(&mut self) -> Option<&mut Enemy> {
        self.slots.iter_mut().find(|e| !e.active)
    }

    /// Activate a free slot at a random edge; `None` when the pool is full
    pub fn spawn_at_edge<R: Rng>(&mut self, rng: &mut R, bounds: &WorldBounds, tuning: &EnemyTuning) -> Option<Vec2> {
        let enemy = self.find_free_slot()?;
        enemy.activate_at_edge(rng, bounds, tuning);
        Some(enemy.pos)
    }

    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|e| e.active).count()
    }

    pub fn iter_active(&self) -> impl Iterator<Item = &Enemy> {
        self.slots.iter().filter(|e| e.active)
    }

    pub fn slots(&self) -> &[Enemy] {
        &self.slots
    }

    pub fn slots_mut(&mut self) -> &mut [Enemy] {
        &mut self.slots
    }

    pub fn deactivate_all(&mut self) {
        for slot in &mut self.slots {
            slot.active = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn bounds() -> WorldBounds {
        WorldBounds::new(1600.0, 900.0)
    }

    #[test]
    fn test_spawn_on_edge_ring() {
        let tuning = EnemyTuning::default();
        let mut rng = Pcg32::seed_from_u64(7);
        let mut seen = [false; 4];

        for _ in 0..200 {
            let mut enemy = Enemy::default();
            let edge = enemy.activate_at_edge(&mut rng, &bounds(), &tuning);
            assert!(enemy.active);
            assert_eq!(enemy.health, 30);
            assert_eq!(enemy.damage_cooldown, 0.0);

            let p = enemy.pos;
            match edge {
                Edge::Top => assert!(p.y == -50.0 && (0.0..=1600.0).contains(&p.x)),
                Edge::Right => assert!(p.x == 1650.0 && (0.0..=900.0).contains(&p.y)),
                Edge::Bottom => assert!(p.y == 950.0 && (0.0..=1600.0).contains(&p.x)),
                Edge::Left => assert!(p.x == -50.0 && (0.0..=900.0).contains(&p.y)),
            }
            seen[Edge::ALL.iter().position(|e| *e == edge).unwrap()] = true;
        }

        assert!(seen.iter().all(|s| *s), "all four edges should be chosen");
    }

    #[test]
    fn test_spawn_is_reproducible() {
        let tuning = EnemyTuning::default();
        let mut a = Pcg32::seed_from_u64(42);
        let mut b = Pcg32::seed_from_u64(42);
        for _ in 0..10 {
            let mut ea = Enemy::default();
            let mut eb = Enemy::default();
            ea.activate_at_edge(&mut a, &bounds(), &tuning);
            eb.activate_at_edge(&mut b, &bounds(), &tuning);
            assert_eq!(ea.pos, eb.pos);
        }
    }

    #[test]
    fn test_pursuit() {
        let tuning = EnemyTuning::default();
        let mut enemy = Enemy::default();
        enemy.activate_at(Vec2::new(100.0, 300.0), &tuning);
        enemy.advance(1.0, Vec2::new(400.0, 300.0), &bounds(), &tuning);

        assert_eq!(enemy.vel, Vec2::new(150.0, 0.0));
        assert_eq!(enemy.pos, Vec2::new(250.0, 300.0));
        assert!(enemy.active);
    }

    #[test]
    fn test_on_target_does_not_move() {
        let tuning = EnemyTuning::default();
        let mut enemy = Enemy::default();
        enemy.activate_at(Vec2::new(400.0, 300.0), &tuning);
        enemy.damage_cooldown = 0.5;
        enemy.advance(0.1, Vec2::new(400.0, 300.0), &bounds(), &tuning);

        assert_eq!(enemy.pos, Vec2::new(400.0, 300.0));
        assert_eq!(enemy.vel, Vec2::ZERO);
        assert!((enemy.damage_cooldown - 0.4).abs() < 1e-6);
    }

    #[test]
    fn test_leash_despawn() {
        let tuning = EnemyTuning::default();
        let mut enemy = Enemy::default();
        enemy.activate_at(Vec2::new(-95.0, 300.0), &tuning);
        // Target further out drags it past the margin
        enemy.advance(0.1, Vec2::new(-1000.0, 300.0), &bounds(), &tuning);
        assert!(!enemy.active);
    }

    #[test]
    fn test_three_hits_kill() {
        let tuning = EnemyTuning::default();
        let mut enemy = Enemy::default();
        enemy.activate_at(Vec2::new(0.0, 0.0), &tuning);

        assert!(!enemy.apply_damage(10));
        assert!(!enemy.apply_damage(10));
        assert!(enemy.active);
        assert_eq!(enemy.health, 10);

        assert!(enemy.apply_damage(10));
        assert!(!enemy.active);
        assert_eq!(enemy.health, 0);
    }

    #[test]
    fn test_player_contact() {
        let tuning = EnemyTuning::default();
        let mut player = Ninja::default();
        let mut enemy = Enemy::default();
        enemy.activate_at(player.pos + Vec2::new(39.0, 0.0), &tuning);
        assert!(enemy.collides_with_player(&player, &tuning));

        enemy.pos = player.pos + Vec2::new(40.0, 0.0);
        assert!(!enemy.collides_with_player(&player, &tuning));

        enemy.pos = player.pos;
        player.alive = false;
        assert!(!enemy.collides_with_player(&player, &tuning));
    }

    #[test]
    fn test_pool_capacity() {
        let tuning = EnemyTuning::default();
        let mut rng = Pcg32::seed_from_u64(1);
        let mut pool = EnemyPool::new();
        for _ in 0..EnemyPool::CAPACITY {
            assert!(pool.spawn_at_edge(&mut rng, &bounds(), &tuning).is_some());
        }
        assert_eq!(pool.active_count(), 20);
        assert!(pool.spawn_at_edge(&mut rng, &bounds(), &tuning).is_none());

        pool.deactivate_all();
        assert_eq!(pool.iter_active().count(), 0);
    }
}
