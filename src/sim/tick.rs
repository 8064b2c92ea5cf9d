//! Per-frame simulation tick
//!
//! Core game loop that advances the whole session by `dt`. Order matters
//! and is fixed: player, attack, projectiles, enemies, spawning, game over,
//! survival score.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::first_within;
use super::enemy::EnemyPool;
use super::state::{GamePhase, GameState};

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TickInput {
    /// Movement direction (also the throw direction); usually unit or zero
    pub direction: Vec2,
    /// Throw a shuriken if the cooldown allows
    pub attack: bool,
    /// Reserved; the simulation ignores it
    pub dash: bool,
}

/// Host entry point: build a [`TickInput`] and run one [`tick`]
pub fn advance_frame(state: &mut GameState, dt: f32, direction: Vec2, wants_attack: bool, wants_dash: bool) {
    let input = TickInput {
        direction,
        attack: wants_attack,
        dash: wants_dash,
    };
    tick(state, &input, dt);
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    if state.phase == GamePhase::GameOver {
        return;
    }

    state.game_time += dt;

    let GameState {
        rng,
        tuning,
        bounds,
        player,
        projectiles,
        enemies,
        spawner,
        score,
        game_time,
        phase,
        ..
    } = state;

    // Player movement
    player.vel = input.direction * tuning.player.speed;
    player.advance(dt, bounds);

    // Attack
    if input.attack && player.can_attack() && projectiles.launch(player.pos, input.direction, &tuning.projectile) {
        player.attack_cooldown = tuning.player.attack_cooldown;
    }

    // Projectiles vs enemies
    for projectile in projectiles.slots_mut() {
        if !projectile.active {
            continue;
        }

        // A shuriken that expires during this advance still resolves at its final position
        projectile.advance(dt, &tuning.projectile);

        if projectile.is_out_of_bounds(bounds) {
            projectile.active = false;
            continue;
        }

        let hit = first_within(
            projectile.pos,
            tuning.projectile.hit_radius,
            enemies.slots().iter().map(|e| e.active.then_some(e.pos)),
        );
        if let Some(index) = hit {
            projectile.active = false;
            let enemy = &mut enemies.slots_mut()[index];
            if enemy.apply_damage(tuning.projectile.damage) {
                player.kills += 1;
                *score += tuning.enemy.kill_score;
                log::debug!("Enemy {} killed (kills: {}, score: {})", index, player.kills, score);
            }
        }
    }

    // Enemies vs player
    let mut active_enemies = 0;
    for enemy in enemies.slots_mut() {
        if !enemy.active {
            continue;
        }

        enemy.advance(dt, player.pos, bounds, &tuning.enemy);
        if !enemy.active {
            continue;
        }

        if enemy.can_damage() && enemy.collides_with_player(player, &tuning.enemy) {
            player.apply_damage(tuning.enemy.contact_damage);
            enemy.damage_cooldown = tuning.enemy.contact_cooldown;
        }

        active_enemies += 1;
    }

    // Spawn director
    if spawner.update(dt, *game_time, active_enemies, EnemyPool::CAPACITY, &tuning.spawn) {
        if let Some(pos) = enemies.spawn_at_edge(rng, bounds, &tuning.enemy) {
            log::debug!(
                "Enemy spawned at ({:.0}, {:.0}), t={:.1}s, active={}",
                pos.x,
                pos.y,
                game_time,
                active_enemies + 1
            );
        }
    }

    if !player.alive {
        *phase = GamePhase::GameOver;
        log::info!(
            "Game over: score={}, kills={}, time={:.1}s",
            score,
            player.kills,
            game_time
        );
    }

    // Survival bonus, truncated per frame
    *score += (dt * tuning.score.survival_rate) as u64;
}
