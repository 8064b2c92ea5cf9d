//! Host read-back of simulation state
//!
//! The host renderer uploads [`SpriteInstance`]s straight into an instance
//! buffer; the HUD reads [`Hud`].

use bytemuck::{Pod, Zeroable};
use serde::Serialize;

use crate::sim::GameState;

/// What a sprite instance depicts
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteKind {
    Ninja = 0,
    Shuriken = 1,
    Enemy = 2,
}

/// One drawable entity, laid out for GPU upload
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct SpriteInstance {
    pub position: [f32; 2],
    /// Heading (velocity or travel direction), may be zero
    pub facing: [f32; 2],
    /// A [`SpriteKind`] discriminant
    pub kind: u32,
    /// Health in `[0, 1]` (1.0 for shurikens)
    pub health: f32,
}

fn fraction(health: u32, max: u32) -> f32 {
    if max == 0 { 0.0 } else { health as f32 / max as f32 }
}

/// Write the live entities into `out` (cleared first, capacity kept)
///
/// Order: ninja (if alive), active shurikens, active enemies, each in pool order.
pub fn collect_sprites(state: &GameState, out: &mut Vec<SpriteInstance>) {
    out.clear();

    let player = &state.player;
    if player.alive {
        out.push(SpriteInstance {
            position: player.pos.to_array(),
            facing: player.vel.to_array(),
            kind: SpriteKind::Ninja as u32,
            health: fraction(player.health, player.max_health),
        });
    }

    for p in state.projectiles.iter_active() {
        out.push(SpriteInstance {
            position: p.pos.to_array(),
            facing: p.dir.to_array(),
            kind: SpriteKind::Shuriken as u32,
            health: 1.0,
        });
    }

    for e in state.enemies.iter_active() {
        out.push(SpriteInstance {
            position: e.pos.to_array(),
            facing: e.vel.to_array(),
            kind: SpriteKind::Enemy as u32,
            health: fraction(e.health, e.max_health),
        });
    }
}

/// Raw bytes for an instance buffer upload
pub fn sprite_bytes(instances: &[SpriteInstance]) -> &[u8] {
    bytemuck::cast_slice(instances)
}

/// HUD values
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hud {
    pub score: u64,
    pub health: u32,
    pub max_health: u32,
    pub kills: u32,
    pub time: f32,
    pub game_over: bool,
    pub enemies: usize,
}

impl Hud {
    pub fn from_state(state: &GameState) -> Self {
        Self {
            score: state.score,
            health: state.player.health,
            max_health: state.player.max_health,
            kills: state.player.kills,
            time: state.game_time,
            game_over: state.is_game_over(),
            enemies: state.active_enemy_count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_collect_sprites_order() {
        let mut state = GameState::new(1);
        let tuning = state.tuning;
        state.projectiles.launch(Vec2::new(10.0, 10.0), Vec2::ZERO, &tuning.projectile);
        state.enemies.slots_mut()[3].activate_at(Vec2::new(50.0, 60.0), &tuning.enemy);
        state.enemies.slots_mut()[3].apply_damage(15);

        let mut sprites = Vec::new();
        collect_sprites(&state, &mut sprites);

        assert_eq!(sprites.len(), 3);
        assert_eq!(sprites[0].kind, SpriteKind::Ninja as u32);
        assert_eq!(sprites[0].position, [400.0, 300.0]);
        assert_eq!(sprites[1].kind, SpriteKind::Shuriken as u32);
        assert_eq!(sprites[1].facing, [1.0, 0.0]);
        assert_eq!(sprites[2].kind, SpriteKind::Enemy as u32);
        assert_eq!(sprites[2].health, 0.5);
    }

    #[test]
    fn test_dead_ninja_not_drawn() {
        let mut state = GameState::new(1);
        state.player.apply_damage(1000);
        let mut sprites = vec![SpriteInstance::zeroed(); 4];
        collect_sprites(&state, &mut sprites);
        assert!(sprites.is_empty());
    }

    #[test]
    fn test_sprite_bytes_len() {
        let sprites = [SpriteInstance::zeroed(); 2];
        assert_eq!(sprite_bytes(&sprites).len(), 2 * std::mem::size_of::<SpriteInstance>());
        assert_eq!(std::mem::size_of::<SpriteInstance>(), 24);
    }

    #[test]
    fn test_hud_json() {
        let state = GameState::new(1);
        let json = serde_json::to_value(Hud::from_state(&state)).unwrap();
        assert_eq!(json["health"], 100);
        assert_eq!(json["game_over"], false);
        assert_eq!(json["enemies"], 0);
    }
}
