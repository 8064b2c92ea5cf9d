//! Game balance tuning
//!
//! Every gameplay constant can be overridden from JSON. Missing fields fall
//! back to the values in [`crate::consts`], so a tuning file only needs to
//! name what it changes.

use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// World rectangle size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldTuning {
    pub width: f32,
    pub height: f32,
}

impl Default for WorldTuning {
    fn default() -> Self {
        Self {
            width: WORLD_WIDTH,
            height: WORLD_HEIGHT,
        }
    }
}

/// Player movement and attack
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerTuning {
    /// Movement speed in units per second
    pub speed: f32,
    pub max_health: u32,
    /// Seconds between throws
    pub attack_cooldown: f32,
    /// Position restored on reset
    pub spawn: Vec2,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            speed: PLAYER_SPEED,
            max_health: PLAYER_MAX_HEALTH,
            attack_cooldown: ATTACK_COOLDOWN,
            spawn: Vec2::new(PLAYER_SPAWN.0, PLAYER_SPAWN.1),
        }
    }
}

/// Shuriken flight and hits
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectileTuning {
    /// Travel speed in units per second
    pub speed: f32,
    /// Seconds before the projectile expires
    pub lifetime: f32,
    /// Enemy distance that counts as a hit (strict)
    pub hit_radius: f32,
    pub damage: u32,
}

impl Default for ProjectileTuning {
    fn default() -> Self {
        Self {
            speed: PROJECTILE_SPEED,
            lifetime: PROJECTILE_LIFETIME,
            hit_radius: PROJECTILE_HIT_RADIUS,
            damage: PROJECTILE_DAMAGE,
        }
    }
}

/// Pursuing enemy behavior
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyTuning {
    pub speed: f32,
    pub max_health: u32,
    /// Player contact distance (strict)
    pub contact_radius: f32,
    pub contact_damage: u32,
    /// Seconds between contact hits from the same enemy
    pub contact_cooldown: f32,
    /// Spawn distance outside the world edge
    pub edge_offset: f32,
    /// Despawn distance outside the world edge
    pub leash_margin: f32,
    /// Score awarded per kill
    pub kill_score: u64,
}

impl Default for EnemyTuning {
    fn default() -> Self {
        Self {
            speed: ENEMY_SPEED,
            max_health: ENEMY_MAX_HEALTH,
            contact_radius: ENEMY_CONTACT_RADIUS,
            contact_damage: ENEMY_CONTACT_DAMAGE,
            contact_cooldown: ENEMY_CONTACT_COOLDOWN,
            edge_offset: ENEMY_EDGE_OFFSET,
            leash_margin: ENEMY_LEASH_MARGIN,
            kill_score: KILL_SCORE,
        }
    }
}

/// Spawn director timing
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnTuning {
    pub interval: f32,
    /// Game time after which the ramp reset applies
    pub ramp_after: f32,
    /// Accumulator value after a ramped spawn (negative shortens the next wait)
    pub ramp_reset: f32,
}

impl Default for SpawnTuning {
    fn default() -> Self {
        Self {
            interval: SPAWN_INTERVAL,
            ramp_after: SPAWN_RAMP_AFTER,
            ramp_reset: SPAWN_RAMP_RESET,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreTuning {
    /// Survival points per second, truncated each frame
    pub survival_rate: f32,
}

impl Default for ScoreTuning {
    fn default() -> Self {
        Self {
            survival_rate: SURVIVAL_SCORE_RATE,
        }
    }
}

/// Complete balance configuration
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub world: WorldTuning,
    pub player: PlayerTuning,
    pub projectile: ProjectileTuning,
    pub enemy: EnemyTuning,
    pub spawn: SpawnTuning,
    pub score: ScoreTuning,
}

/// A tuning value outside its usable range
#[derive(Debug, Clone, PartialEq)]
pub enum TuningError {
    /// Field must be strictly positive
    NotPositive { field: &'static str, value: f32 },
    /// Field must not be negative
    Negative { field: &'static str, value: f32 },
    /// Health pool of zero would start dead (or active at zero)
    ZeroHealth { field: &'static str },
    /// Spawn position lies outside the world
    SpawnOutsideWorld { x: f32, y: f32 },
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TuningError::NotPositive { field, value } => {
                write!(f, "{} must be positive (got {})", field, value)
            }
            TuningError::Negative { field, value } => {
                write!(f, "{} must not be negative (got {})", field, value)
            }
            TuningError::ZeroHealth { field } => write!(f, "{} must be at least 1", field),
            TuningError::SpawnOutsideWorld { x, y } => {
                write!(f, "player spawn ({}, {}) is outside the world", x, y)
            }
        }
    }
}

impl std::error::Error for TuningError {}

impl Tuning {
    /// Parse a (possibly partial) JSON tuning document
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), TuningError> {
        let positive = [
            ("world.width", self.world.width),
            ("world.height", self.world.height),
            ("player.speed", self.player.speed),
            ("projectile.speed", self.projectile.speed),
            ("projectile.lifetime", self.projectile.lifetime),
            ("enemy.speed", self.enemy.speed),
            ("spawn.interval", self.spawn.interval),
        ];
        for (field, value) in positive {
            // Also rejects NaN
            if !(value > 0.0) {
                return Err(TuningError::NotPositive { field, value });
            }
        }

        let non_negative = [
            ("projectile.hit_radius", self.projectile.hit_radius),
            ("enemy.contact_radius", self.enemy.contact_radius),
            ("enemy.leash_margin", self.enemy.leash_margin),
        ];
        for (field, value) in non_negative {
            if !(value >= 0.0) {
                return Err(TuningError::Negative { field, value });
            }
        }

        for (field, value) in [
            ("player.max_health", self.player.max_health),
            ("enemy.max_health", self.enemy.max_health),
        ] {
            if value == 0 {
                return Err(TuningError::ZeroHealth { field });
            }
        }

        let spawn = self.player.spawn;
        if spawn.x < 0.0 || spawn.x > self.world.width || spawn.y < 0.0 || spawn.y > self.world.height
        {
            return Err(TuningError::SpawnOutsideWorld {
                x: spawn.x,
                y: spawn.y,
            });
        }

        Ok(())
    }
}
