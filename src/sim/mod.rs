//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Stable iteration order (pool slot order)
//! - Fixed-capacity pools, no per-frame allocation
//! - No rendering or platform dependencies

pub mod bounds;
pub mod collision;
pub mod enemy;
pub mod player;
pub mod projectile;
pub mod spawn;
pub mod state;
pub mod tick;

pub use bounds::WorldBounds;
pub use collision::{first_within, within_radius};
pub use enemy::{Edge, Enemy, EnemyPool};
pub use player::Ninja;
pub use projectile::{Projectile, ProjectilePool};
pub use spawn::SpawnDirector;
pub use state::{GamePhase, GameState};
pub use tick::{TickInput, advance_frame, tick};
