//! Timer-driven enemy spawning
//!
//! One spawn per elapsed interval while the pool has room. After
//! `ramp_after` seconds of game time every spawn resets the timer to
//! `ramp_reset` (negative) instead of zero, so the next spawn comes sooner.
//! There is a single ramp step; it does not keep escalating.

use serde::{Deserialize, Serialize};

use crate::tuning::SpawnTuning;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SpawnDirector {
    /// Seconds accumulated since the last spawn (may be negative after a ramped spawn)
    pub time_since_last_spawn: f32,
}

impl SpawnDirector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulate `dt`; returns true when an enemy should be spawned this frame
    pub fn update(
        &mut self,
        dt: f32,
        game_time: f32,
        active_enemies: usize,
        capacity: usize,
        tuning: &SpawnTuning,
    ) -> bool {
        self.time_since_last_spawn += dt;

        if self.time_since_last_spawn < tuning.interval || active_enemies >= capacity {
            return false;
        }

        self.time_since_last_spawn = if game_time > tuning.ramp_after {
            tuning.ramp_reset
        } else {
            0.0
        };
        true
    }

    pub fn reset(&mut self) {
        self.time_since_last_spawn = 0.0;
    }
}
