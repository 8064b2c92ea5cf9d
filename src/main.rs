//! Ninja Survivor headless runner
//!
//! Plays one session with a simple autopilot at a fixed 60 Hz step and logs
//! the outcome. Usage:
//!
//! ```text
//! ninja-survivor [--seed N] [--tuning path.json] [--frames N]
//! ```

use std::path::Path;

use anyhow::{Context, Result, bail};
use glam::Vec2;

use ninja_survivor::consts::SIM_DT;
use ninja_survivor::snapshot::{Hud, collect_sprites};
use ninja_survivor::{GameState, TickInput, Tuning, tick};

/// Ten minutes of play
const DEFAULT_FRAMES: u64 = 60 * 60 * 10;

struct Args {
    seed: u64,
    tuning: Option<String>,
    frames: u64,
}

fn parse_args() -> Result<Args> {
    let mut args = Args {
        seed: 0x5eed,
        tuning: None,
        frames: DEFAULT_FRAMES,
    };

    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--seed" => {
                let value = iter.next().context("--seed needs a value")?;
                args.seed = value.parse().with_context(|| format!("invalid seed: {}", value))?;
            }
            "--tuning" => {
                args.tuning = Some(iter.next().context("--tuning needs a path")?);
            }
            "--frames" => {
                let value = iter.next().context("--frames needs a value")?;
                args.frames = value
                    .parse()
                    .with_context(|| format!("invalid frame count: {}", value))?;
            }
            other => bail!("unknown argument: {}", other),
        }
    }

    Ok(args)
}

fn load_tuning(path: &Path) -> Result<Tuning> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("reading tuning file {}", path.display()))?;
    let tuning = Tuning::from_json(&json)
        .with_context(|| format!("parsing tuning file {}", path.display()))?;
    tuning
        .validate()
        .with_context(|| format!("validating tuning file {}", path.display()))?;
    log::info!("Loaded tuning from {}", path.display());
    Ok(tuning)
}

/// Back away from the nearest enemy while throwing at it
fn autopilot(state: &GameState) -> TickInput {
    let player = state.player.pos;
    let nearest = state
        .enemies
        .iter_active()
        .min_by(|a, b| {
            a.pos
                .distance_squared(player)
                .partial_cmp(&b.pos.distance_squared(player))
                .unwrap_or(std::cmp::Ordering::Equal)
        });

    let Some(enemy) = nearest else {
        // Drift back toward the middle while the field is empty
        let home = state.bounds.center() - player;
        return TickInput {
            direction: if home.length() > 20.0 { home.normalize() } else { Vec2::ZERO },
            ..Default::default()
        };
    };

    let to_enemy = (enemy.pos - player).normalize_or_zero();
    let in_range = enemy.pos.distance(player) < 400.0;
    TickInput {
        // Throw toward the enemy when close, otherwise keep away
        direction: if in_range { to_enemy } else { -to_enemy },
        attack: in_range,
        dash: false,
    }
}

fn main() -> Result<()> {
    env_logger::init();
    log::info!("Ninja Survivor (headless) starting...");

    let args = parse_args()?;
    let tuning = match &args.tuning {
        Some(path) => load_tuning(Path::new(path))?,
        None => Tuning::default(),
    };

    let mut state = GameState::with_tuning(args.seed, tuning);
    let mut sprites = Vec::with_capacity(1 + state.projectiles.slots().len() + state.enemies.slots().len());
    let mut frame = 0;

    while frame < args.frames && !state.is_game_over() {
        let input = autopilot(&state);
        tick(&mut state, &input, SIM_DT);
        collect_sprites(&state, &mut sprites);
        frame += 1;

        if frame % 600 == 0 {
            log::info!(
                "t={:.0}s score={} health={} sprites={}",
                state.game_time,
                state.score,
                state.player.health,
                sprites.len()
            );
        }
    }

    let hud = Hud::from_state(&state);
    log::info!("Run finished after {} frames", frame);
    println!("{}", serde_json::to_string_pretty(&hud)?);

    Ok(())
}
