//! Lunar Lander entry point
//!
//! Runs the simulation headless with the autopilot at the controls:
//!
//! ```text
//! lunar-lander [tuning.json]
//! ```
//!
//! Exits 0 on a landing, 2 on a crash or timeout, 1 if setup fails.

use std::process::ExitCode;

use lunar_lander::platform::headless::{AutopilotInput, HeadlessAssets, LogRenderer, SteppedClock};
use lunar_lander::sim::Outcome;
use lunar_lander::{Game, Tuning};

/// Simulated frame length (~60 Hz)
const FRAME_MS: u32 = 16;
/// Give up after this many frames (~5 minutes of game time)
const MAX_FRAMES: u64 = 60 * 60 * 5;

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Lunar Lander (headless demo) starting...");

    let tuning = match std::env::args().nth(1) {
        Some(path) => match Tuning::load(&path) {
            Ok(tuning) => tuning,
            Err(e) => {
                log::error!("{e}");
                return ExitCode::from(1);
            }
        },
        None => Tuning::default(),
    };

    let mut assets = HeadlessAssets::default();
    let mut game = match Game::new(tuning, &mut assets) {
        Ok(game) => game,
        Err(e) => {
            log::error!("{e}");
            return ExitCode::from(1);
        }
    };

    let mut clock = SteppedClock::new(FRAME_MS);
    let mut input = AutopilotInput::new(MAX_FRAMES);
    let mut renderer = LogRenderer::default();

    let summary = game.run(&mut clock, &mut input, &mut renderer);
    log::info!(
        "Run finished: {:?} after {} frames, {} fuel left",
        summary.outcome,
        summary.frames,
        summary.fuel_remaining
    );
    println!("{:?}", summary.outcome);

    match summary.outcome {
        Outcome::Won => ExitCode::SUCCESS,
        Outcome::Lost | Outcome::Running => ExitCode::from(2),
    }
}
