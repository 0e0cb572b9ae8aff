//! Game outcome state machine
//!
//! `Running` moves to `Lost` or `Won` exactly once; both are terminal.

use glam::Vec3;

use super::collision::{first_collision, outside_arena};
use super::world::World;

/// Banner scale for the failure message
pub const FAILED_BANNER_SCALE: Vec3 = Vec3::new(9.0, 2.0, 0.0);
/// Banner scale for the victory message
pub const PASSED_BANNER_SCALE: Vec3 = Vec3::new(10.0, 2.0, 0.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Outcome {
    #[default]
    Running,
    Lost,
    Won,
}

impl Outcome {
    pub fn is_terminal(self) -> bool {
        self != Outcome::Running
    }
}

/// Notable things that happened during a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// The last unit of fuel was burned
    FuelExhausted,
    /// The player drifted past the horizontal bounds
    LeftArena,
    /// The player touched a terrain block that is not the pad
    Crashed { slot: usize },
    /// The player touched the pad
    Landed { slot: usize },
}

impl GameEvent {
    /// Outcome this event forces, if any
    pub fn outcome(self) -> Option<Outcome> {
        match self {
            GameEvent::FuelExhausted => None,
            GameEvent::LeftArena | GameEvent::Crashed { .. } => Some(Outcome::Lost),
            GameEvent::Landed { .. } => Some(Outcome::Won),
        }
    }
}

/// Check the player against the arena bounds, then terrain in slot order.
///
/// Bounds take precedence over terrain, and the first colliding slot wins.
pub fn evaluate(world: &World, arena_half_width: f32) -> Option<GameEvent> {
    if outside_arena(&world.player, arena_half_width) {
        return Some(GameEvent::LeftArena);
    }

    first_collision(&world.player, &world.terrain).map(|slot| {
        if slot == world.goal_index() {
            GameEvent::Landed { slot }
        } else {
            GameEvent::Crashed { slot }
        }
    })
}

/// Apply a terminal outcome: record it and raise the matching banner.
///
/// Ignored once the world is already terminal.
pub fn resolve(world: &mut World, outcome: Outcome) {
    if world.outcome.is_terminal() {
        return;
    }

    let textures = *world.textures();
    match outcome {
        Outcome::Running => return,
        Outcome::Lost => {
            world.banner.texture = textures.failed;
            world.banner.set_scale(FAILED_BANNER_SCALE);
        }
        Outcome::Won => {
            world.banner.texture = textures.passed;
            world.banner.set_scale(PASSED_BANNER_SCALE);
        }
    }
    world.outcome = outcome;
}
