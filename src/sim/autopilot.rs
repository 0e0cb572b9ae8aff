//! Demo autopilot
//!
//! Flies the lander from the current world state: cruise above the steps,
//! line up over the pad, then let gravity bring it down with the main engine
//! braking the descent.

use super::tick::TickInput;
use super::world::World;

/// Altitude to hold while crossing the terrain (tallest step tops out at 0.25)
const CRUISE_ALTITUDE: f32 = 1.5;
/// Horizontal speed the autopilot aims for at most
const CRUISE_SPEED: f32 = 0.5;
/// Gain from horizontal distance to desired horizontal speed
const APPROACH_GAIN: f32 = 1.5;
/// Dead band around the desired horizontal speed
const SPEED_TOLERANCE: f32 = 0.05;
/// Inside this distance of the pad centre the autopilot only brakes sideways.
///
/// `APPROACH_GAIN * ALIGN_TOLERANCE` must stay above `SPEED_TOLERANCE`, or the
/// lander can settle just outside the band with no thrust to re-centre it.
const ALIGN_TOLERANCE: f32 = 0.05;
/// Close enough to the pad centre to start descending; the lander clears
/// both neighbouring blocks while within this distance
const DESCENT_WINDOW: f32 = 0.1;
/// Fastest acceptable sink rate on final descent
const MAX_DESCENT_SPEED: f32 = 0.35;
/// Sink rate that triggers the engine during cruise
const CRUISE_SINK_SPEED: f32 = 0.1;

/// Pick this frame's controls
pub fn autopilot(world: &World) -> TickInput {
    let player = world.player();
    let pad = world.goal().position;

    let dx = pad.x - player.position.x;
    let vx = player.velocity.x;
    let vy = player.velocity.y;

    let desired_vx = if dx.abs() < ALIGN_TOLERANCE {
        0.0
    } else {
        (dx * APPROACH_GAIN).clamp(-CRUISE_SPEED, CRUISE_SPEED)
    };
    let left = vx > desired_vx + SPEED_TOLERANCE;
    let right = vx < desired_vx - SPEED_TOLERANCE;

    let up = if dx.abs() < DESCENT_WINDOW {
        vy < -MAX_DESCENT_SPEED
    } else {
        player.position.y < CRUISE_ALTITUDE || vy < -CRUISE_SINK_SPEED
    };

    TickInput {
        left,
        right,
        up,
        ..Default::default()
    }
}
