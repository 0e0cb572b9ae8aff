//! Per-frame simulation tick
//!
//! Advances the world by one variable-length frame in a fixed order:
//! thrust from input, integration of every body, then outcome checks.

use super::autopilot::autopilot;
use super::outcome::{GameEvent, evaluate, resolve};
use super::thrust::apply_thrust;
use super::world::World;
use crate::consts::MILLISECONDS_PER_SECOND;
use crate::tuning::Tuning;

/// Held-key state for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Left thruster (pushes the lander left)
    pub left: bool,
    /// Right thruster
    pub right: bool,
    /// Main engine
    pub up: bool,
    /// Quit key or window close
    pub quit: bool,
    /// Demo mode - the autopilot flies instead of the held keys
    pub autopilot: bool,
}

/// Advance the world by one frame of `dt` seconds.
///
/// Returns what happened this frame. A world that already has an outcome is
/// left untouched.
pub fn tick(world: &mut World, input: &TickInput, dt: f32, tuning: &Tuning) -> Vec<GameEvent> {
    let mut events = Vec::new();

    // Don't tick once the run is over
    if world.outcome.is_terminal() {
        return events;
    }

    // Quit ends the loop after this frame; the frame itself still runs
    if input.quit {
        world.quit_requested = true;
    }

    let input = if input.autopilot {
        TickInput {
            quit: input.quit,
            ..autopilot(world)
        }
    } else {
        *input
    };

    world.frame += 1;
    let dt = dt.max(0.0);

    let burned = apply_thrust(world, &input, tuning);
    if burned > 0 && world.fuel.is_empty() {
        log::debug!("Fuel exhausted on frame {}", world.frame);
        events.push(GameEvent::FuelExhausted);
    }

    for body in world.bodies_mut() {
        body.integrate(dt, tuning.max_speed);
    }

    if let Some(event) = evaluate(world, tuning.arena_half_width) {
        if let Some(outcome) = event.outcome() {
            resolve(world, outcome);
            log::info!(
                "{:?} on frame {} at {:?} ({:?}), fuel left {}",
                outcome,
                world.frame,
                world.player.position.truncate(),
                event,
                world.fuel.level()
            );
        }
        events.push(event);
    }

    log::trace!(
        "frame {} dt {:.4} pos {:?} vel {:?} fuel {}",
        world.frame,
        dt,
        world.player.position.truncate(),
        world.player.velocity.truncate(),
        world.fuel.level()
    );

    events
}

/// Turns a millisecond tick counter into per-frame deltas.
///
/// A counter that jumps backwards (or wraps) yields a zero delta and the
/// timer re-anchors on the new reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameTimer {
    previous_ms: u32,
}

impl FrameTimer {
    pub fn new(now_ms: u32) -> Self {
        Self {
            previous_ms: now_ms,
        }
    }

    /// Seconds since the previous reading, never negative
    pub fn delta_seconds(&mut self, now_ms: u32) -> f32 {
        let elapsed_ms = now_ms.checked_sub(self.previous_ms).unwrap_or(0);
        self.previous_ms = now_ms;
        elapsed_ms as f32 / MILLISECONDS_PER_SECOND
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::TextureSet;
    use crate::platform::headless::HeadlessAssets;
    use crate::sim::outcome::Outcome;
    use glam::Vec3;

    const DT: f32 = 1.0 / 60.0;

    fn world_with(tuning: &Tuning) -> World {
        let textures = TextureSet::load(&mut HeadlessAssets::default()).unwrap();
        World::new(textures, tuning)
    }

    /// Tick with `input` until the run ends or `max_frames` pass
    fn run_until_done(world: &mut World, input: &TickInput, tuning: &Tuning, max_frames: u32) {
        for _ in 0..max_frames {
            if !world.is_running() {
                break;
            }
            tick(world, input, DT, tuning);
        }
    }

    #[test]
    fn test_free_fall_crashes_into_terrain() {
        let tuning = Tuning::default();
        let mut world = world_with(&tuning);
        let input = TickInput::default();

        let mut last_y = world.player.position.y;
        let mut last_events = Vec::new();
        for _ in 0..5000 {
            if !world.is_running() {
                break;
            }
            last_events = tick(&mut world, &input, DT, &tuning);
            assert!(world.player.position.y < last_y);
            assert_eq!(world.player.position.x, -3.75);
            last_y = world.player.position.y;
        }

        assert_eq!(world.outcome, Outcome::Lost);
        assert_eq!(last_events, vec![GameEvent::Crashed { slot: 23 }]);
        assert!(world.banner.is_visible());
        assert_eq!(world.banner.texture, world.textures().failed);
    }

    #[test]
    fn test_drop_onto_pad_wins() {
        let tuning = Tuning::default();
        let mut world = world_with(&tuning);
        world.player.position = Vec3::new(3.5, -1.0, 0.0);

        run_until_done(&mut world, &TickInput::default(), &tuning, 5000);

        assert_eq!(world.outcome, Outcome::Won);
        assert_eq!(world.banner.texture, world.textures().passed);
        assert!(!world.is_running());
    }

    #[test]
    fn test_drifting_out_of_bounds_loses() {
        let tuning = Tuning::default();
        let mut world = world_with(&tuning);
        world.player.position = Vec3::new(5.49, 3.0, 0.0);
        world.player.velocity = Vec3::new(1.0, 0.0, 0.0);

        let events = tick(&mut world, &TickInput::default(), 0.1, &tuning);
        assert_eq!(events, vec![GameEvent::LeftArena]);
        assert_eq!(world.outcome, Outcome::Lost);
    }

    #[test]
    fn test_outcome_is_terminal() {
        let tuning = Tuning::default();
        let mut world = world_with(&tuning);
        world.player.position = Vec3::new(3.5, -1.0, 0.0);
        run_until_done(&mut world, &TickInput::default(), &tuning, 5000);
        assert_eq!(world.outcome, Outcome::Won);

        let frozen_position = world.player.position;
        let frozen_frame = world.frame;
        let frozen_fuel = world.fuel.level();
        let thrust = TickInput {
            left: true,
            up: true,
            ..Default::default()
        };

        for _ in 0..10 {
            let events = tick(&mut world, &thrust, DT, &tuning);
            assert!(events.is_empty());
            assert_eq!(world.outcome, Outcome::Won);
            assert!(!world.is_running());
        }
        assert_eq!(world.player.position, frozen_position);
        assert_eq!(world.frame, frozen_frame);
        assert_eq!(world.fuel.level(), frozen_fuel);
    }

    #[test]
    fn test_holding_left_drains_fuel_then_falls_back_to_gravity() {
        let tuning = Tuning {
            fuel_capacity: 5,
            ..Tuning::default()
        };
        let mut world = world_with(&tuning);
        let left = TickInput {
            left: true,
            ..Default::default()
        };

        let mut exhausted = 0;
        for frame in 1..=8u32 {
            let events = tick(&mut world, &left, DT, &tuning);
            exhausted += events
                .iter()
                .filter(|e| **e == GameEvent::FuelExhausted)
                .count();

            assert_eq!(world.fuel.level(), 5u32.saturating_sub(frame));
            if frame <= 5 {
                assert_eq!(world.player.acceleration.x, -0.75);
            } else {
                assert_eq!(world.player.acceleration, Vec3::new(0.0, -0.2, 0.0));
                assert_eq!(world.player.rotation, 0.0);
            }
        }
        assert_eq!(exhausted, 1);
        assert!(world.is_running());
    }

    #[test]
    fn test_quit_still_completes_the_frame() {
        let tuning = Tuning::default();
        let mut world = world_with(&tuning);
        let start_y = world.player.position.y;
        let quit = TickInput {
            quit: true,
            ..Default::default()
        };

        tick(&mut world, &quit, DT, &tuning);

        assert!(world.quit_requested);
        assert!(!world.is_running());
        assert_eq!(world.frame, 1);
        assert!(world.player.position.y < start_y);
        assert_eq!(world.outcome, Outcome::Running);
    }

    #[test]
    fn test_negative_delta_is_clamped() {
        let tuning = Tuning::default();
        let mut world = world_with(&tuning);
        let start = world.player.position;

        tick(&mut world, &TickInput::default(), -0.5, &tuning);

        assert_eq!(world.player.position, start);
        assert_eq!(world.player.velocity, Vec3::ZERO);
    }

    #[test]
    fn test_autopilot_flag_takes_the_controls() {
        let tuning = Tuning::default();
        let mut world = world_with(&tuning);
        let demo = TickInput {
            autopilot: true,
            ..Default::default()
        };

        tick(&mut world, &demo, DT, &tuning);

        // Spawn is left of the pad, so the autopilot pushes right
        assert!(world.player.acceleration.x > 0.0);
        assert!(world.fuel.level() < tuning.fuel_capacity);
    }

    #[test]
    fn test_frame_timer_deltas() {
        let mut timer = FrameTimer::new(1000);
        assert!((timer.delta_seconds(1016) - 0.016).abs() < 1e-6);
        assert_eq!(timer.delta_seconds(1016), 0.0);
        assert!((timer.delta_seconds(1516) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_frame_timer_clamps_backward_jumps() {
        let mut timer = FrameTimer::new(5000);
        assert_eq!(timer.delta_seconds(4000), 0.0);
        // Re-anchored on the backward reading
        assert!((timer.delta_seconds(4050) - 0.05).abs() < 1e-6);

        let mut wrapping = FrameTimer::new(u32::MAX - 5);
        assert_eq!(wrapping.delta_seconds(10), 0.0);
        assert!((wrapping.delta_seconds(26) - 0.016).abs() < 1e-6);
    }
}
