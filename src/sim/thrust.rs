//! Input-to-force mapping
//!
//! Held keys become player acceleration and tilt, gated by a fuel tank. The
//! flame and fuel gauge decoratives follow whatever thrust fired this frame.

use glam::Vec3;

use super::body::UNIT_SCALE;
use super::tick::TickInput;
use super::world::World;
use crate::consts::FLAME_OFFSET;
use crate::tuning::Tuning;

/// Integer fuel counter, never below zero
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FuelTank {
    level: u32,
    capacity: u32,
}

impl FuelTank {
    pub fn new(capacity: u32) -> Self {
        Self {
            level: capacity,
            capacity,
        }
    }

    #[inline]
    pub fn level(&self) -> u32 {
        self.level
    }

    #[inline]
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.level == 0
    }

    /// Remaining fuel as a fraction of capacity
    pub fn fraction(&self) -> f32 {
        if self.capacity == 0 {
            0.0
        } else {
            self.level as f32 / self.capacity as f32
        }
    }

    /// Burn fuel for one thruster. Returns false (and burns nothing) when empty.
    pub fn burn(&mut self, amount: u32) -> bool {
        if self.is_empty() {
            return false;
        }
        self.level = self.level.saturating_sub(amount);
        true
    }
}

/// Horizontal thrust direction: Left wins when both are held
fn horizontal_direction(input: &TickInput) -> Option<f32> {
    match (input.left, input.right) {
        (true, _) => Some(-1.0),
        (false, true) => Some(1.0),
        (false, false) => None,
    }
}

/// Apply one frame of held input to the player. Returns the fuel burned.
///
/// Horizontal thrust is resolved before vertical, each against the fuel left
/// at that point, so both together cost two units.
pub fn apply_thrust(world: &mut World, input: &TickInput, tuning: &Tuning) -> u32 {
    let fuel_before = world.fuel.level();
    let origin = world.player.position;

    match horizontal_direction(input).filter(|_| !world.fuel.is_empty()) {
        Some(direction) => {
            let tilt = -direction * tuning.tilt_angle;
            world.player.acceleration.x = direction * tuning.thrust_horizontal;
            world.player.rotation = tilt;

            // Flame trails on the side opposite the push
            world.flame.position = origin + Vec3::new(-direction * FLAME_OFFSET, 0.0, 0.0);
            world.flame.rotation = tilt;
            world.flame.set_scale(UNIT_SCALE);

            burn(world, tuning);
        }
        None => {
            world.player.acceleration.x = 0.0;
            world.player.rotation = 0.0;
            world.flame.hide();
            world.flame.rotation = 0.0;
        }
    }

    if input.up && !world.fuel.is_empty() {
        world.player.acceleration.y = tuning.thrust_vertical;
        if world.flame.rotation == 0.0 {
            world.flame.position = origin - Vec3::new(0.0, FLAME_OFFSET, 0.0);
        }
        world.flame.set_scale(UNIT_SCALE);

        burn(world, tuning);
    } else {
        world.player.acceleration.y = tuning.gravity;
    }

    fuel_before - world.fuel.level()
}

fn burn(world: &mut World, tuning: &Tuning) {
    if world.fuel.burn(tuning.fuel_per_thrust) {
        let mut gauge = world.fuel_gauge.scale();
        gauge.x -= tuning.fuel_gauge_drain;
        world.fuel_gauge.set_scale(gauge);
    }
}
