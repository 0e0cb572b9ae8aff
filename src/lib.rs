//! Lunar Lander - steer a lander onto the landing pad against gravity
//!
//! Core modules:
//! - `sim`: Frame simulation (kinematics, collisions, outcome)
//! - `platform`: Clock/input/render/asset collaborator seams
//! - `assets`: Texture handles and the fixed asset table
//! - `tuning`: Data-driven game balance
//! - `game`: Outer frame loop

pub mod assets;
pub mod game;
pub mod platform;
pub mod sim;
pub mod tuning;

pub use game::{Game, RunSummary};
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Downward acceleration applied whenever vertical thrust is off
    pub const GRAVITY: f32 = -0.2;
    /// Horizontal acceleration while Left/Right thrust fires
    pub const THRUST_HORIZONTAL: f32 = 0.75;
    /// Vertical acceleration while Up thrust fires (replaces gravity)
    pub const THRUST_VERTICAL: f32 = 0.5;
    /// Lander tilt while thrusting sideways (radians)
    pub const TILT_ANGLE: f32 = 1.6;

    /// Fuel units in a full tank
    pub const FUEL_CAPACITY: u32 = 5000;
    /// Fuel burned per thruster per frame
    pub const FUEL_PER_THRUST: u32 = 1;
    /// Fuel gauge width lost per thruster per frame
    pub const FUEL_GAUGE_DRAIN: f32 = 0.0003;

    /// Hard cap on body speed (units/s)
    pub const MAX_SPEED: f32 = 1.0;
    /// Player x beyond ±this is out of the arena
    pub const ARENA_HALF_WIDTH: f32 = 5.5;
    /// Player spawn point
    pub const PLAYER_START: (f32, f32) = (-3.75, 3.0);

    /// Flame sprite distance from the lander centre
    pub const FLAME_OFFSET: f32 = 0.5;
    /// Lander hitbox width (sprite art has transparent margins)
    pub const LANDER_HITBOX_WIDTH: f32 = 0.8;

    /// Terrain registry size
    pub const TERRAIN_SLOTS: usize = 24;
    /// The terrain slot that counts as a landing
    pub const GOAL_SLOT: usize = 8;

    /// How long the win/lose banner stays up after the run ends
    pub const END_SCREEN_SECS: f32 = 2.0;
    pub const MILLISECONDS_PER_SECOND: f32 = 1000.0;
}
