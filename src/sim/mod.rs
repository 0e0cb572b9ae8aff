//! Frame simulation module
//!
//! All gameplay logic lives here. This module must stay free of platform
//! dependencies:
//! - Time arrives as a delta in seconds
//! - Input arrives as held-key state
//! - Output is per-body sprite data, never draw calls
//! - Stable iteration order (terrain by slot index)

pub mod autopilot;
pub mod body;
pub mod collision;
pub mod outcome;
pub mod thrust;
pub mod tick;
pub mod world;

pub use autopilot::autopilot;
pub use body::{Body, Sprite, SpriteKind};
pub use collision::{Aabb, check_collision, first_collision, outside_arena};
pub use outcome::{GameEvent, Outcome, evaluate, resolve};
pub use thrust::{FuelTank, apply_thrust};
pub use tick::{FrameTimer, TickInput, tick};
pub use world::{TERRAIN_LAYOUT, World};
