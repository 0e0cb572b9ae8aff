//! World state: the entity registry
//!
//! One explicitly owned value holds every body in the game. Terrain is set up
//! once and never changes; only the player and the decorative bodies move.

use glam::Vec3;

use super::body::{Body, Sprite, SpriteKind};
use super::outcome::Outcome;
use super::thrust::FuelTank;
use crate::assets::TextureSet;
use crate::consts::{GOAL_SLOT, TERRAIN_SLOTS};
use crate::tuning::Tuning;

/// Hand-placed terrain, one entry per registry slot (x, y).
///
/// Slot order is collision precedence order. Slot 8 is the landing pad.
#[rustfmt::skip]
pub const TERRAIN_LAYOUT: [(f32, f32); TERRAIN_SLOTS] = [
    // Floor row, slots 0-9
    (-4.5, -3.25), (-3.5, -3.25), (-2.5, -3.25), (-1.5, -3.25), (-0.5, -3.25),
    ( 0.5, -3.25), ( 1.5, -3.25), ( 2.5, -3.25), ( 3.5, -3.25), ( 4.5, -3.25),
    // Steps
    (-2.5, -2.25),
    (-2.5, -2.25), // same spot as slot 10
    (-2.5, -1.25),
    (-1.5, -2.25),
    ( 1.5, -2.25),
    ( 0.5, -2.25), // slot 20 covers (4.5, -2.25)
    (-1.5, -1.25),
    (-1.5, -0.25),
    ( 0.5, -1.25),
    (-0.5, -2.25),
    ( 4.5, -2.25),
    (-4.5, -2.25),
    (-3.5, -2.25),
    (-4.5, -1.25),
];

/// Land indicator hovers one block above the pad
pub const LAND_INDICATOR_POSITION: Vec3 = Vec3::new(3.5, -2.25, 0.0);
pub const BANNER_POSITION: Vec3 = Vec3::new(0.0, 1.0, 0.0);
/// Flame rests here until the first frame's input moves or hides it
pub const FLAME_START_POSITION: Vec3 = Vec3::new(0.0, 1.0, 0.0);
pub const FUEL_GAUGE_POSITION: Vec3 = Vec3::new(4.0, 3.5, 0.0);
pub const FUEL_GAUGE_SCALE: Vec3 = Vec3::new(1.5, 0.25, 0.0);

/// Complete game world
#[derive(Debug, Clone)]
pub struct World {
    /// The lander
    pub player: Body,
    /// Static obstacles in slot order
    pub terrain: Vec<Body>,
    /// Slot whose collision is a landing rather than a crash
    goal_index: usize,
    /// Marker over the landing pad
    pub indicator: Body,
    /// Win/lose message, hidden while running
    pub banner: Body,
    /// Thruster flame, hidden when no thrust fires
    pub flame: Body,
    /// Cosmetic fuel bar
    pub fuel_gauge: Body,
    pub fuel: FuelTank,
    pub outcome: Outcome,
    /// Set by the input's quit signal
    pub quit_requested: bool,
    /// Simulated frame counter
    pub frame: u64,
    textures: TextureSet,
}

impl World {
    /// Build the fixed level
    pub fn new(textures: TextureSet, tuning: &Tuning) -> Self {
        let (start_x, start_y) = (tuning.start_position.x, tuning.start_position.y);
        let player = Body::new(
            SpriteKind::Lander,
            textures.lander,
            Vec3::new(start_x, start_y, 0.0),
        )
        .with_acceleration(Vec3::new(0.0, tuning.gravity, 0.0));

        let terrain = TERRAIN_LAYOUT
            .iter()
            .map(|&(x, y)| Body::new(SpriteKind::Stone, textures.stone, Vec3::new(x, y, 0.0)))
            .collect();

        let indicator = Body::new(
            SpriteKind::LandIndicator,
            textures.land_indicator,
            LAND_INDICATOR_POSITION,
        );

        let mut banner = Body::new(SpriteKind::Banner, textures.failed, BANNER_POSITION);
        banner.hide();

        let flame = Body::new(SpriteKind::Flame, textures.flame, FLAME_START_POSITION);

        let fuel_gauge = Body::new(SpriteKind::FuelGauge, textures.fuel, FUEL_GAUGE_POSITION)
            .with_scale(FUEL_GAUGE_SCALE);

        Self {
            player,
            terrain,
            goal_index: GOAL_SLOT,
            indicator,
            banner,
            flame,
            fuel_gauge,
            fuel: FuelTank::new(tuning.fuel_capacity),
            outcome: Outcome::Running,
            quit_requested: false,
            frame: 0,
            textures,
        }
    }

    pub fn player(&self) -> &Body {
        &self.player
    }

    pub fn all_terrain(&self) -> &[Body] {
        &self.terrain
    }

    pub fn goal_index(&self) -> usize {
        self.goal_index
    }

    /// The landing pad block
    pub fn goal(&self) -> &Body {
        &self.terrain[self.goal_index]
    }

    pub fn textures(&self) -> &TextureSet {
        &self.textures
    }

    /// Loop condition: no outcome yet and no quit requested
    pub fn is_running(&self) -> bool {
        !self.outcome.is_terminal() && !self.quit_requested
    }

    /// Every body in draw order
    pub fn bodies(&self) -> impl Iterator<Item = &Body> + '_ {
        std::iter::once(&self.player)
            .chain(self.terrain.iter())
            .chain([&self.indicator, &self.banner, &self.flame, &self.fuel_gauge])
    }

    /// Every body, mutably, in draw order
    pub fn bodies_mut(&mut self) -> impl Iterator<Item = &mut Body> + '_ {
        std::iter::once(&mut self.player)
            .chain(self.terrain.iter_mut())
            .chain([
                &mut self.indicator,
                &mut self.banner,
                &mut self.flame,
                &mut self.fuel_gauge,
            ])
    }

    /// Per-body draw records for the renderer
    pub fn sprites(&self) -> Vec<Sprite> {
        self.bodies().map(Body::sprite).collect()
    }
}
