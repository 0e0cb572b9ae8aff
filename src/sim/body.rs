//! Kinematic bodies
//!
//! Every entity in the world, simulated or decorative, is a `Body`. Bodies are
//! plain values; the world owns them and identifies them by slot, not address.

use glam::{Vec2, Vec3};

use crate::assets::TextureId;
use crate::consts::LANDER_HITBOX_WIDTH;

/// Which sprite a body shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteKind {
    Lander,
    Stone,
    LandIndicator,
    Banner,
    Flame,
    FuelGauge,
}

impl SpriteKind {
    /// Unscaled footprint in world units, used as the collision box
    pub fn base_size(self) -> Vec2 {
        match self {
            SpriteKind::Lander => Vec2::new(LANDER_HITBOX_WIDTH, 1.0),
            _ => Vec2::ONE,
        }
    }
}

/// What the renderer needs to draw one body
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    pub position: Vec3,
    pub scale: Vec3,
    pub rotation: f32,
    pub texture: TextureId,
}

/// Unit scale on x/y; z stays flat for 2D sprites
pub const UNIT_SCALE: Vec3 = Vec3::new(1.0, 1.0, 0.0);

/// Transform and physics state of one entity
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub kind: SpriteKind,
    pub position: Vec3,
    pub velocity: Vec3,
    pub acceleration: Vec3,
    /// Never negative; zero means hidden
    scale: Vec3,
    /// Render-only; collision ignores it
    pub rotation: f32,
    pub texture: TextureId,
}

impl Body {
    /// Create a body at rest with unit scale
    pub fn new(kind: SpriteKind, texture: TextureId, position: Vec3) -> Self {
        Self {
            kind,
            position,
            velocity: Vec3::ZERO,
            acceleration: Vec3::ZERO,
            scale: UNIT_SCALE,
            rotation: 0.0,
            texture,
        }
    }

    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.set_scale(scale);
        self
    }

    pub fn with_acceleration(mut self, acceleration: Vec3) -> Self {
        self.acceleration = acceleration;
        self
    }

    #[inline]
    pub fn scale(&self) -> Vec3 {
        self.scale
    }

    /// Set scale, clamping negative components to zero
    pub fn set_scale(&mut self, scale: Vec3) {
        self.scale = scale.max(Vec3::ZERO);
    }

    pub fn hide(&mut self) {
        self.scale = Vec3::ZERO;
    }

    pub fn is_visible(&self) -> bool {
        self.scale.x > 0.0 && self.scale.y > 0.0
    }

    /// Half width/height of the collision box
    pub fn half_extents(&self) -> Vec2 {
        self.kind.base_size() * self.scale.truncate() * 0.5
    }

    /// Advance one step with semi-implicit Euler.
    ///
    /// Acceleration folds into velocity first, then velocity moves the
    /// position. Speed above `max_speed` is clamped back to exactly
    /// `max_speed` along the same direction.
    pub fn integrate(&mut self, dt: f32, max_speed: f32) {
        self.velocity += self.acceleration * dt;
        if self.velocity.length() > max_speed {
            self.velocity = self.velocity.normalize() * max_speed;
        }
        self.position += self.velocity * dt;
    }

    pub fn sprite(&self) -> Sprite {
        Sprite {
            position: self.position,
            scale: self.scale,
            rotation: self.rotation,
            texture: self.texture,
        }
    }
}
