//! Axis-aligned collision checks
//!
//! Bodies collide as rectangles centred on their position. Rotation is a
//! render-only property: a tilted lander still collides with its upright box.

use glam::Vec2;

use super::body::Body;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub center: Vec2,
    pub half_extents: Vec2,
}

impl Aabb {
    pub fn new(center: Vec2, half_extents: Vec2) -> Self {
        Self {
            center,
            half_extents,
        }
    }

    /// Box around a body's collision footprint
    pub fn of(body: &Body) -> Self {
        Self::new(body.position.truncate(), body.half_extents())
    }

    /// Strict overlap on both axes; boxes sharing an edge do not overlap
    pub fn overlaps(&self, other: &Aabb) -> bool {
        let distance = (self.center - other.center).abs();
        let reach = self.half_extents + other.half_extents;
        distance.x < reach.x && distance.y < reach.y
    }
}

/// Check whether two bodies' boxes overlap
#[inline]
pub fn check_collision(a: &Body, b: &Body) -> bool {
    Aabb::of(a).overlaps(&Aabb::of(b))
}

/// Index of the first body in `others` that overlaps `body`, in iteration order
pub fn first_collision<'a, I>(body: &Body, others: I) -> Option<usize>
where
    I: IntoIterator<Item = &'a Body>,
{
    let aabb = Aabb::of(body);
    others
        .into_iter()
        .position(|other| aabb.overlaps(&Aabb::of(other)))
}

/// Check if a body's centre has left the horizontal play area `[-half_width, half_width]`
#[inline]
pub fn outside_arena(body: &Body, half_width: f32) -> bool {
    body.position.x < -half_width || body.position.x > half_width
}
