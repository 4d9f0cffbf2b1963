//! Point-vs-point proximity test
//!
//! Two points collide when the distance between them is strictly less than
//! the hit radius. Touching exactly at the radius is a miss.

use glam::Vec2;

/// Result of a collision check
#[derive(Debug, Clone, Copy)]
pub struct CollisionResult {
    /// Whether a collision occurred
    pub hit: bool,
    /// Euclidean distance between the two points
    pub distance: f32,
}

/// Check proximity between two points
pub fn point_collision(a: Vec2, b: Vec2, radius: f32) -> CollisionResult {
    let distance = a.distance(b);
    CollisionResult {
        hit: distance < radius,
        distance,
    }
}

/// Shorthand for `point_collision(a, b, radius).hit`
#[inline]
pub fn points_collide(a: Vec2, b: Vec2, radius: f32) -> bool {
    point_collision(a, b, radius).hit
}
