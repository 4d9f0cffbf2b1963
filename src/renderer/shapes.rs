//! Shape generation for 2D primitives
//!
//! All inputs are in normalized device coordinates except point sprite
//! sizes, which are in pixels so a point looks the same at any window size.

use glam::Vec2;

use super::vertex::Vertex;

/// Half-extent in NDC of a square sprite `size_px` pixels wide
pub fn point_half_extent(size_px: f32, viewport: (u32, u32)) -> Vec2 {
    let (w, h) = viewport;
    // NDC spans 2 units across the viewport
    Vec2::new(size_px / w.max(1) as f32, size_px / h.max(1) as f32)
}

/// Axis-aligned quad between `min` and `max`
pub fn rect(min: Vec2, max: Vec2, color: [f32; 4]) -> [Vertex; 6] {
    [
        Vertex::new(min.x, min.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(max.x, max.y, color),
        Vertex::new(min.x, min.y, color),
        Vertex::new(max.x, max.y, color),
        Vertex::new(min.x, max.y, color),
    ]
}

/// Square point sprite centered at `center`
pub fn point_sprite(center: Vec2, size_px: f32, viewport: (u32, u32), color: [f32; 4]) -> [Vertex; 6] {
    let half = point_half_extent(size_px, viewport);
    rect(center - half, center + half, color)
}

/// Single filled triangle
pub fn triangle(corners: [Vec2; 3], color: [f32; 4]) -> [Vertex; 3] {
    corners.map(|c| Vertex::new(c.x, c.y, color))
}
