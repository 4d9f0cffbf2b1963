//! Color-cycling triangle
//!
//! No input, just a fixed triangle whose green channel follows a sine of
//! the elapsed time.

use glam::Vec2;

/// Triangle corners in NDC (counter-clockwise)
pub const TRIANGLE_CORNERS: [Vec2; 3] = [
    Vec2::new(-0.5, -0.5),
    Vec2::new(0.5, -0.5),
    Vec2::new(0.0, 0.5),
];

#[derive(Debug, Clone, Default)]
pub struct TriangleState {
    /// Seconds since the program started
    pub elapsed: f64,
}

impl TriangleState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self, dt: f64) {
        self.elapsed += dt;
    }

    /// Current RGBA color
    pub fn color(&self) -> [f32; 4] {
        [0.0, cycle_channel(self.elapsed), 0.0, 1.0]
    }
}

/// Map time onto [0, 1] with a sine wave
pub fn cycle_channel(t: f64) -> f32 {
    (t.sin() / 2.0 + 0.5) as f32
}
