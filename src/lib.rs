//! Point Snake - three small windowed toys on one render shell
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, trail, collisions, frame clock)
//! - `scene`: The three programs (snake, triangle, square) as drawable scenes
//! - `renderer`: wgpu rendering pipeline
//! - `platform`: Native input/time collaborators
//! - `app`: winit event loop driving a scene once per frame

pub mod app;
pub mod platform;
pub mod renderer;
pub mod scene;
pub mod settings;
pub mod sim;

pub use scene::{Scene, SceneKind};
pub use settings::{Settings, SettingsError};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Player speed in NDC units per second
    pub const PLAYER_SPEED: f32 = 1.0;
    /// Player/enemy hit distance (strictly less than)
    pub const COLLISION_RADIUS: f32 = 0.15;
    /// Playfield half-extent; positions live in [-BOUNDS, BOUNDS]
    pub const BOUNDS: f32 = 1.0;

    /// Point sprite size in pixels
    pub const POINT_SIZE: f32 = 40.0;
    /// Half-extent of the keyboard-driven square
    pub const SQUARE_HALF_SIZE: f32 = 0.1;

    /// Window defaults
    pub const WINDOW_WIDTH: u32 = 800;
    pub const WINDOW_HEIGHT: u32 = 600;
    pub const WINDOW_TITLE: &str = "LearnOpenGL";
}

/// Clamp each axis of `pos` independently to [-limit, limit]
#[inline]
pub fn clamp_to_bounds(pos: Vec2, limit: f32) -> Vec2 {
    Vec2::new(pos.x.clamp(-limit, limit), pos.y.clamp(-limit, limit))
}
