//! Position integration with per-axis clamping

use glam::Vec2;

use crate::clamp_to_bounds;

/// Speed and playfield extent used by the integrator
#[derive(Debug, Clone, Copy)]
pub struct MovementConfig {
    /// Units per second
    pub speed: f32,
    /// Positions are clamped to [-limit, limit] on each axis
    pub limit: f32,
}

/// Advance `pos` by `dir * speed * dt` and clamp to the playfield
///
/// `dir` is expected to be unit-length or zero. A zero direction never
/// moves the point, whatever `dt` is.
pub fn integrate(pos: Vec2, dir: Vec2, dt: f32, cfg: MovementConfig) -> Vec2 {
    if dir == Vec2::ZERO {
        return clamp_to_bounds(pos, cfg.limit);
    }
    // Any step longer than the playfield diagonal lands on the border anyway;
    // capping keeps `0 * step` finite on the idle axis when speed * dt overflows.
    let step = (cfg.speed * dt).min(MAX_STEP_SPANS * cfg.limit);
    clamp_to_bounds(pos + dir * step, cfg.limit)
}

/// Longest step, in multiples of `limit`, a single frame may take
const MAX_STEP_SPANS: f32 = 4.0;
