//! Keyboard-controlled square
//!
//! Same direction/speed integrator as the snake player, but the limit is
//! shrunk by the half-extent so the whole square stays on screen.

use glam::Vec2;

use super::input::TickInput;
use super::movement::{MovementConfig, integrate};
use crate::consts::{BOUNDS, SQUARE_HALF_SIZE};

#[derive(Debug, Clone)]
pub struct SquareState {
    pub center: Vec2,
    pub half_size: f32,
    pub speed: f32,
}

impl SquareState {
    pub fn new(speed: f32) -> Self {
        Self {
            center: Vec2::ZERO,
            half_size: SQUARE_HALF_SIZE,
            speed,
        }
    }

    pub fn update(&mut self, input: &TickInput, dt: f32) {
        let cfg = MovementConfig {
            speed: self.speed,
            limit: (BOUNDS - self.half_size).max(0.0),
        };
        self.center = integrate(self.center, input.keys.direction(), dt, cfg);
    }

    /// Bottom-left and top-right corners
    pub fn corners(&self) -> (Vec2, Vec2) {
        let half = Vec2::splat(self.half_size);
        (self.center - half, self.center + half)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::DirectionKeys;

    #[test]
    fn test_square_moves_with_keys() {
        let mut square = SquareState::new(1.0);
        let up = TickInput::new(DirectionKeys {
            up: true,
            ..DirectionKeys::NONE
        });
        square.update(&up, 0.5);
        assert!((square.center.y - 0.5).abs() < 1e-6);
        assert_eq!(square.center.x, 0.0);
    }

    #[test]
    fn test_square_stays_on_screen() {
        let mut square = SquareState::new(1.0);
        let down_left = TickInput::new(DirectionKeys {
            down: true,
            left: true,
            ..DirectionKeys::NONE
        });
        square.update(&down_left, 100.0);
        let (min, max) = square.corners();
        assert!((min.x + 1.0).abs() < 1e-6);
        assert!((min.y + 1.0).abs() < 1e-6);
        assert!((max.x - (-1.0 + 2.0 * SQUARE_HALF_SIZE)).abs() < 1e-6);
        assert!(max.y <= 1.0);
    }

    #[test]
    fn test_square_idle() {
        let mut square = SquareState::new(1.0);
        square.center = Vec2::new(0.2, 0.3);
        square.update(&TickInput::default(), 5.0);
        assert_eq!(square.center, Vec2::new(0.2, 0.3));
    }
}
