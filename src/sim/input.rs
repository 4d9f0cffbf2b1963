//! Per-frame input snapshot
//!
//! The shell samples the host keyboard once per frame and hands the
//! simulation a plain value; nothing in here knows about windows.

use glam::Vec2;

/// Directional keys held during a frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DirectionKeys {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl DirectionKeys {
    pub const NONE: Self = Self {
        up: false,
        down: false,
        left: false,
        right: false,
    };

    /// True when no directional key is held
    pub fn is_idle(&self) -> bool {
        *self == Self::NONE
    }

    /// Sum of unit contributions per held key (opposing keys cancel)
    pub fn raw_direction(&self) -> Vec2 {
        let mut dir = Vec2::ZERO;
        if self.up {
            dir += Vec2::Y;
        }
        if self.down {
            dir -= Vec2::Y;
        }
        if self.right {
            dir += Vec2::X;
        }
        if self.left {
            dir -= Vec2::X;
        }
        dir
    }

    /// Unit-length (or zero) movement direction
    ///
    /// Holding two orthogonal keys does not move faster than holding one.
    pub fn direction(&self) -> Vec2 {
        self.raw_direction().normalize_or_zero()
    }
}

/// Input commands for a single frame
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub keys: DirectionKeys,
}

impl TickInput {
    pub fn new(keys: DirectionKeys) -> Self {
        Self { keys }
    }
}
