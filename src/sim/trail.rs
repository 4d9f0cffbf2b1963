//! Player trail history (newest first)

use std::collections::VecDeque;

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// What the trail does while the score is still zero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZeroScoreTrail {
    /// Keep the trail empty until the first catch
    #[default]
    Clear,
    /// Keep every recorded position until the first catch (unbounded)
    Accumulate,
}

/// Past player positions, most recent first
#[derive(Debug, Clone, Default)]
pub struct Trail {
    points: VecDeque<Vec2>,
}

impl Trail {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend `pos` and trim the trail to `score` entries
    pub fn record(&mut self, pos: Vec2, score: u32, policy: ZeroScoreTrail) {
        self.points.push_front(pos);
        if score > 0 {
            self.points.truncate(score as usize);
        } else if policy == ZeroScoreTrail::Clear {
            self.points.clear();
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Most recent position, if any
    pub fn head(&self) -> Option<Vec2> {
        self.points.front().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.points.iter().copied()
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }
}
