//! Deterministic simulation module
//!
//! All per-frame logic lives here. This module must stay pure:
//! - Inputs arrive as plain snapshots (keys, elapsed time)
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod clock;
pub mod collision;
pub mod input;
pub mod movement;
pub mod square;
pub mod state;
pub mod tick;
pub mod trail;
pub mod triangle;

pub use clock::{FrameClock, TimeSource};
pub use collision::{CollisionResult, point_collision, points_collide};
pub use input::{DirectionKeys, TickInput};
pub use movement::{MovementConfig, integrate};
pub use square::SquareState;
pub use state::{GameEvent, SnakeState};
pub use tick::{SimConfig, tick};
pub use trail::{Trail, ZeroScoreTrail};
pub use triangle::{TRIANGLE_CORNERS, TriangleState};
