//! Platform collaborators for the native shell
//!
//! Handles host-side concerns the simulation never sees:
//! - Keyboard state (winit key codes → direction snapshot)
//! - Monotonic time

pub mod input;
pub mod time;

pub use input::{KeyAction, KeyboardState};
pub use time::MonotonicClock;
