//! Keyboard state tracking
//!
//! Keys are "held" between their press and release events. The shell
//! snapshots the held set into `DirectionKeys` once per frame.

use std::collections::HashSet;

use winit::keyboard::KeyCode;

use crate::sim::{DirectionKeys, TickInput};

/// What a key event means to the shell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Nothing beyond updating held state
    None,
    /// Close the window after this frame
    Close,
}

#[derive(Debug, Default)]
pub struct KeyboardState {
    held: HashSet<KeyCode>,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key press or release
    pub fn on_key(&mut self, code: KeyCode, pressed: bool) -> KeyAction {
        if pressed {
            self.held.insert(code);
            if code == KeyCode::Escape {
                return KeyAction::Close;
            }
        } else {
            self.held.remove(&code);
        }
        KeyAction::None
    }

    /// Forget every held key (on focus loss, so nothing sticks)
    pub fn clear(&mut self) {
        self.held.clear();
    }

    pub fn is_held(&self, code: KeyCode) -> bool {
        self.held.contains(&code)
    }

    fn any_held(&self, codes: &[KeyCode]) -> bool {
        codes.iter().any(|c| self.held.contains(c))
    }

    /// Snapshot of the directional keys (WASD or arrows)
    pub fn direction_keys(&self) -> DirectionKeys {
        DirectionKeys {
            up: self.any_held(&[KeyCode::KeyW, KeyCode::ArrowUp]),
            down: self.any_held(&[KeyCode::KeyS, KeyCode::ArrowDown]),
            left: self.any_held(&[KeyCode::KeyA, KeyCode::ArrowLeft]),
            right: self.any_held(&[KeyCode::KeyD, KeyCode::ArrowRight]),
        }
    }

    pub fn tick_input(&self) -> TickInput {
        TickInput::new(self.direction_keys())
    }
}
