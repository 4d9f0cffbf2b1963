//! The three programs as scenes the shell can drive
//!
//! A scene owns its simulation state, advances it once per frame and
//! emits triangles for the renderer.

use clap::ValueEnum;

use crate::renderer::shapes::{point_sprite, rect, triangle};
use crate::renderer::{Vertex, colors};
use crate::settings::Settings;
use crate::sim::{
    GameEvent, SimConfig, SnakeState, SquareState, TRIANGLE_CORNERS, TickInput, TriangleState, tick,
};

/// Which program to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SceneKind {
    /// Point snake chasing a random enemy
    #[default]
    Snake,
    /// Color-cycling triangle
    Triangle,
    /// Keyboard-controlled square
    Square,
}

impl SceneKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SceneKind::Snake => "snake",
            SceneKind::Triangle => "triangle",
            SceneKind::Square => "square",
        }
    }

    pub fn build(self, settings: &Settings, seed: u64) -> Box<dyn Scene> {
        match self {
            SceneKind::Snake => Box::new(SnakeScene::new(seed, settings)),
            SceneKind::Triangle => Box::new(TriangleScene::default()),
            SceneKind::Square => Box::new(SquareScene::new(settings.player_speed)),
        }
    }
}

/// One program driven by the render loop
pub trait Scene {
    fn kind(&self) -> SceneKind;

    /// Advance by one frame of `dt` seconds
    fn update(&mut self, input: &TickInput, dt: f64) -> Vec<GameEvent>;

    /// Append this frame's triangles to `out`
    fn draw(&self, out: &mut Vec<Vertex>, viewport: (u32, u32));
}

pub struct SnakeScene {
    pub state: SnakeState,
    config: SimConfig,
    point_size: f32,
}

impl SnakeScene {
    pub fn new(seed: u64, settings: &Settings) -> Self {
        Self {
            state: SnakeState::new(seed),
            config: settings.sim_config(),
            point_size: settings.point_size,
        }
    }
}

impl Scene for SnakeScene {
    fn kind(&self) -> SceneKind {
        SceneKind::Snake
    }

    fn update(&mut self, input: &TickInput, dt: f64) -> Vec<GameEvent> {
        tick(&mut self.state, input, dt as f32, &self.config)
    }

    fn draw(&self, out: &mut Vec<Vertex>, viewport: (u32, u32)) {
        let size = self.point_size;
        out.reserve(6 * (2 + self.state.trail.len()));
        out.extend(point_sprite(self.state.enemy, size, viewport, colors::ENEMY));
        out.extend(point_sprite(self.state.player, size, viewport, colors::PLAYER));
        for pos in self.state.trail.iter() {
            out.extend(point_sprite(pos, size, viewport, colors::TAIL));
        }
    }
}

#[derive(Default)]
pub struct TriangleScene {
    pub state: TriangleState,
}

impl Scene for TriangleScene {
    fn kind(&self) -> SceneKind {
        SceneKind::Triangle
    }

    fn update(&mut self, _input: &TickInput, dt: f64) -> Vec<GameEvent> {
        self.state.advance(dt);
        Vec::new()
    }

    fn draw(&self, out: &mut Vec<Vertex>, _viewport: (u32, u32)) {
        out.extend(triangle(TRIANGLE_CORNERS, self.state.color()));
    }
}

pub struct SquareScene {
    pub state: SquareState,
}

impl SquareScene {
    pub fn new(speed: f32) -> Self {
        Self {
            state: SquareState::new(speed),
        }
    }
}

impl Scene for SquareScene {
    fn kind(&self) -> SceneKind {
        SceneKind::Square
    }

    fn update(&mut self, input: &TickInput, dt: f64) -> Vec<GameEvent> {
        self.state.update(input, dt as f32);
        Vec::new()
    }

    fn draw(&self, out: &mut Vec<Vertex>, _viewport: (u32, u32)) {
        let (min, max) = self.state.corners();
        out.extend(rect(min, max, colors::SQUARE));
    }
}
