//! Native shell
//!
//! Owns the window, GPU state, keyboard state and frame clock, and drives
//! one scene update + draw per redraw. Everything runs on the event-loop
//! thread.

use std::sync::Arc;

use anyhow::{Context, Result};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::PhysicalKey;
use winit::window::{Window, WindowId};

use crate::platform::{KeyAction, KeyboardState, MonotonicClock};
use crate::renderer::{RenderState, Vertex, colors};
use crate::scene::{Scene, SceneKind};
use crate::settings::Settings;
use crate::sim::{FrameClock, GameEvent};

/// Window + render loop around one scene
pub struct App {
    settings: Settings,
    scene: Box<dyn Scene>,
    window: Option<Arc<Window>>,
    render_state: Option<RenderState>,
    keyboard: KeyboardState,
    time: MonotonicClock,
    clock: Option<FrameClock>,
    /// Reused each frame
    vertices: Vec<Vertex>,
    /// Fatal error raised inside an event callback
    error: Option<anyhow::Error>,
}

impl App {
    pub fn new(settings: Settings, kind: SceneKind, seed: u64) -> Self {
        let scene = kind.build(&settings, seed);
        Self {
            settings,
            scene,
            window: None,
            render_state: None,
            keyboard: KeyboardState::new(),
            time: MonotonicClock::new(),
            clock: None,
            vertices: Vec::new(),
            error: None,
        }
    }

    /// Create the window and GPU state
    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attrs = Window::default_attributes()
            .with_title(self.settings.title.clone())
            .with_inner_size(LogicalSize::new(
                self.settings.window_width,
                self.settings.window_height,
            ));
        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .context("failed to create window")?,
        );

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });
        let surface = instance
            .create_surface(window.clone())
            .context("failed to create surface")?;
        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .context("no suitable GPU adapter")?;
        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let size = window.inner_size();
        let render_state = pollster::block_on(RenderState::new(
            surface,
            &adapter,
            size.width,
            size.height,
            self.settings.vsync,
        ))?;

        self.window = Some(window);
        self.render_state = Some(render_state);
        self.clock = Some(FrameClock::start(&self.time));
        Ok(())
    }

    /// One frame: sample input, step the scene, draw
    fn frame(&mut self, event_loop: &ActiveEventLoop) {
        let (Some(render_state), Some(clock)) = (self.render_state.as_mut(), self.clock.as_mut())
        else {
            return;
        };

        let dt = clock.tick_from(&self.time);
        let input = self.keyboard.tick_input();
        for event in self.scene.update(&input, dt) {
            match event {
                GameEvent::EnemyCaught { score, respawned_at } => {
                    log::info!("Score: {}", score);
                    log::debug!("Enemy respawned at ({:.3}, {:.3})", respawned_at.x, respawned_at.y);
                }
            }
        }
        if let Some(fps) = clock.take_fps_report(self.settings.fps_log_interval) {
            log::debug!("FPS: {:.1} (frame {})", fps, clock.frame_count());
        }

        self.vertices.clear();
        self.scene.draw(&mut self.vertices, render_state.size);

        let Err(err) = render_state.render(&self.vertices, colors::BACKGROUND) else {
            return;
        };
        match SurfaceAction::for_error(&err) {
            SurfaceAction::Reconfigure => {
                log::warn!("Surface lost, reconfiguring");
                render_state.reconfigure();
            }
            SurfaceAction::Skip => log::warn!("Render error, skipping frame: {:?}", err),
            SurfaceAction::Fatal => {
                log::error!("Out of memory!");
                self.error = Some(anyhow::anyhow!("GPU surface error: {err}"));
                event_loop.exit();
            }
        }
    }
}

/// What the frame loop does after a failed present
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SurfaceAction {
    /// Reconfigure the surface and carry on next frame
    Reconfigure,
    /// Drop this frame only
    Skip,
    /// Stop the loop; `run` returns the error
    Fatal,
}

impl SurfaceAction {
    fn for_error(err: &wgpu::SurfaceError) -> Self {
        match err {
            wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => SurfaceAction::Reconfigure,
            wgpu::SurfaceError::OutOfMemory => SurfaceAction::Fatal,
            _ => SurfaceAction::Skip,
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(e) = self.init(event_loop) {
            self.error = Some(e);
            event_loop.exit();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => {
                if let Some(render_state) = self.render_state.as_mut() {
                    render_state.resize(size.width, size.height);
                    log::debug!("Resized to {}x{}", size.width, size.height);
                }
            }
            WindowEvent::Focused(false) => self.keyboard.clear(),
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(code) = event.physical_key {
                    let pressed = event.state == ElementState::Pressed;
                    if self.keyboard.on_key(code, pressed) == KeyAction::Close {
                        log::info!("Close requested");
                        event_loop.exit();
                    }
                }
            }
            WindowEvent::RedrawRequested => self.frame(event_loop),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

/// Open the window and run `kind` until the window closes
pub fn run(settings: Settings, kind: SceneKind, seed: u64) -> Result<()> {
    let event_loop = EventLoop::new().context("failed to create event loop")?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(settings, kind, seed);
    event_loop.run_app(&mut app)?;

    if let Some(e) = app.error.take() {
        return Err(e);
    }
    log::info!("{} closed", app.scene.kind().as_str());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_memory_is_fatal() {
        assert_eq!(
            SurfaceAction::for_error(&wgpu::SurfaceError::OutOfMemory),
            SurfaceAction::Fatal
        );
    }

    #[test]
    fn test_recoverable_surface_errors() {
        assert_eq!(
            SurfaceAction::for_error(&wgpu::SurfaceError::Lost),
            SurfaceAction::Reconfigure
        );
        assert_eq!(
            SurfaceAction::for_error(&wgpu::SurfaceError::Outdated),
            SurfaceAction::Reconfigure
        );
        assert_eq!(
            SurfaceAction::for_error(&wgpu::SurfaceError::Timeout),
            SurfaceAction::Skip
        );
    }
}
