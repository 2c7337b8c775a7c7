//! The winit application driving the demo.

use crate::config::DemoConfig;
use common::outcome::Outcome;
use common::DemoError;
use gpu::{GpuContextBuilder, GpuRenderer};
use model::Model;
use std::sync::Arc;
use window::{DemoWindow, WindowEvent, WindowSystem};
use winit::application::ApplicationHandler;
use winit::event_loop::ActiveEventLoop;
use winit::window::WindowId;

/// Window and renderer, created on first resume.
struct RenderState {
    window: DemoWindow,
    renderer: GpuRenderer,
}

/// Demo application state.
pub struct Application {
    config: DemoConfig,
    model: Option<Model>,
    state: Option<RenderState>,
    need_close: bool,
}

impl Application {
    pub fn new(config: DemoConfig) -> Self {
        Self {
            config,
            model: None,
            state: None,
            need_close: false,
        }
    }

    /// Draw `model` instead of the triangle.
    pub fn with_model(mut self, model: Model) -> Self {
        self.model = Some(model);
        self
    }

    /// Whether the window asked to close.
    pub fn need_close(&self) -> bool {
        self.need_close
    }

    /// Render one frame. Frame errors are logged, not fatal.
    pub fn main_loop(&mut self) {
        let Some(state) = self.state.as_mut() else {
            return;
        };

        if let Outcome::Err(err) = state.renderer.render_frame(self.config.clear_color) {
            tracing::error!("Frame failed: {err}");
        }
    }

    fn init_renderer(&self, window: DemoWindow) -> Outcome<RenderState, DemoError> {
        let (width, height) = (window.config().width, window.config().height);

        GpuContextBuilder::new()
            .power_preference(self.config.power_preference())
            .present_mode(self.config.present_mode)
            .build(window.handle())
            .and_then(|context| {
                context
                    .configure_surface(width, height)
                    .map(|()| Arc::new(context))
            })
            .and_then(GpuRenderer::new)
            .map_err(DemoError::gpu)
            .map(|mut renderer| {
                if let Some(model) = &self.model {
                    renderer.set_model(model);
                }
                RenderState { window, renderer }
            })
    }
}

impl ApplicationHandler for Application {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }

        let state = WindowSystem::create_window(event_loop, &self.config.window)
            .map_err(|()| DemoError::window("cannot create window"))
            .and_then(|window| self.init_renderer(window))
            .map_err(|err| tracing::error!("{err}"))
            .expect("cannot initialize renderer");

        state.window.request_redraw();
        self.state = Some(state);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, id: WindowId, event: winit::event::WindowEvent) {
        let Some(state) = self.state.as_mut() else {
            return;
        };
        if state.window.id() != id {
            return;
        }

        match state.window.handle_event(&event) {
            WindowEvent::Close => {
                tracing::info!("Close requested");
                self.need_close = true;
                event_loop.exit();
            }
            WindowEvent::Resized { width, height } => {
                if let Outcome::Err(err) = state.renderer.resize(width, height) {
                    tracing::warn!("Resize to {width}x{height} failed: {err}");
                }
            }
            WindowEvent::Redraw => self.main_loop(),
            WindowEvent::None => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(state) = &self.state {
            state.window.request_redraw();
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(state) = &self.state {
            let stats = state.renderer.stats();
            tracing::info!(
                "Rendered {} frames ({} skipped, {} draw calls)",
                stats.frames,
                stats.skipped_frames,
                stats.draw_calls
            );
        }
    }
}
