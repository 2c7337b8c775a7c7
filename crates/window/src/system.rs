//! Window system and window creation.

use crate::config::{WindowConfig, WindowFlags};
use crate::event::WindowEvent;
use common::outcome::Outcome;
use std::sync::Arc;
use winit::application::ApplicationHandler;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

/// Available windowing backends.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WindowBackend {
    Winit,
}

/// Entry point for bringing up a window system.
pub struct WindowSystemFactory;

impl WindowSystemFactory {
    /// Initialize the window system for `backend`.
    ///
    /// Failure carries no detail; the cause is logged.
    pub fn create(backend: WindowBackend) -> Outcome<WindowSystem, ()> {
        match backend {
            WindowBackend::Winit => WindowSystem::init_winit(),
        }
    }
}

/// An initialized window system, owning the event loop.
pub struct WindowSystem {
    backend: WindowBackend,
    event_loop: EventLoop<()>,
}

impl WindowSystem {
    fn init_winit() -> Outcome<Self, ()> {
        Outcome::from(EventLoop::new())
            .map_err(|err| tracing::error!("Failed to create event loop: {err}"))
            .map(|event_loop| {
                event_loop.set_control_flow(ControlFlow::Poll);
                tracing::debug!("Window system initialized");
                Self {
                    backend: WindowBackend::Winit,
                    event_loop,
                }
            })
    }

    /// Run `app` until it exits the event loop.
    pub fn run<A: ApplicationHandler>(self, app: &mut A) -> Outcome<(), ()> {
        tracing::debug!("Running {:?} event loop", self.backend);
        Outcome::from(self.event_loop.run_app(app))
            .map_err(|err| tracing::error!("Event loop terminated abnormally: {err}"))
    }

    /// Create a window from inside a running event loop.
    pub fn create_window(
        event_loop: &ActiveEventLoop,
        config: &WindowConfig,
    ) -> Outcome<DemoWindow, ()> {
        Outcome::from(event_loop.create_window(config.window_attributes()))
            .map_err(|err| tracing::error!("Failed to create window {:?}: {err}", config.title))
            .map(|window| DemoWindow::new(window, config.title.clone()))
    }
}

/// A live window and its current configuration.
pub struct DemoWindow {
    window: Arc<Window>,
    config: WindowConfig,
}

impl DemoWindow {
    /// Wrap a window, reading its actual size and flags back.
    pub fn new(window: Window, title: String) -> Self {
        let size = window.inner_size();
        let config = WindowConfig::new(title, size.width, size.height)
            .with_flags(WindowFlags::of_window(&window));
        tracing::info!(
            "Created window {:?} ({}x{}, {:?})",
            config.title,
            config.width,
            config.height,
            config.flags
        );

        Self {
            window: Arc::new(window),
            config,
        }
    }

    /// Shared handle, e.g. for surface creation.
    pub fn handle(&self) -> Arc<Window> {
        Arc::clone(&self.window)
    }

    pub fn id(&self) -> WindowId {
        self.window.id()
    }

    pub fn config(&self) -> &WindowConfig {
        &self.config
    }

    pub fn request_redraw(&self) {
        self.window.request_redraw();
    }

    /// Translate a winit event, tracking size changes.
    pub fn handle_event(&mut self, event: &winit::event::WindowEvent) -> WindowEvent {
        let event = WindowEvent::from_winit(event);
        if let WindowEvent::Resized { width, height } = event {
            self.config.width = width;
            self.config.height = height;
        }
        event
    }
}
