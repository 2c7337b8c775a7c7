//! Window events as seen by the application.

use winit::event::WindowEvent as WinitEvent;

/// The subset of window events the demo reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WindowEvent {
    /// Nothing of interest happened.
    None,
    /// The window was asked to close or is gone.
    Close,
    /// The inner size changed.
    Resized { width: u32, height: u32 },
    /// The window wants a new frame.
    Redraw,
}

impl WindowEvent {
    pub fn from_winit(event: &WinitEvent) -> Self {
        match event {
            WinitEvent::CloseRequested | WinitEvent::Destroyed => WindowEvent::Close,
            WinitEvent::Resized(size) => WindowEvent::Resized {
                width: size.width,
                height: size.height,
            },
            WinitEvent::RedrawRequested => WindowEvent::Redraw,
            _ => WindowEvent::None,
        }
    }
}
