//! Window configuration.

use bitflags::bitflags;
use winit::dpi::PhysicalSize;
use winit::window::{Fullscreen, Window, WindowAttributes};

bitflags! {
    /// Window behaviour flags.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct WindowFlags: u32 {
        /// The user may resize the window.
        const RESIZABLE = 1 << 0;
        /// Borderless fullscreen on the current monitor.
        const FULLSCREEN = 1 << 1;
    }
}

impl WindowFlags {
    /// Read the flags back from a live window.
    pub fn of_window(window: &Window) -> Self {
        let mut flags = WindowFlags::empty();
        flags.set(WindowFlags::RESIZABLE, window.is_resizable());
        flags.set(WindowFlags::FULLSCREEN, window.fullscreen().is_some());
        flags
    }
}

/// Requested (or, for a live window, current) window properties.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WindowConfig {
    /// Window title.
    pub title: String,
    /// Inner width in physical pixels.
    pub width: u32,
    /// Inner height in physical pixels.
    pub height: u32,
    /// Behaviour flags.
    pub flags: WindowFlags,
}

impl WindowConfig {
    pub fn new(title: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            title: title.into(),
            width,
            height,
            flags: WindowFlags::empty(),
        }
    }

    /// Replace the flags.
    pub fn with_flags(mut self, flags: WindowFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Inner size as a winit size.
    pub fn size(&self) -> PhysicalSize<u32> {
        PhysicalSize::new(self.width, self.height)
    }

    /// Attributes to hand to `ActiveEventLoop::create_window`.
    pub fn window_attributes(&self) -> WindowAttributes {
        let fullscreen = self
            .flags
            .contains(WindowFlags::FULLSCREEN)
            .then_some(Fullscreen::Borderless(None));

        Window::default_attributes()
            .with_title(self.title.clone())
            .with_inner_size(self.size())
            .with_resizable(self.flags.contains(WindowFlags::RESIZABLE))
            .with_fullscreen(fullscreen)
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self::new("hello", 800, 600).with_flags(WindowFlags::RESIZABLE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::Size;

    #[test]
    fn test_default_config() {
        let config = WindowConfig::default();
        assert_eq!(config.title, "hello");
        assert_eq!((config.width, config.height), (800, 600));
        assert_eq!(config.flags, WindowFlags::RESIZABLE);
    }

    #[test]
    fn test_flag_operations() {
        let mut flags = WindowFlags::RESIZABLE | WindowFlags::FULLSCREEN;
        assert!(flags.contains(WindowFlags::FULLSCREEN));

        flags.remove(WindowFlags::FULLSCREEN);
        assert_eq!(flags, WindowFlags::RESIZABLE);
        assert!(!flags.intersects(WindowFlags::FULLSCREEN));

        flags ^= WindowFlags::RESIZABLE;
        assert!(flags.is_empty());
    }

    #[test]
    fn test_window_attributes() {
        let attributes = WindowConfig::new("demo", 1024, 768)
            .with_flags(WindowFlags::RESIZABLE)
            .window_attributes();

        assert_eq!(attributes.title, "demo");
        assert!(attributes.resizable);
        assert!(attributes.fullscreen.is_none());
        assert_eq!(
            attributes.inner_size,
            Some(Size::Physical(PhysicalSize::new(1024, 768)))
        );
    }

    #[test]
    fn test_fullscreen_attributes() {
        let attributes = WindowConfig::new("demo", 640, 480)
            .with_flags(WindowFlags::FULLSCREEN)
            .window_attributes();

        assert!(!attributes.resizable);
        assert_eq!(attributes.fullscreen, Some(Fullscreen::Borderless(None)));
    }
}
