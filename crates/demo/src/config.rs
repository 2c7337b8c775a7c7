//! Demo configuration.

use common::Color;
use std::path::PathBuf;
use window::{WindowConfig, WindowFlags};

/// Demo configuration.
#[derive(Clone, Debug)]
pub struct DemoConfig {
    /// Window title, size and flags.
    pub window: WindowConfig,
    /// Colour the frame is cleared to.
    pub clear_color: Color,
    /// glTF model to draw instead of the triangle.
    pub model_path: Option<PathBuf>,
    /// Prefer an integrated GPU.
    pub low_power: bool,
    /// Preferred present mode.
    pub present_mode: wgpu::PresentMode,
}

impl DemoConfig {
    /// Create a new configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set window title.
    pub fn with_title(mut self, title: &str) -> Self {
        self.window.title = title.to_string();
        self
    }

    /// Set window size.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.window.width = width;
        self.window.height = height;
        self
    }

    /// Set window flags.
    pub fn with_flags(mut self, flags: WindowFlags) -> Self {
        self.window.flags = flags;
        self
    }

    /// Set clear colour.
    pub fn with_clear_color(mut self, color: Color) -> Self {
        self.clear_color = color;
        self
    }

    /// Set the model to load.
    pub fn with_model(mut self, path: impl Into<PathBuf>) -> Self {
        self.model_path = Some(path.into());
        self
    }

    /// Set power preference.
    pub fn with_low_power(mut self, low_power: bool) -> Self {
        self.low_power = low_power;
        self
    }

    /// Set present mode.
    pub fn with_present_mode(mut self, present_mode: wgpu::PresentMode) -> Self {
        self.present_mode = present_mode;
        self
    }

    /// The wgpu power preference for this configuration.
    pub fn power_preference(&self) -> wgpu::PowerPreference {
        if self.low_power {
            wgpu::PowerPreference::LowPower
        } else {
            wgpu::PowerPreference::HighPerformance
        }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            clear_color: Color::CORAL_PINK,
            model_path: None,
            low_power: false,
            present_mode: wgpu::PresentMode::Fifo,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DemoConfig::default();
        assert_eq!(config.window.title, "hello");
        assert_eq!((config.window.width, config.window.height), (800, 600));
        assert_eq!(config.window.flags, WindowFlags::RESIZABLE);
        assert_eq!(config.clear_color, Color::rgb(0xf3, 0x59, 0x7c));
        assert!(config.model_path.is_none());
        assert_eq!(config.present_mode, wgpu::PresentMode::Fifo);
    }

    #[test]
    fn test_config_builder() {
        let config = DemoConfig::new()
            .with_title("teapot")
            .with_size(1920, 1080)
            .with_flags(WindowFlags::FULLSCREEN)
            .with_model("teapot.glb")
            .with_low_power(true);

        assert_eq!(config.window.title, "teapot");
        assert_eq!(config.window.width, 1920);
        assert!(config.window.flags.contains(WindowFlags::FULLSCREEN));
        assert!(!config.window.flags.contains(WindowFlags::RESIZABLE));
        assert_eq!(config.model_path, Some(PathBuf::from("teapot.glb")));
        assert_eq!(config.power_preference(), wgpu::PowerPreference::LowPower);
    }

    #[test]
    fn test_power_preference_default() {
        assert_eq!(
            DemoConfig::default().power_preference(),
            wgpu::PowerPreference::HighPerformance
        );
    }
}
