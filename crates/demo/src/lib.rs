//! wgpu demo: opens a window and renders a triangle or a glTF model.
//!
//! Initialization is a chain of fallible steps:
//! - window system and window creation
//! - GPU adapter, device and surface setup
//! - renderer and pipeline creation

pub mod app;
pub mod config;

pub use app::Application;
pub use config::DemoConfig;

/// Demo version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
