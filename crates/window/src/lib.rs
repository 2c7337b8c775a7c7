//! Windowing layer.
//!
//! This crate wraps `winit` behind a small surface:
//! - Window configuration and flags
//! - Window system creation
//! - Event translation

pub mod config;
pub mod event;
pub mod system;

pub use config::{WindowConfig, WindowFlags};
pub use event::WindowEvent;
pub use system::{DemoWindow, WindowBackend, WindowSystem, WindowSystemFactory};
