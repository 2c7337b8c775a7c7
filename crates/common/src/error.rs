//! Common error types.

use thiserror::Error;

/// Boxed cause of a [`DemoError`].
pub type ErrorSource = Box<dyn std::error::Error + Send + Sync>;

/// Error reported by the demo application.
#[derive(Error, Debug)]
pub enum DemoError {
    #[error("Window error: {0}")]
    Window(String),

    #[error("GPU error: {0}")]
    Gpu(#[source] ErrorSource),

    #[error("Model error: {0}")]
    Model(#[source] ErrorSource),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DemoError {
    pub fn window(msg: impl Into<String>) -> Self {
        Self::Window(msg.into())
    }

    /// Wrap a GPU failure, keeping it as the error source.
    pub fn gpu(source: impl Into<ErrorSource>) -> Self {
        Self::Gpu(source.into())
    }

    /// Wrap a model loading failure, keeping it as the error source.
    pub fn model(source: impl Into<ErrorSource>) -> Self {
        Self::Model(source.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
