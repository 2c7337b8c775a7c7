//! GPU abstraction layer using wgpu.
//!
//! Every initialization step returns an [`Outcome`](common::Outcome) so the
//! demo can compose them with `and_then`.

pub mod buffer;
pub mod context;
pub mod inspect;
pub mod pipeline;
pub mod renderer;
pub mod shaders;

pub use buffer::MeshBuffers;
pub use context::{GpuContext, GpuContextBuilder, GpuError};
pub use renderer::{GpuRenderer, RenderStats};
