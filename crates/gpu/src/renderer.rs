//! GPU renderer implementation.

use crate::buffer::MeshBuffers;
use crate::context::{GpuContext, GpuError};
use crate::pipeline::{PipelineCache, PipelineType};
use common::color::Color;
use common::outcome::{Maybe, Outcome};
use model::Model;
use std::sync::Arc;

/// Draws one frame per call: a clear followed by the mesh or the built-in triangle.
pub struct GpuRenderer {
    context: Arc<GpuContext>,
    pipeline_cache: PipelineCache,
    mesh: Option<MeshBuffers>,
    stats: RenderStats,
}

impl GpuRenderer {
    /// Create a renderer for a context whose surface is already configured.
    pub fn new(context: Arc<GpuContext>) -> Outcome<Self, GpuError> {
        Maybe::from_option(context.surface_format())
            .ok_or(GpuError::SurfaceNotConfigured)
            .map(|format| {
                let mut pipeline_cache = PipelineCache::new(context.clone());
                pipeline_cache.initialize(format);

                Self {
                    context,
                    pipeline_cache,
                    mesh: None,
                    stats: RenderStats::default(),
                }
            })
    }

    /// Upload `model`; subsequent frames draw it instead of the triangle.
    pub fn set_model(&mut self, model: &Model) {
        self.mesh = MeshBuffers::upload(&self.context, model).ok();
    }

    /// Resize the surface and rebuild pipelines if the format changed.
    pub fn resize(&mut self, width: u32, height: u32) -> Outcome<(), GpuError> {
        self.context.configure_surface(width, height).map(|()| {
            if let Some(format) = self.context.surface_format() {
                self.pipeline_cache.initialize(format);
            }
        })
    }

    /// Render and present one frame cleared to `clear_color`.
    ///
    /// A lost or outdated surface is reconfigured and the frame skipped.
    pub fn render_frame(&mut self, clear_color: Color) -> Outcome<(), GpuError> {
        match self.context.get_current_texture() {
            Outcome::Ok(output) => {
                self.draw(output, clear_color);
                Outcome::Ok(())
            }
            Outcome::Err(GpuError::Surface(
                error @ (wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated),
            )) => {
                tracing::debug!("Surface {error}, reconfiguring");
                self.stats.skipped_frames += 1;
                self.context.reconfigure_surface()
            }
            Outcome::Err(GpuError::Surface(wgpu::SurfaceError::Timeout)) => {
                tracing::warn!("Timed out acquiring the surface texture");
                self.stats.skipped_frames += 1;
                Outcome::Ok(())
            }
            Outcome::Err(error) => Outcome::Err(error),
        }
    }

    fn draw(&mut self, output: wgpu::SurfaceTexture, clear_color: Color) {
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self.context.create_command_encoder();
        let [r, g, b, a] = clear_color.to_f64_array();
        let mut draw_calls = 0;

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Main Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color { r, g, b, a }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            match &self.mesh {
                Some(mesh) => {
                    if let Some(pipeline) = self.pipeline_cache.get(PipelineType::Mesh) {
                        render_pass.set_pipeline(pipeline);
                        mesh.draw(&mut render_pass);
                        draw_calls += 1;
                    }
                }
                None => {
                    if let Some(pipeline) = self.pipeline_cache.get(PipelineType::Triangle) {
                        render_pass.set_pipeline(pipeline);
                        render_pass.draw(0..3, 0..1);
                        draw_calls += 1;
                    }
                }
            }
        }

        self.context.submit(std::iter::once(encoder.finish()));
        output.present();
        self.stats.record_frame(draw_calls);
    }

    /// Get render statistics.
    pub fn stats(&self) -> &RenderStats {
        &self.stats
    }
}

/// Render statistics.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RenderStats {
    /// Frames presented.
    pub frames: u64,
    /// Frames dropped because the surface was unavailable.
    pub skipped_frames: u64,
    /// Draw calls over all frames.
    pub draw_calls: u64,
}

impl RenderStats {
    fn record_frame(&mut self, draw_calls: u64) {
        self.frames += 1;
        self.draw_calls += draw_calls;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // GPU tests require actual hardware

    #[test]
    fn test_render_stats_default() {
        let stats = RenderStats::default();
        assert_eq!(stats.frames, 0);
        assert_eq!(stats.draw_calls, 0);
    }

    #[test]
    fn test_render_stats_record() {
        let mut stats = RenderStats::default();
        stats.record_frame(1);
        stats.record_frame(0);
        assert_eq!(stats.frames, 2);
        assert_eq!(stats.draw_calls, 1);
        assert_eq!(stats.skipped_frames, 0);
    }
}
