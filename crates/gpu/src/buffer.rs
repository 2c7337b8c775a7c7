//! GPU buffer management.

use crate::context::GpuContext;
use crate::pipeline::MeshVertex;
use common::outcome::{Maybe, Outcome};
use model::Model;
use wgpu::{util::DeviceExt, Buffer, BufferUsages};

/// Vertex and index buffers of an uploaded model.
pub struct MeshBuffers {
    vertex_buffer: Buffer,
    index_buffer: Buffer,
    index_count: u32,
}

impl MeshBuffers {
    /// Upload `model` to the GPU. An empty model uploads nothing.
    pub fn upload(context: &GpuContext, model: &Model) -> Maybe<Self> {
        let Outcome::Ok(index_count) = drawable_index_count(model.indices.len()) else {
            return Maybe::none();
        };

        let vertices: Vec<MeshVertex> = model.vertices.iter().copied().map(MeshVertex::from).collect();

        let vertex_buffer = context
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Mesh Vertex Buffer"),
                contents: bytemuck::cast_slice(&vertices),
                usage: BufferUsages::VERTEX,
            });

        let index_buffer = context
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Mesh Index Buffer"),
                contents: bytemuck::cast_slice(&model.indices),
                usage: BufferUsages::INDEX,
            });

        tracing::debug!(
            "Uploaded mesh: {} vertices, {} triangles",
            vertices.len(),
            model.triangle_count()
        );

        Maybe::Ok(Self {
            vertex_buffer,
            index_buffer,
            index_count,
        })
    }

    /// Record the indexed draw into `pass`. The mesh pipeline must be bound.
    pub fn draw(&self, pass: &mut wgpu::RenderPass<'_>) {
        pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        pass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        pass.draw_indexed(0..self.index_count, 0, 0..1);
    }
}

/// Index count as a draw range. Empty or oversized index lists draw nothing.
fn drawable_index_count(len: usize) -> Maybe<u32> {
    if len == 0 {
        tracing::warn!("Model has no triangles, nothing to upload");
        return Maybe::none();
    }
    Maybe::from(u32::try_from(len).ok()).or_else(|()| {
        tracing::warn!("Model has {len} indices, too many to draw");
        Maybe::<u32>::none()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drawable_index_count() {
        assert_eq!(drawable_index_count(3), Maybe::Ok(3));
        assert!(drawable_index_count(0).is_err());
        assert_eq!(
            drawable_index_count(u32::MAX as usize),
            Maybe::Ok(u32::MAX)
        );
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_oversized_index_count_is_rejected() {
        assert!(drawable_index_count(u32::MAX as usize + 1).is_err());
    }
}
