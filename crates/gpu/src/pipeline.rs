//! Render pipeline management.

use crate::context::GpuContext;
use crate::shaders;
use std::collections::HashMap;
use std::sync::Arc;
use wgpu::{
    BlendComponent, BlendFactor, BlendOperation, BlendState, ColorTargetState, ColorWrites,
    FragmentState, FrontFace, MultisampleState, PolygonMode, PrimitiveState, PrimitiveTopology,
    RenderPipeline, TextureFormat, VertexBufferLayout, VertexState,
};

/// Pipeline type identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PipelineType {
    /// Triangle generated in the vertex shader, no vertex buffers.
    Triangle,
    /// Indexed mesh from a position buffer.
    Mesh,
}

/// Colour blends over the destination; destination alpha is kept.
pub const DEMO_BLEND: BlendState = BlendState {
    color: BlendComponent {
        src_factor: BlendFactor::SrcAlpha,
        dst_factor: BlendFactor::OneMinusSrcAlpha,
        operation: BlendOperation::Add,
    },
    alpha: BlendComponent {
        src_factor: BlendFactor::Zero,
        dst_factor: BlendFactor::One,
        operation: BlendOperation::Add,
    },
};

/// Pipeline cache for render pipelines.
pub struct PipelineCache {
    context: Arc<GpuContext>,
    format: Option<TextureFormat>,
    pipelines: HashMap<PipelineType, RenderPipeline>,
}

impl PipelineCache {
    pub fn new(context: Arc<GpuContext>) -> Self {
        Self {
            context,
            format: None,
            pipelines: HashMap::new(),
        }
    }

    /// Build all pipelines for `surface_format`.
    ///
    /// Does nothing if they were already built for that format.
    pub fn initialize(&mut self, surface_format: TextureFormat) {
        if self.format == Some(surface_format) {
            return;
        }

        self.pipelines.clear();
        for pipeline_type in [PipelineType::Triangle, PipelineType::Mesh] {
            let pipeline = self.create_pipeline(pipeline_type, surface_format);
            self.pipelines.insert(pipeline_type, pipeline);
        }
        self.format = Some(surface_format);
        tracing::debug!("Built render pipelines for {surface_format:?}");
    }

    /// Get a pipeline by type.
    pub fn get(&self, pipeline_type: PipelineType) -> Option<&RenderPipeline> {
        self.pipelines.get(&pipeline_type)
    }

    fn create_pipeline(&self, pipeline_type: PipelineType, format: TextureFormat) -> RenderPipeline {
        let device = &self.context.device;
        let (label, source, buffers): (&str, &str, &[VertexBufferLayout<'static>]) =
            match pipeline_type {
                PipelineType::Triangle => ("Triangle", shaders::TRIANGLE_SHADER, &[]),
                PipelineType::Mesh => ("Mesh", shaders::MESH_SHADER, &[MeshVertex::LAYOUT]),
            };

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(label),
            source: wgpu::ShaderSource::Wgsl(source.into()),
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some(label),
            bind_group_layouts: &[],
            push_constant_ranges: &[],
        });

        device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(label),
            layout: Some(&pipeline_layout),
            vertex: VertexState {
                module: &shader,
                entry_point: shaders::VERTEX_ENTRY,
                buffers,
                compilation_options: Default::default(),
            },
            fragment: Some(FragmentState {
                module: &shader,
                entry_point: shaders::FRAGMENT_ENTRY,
                targets: &[Some(ColorTargetState {
                    format,
                    blend: Some(DEMO_BLEND),
                    write_mask: ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: PrimitiveState {
                topology: PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: MultisampleState {
                count: 1,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview: None,
            cache: None,
        })
    }
}

/// Mesh vertex: a bare position.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
}

impl MeshVertex {
    pub const LAYOUT: VertexBufferLayout<'static> = VertexBufferLayout {
        array_stride: std::mem::size_of::<MeshVertex>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &[wgpu::VertexAttribute {
            offset: 0,
            shader_location: 0,
            format: wgpu::VertexFormat::Float32x3,
        }],
    };

    pub fn layout() -> VertexBufferLayout<'static> {
        Self::LAYOUT
    }
}

impl From<[f32; 3]> for MeshVertex {
    fn from(position: [f32; 3]) -> Self {
        Self { position }
    }
}
