//! glTF import into flat vertex and index arrays.

use common::outcome::Outcome;
use glam::Vec3;
use gltf::mesh::Mode;
use gltf::{buffer, Document};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading a model.
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Failed to import glTF: {0}")]
    Import(#[from] gltf::Error),
    #[error("Failed to read model file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Model contains no meshes")]
    NoMesh,
    #[error("Primitive {0} has no vertex positions")]
    MissingPositions(usize),
    #[error("Primitive {index} uses unsupported topology {mode:?}")]
    UnsupportedTopology { index: usize, mode: Mode },
    #[error("Index {index} is out of range for {vertex_count} vertices")]
    IndexOutOfRange { index: u32, vertex_count: usize },
    #[error("Mesh has {0} vertices, more than 32-bit indices can address")]
    TooManyVertices(usize),
}

/// Axis-aligned bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min: Vec3,
    pub max: Vec3,
}

impl Bounds {
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }
}

/// Positions and triangle-list indices of a single mesh.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Model {
    pub vertices: Vec<[f32; 3]>,
    pub indices: Vec<u32>,
}

impl Model {
    /// Load the first mesh of a glTF or GLB document held in memory.
    ///
    /// All triangle primitives of that mesh are merged into one index list.
    pub fn from_slice(bytes: &[u8]) -> Outcome<Model, ModelError> {
        Outcome::from(gltf::import_slice(bytes))
            .map_err(ModelError::from)
            .and_then(|(document, buffers, _images)| first_mesh(&document, &buffers))
            .map(|model| {
                tracing::debug!(
                    "Loaded model: {} vertices, {} triangles",
                    model.vertices.len(),
                    model.triangle_count()
                );
                model
            })
    }

    /// Read a model file and load it with [`Model::from_slice`].
    pub fn from_path(path: impl AsRef<Path>) -> Outcome<Model, ModelError> {
        let path = path.as_ref();
        tracing::info!("Loading model from {}", path.display());
        Outcome::from(std::fs::read(path))
            .map_err(ModelError::from)
            .and_then(|bytes| Model::from_slice(&bytes))
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Bounding box of all vertices, if there are any.
    pub fn bounds(&self) -> Option<Bounds> {
        let mut points = self.vertices.iter().copied().map(Vec3::from);
        let first = points.next()?;
        let (min, max) = points.fold((first, first), |(min, max), p| (min.min(p), max.max(p)));
        Some(Bounds { min, max })
    }

    /// Centre the model on the origin and scale its largest extent to 2,
    /// so it fits in the `[-1, 1]` cube.
    pub fn normalized(mut self) -> Model {
        let Some(bounds) = self.bounds() else {
            return self;
        };
        let extent = bounds.size().max_element();
        let scale = if extent > 0.0 { 2.0 / extent } else { 1.0 };
        let center = bounds.center();

        for vertex in &mut self.vertices {
            *vertex = ((Vec3::from(*vertex) - center) * scale).to_array();
        }
        self
    }
}

fn first_mesh(document: &Document, buffers: &[buffer::Data]) -> Result<Model, ModelError> {
    let mesh = document.meshes().next().ok_or(ModelError::NoMesh)?;
    let mut model = Model::default();

    for primitive in mesh.primitives() {
        let index = primitive.index();
        if primitive.mode() != Mode::Triangles {
            return Err(ModelError::UnsupportedTopology {
                index,
                mode: primitive.mode(),
            });
        }

        let reader =
            primitive.reader(|buffer| buffers.get(buffer.index()).map(|data| data.0.as_slice()));
        let positions = reader
            .read_positions()
            .ok_or(ModelError::MissingPositions(index))?;

        let start = model.vertices.len();
        model.vertices.extend(positions);
        let vertex_count = u32::try_from(model.vertices.len())
            .map_err(|_| ModelError::TooManyVertices(model.vertices.len()))?;
        // start <= vertex_count, so it fits too
        let base = start as u32;
        let added = vertex_count - base;

        match reader.read_indices() {
            Some(indices) => {
                for i in indices.into_u32() {
                    if i >= added {
                        return Err(ModelError::IndexOutOfRange {
                            index: i,
                            vertex_count: added as usize,
                        });
                    }
                    model.indices.push(base + i);
                }
            }
            None => model.indices.extend(base..vertex_count),
        }
    }

    Ok(model)
}
