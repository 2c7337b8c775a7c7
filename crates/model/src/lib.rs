//! Triangle meshes loaded from glTF.

pub mod loader;

pub use loader::{Bounds, Model, ModelError};
