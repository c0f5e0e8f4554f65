//! CPU meshing crate: face-culling mesher over chunk block buffers.
#![forbid(unsafe_code)]

pub mod build;
pub mod chunk;
pub mod face;
pub mod geometry;

pub use build::build_chunk_geometry;
pub use chunk::Chunk;
pub use face::{Axis, Face};
pub use geometry::{ChunkGeometry, Triangle};
