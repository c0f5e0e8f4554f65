//! Voxel chunk meshing core: dense block grids in, indexed triangle meshes
//! out. Facade over the workspace crates.
#![forbid(unsafe_code)]

pub use strata_blocks::{Block, BlockId, BlockRegistry, FaceRole, MaterialCatalog, MaterialId};
pub use strata_chunk::{
    BLOCK_COUNT, CHUNK_SIZE, ChunkBuf, ChunkError, LocalPos, index_to_location, location_to_index,
};
pub use strata_geom::{Aabb, Vec3};
pub use strata_mesh_cpu::{Axis, Chunk, ChunkGeometry, Face, Triangle, build_chunk_geometry};
