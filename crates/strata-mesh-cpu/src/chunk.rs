use strata_blocks::BlockRegistry;
use strata_blocks::types::Block;
use strata_chunk::{ChunkBuf, ChunkError, LocalPos, index_to_location, location_to_index};
use strata_geom::Aabb;

use crate::build::build_chunk_geometry;
use crate::geometry::ChunkGeometry;

/// A chunk with its derived mesh.
///
/// The geometry is regenerable from the block buffer alone and is rebuilt on
/// construction and on every explicit [`regenerate`](Chunk::regenerate).
/// Voxel writes do not remesh; after mutating blocks, the stored geometry
/// is stale until regenerated.
#[derive(Clone, Debug)]
pub struct Chunk {
    buf: ChunkBuf,
    bounds: Aabb,
    geometry: ChunkGeometry,
}

impl Chunk {
    /// Builds a chunk at `origin` from a full block array and meshes it
    /// immediately. A wrong-length array is repaired to the exact block
    /// count, padding with air.
    pub fn new(origin: [i32; 3], blocks: Vec<Block>, reg: &BlockRegistry) -> Self {
        let buf = ChunkBuf::from_blocks(origin, blocks);
        let bounds = buf.bounds();
        let geometry = build_chunk_geometry(&buf, reg);
        Self {
            buf,
            bounds,
            geometry,
        }
    }

    #[inline]
    pub fn buf(&self) -> &ChunkBuf {
        &self.buf
    }

    /// World-space box covered by this chunk. Fixed at construction; the
    /// origin never changes afterwards.
    #[inline]
    pub fn bounds(&self) -> Aabb {
        self.bounds
    }

    #[inline]
    pub fn geometry(&self) -> &ChunkGeometry {
        &self.geometry
    }

    /// Local coordinate of the block at flat index `i`.
    #[inline]
    pub fn block_location(&self, i: usize) -> Result<LocalPos, ChunkError> {
        index_to_location(i)
    }

    /// Flat index of the block at `pos`. Not bounds-checked, see
    /// [`location_to_index`].
    #[inline]
    pub fn block_index(&self, pos: LocalPos) -> usize {
        location_to_index(pos)
    }

    /// Overwrites one block. The mesh is untouched: batch edits pay the
    /// full-rebuild cost once, at the next [`regenerate`](Chunk::regenerate).
    #[inline]
    pub fn set_voxel_data(&mut self, i: usize, value: Block) {
        self.buf.set_voxel_data(i, value);
    }

    /// Discards the current geometry and rebuilds it from the block buffer.
    pub fn regenerate(&mut self, reg: &BlockRegistry) {
        self.geometry = build_chunk_geometry(&self.buf, reg);
    }
}
