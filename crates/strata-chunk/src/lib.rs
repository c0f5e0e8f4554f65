//! Chunk block buffer: the dense grid the mesher reads.
#![forbid(unsafe_code)]

use strata_blocks::types::Block;
use strata_geom::{Aabb, Vec3};
use thiserror::Error;

/// Chunks are cubes of this side length.
pub const CHUNK_SIZE: usize = 16;
pub const CHUNK_SIZE_I32: i32 = CHUNK_SIZE as i32;
/// Blocks per chunk (`CHUNK_SIZE³`).
pub const BLOCK_COUNT: usize = CHUNK_SIZE * CHUNK_SIZE * CHUNK_SIZE;

/// Errors raised by coordinate mapping and lookup.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChunkError {
    /// A flat block index or local coordinate fell outside its valid domain.
    #[error("block index {index} out of range (block count {count})", count = BLOCK_COUNT)]
    IndexOutOfRange { index: usize },
}

/// Integer block coordinate local to a chunk; valid axes lie in `[0, CHUNK_SIZE)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LocalPos {
    pub x: usize,
    pub y: usize,
    pub z: usize,
}

impl LocalPos {
    #[inline]
    pub const fn new(x: usize, y: usize, z: usize) -> Self {
        Self { x, y, z }
    }
}

/// Maps a flat block index to its local coordinate.
/// X-major layout: `i = x·S² + y·S + z`.
#[inline]
pub fn index_to_location(i: usize) -> Result<LocalPos, ChunkError> {
    if i >= BLOCK_COUNT {
        return Err(ChunkError::IndexOutOfRange { index: i });
    }
    let x = i / (CHUNK_SIZE * CHUNK_SIZE);
    let y = (i - x * CHUNK_SIZE * CHUNK_SIZE) / CHUNK_SIZE;
    let z = i % CHUNK_SIZE;
    Ok(LocalPos { x, y, z })
}

/// Inverse of [`index_to_location`]. Performs no bounds validation: callers
/// probing axis neighbors may form positions one step past a block and are
/// responsible for range-checking before indexing into a buffer.
#[inline]
pub fn location_to_index(pos: LocalPos) -> usize {
    pos.x * CHUNK_SIZE * CHUNK_SIZE + pos.y * CHUNK_SIZE + pos.z
}

/// A chunk's block storage plus its placement in the world.
/// `origin` is the world-space coordinate of the chunk's minimum corner,
/// in block units.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChunkBuf {
    pub origin: [i32; 3],
    pub blocks: Vec<Block>,
}

impl ChunkBuf {
    /// Builds a buffer from a full block array. A wrong-length input is
    /// repaired to exactly [`BLOCK_COUNT`] entries, padding with air.
    pub fn from_blocks(origin: [i32; 3], blocks: Vec<Block>) -> Self {
        let mut b = blocks;
        if b.len() != BLOCK_COUNT {
            b.resize(BLOCK_COUNT, Block::AIR);
        }
        ChunkBuf { origin, blocks: b }
    }

    pub fn filled(origin: [i32; 3], block: Block) -> Self {
        ChunkBuf {
            origin,
            blocks: vec![block; BLOCK_COUNT],
        }
    }

    #[inline]
    pub fn get(&self, i: usize) -> Block {
        self.blocks[i]
    }

    #[inline]
    pub fn get_local(&self, pos: LocalPos) -> Block {
        self.blocks[location_to_index(pos)]
    }

    /// Overwrites the block at flat index `i`. Write-only: callers decide
    /// when to remesh, so edit batches pay regeneration cost once. Contract:
    /// `i < BLOCK_COUNT` (panics otherwise).
    #[inline]
    pub fn set_voxel_data(&mut self, i: usize, value: Block) {
        debug_assert!(i < BLOCK_COUNT, "block index {i} out of range");
        self.blocks[i] = value;
    }

    /// World-space position of the block at `pos` (origin + local).
    #[inline]
    pub fn world_voxel(&self, pos: LocalPos) -> [i32; 3] {
        [
            self.origin[0] + pos.x as i32,
            self.origin[1] + pos.y as i32,
            self.origin[2] + pos.z as i32,
        ]
    }

    /// World-space box covered by this chunk.
    #[inline]
    pub fn bounds(&self) -> Aabb {
        let min = Vec3::new(
            self.origin[0] as f32,
            self.origin[1] as f32,
            self.origin[2] as f32,
        );
        let max = min + Vec3::new(CHUNK_SIZE as f32, CHUNK_SIZE as f32, CHUNK_SIZE as f32);
        Aabb::new(min, max)
    }

    #[inline]
    pub fn has_non_air(&self) -> bool {
        self.blocks.iter().any(|b| *b != Block::AIR)
    }

    #[inline]
    pub fn is_all_air(&self) -> bool {
        !self.has_non_air()
    }
}
