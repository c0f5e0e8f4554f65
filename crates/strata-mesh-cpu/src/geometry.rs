use hashbrown::HashMap;

use strata_blocks::types::MaterialId;
use strata_geom::Vec3;

use crate::face::Face;

/// Offsets of a unit block's 8 corners from its minimum corner, indexed by
/// the bit pattern `x<<2 | y<<1 | z`.
const CORNERS: [[f32; 3]; 8] = [
    [0.0, 0.0, 0.0],
    [0.0, 0.0, 1.0],
    [0.0, 1.0, 0.0],
    [0.0, 1.0, 1.0],
    [1.0, 0.0, 0.0],
    [1.0, 0.0, 1.0],
    [1.0, 1.0, 0.0],
    [1.0, 1.0, 1.0],
];

/// Corner indices per face, in `Face::index()` order (PosX, NegX, PosY,
/// NegY, PosZ, NegZ). The four corners wind counter-clockwise seen from
/// outside the block, so the two triangles `(0,1,2)`/`(0,2,3)` face outward.
const FACE_CORNERS: [[usize; 4]; 6] = [
    [7, 5, 4, 6],
    [1, 3, 2, 0],
    [3, 7, 6, 2],
    [5, 1, 0, 4],
    [7, 3, 1, 5],
    [0, 2, 6, 4],
];

/// Texture coordinates for the two triangles of every quad, constant
/// regardless of orientation (no atlasing or rotation).
const UV_FIRST: [[f32; 2]; 3] = [[0.0, 1.0], [1.0, 1.0], [1.0, 0.0]];
const UV_SECOND: [[f32; 2]; 3] = [[0.0, 1.0], [1.0, 0.0], [0.0, 0.0]];

/// One mesh triangle: three indices into the shared vertex list, an outward
/// unit normal, the material to texture it with, per-vertex UVs, and the
/// world-space block that produced it (used for picking/editing).
#[derive(Clone, Debug, PartialEq)]
pub struct Triangle {
    pub indices: [u32; 3],
    pub normal: Vec3,
    pub material: MaterialId,
    pub uv: [[f32; 2]; 3],
    pub voxel: [i32; 3],
}

/// Indexed mesh for one chunk, in chunk-local coordinates.
///
/// Vertices are deduplicated: each unique corner position is stored exactly
/// once and shared by index across every face that touches it (up to four
/// faces per block corner).
#[derive(Default, Clone, Debug, PartialEq)]
pub struct ChunkGeometry {
    pub vertices: Vec<Vec3>,
    pub triangles: Vec<Triangle>,
    // Exact-position lookup into `vertices`. Corner coordinates are small
    // integers, so bitwise f32 equality is value equality here.
    index_by_pos: HashMap<[u32; 3], u32>,
}

impl ChunkGeometry {
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Number of emitted quads (two triangles each).
    #[inline]
    pub fn face_count(&self) -> usize {
        self.triangles.len() / 2
    }

    /// Index of the vertex at `p`, reusing a previously stored vertex when
    /// one has identical coordinates.
    fn vertex_index(&mut self, p: Vec3) -> u32 {
        let key = [p.x.to_bits(), p.y.to_bits(), p.z.to_bits()];
        if let Some(&ix) = self.index_by_pos.get(&key) {
            return ix;
        }
        let ix = self.vertices.len() as u32;
        self.vertices.push(p);
        self.index_by_pos.insert(key, ix);
        ix
    }

    /// Appends one block face (two triangles) for the block whose minimum
    /// corner sits at `base` in chunk-local space. `voxel` is the generating
    /// block's world-space position.
    pub fn push_face(&mut self, face: Face, base: Vec3, material: MaterialId, voxel: [i32; 3]) {
        let corner_ids = FACE_CORNERS[face.index()];
        let mut ix = [0u32; 4];
        for (slot, &c) in ix.iter_mut().zip(corner_ids.iter()) {
            let off = CORNERS[c];
            *slot = self.vertex_index(base + Vec3::new(off[0], off[1], off[2]));
        }

        let first = [ix[0], ix[1], ix[2]];
        let second = [ix[0], ix[2], ix[3]];
        let n_first = self.triangle_normal(first);
        let n_second = self.triangle_normal(second);
        self.triangles.push(Triangle {
            indices: first,
            normal: n_first,
            material,
            uv: UV_FIRST,
            voxel,
        });
        self.triangles.push(Triangle {
            indices: second,
            normal: n_second,
            material,
            uv: UV_SECOND,
            voxel,
        });
    }

    #[inline]
    fn triangle_normal(&self, indices: [u32; 3]) -> Vec3 {
        let a = self.vertices[indices[0] as usize];
        let b = self.vertices[indices[1] as usize];
        let c = self.vertices[indices[2] as usize];
        (b - a).cross(c - a).normalized()
    }
}
