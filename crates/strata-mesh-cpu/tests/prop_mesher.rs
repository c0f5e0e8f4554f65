use proptest::prelude::*;

use strata_blocks::BlockRegistry;
use strata_blocks::types::Block;
use strata_chunk::{BLOCK_COUNT, CHUNK_SIZE, ChunkBuf};
use strata_mesh_cpu::build_chunk_geometry;

/// Counts the faces the mesher must produce, computed independently of the
/// scan: a solid block contributes one face per direction whose neighbor is
/// air, and always contributes at a chunk edge (the adjacent chunk is never
/// consulted).
fn expected_face_count(buf: &ChunkBuf, reg: &BlockRegistry) -> usize {
    let s = CHUNK_SIZE as i32;
    let solid = |x: i32, y: i32, z: i32| -> bool {
        if x < 0 || x >= s || y < 0 || y >= s || z < 0 || z >= s {
            return false;
        }
        let i = (x as usize) * CHUNK_SIZE * CHUNK_SIZE + (y as usize) * CHUNK_SIZE + z as usize;
        reg.is_solid(buf.blocks[i])
    };
    let mut faces = 0usize;
    for x in 0..s {
        for y in 0..s {
            for z in 0..s {
                if !solid(x, y, z) {
                    continue;
                }
                for (dx, dy, dz) in [
                    (1, 0, 0),
                    (-1, 0, 0),
                    (0, 1, 0),
                    (0, -1, 0),
                    (0, 0, 1),
                    (0, 0, -1),
                ] {
                    let (nx, ny, nz) = (x + dx, y + dy, z + dz);
                    let outside = nx < 0 || nx >= s || ny < 0 || ny >= s || nz < 0 || nz >= s;
                    if outside || !solid(nx, ny, nz) {
                        faces += 1;
                    }
                }
            }
        }
    }
    faces
}

fn sparse_blocks() -> impl Strategy<Value = Vec<(usize, u16)>> {
    prop::collection::vec((0usize..BLOCK_COUNT, 1u16..=3), 0..48)
}

proptest! {
    // One face per solid/air boundary, attributed to the solid side, plus
    // unconditional chunk-edge faces, validated against an independent count.
    #[test]
    fn face_count_matches_oracle(placed in sparse_blocks()) {
        let reg = BlockRegistry::embedded().expect("embedded registry");
        let mut blocks = vec![Block::AIR; BLOCK_COUNT];
        for &(i, id) in &placed {
            blocks[i] = Block::new(id);
        }
        let buf = ChunkBuf::from_blocks([0, 0, 0], blocks);
        let geo = build_chunk_geometry(&buf, &reg);
        let expected = expected_face_count(&buf, &reg);
        prop_assert_eq!(geo.face_count(), expected);
        prop_assert_eq!(geo.triangle_count(), expected * 2);
    }

    // No two stored vertices share coordinates, and every triangle index is
    // in range.
    #[test]
    fn vertices_are_unique_and_indices_valid(placed in sparse_blocks()) {
        let reg = BlockRegistry::embedded().expect("embedded registry");
        let mut blocks = vec![Block::AIR; BLOCK_COUNT];
        for &(i, id) in &placed {
            blocks[i] = Block::new(id);
        }
        let geo = build_chunk_geometry(&ChunkBuf::from_blocks([0, 0, 0], blocks), &reg);

        let mut seen = hashbrown::HashSet::new();
        for v in &geo.vertices {
            prop_assert!(seen.insert([v.x.to_bits(), v.y.to_bits(), v.z.to_bits()]));
        }
        let n = geo.vertex_count() as u32;
        for t in &geo.triangles {
            prop_assert!(t.indices.iter().all(|&ix| ix < n));
        }
    }
}
