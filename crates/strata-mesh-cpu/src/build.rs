use std::time::Instant;

use strata_blocks::BlockRegistry;
use strata_chunk::{CHUNK_SIZE, ChunkBuf, LocalPos, location_to_index};
use strata_geom::Vec3;

use crate::face::{AXES, Face};
use crate::geometry::ChunkGeometry;

/// Builds the visible-face mesh for a chunk's block grid.
///
/// One pass over the grid, stepping each of the three axes in the positive
/// direction only: every solid/air boundary between axis-adjacent blocks is
/// discovered exactly once, from whichever side of the pair the scan visits,
/// and produces one face attributed to the solid block and facing outward
/// from it. Blocks on a chunk edge always emit the outward face there: the
/// neighbor lies in an unmodeled adjacent chunk, so no visibility test is
/// possible. Edge faces may be hidden once a neighboring chunk exists.
///
/// Deterministic: the same block array always yields identical vertex and
/// triangle lists, in the same order.
pub fn build_chunk_geometry(buf: &ChunkBuf, reg: &BlockRegistry) -> ChunkGeometry {
    let start = Instant::now();
    let mut geo = ChunkGeometry::default();

    for x in 0..CHUNK_SIZE {
        for y in 0..CHUNK_SIZE {
            for z in 0..CHUNK_SIZE {
                let loc = LocalPos::new(x, y, z);
                let here_solid = reg.is_solid(buf.get_local(loc));

                for axis in AXES {
                    // Far edge: no neighbor to test against, emit if solid.
                    if axis.coord(loc) == CHUNK_SIZE - 1 {
                        if here_solid {
                            emit_face(&mut geo, buf, reg, loc, Face::positive(axis));
                        }
                        continue;
                    }

                    // Near edge: the negative neighbor outside the chunk is
                    // never visited by the positive-only scan, so the face
                    // is emitted here.
                    if axis.coord(loc) == 0 && here_solid {
                        emit_face(&mut geo, buf, reg, loc, Face::negative(axis));
                    }

                    let nloc = axis.step(loc);
                    let neighbor_solid = reg.is_solid(buf.blocks[location_to_index(nloc)]);
                    if here_solid && !neighbor_solid {
                        emit_face(&mut geo, buf, reg, loc, Face::positive(axis));
                    } else if !here_solid && neighbor_solid {
                        emit_face(&mut geo, buf, reg, nloc, Face::negative(axis));
                    }
                }
            }
        }
    }

    log::debug!(
        "meshed chunk at {:?}: {} vertices, {} triangles in {} ms",
        buf.origin,
        geo.vertex_count(),
        geo.triangle_count(),
        start.elapsed().as_millis()
    );
    geo
}

/// Emits one face of the block at `loc`, textured per the block's type and
/// the face's role.
fn emit_face(
    geo: &mut ChunkGeometry,
    buf: &ChunkBuf,
    reg: &BlockRegistry,
    loc: LocalPos,
    face: Face,
) {
    let block = buf.get_local(loc);
    let material = reg.material_for_face(block, face.role());
    let base = Vec3::new(loc.x as f32, loc.y as f32, loc.z as f32);
    geo.push_face(face, base, material, buf.world_voxel(loc));
}
