use strata_blocks::types::FaceRole;
use strata_chunk::LocalPos;
use strata_geom::Vec3;

/// The six face directions of a unit block. The grid is Z-up, so `PosZ` is
/// the top face and `NegZ` the bottom.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Face {
    PosX = 0,
    NegX = 1,
    PosY = 2,
    NegY = 3,
    PosZ = 4,
    NegZ = 5,
}

impl Face {
    /// Returns the `[0..6)` index of this face.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// The outward-facing direction of the positive face along `axis`.
    #[inline]
    pub fn positive(axis: Axis) -> Face {
        match axis {
            Axis::X => Face::PosX,
            Axis::Y => Face::PosY,
            Axis::Z => Face::PosZ,
        }
    }

    /// The outward-facing direction of the negative face along `axis`.
    #[inline]
    pub fn negative(axis: Axis) -> Face {
        match axis {
            Axis::X => Face::NegX,
            Axis::Y => Face::NegY,
            Axis::Z => Face::NegZ,
        }
    }

    /// Returns the unit-normal vector for this face.
    #[inline]
    pub fn normal(self) -> Vec3 {
        let (dx, dy, dz) = self.delta();
        Vec3::new(dx as f32, dy as f32, dz as f32)
    }

    /// Returns the integer grid delta `(dx,dy,dz)` when stepping out of this face.
    #[inline]
    pub fn delta(self) -> (i32, i32, i32) {
        match self {
            Face::PosX => (1, 0, 0),
            Face::NegX => (-1, 0, 0),
            Face::PosY => (0, 1, 0),
            Face::NegY => (0, -1, 0),
            Face::PosZ => (0, 0, 1),
            Face::NegZ => (0, 0, -1),
        }
    }

    /// Classifies the face into top/bottom/side role for material lookup.
    #[inline]
    pub fn role(self) -> FaceRole {
        match self {
            Face::PosZ => FaceRole::Top,
            Face::NegZ => FaceRole::Bottom,
            _ => FaceRole::Side,
        }
    }
}

/// A grid axis; the visibility scan walks each one in the positive
/// direction only.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

pub const AXES: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

impl Axis {
    /// The component of `pos` along this axis.
    #[inline]
    pub fn coord(self, pos: LocalPos) -> usize {
        match self {
            Axis::X => pos.x,
            Axis::Y => pos.y,
            Axis::Z => pos.z,
        }
    }

    /// `pos` moved one step in the positive direction along this axis.
    #[inline]
    pub fn step(self, pos: LocalPos) -> LocalPos {
        match self {
            Axis::X => LocalPos::new(pos.x + 1, pos.y, pos.z),
            Axis::Y => LocalPos::new(pos.x, pos.y + 1, pos.z),
            Axis::Z => LocalPos::new(pos.x, pos.y, pos.z + 1),
        }
    }
}
