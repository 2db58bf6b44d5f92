//! Core type definitions for the chunk mesher.

use glam::IVec3;

/// Block identifier into an external palette.
pub type BlockId = u8;

/// Empty space.
pub const AIR: BlockId = 0;
/// Stone, the block affected by the `stone_always_solid` override.
pub const STONE: BlockId = 1;
/// Still water, the only liquid the classifier knows about.
pub const WATER: BlockId = 9;

/// Chunk extent along X and Z (16).
pub const CHUNK_WIDTH: usize = 16;
/// Chunk extent along Y (128).
pub const CHUNK_HEIGHT: usize = 128;
/// Blocks per chunk (16 × 16 × 128 = 32768).
pub const CHUNK_VOLUME: usize = CHUNK_WIDTH * CHUNK_WIDTH * CHUNK_HEIGHT;

/// Vertex lattice extent along X and Z (17).
pub const VERTEX_WIDTH: usize = CHUNK_WIDTH + 1;
/// Vertex lattice extent along Y (129).
pub const VERTEX_HEIGHT: usize = CHUNK_HEIGHT + 1;
/// Vertices in the lattice (17 × 17 × 129 = 37281).
pub const VERTEX_VOLUME: usize = VERTEX_WIDTH * VERTEX_WIDTH * VERTEX_HEIGHT;

/// World units per block edge.
pub const UNIT_SCALE: f64 = 0.05;
/// Subtracted from local Y before scaling so sea level sits near zero.
pub const Y_OFFSET: i32 = 64;

/// Local lattice coordinate of a quad corner.
pub type Vertex = IVec3;

/// The six face directions of a block.
///
/// The discriminant order is the order in which a voxel's faces are tested
/// during the column scan.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    NegY,
    PosY,
    NegX,
    PosX,
    NegZ,
    PosZ,
}

impl Direction {
    /// All six directions in scan order.
    pub const ALL: [Direction; 6] = [
        Direction::NegY,
        Direction::PosY,
        Direction::NegX,
        Direction::PosX,
        Direction::NegZ,
        Direction::PosZ,
    ];

    /// Top and bottom: emitted one quad per block, never merged.
    pub const CAPS: [Direction; 2] = [Direction::NegY, Direction::PosY];

    /// Vertical walls: merged along +Y by the run mergers.
    pub const WALLS: [Direction; 4] = [
        Direction::NegX,
        Direction::PosX,
        Direction::NegZ,
        Direction::PosZ,
    ];

    /// Offset from a block to its neighbour across this face.
    pub const fn offset(self) -> IVec3 {
        match self {
            Direction::NegY => IVec3::new(0, -1, 0),
            Direction::PosY => IVec3::new(0, 1, 0),
            Direction::NegX => IVec3::new(-1, 0, 0),
            Direction::PosX => IVec3::new(1, 0, 0),
            Direction::NegZ => IVec3::new(0, 0, -1),
            Direction::PosZ => IVec3::new(0, 0, 1),
        }
    }

    /// Whether this face is a vertical wall.
    pub const fn is_wall(self) -> bool {
        !matches!(self, Direction::NegY | Direction::PosY)
    }

    /// Which edge of a wall quad moves when a run grows upward.
    ///
    /// `true` replaces vertices 3 and 4, `false` replaces vertices 2 and 3.
    /// Follows from the winding chosen in [`Direction::quad`]. Meaningless
    /// for caps.
    pub const fn extends_high(self) -> bool {
        matches!(self, Direction::NegX | Direction::PosZ)
    }

    /// Build the unit quad for this face of the block at `pos`.
    pub fn quad(self, pos: IVec3, block: BlockId) -> Quad {
        let IVec3 { x, y, z } = pos;
        let v = IVec3::new;
        let vertices = match self {
            Direction::NegY => [v(x, y, z), v(x + 1, y, z), v(x + 1, y, z + 1), v(x, y, z + 1)],
            Direction::PosY => [
                v(x, y + 1, z),
                v(x, y + 1, z + 1),
                v(x + 1, y + 1, z + 1),
                v(x + 1, y + 1, z),
            ],
            Direction::NegX => [v(x, y, z), v(x, y, z + 1), v(x, y + 1, z + 1), v(x, y + 1, z)],
            Direction::PosX => [
                v(x + 1, y, z),
                v(x + 1, y + 1, z),
                v(x + 1, y + 1, z + 1),
                v(x + 1, y, z + 1),
            ],
            Direction::NegZ => [v(x, y, z), v(x, y + 1, z), v(x + 1, y + 1, z), v(x + 1, y, z)],
            Direction::PosZ => [
                v(x, y, z + 1),
                v(x + 1, y, z + 1),
                v(x + 1, y + 1, z + 1),
                v(x, y + 1, z + 1),
            ],
        };
        Quad { block, vertices }
    }
}

/// A quad awaiting registration: material plus four corners in winding order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Quad {
    pub block: BlockId,
    pub vertices: [Vertex; 4],
}

impl Quad {
    /// Grow this quad's far edge to that of `next`.
    ///
    /// `extend_high` selects vertices 3 and 4, otherwise 2 and 3 are taken.
    #[inline]
    pub fn extend_to(&mut self, next: &Quad, extend_high: bool) {
        let [a, b] = if extend_high { [2, 3] } else { [1, 2] };
        self.vertices[a] = next.vertices[a];
        self.vertices[b] = next.vertices[b];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn axis_of(dir: Direction) -> usize {
        let o = dir.offset();
        (0..3).find(|&i| o[i] != 0).unwrap()
    }

    #[test]
    fn chunk_constants() {
        assert_eq!(CHUNK_VOLUME, 32768);
        assert_eq!(VERTEX_VOLUME, 17 * 17 * 129);
    }

    #[test]
    fn quads_lie_on_their_face_plane() {
        let pos = IVec3::new(3, 40, 7);
        for dir in Direction::ALL {
            let quad = dir.quad(pos, 5);
            let axis = axis_of(dir);
            let plane = pos[axis] + if dir.offset()[axis] > 0 { 1 } else { 0 };
            for v in quad.vertices {
                assert_eq!(v[axis], plane, "{dir:?} vertex {v:?} off plane");
            }
        }
    }

    #[test]
    fn quads_have_four_distinct_corners() {
        for dir in Direction::ALL {
            let q = dir.quad(IVec3::ZERO, 1);
            for i in 0..4 {
                for j in (i + 1)..4 {
                    assert_ne!(q.vertices[i], q.vertices[j]);
                }
            }
        }
    }

    #[test]
    fn extend_high_replaces_upper_edge() {
        for dir in Direction::WALLS {
            let lower = dir.quad(IVec3::new(0, 0, 0), 1);
            let upper = dir.quad(IVec3::new(0, 1, 0), 1);
            let mut run = lower;
            run.extend_to(&upper, dir.extends_high());

            let ys: Vec<i32> = run.vertices.iter().map(|v| v.y).collect();
            assert_eq!(ys.iter().filter(|&&y| y == 0).count(), 2, "{dir:?}");
            assert_eq!(ys.iter().filter(|&&y| y == 2).count(), 2, "{dir:?}");
        }
    }

    #[test]
    fn walls_and_caps_partition_directions() {
        assert!(Direction::WALLS.iter().all(|d| d.is_wall()));
        assert!(Direction::CAPS.iter().all(|d| !d.is_wall()));
    }
}
