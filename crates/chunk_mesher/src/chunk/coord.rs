//! Chunk coordinate type for chunk-grid addressing.

use crate::core::CHUNK_WIDTH;

/// Chunk coordinate on the horizontal chunk grid (not block space).
///
/// Chunks span the full world height, so only X and Z are tracked.
/// Coordinates can be negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct ChunkCoord {
    pub x: i32,
    pub z: i32,
}

impl ChunkCoord {
    /// Origin chunk at (0, 0).
    pub const ZERO: ChunkCoord = ChunkCoord { x: 0, z: 0 };

    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// The 4 edge-adjacent neighbours.
    ///
    /// Returns neighbours in order: +X, -X, +Z, -Z
    pub fn neighbors(&self) -> [ChunkCoord; 4] {
        [
            ChunkCoord { x: self.x + 1, z: self.z },
            ChunkCoord { x: self.x - 1, z: self.z },
            ChunkCoord { x: self.x, z: self.z + 1 },
            ChunkCoord { x: self.x, z: self.z - 1 },
        ]
    }

    /// Chunk containing the block column at `[x, z]`.
    ///
    /// Uses Euclidean division for correct negative coordinate handling.
    ///
    /// # Example
    /// ```
    /// use chunk_mesher::chunk::ChunkCoord;
    ///
    /// assert_eq!(ChunkCoord::from_block([17, 3]), ChunkCoord::new(1, 0));
    /// assert_eq!(ChunkCoord::from_block([-1, 0]), ChunkCoord::new(-1, 0));
    /// ```
    pub fn from_block(block: [i32; 2]) -> Self {
        let w = CHUNK_WIDTH as i32;
        ChunkCoord {
            x: block[0].div_euclid(w),
            z: block[1].div_euclid(w),
        }
    }

    /// Block-space position of this chunk's minimum corner.
    pub fn block_origin(&self) -> [i32; 2] {
        let w = CHUNK_WIDTH as i32;
        [self.x * w, self.z * w]
    }
}

impl std::fmt::Display for ChunkCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:3},{:3})", self.x, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_constant() {
        assert_eq!(ChunkCoord::ZERO, ChunkCoord::new(0, 0));
    }

    #[test]
    fn neighbors_returns_four() {
        let n = ChunkCoord::new(5, -3).neighbors();
        assert_eq!(n[0], ChunkCoord::new(6, -3)); // +X
        assert_eq!(n[1], ChunkCoord::new(4, -3)); // -X
        assert_eq!(n[2], ChunkCoord::new(5, -2)); // +Z
        assert_eq!(n[3], ChunkCoord::new(5, -4)); // -Z
    }

    #[test]
    fn from_block_negative() {
        assert_eq!(ChunkCoord::from_block([-16, -17]), ChunkCoord::new(-1, -2));
        assert_eq!(ChunkCoord::from_block([15, 16]), ChunkCoord::new(0, 1));
    }

    #[test]
    fn block_origin() {
        assert_eq!(ChunkCoord::new(2, -1).block_origin(), [32, -16]);
    }

    #[test]
    fn display_pads_like_the_progress_line() {
        assert_eq!(ChunkCoord::new(3, -12).to_string(), "(  3,-12)");
    }
}
