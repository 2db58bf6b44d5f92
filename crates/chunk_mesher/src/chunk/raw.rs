//! Raw chunk block storage.

use crate::core::{BlockId, AIR, CHUNK_HEIGHT, CHUNK_VOLUME, CHUNK_WIDTH};
use crate::error::{Error, Result};

/// Linear index of a block in a raw chunk: x outermost, then z, y innermost.
#[inline]
pub const fn block_index(x: usize, y: usize, z: usize) -> usize {
    y + z * CHUNK_HEIGHT + x * CHUNK_HEIGHT * CHUNK_WIDTH
}

/// Blocks of one 16 × 128 × 16 chunk, stored as Y columns.
#[derive(Clone, PartialEq, Eq)]
pub struct RawChunk {
    blocks: Box<[BlockId]>,
}

impl RawChunk {
    /// An all-air chunk.
    pub fn new() -> Self {
        Self::filled(AIR)
    }

    /// A chunk where every block is `block`.
    pub fn filled(block: BlockId) -> Self {
        Self {
            blocks: vec![block; CHUNK_VOLUME].into_boxed_slice(),
        }
    }

    /// Wrap column-major block bytes (`y + z*128 + x*2048`).
    ///
    /// Fails unless exactly [`CHUNK_VOLUME`] bytes are given.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != CHUNK_VOLUME {
            return Err(Error::ChunkLength {
                expected: CHUNK_VOLUME,
                actual: bytes.len(),
            });
        }
        Ok(Self { blocks: bytes.into() })
    }

    /// Build a chunk by evaluating `f(x, y, z)` for every block.
    pub fn from_fn(mut f: impl FnMut(usize, usize, usize) -> BlockId) -> Self {
        let mut chunk = Self::new();
        for x in 0..CHUNK_WIDTH {
            for z in 0..CHUNK_WIDTH {
                for y in 0..CHUNK_HEIGHT {
                    chunk.blocks[block_index(x, y, z)] = f(x, y, z);
                }
            }
        }
        chunk
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize, z: usize) -> BlockId {
        self.blocks[block_index(x, y, z)]
    }

    /// # Panics
    /// Panics if coordinates are out of bounds.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, z: usize, block: BlockId) {
        assert!(
            x < CHUNK_WIDTH && y < CHUNK_HEIGHT && z < CHUNK_WIDTH,
            "Coordinates out of bounds"
        );
        self.blocks[block_index(x, y, z)] = block;
    }

    /// The Y column at `(x, z)`, bottom first.
    #[inline]
    pub fn column(&self, x: usize, z: usize) -> &[BlockId] {
        let start = block_index(x, 0, z);
        &self.blocks[start..start + CHUNK_HEIGHT]
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.blocks
    }

    /// Count blocks that are not air.
    pub fn non_air_count(&self) -> usize {
        self.blocks.iter().filter(|&&b| b != AIR).count()
    }
}

impl Default for RawChunk {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RawChunk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RawChunk")
            .field("non_air", &self.non_air_count())
            .finish()
    }
}
