//! A chunk together with a one-block halo of its neighbours.
//!
//! The halo lets the column scan look one block past the chunk edge in X and
//! Z without bounds checks. Anything above or below the world reads as air.

use crate::core::{BlockId, AIR, CHUNK_HEIGHT, CHUNK_WIDTH};

use super::raw::RawChunk;

/// Padded extent along X and Z (18).
pub const PADDED_WIDTH: usize = CHUNK_WIDTH + 2;

/// Which halo edge of an [`EnclosedChunk`] to fill.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HaloSide {
    /// Column x = -1.
    NegX,
    /// Column x = 16.
    PosX,
    /// Row z = -1.
    NegZ,
    /// Row z = 16.
    PosZ,
}

#[inline]
const fn padded_index(px: usize, y: usize, pz: usize) -> usize {
    y + pz * CHUNK_HEIGHT + px * CHUNK_HEIGHT * PADDED_WIDTH
}

/// Chunk blocks plus halo, addressed with local coordinates.
#[derive(Clone)]
pub struct EnclosedChunk {
    blocks: Box<[BlockId]>,
}

impl EnclosedChunk {
    /// Copy `raw` into the interior; the halo starts as air.
    pub fn from_raw(raw: &RawChunk) -> Self {
        let mut blocks = vec![AIR; PADDED_WIDTH * PADDED_WIDTH * CHUNK_HEIGHT].into_boxed_slice();
        for x in 0..CHUNK_WIDTH {
            for z in 0..CHUNK_WIDTH {
                let start = padded_index(x + 1, 0, z + 1);
                blocks[start..start + CHUNK_HEIGHT].copy_from_slice(raw.column(x, z));
            }
        }
        Self { blocks }
    }

    /// Block at local `(x, y, z)`.
    ///
    /// `x` and `z` may range over `-1..=16`; `y` outside `0..128` is air.
    #[inline]
    pub fn get(&self, x: i32, y: i32, z: i32) -> BlockId {
        if y < 0 || y >= CHUNK_HEIGHT as i32 {
            return AIR;
        }
        debug_assert!(
            (-1..=CHUNK_WIDTH as i32).contains(&x) && (-1..=CHUNK_WIDTH as i32).contains(&z),
            "Halo lookup ({x}, {z}) out of range"
        );
        self.blocks[padded_index((x + 1) as usize, y as usize, (z + 1) as usize)]
    }

    /// Interior Y column at `(x, z)` with `x, z` in `0..16`.
    #[inline]
    pub fn column(&self, x: usize, z: usize) -> &[BlockId] {
        let start = padded_index(x + 1, 0, z + 1);
        &self.blocks[start..start + CHUNK_HEIGHT]
    }

    /// Fill one halo edge from neighbour columns.
    ///
    /// `edge` holds 16 columns of 128 blocks, ordered along the edge
    /// (by z for X edges, by x for Z edges).
    pub fn set_halo(&mut self, side: HaloSide, edge: &[BlockId]) {
        debug_assert_eq!(edge.len(), CHUNK_WIDTH * CHUNK_HEIGHT);
        for (t, column) in edge.chunks_exact(CHUNK_HEIGHT).enumerate() {
            let (px, pz) = match side {
                HaloSide::NegX => (0, t + 1),
                HaloSide::PosX => (PADDED_WIDTH - 1, t + 1),
                HaloSide::NegZ => (t + 1, 0),
                HaloSide::PosZ => (t + 1, PADDED_WIDTH - 1),
            };
            let start = padded_index(px, 0, pz);
            self.blocks[start..start + CHUNK_HEIGHT].copy_from_slice(column);
        }
    }
}

impl From<&RawChunk> for EnclosedChunk {
    fn from(raw: &RawChunk) -> Self {
        Self::from_raw(raw)
    }
}
