//! Edge caching between neighbouring chunks.

use std::collections::HashMap;

use tracing::debug;

use crate::core::{BlockId, CHUNK_HEIGHT, CHUNK_WIDTH};

use super::coord::ChunkCoord;
use super::enclosed::{EnclosedChunk, HaloSide};
use super::raw::RawChunk;

/// Supplies the halo around a chunk and learns from finished chunks.
pub trait BoundarySource {
    /// Pad `raw` with whatever is known about its neighbours.
    fn enclose(&mut self, coord: ChunkCoord, raw: &RawChunk) -> EnclosedChunk;

    /// Remember `raw` so later neighbours can see across the shared edge.
    fn update(&mut self, coord: ChunkCoord, raw: &RawChunk);
}

/// The four outermost column rows of one chunk.
#[derive(Clone)]
struct ChunkSides {
    /// x = 0, ordered by z.
    neg_x: Box<[BlockId]>,
    /// x = 15, ordered by z.
    pos_x: Box<[BlockId]>,
    /// z = 0, ordered by x.
    neg_z: Box<[BlockId]>,
    /// z = 15, ordered by x.
    pos_z: Box<[BlockId]>,
}

impl ChunkSides {
    fn capture(raw: &RawChunk) -> Self {
        let last = CHUNK_WIDTH - 1;
        let edge = |pick: &dyn Fn(usize) -> (usize, usize)| -> Box<[BlockId]> {
            let mut out = Vec::with_capacity(CHUNK_WIDTH * CHUNK_HEIGHT);
            for t in 0..CHUNK_WIDTH {
                let (x, z) = pick(t);
                out.extend_from_slice(raw.column(x, z));
            }
            out.into_boxed_slice()
        };
        Self {
            neg_x: edge(&|t| (0, t)),
            pos_x: edge(&|t| (last, t)),
            neg_z: edge(&|t| (t, 0)),
            pos_z: edge(&|t| (t, last)),
        }
    }
}

/// In-memory [`BoundarySource`] keyed by chunk coordinate.
///
/// Neighbours that were never cached leave their halo as air.
#[derive(Default)]
pub struct SideCache {
    sides: HashMap<ChunkCoord, ChunkSides>,
}

impl SideCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of chunks with cached edges.
    pub fn len(&self) -> usize {
        self.sides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sides.is_empty()
    }

    pub fn contains(&self, coord: ChunkCoord) -> bool {
        self.sides.contains_key(&coord)
    }
}

impl BoundarySource for SideCache {
    fn enclose(&mut self, coord: ChunkCoord, raw: &RawChunk) -> EnclosedChunk {
        let mut enclosed = EnclosedChunk::from_raw(raw);
        let [pos_x, neg_x, pos_z, neg_z] = coord.neighbors();

        // Each halo edge comes from the facing edge of the neighbour.
        if let Some(n) = self.sides.get(&neg_x) {
            enclosed.set_halo(HaloSide::NegX, &n.pos_x);
        }
        if let Some(n) = self.sides.get(&pos_x) {
            enclosed.set_halo(HaloSide::PosX, &n.neg_x);
        }
        if let Some(n) = self.sides.get(&neg_z) {
            enclosed.set_halo(HaloSide::NegZ, &n.pos_z);
        }
        if let Some(n) = self.sides.get(&pos_z) {
            enclosed.set_halo(HaloSide::PosZ, &n.neg_z);
        }
        enclosed
    }

    fn update(&mut self, coord: ChunkCoord, raw: &RawChunk) {
        debug!(%coord, "caching chunk sides");
        self.sides.insert(coord, ChunkSides::capture(raw));
    }
}
