//! Statistics structs for export runs.

use super::coord::ChunkCoord;

/// Output of meshing a single chunk.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ChunkStats {
    /// Chunk that was processed.
    pub coord: ChunkCoord,
    /// `v` records written.
    pub vertices: usize,
    /// `f` records written.
    pub faces: usize,
    /// Distinct materials (one `usemtl` group each).
    pub materials: usize,
}

impl ChunkStats {
    /// Check if the chunk produced any geometry.
    pub fn is_empty(&self) -> bool {
        self.faces == 0
    }
}

/// Running totals across every chunk written by one exporter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExportStats {
    /// Chunks processed, including empty ones.
    pub chunks: usize,
    /// Chunks that produced no faces.
    pub empty_chunks: usize,
    /// Total `v` records.
    pub vertices: usize,
    /// Total `f` records.
    pub faces: usize,
}

impl ExportStats {
    /// Fold one chunk's result into the totals.
    pub fn record(&mut self, chunk: &ChunkStats) {
        self.chunks += 1;
        if chunk.is_empty() {
            self.empty_chunks += 1;
        }
        self.vertices += chunk.vertices;
        self.faces += chunk.faces;
    }

    /// Average faces per non-empty chunk.
    pub fn faces_per_chunk(&self) -> f32 {
        let meshed = self.chunks - self.empty_chunks;
        if meshed == 0 {
            0.0
        } else {
            self.faces as f32 / meshed as f32
        }
    }
}
