//! Exporter - runs the per-chunk pipeline and owns the output stream.

use std::io::Write;

use tracing::info;

use crate::chunk::{BoundarySource, ChunkCoord, ChunkStats, ExportStats, RawChunk, SideCache};
use crate::classify::Classifier;
use crate::config::MeshConfig;
use crate::error::Result;
use crate::faces::Faces;
use crate::mesh::{scan_chunk, ScanOptions};
use crate::obj::{write_chunk, write_header, MaterialWriter, UsemtlWriter};

/// State for one export run.
///
/// Chunks are processed one at a time, start to finish:
/// 1. enclose the chunk with its neighbours' edges
/// 2. reset the face accumulator and scan every column
/// 3. number vertices and write the chunk's geometry
/// 4. optionally hand the chunk to the boundary cache
///
/// The accumulator is reused between chunks; the output stream and running
/// totals live here rather than in globals.
pub struct Exporter<W: Write, B: BoundarySource = SideCache, M: MaterialWriter = UsemtlWriter> {
    out: W,
    config: MeshConfig,
    classifier: Classifier,
    boundaries: B,
    materials: M,
    faces: Faces,
    stats: ExportStats,
}

impl<W: Write> Exporter<W> {
    /// Exporter with an in-memory side cache and `usemtl` materials.
    pub fn new(out: W, config: MeshConfig) -> Self {
        let materials = UsemtlWriter::new(config.material_prefix.clone());
        Self::with_parts(out, config, SideCache::new(), materials)
    }
}

impl<W: Write, B: BoundarySource, M: MaterialWriter> Exporter<W, B, M> {
    /// Exporter with caller-supplied collaborators.
    pub fn with_parts(out: W, config: MeshConfig, boundaries: B, materials: M) -> Self {
        Self {
            out,
            classifier: Classifier::from_config(&config),
            config,
            boundaries,
            materials,
            faces: Faces::new(),
            stats: ExportStats::default(),
        }
    }

    pub fn config(&self) -> &MeshConfig {
        &self.config
    }

    /// Totals over every chunk processed so far.
    pub fn stats(&self) -> &ExportStats {
        &self.stats
    }

    /// Faces of the most recently processed chunk.
    pub fn faces(&self) -> &Faces {
        &self.faces
    }

    pub fn boundaries(&self) -> &B {
        &self.boundaries
    }

    /// Write the file preamble.
    pub fn write_header(&mut self, mtllib: Option<&str>) -> Result<()> {
        write_header(&mut self.out, mtllib)?;
        Ok(())
    }

    /// Mesh one chunk and append it to the output.
    pub fn process_chunk(&mut self, coord: ChunkCoord, raw: &RawChunk) -> Result<ChunkStats> {
        let enclosed = self.boundaries.enclose(coord, raw);

        self.faces.reset(coord);
        scan_chunk(
            &enclosed,
            &self.classifier,
            ScanOptions::from(&self.config),
            &mut self.faces,
        );
        let chunk = write_chunk(&mut self.faces, &mut self.out, &self.materials)?;

        if self.config.cache_sides {
            self.boundaries.update(coord, raw);
        }

        self.stats.record(&chunk);
        info!("{} Faces: {}", coord, chunk.faces);
        Ok(chunk)
    }

    /// Flush and hand back the output along with the totals.
    pub fn finish(mut self) -> Result<(W, ExportStats)> {
        self.out.flush()?;
        Ok((self.out, self.stats))
    }
}
