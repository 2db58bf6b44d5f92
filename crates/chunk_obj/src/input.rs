//! Chunk dump discovery.
//!
//! Each chunk is stored as `<x>.<z>.chunk`, 32768 raw block ids in the
//! column-major layout `RawChunk` expects.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chunk_mesher::{ChunkCoord, RawChunk};

const CHUNK_EXTENSION: &str = "chunk";

/// Parse `<x>.<z>.chunk` into a coordinate.
pub fn parse_chunk_name(name: &str) -> Option<ChunkCoord> {
    let stem = name.strip_suffix(CHUNK_EXTENSION)?.strip_suffix('.')?;
    let (x, z) = stem.split_once('.')?;
    Some(ChunkCoord::new(x.parse().ok()?, z.parse().ok()?))
}

/// Every chunk file in `dir`, sorted by (x, z).
///
/// Files that do not follow the naming scheme are skipped.
pub fn discover_chunks(dir: &Path) -> Result<Vec<(ChunkCoord, PathBuf)>> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("Failed to read chunk directory {:?}", dir))?;

    let mut chunks = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("Failed to list {:?}", dir))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(coord) = path
            .file_name()
            .and_then(|n| n.to_str())
            .and_then(parse_chunk_name)
        else {
            tracing::debug!("Skipping {:?}", path);
            continue;
        };
        chunks.push((coord, path));
    }

    chunks.sort_by_key(|(coord, _)| *coord);
    Ok(chunks)
}

/// Read one chunk dump.
pub fn load_chunk(path: &Path) -> Result<RawChunk> {
    let bytes = fs::read(path).with_context(|| format!("Failed to read {:?}", path))?;
    RawChunk::from_bytes(&bytes).with_context(|| format!("Invalid chunk file {:?}", path))
}
