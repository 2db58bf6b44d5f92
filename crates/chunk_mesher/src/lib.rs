//! Column-scan voxel meshing for 16 × 128 × 16 block chunks.
//!
//! This crate turns chunks of block ids into a Wavefront OBJ stream. Faces
//! are emitted only where a block meets empty space, vertical wall faces are
//! merged into runs along Y, and shared corners are written once per chunk.
//! Face indices are relative, so chunk outputs can simply be concatenated.
//!
//! # Example
//!
//! ```
//! use chunk_mesher::{ChunkCoord, Exporter, MeshConfig, RawChunk, STONE};
//!
//! let mut chunk = RawChunk::new();
//! chunk.set(0, 0, 0, STONE); // Single block in the corner
//!
//! let mut exporter = Exporter::new(Vec::new(), MeshConfig::default());
//! let stats = exporter.process_chunk(ChunkCoord::ZERO, &chunk).unwrap();
//! assert_eq!(stats.faces, 6); // One quad per cube side
//! assert_eq!(stats.vertices, 8); // Corners are shared
//! ```

pub mod core;
pub mod classify;
pub mod cull;
pub mod vertex;
pub mod merge;
pub mod faces;
pub mod mesh;
pub mod obj;
pub mod chunk;
pub mod config;
pub mod error;
pub mod exporter;

// Re-export primary types
pub use crate::core::{
    BlockId,
    Direction,
    Quad,
    Vertex,
    // Constants
    AIR, STONE, WATER,
    CHUNK_WIDTH, CHUNK_HEIGHT, CHUNK_VOLUME,
    VERTEX_WIDTH, VERTEX_HEIGHT, VERTEX_VOLUME,
    UNIT_SCALE, Y_OFFSET,
};
pub use crate::classify::{Classification, Classifier, CLASSIC_MESH_EXCEPTIONS};
pub use crate::cull::{is_boundary, is_boundary_at};
pub use crate::vertex::{vertex_index, VertexHandle, VertexRegistry};
pub use crate::merge::RunMerger;
pub use crate::faces::{AddFace, Face, Faces};
pub use crate::chunk::{
    BoundarySource, ChunkCoord, ChunkStats, EnclosedChunk, ExportStats, RawChunk, SideCache,
};
pub use crate::config::MeshConfig;
pub use crate::error::{Error, Result};

// Re-export main entry points
pub use crate::mesh::{scan_chunk, ScanOptions};
pub use crate::obj::{write_chunk, write_header, MaterialWriter, UsemtlWriter};
pub use crate::exporter::Exporter;
