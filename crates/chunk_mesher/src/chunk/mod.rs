//! Chunk storage and neighbour handling.
//!
//! - [`ChunkCoord`]: position on the horizontal chunk grid
//! - [`RawChunk`]: 16 × 128 × 16 block columns as read from storage
//! - [`EnclosedChunk`]: a chunk padded with a one-block halo in X and Z
//! - [`BoundarySource`] / [`SideCache`]: fills the halo from neighbours
//!   that were already processed
//! - [`ChunkStats`] / [`ExportStats`]: per-chunk and running totals
//!
//! # Layout
//!
//! ```text
//!        z = -1 (halo)
//!      ┌──────────────┐
//!  x=-1│  16 × 16     │x=16
//! (halo│  columns of  │(halo)
//!      │  128 blocks  │
//!      └──────────────┘
//!        z = 16 (halo)
//! ```

pub mod coord;
pub mod raw;
pub mod enclosed;
pub mod side_cache;
pub mod stats;

pub use coord::ChunkCoord;
pub use raw::{block_index, RawChunk};
pub use enclosed::{EnclosedChunk, HaloSide, PADDED_WIDTH};
pub use side_cache::{BoundarySource, SideCache};
pub use stats::{ChunkStats, ExportStats};
