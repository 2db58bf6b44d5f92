//! Column scan: turns an enclosed chunk into faces.
//!
//! Columns are visited x-major, then z; each column bottom to top. For every
//! block the six neighbours are tested in [`Direction::ALL`] order:
//! 1. bottom and top faces go straight to the sink
//! 2. wall faces go through one [`RunMerger`] per direction
//! 3. a wall with no boundary flushes that direction's run
//!
//! All four runs are flushed when the column ends.

use glam::IVec3;

use crate::chunk::EnclosedChunk;
use crate::classify::Classifier;
use crate::config::MeshConfig;
use crate::core::{Direction, CHUNK_WIDTH};
use crate::cull::is_boundary_at;
use crate::faces::AddFace;
use crate::merge::RunMerger;

/// Scan settings taken from [`MeshConfig`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScanOptions {
    /// Merge wall runs along Y.
    pub greedy: bool,
    /// Skip blocks below this height.
    pub y_min: usize,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self { greedy: true, y_min: 0 }
    }
}

impl From<&MeshConfig> for ScanOptions {
    fn from(config: &MeshConfig) -> Self {
        Self {
            greedy: config.greedy,
            y_min: config.y_min,
        }
    }
}

/// Emit every boundary face of `chunk` into `faces`.
pub fn scan_chunk<F: AddFace + ?Sized>(
    chunk: &EnclosedChunk,
    classifier: &Classifier,
    options: ScanOptions,
    faces: &mut F,
) {
    for x in 0..CHUNK_WIDTH {
        for z in 0..CHUNK_WIDTH {
            scan_column(chunk, classifier, options, x, z, faces);
        }
    }
}

fn scan_column<F: AddFace + ?Sized>(
    chunk: &EnclosedChunk,
    classifier: &Classifier,
    options: ScanOptions,
    x: usize,
    z: usize,
    faces: &mut F,
) {
    let mut runs = [RunMerger::new(options.greedy); 4];

    for (y, &block) in chunk.column(x, z).iter().enumerate().skip(options.y_min) {
        let pos = IVec3::new(x as i32, y as i32, z as i32);

        for dir in Direction::CAPS {
            if is_boundary_at(chunk, classifier, pos + dir.offset(), block) {
                faces.add_quad(&dir.quad(pos, block));
            }
        }

        for (run, dir) in runs.iter_mut().zip(Direction::WALLS) {
            if is_boundary_at(chunk, classifier, pos + dir.offset(), block) {
                run.update(dir.quad(pos, block), dir.extends_high(), faces);
            } else {
                run.flush(faces);
            }
        }
    }

    for run in &mut runs {
        run.flush(faces);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chunk::RawChunk;
    use crate::core::{BlockId, Quad, Vertex, AIR, STONE, WATER};

    #[derive(Default)]
    struct Collect(Vec<Quad>);

    impl AddFace for Collect {
        fn add_face(&mut self, block: BlockId, v1: Vertex, v2: Vertex, v3: Vertex, v4: Vertex) {
            self.0.push(Quad { block, vertices: [v1, v2, v3, v4] });
        }
    }

    fn scan(raw: &RawChunk, options: ScanOptions) -> Vec<Quad> {
        let mut out = Collect::default();
        scan_chunk(&EnclosedChunk::from_raw(raw), &Classifier::new(), options, &mut out);
        out.0
    }

    fn count_on_plane(quads: &[Quad], axis: usize, plane: i32) -> usize {
        quads
            .iter()
            .filter(|q| q.vertices.iter().all(|v| v[axis] == plane))
            .count()
    }

    #[test]
    fn empty_chunk_no_faces() {
        assert!(scan(&RawChunk::new(), ScanOptions::default()).is_empty());
    }

    #[test]
    fn single_voxel_six_faces() {
        let mut raw = RawChunk::new();
        raw.set(0, 0, 0, STONE);
        let quads = scan(&raw, ScanOptions::default());
        assert_eq!(quads.len(), 6);
    }

    #[test]
    fn face_order_bottom_top_then_walls() {
        let mut raw = RawChunk::new();
        raw.set(4, 10, 4, STONE);
        let quads = scan(&raw, ScanOptions::default());
        let pos = IVec3::new(4, 10, 4);

        // Caps are emitted during the scan, walls on the column flush.
        let expected: Vec<Quad> = Direction::ALL.iter().map(|d| d.quad(pos, STONE)).collect();
        assert_eq!(quads, expected);
    }

    #[test]
    fn stacked_voxels_merge_walls() {
        let mut raw = RawChunk::new();
        raw.set(5, 20, 5, STONE);
        raw.set(5, 21, 5, STONE);

        let merged = scan(&raw, ScanOptions::default());
        // 2 caps + 4 merged walls.
        assert_eq!(merged.len(), 6);
        assert_eq!(count_on_plane(&merged, 0, 6), 1);

        let plain = scan(&raw, ScanOptions { greedy: false, y_min: 0 });
        assert_eq!(plain.len(), 10);
        assert_eq!(count_on_plane(&plain, 0, 6), 2);
    }

    #[test]
    fn column_of_m_voxels() {
        let m = 9;
        let mut raw = RawChunk::new();
        for y in 30..30 + m {
            raw.set(8, y, 8, 4);
        }

        let merged = scan(&raw, ScanOptions::default());
        for (axis, plane) in [(0, 8), (0, 9), (2, 8), (2, 9)] {
            assert_eq!(count_on_plane(&merged, axis, plane), 1);
        }

        let plain = scan(&raw, ScanOptions { greedy: false, y_min: 0 });
        for (axis, plane) in [(0, 8), (0, 9), (2, 8), (2, 9)] {
            assert_eq!(count_on_plane(&plain, axis, plane), m);
        }
    }

    #[test]
    fn material_change_splits_wall_run() {
        let mut raw = RawChunk::new();
        raw.set(1, 0, 1, 3);
        raw.set(1, 1, 1, 4);
        let quads = scan(&raw, ScanOptions::default());
        // Each block keeps its own 4 walls; only the hidden shared cap is gone.
        assert_eq!(quads.len(), 10);
    }

    #[test]
    fn water_under_air_shows_surface_only() {
        let mut raw = RawChunk::new();
        for x in 0..16 {
            for z in 0..16 {
                raw.set(x, 10, z, WATER);
            }
        }
        let quads = scan(&raw, ScanOptions::default());
        let tops = count_on_plane(&quads, 1, 11);
        let bottoms = count_on_plane(&quads, 1, 10);
        assert_eq!(tops, 256);
        assert_eq!(bottoms, 256);

        // Interior water-to-water walls are hidden; only the chunk rim faces the air halo.
        let walls = quads.len() - tops - bottoms;
        assert_eq!(walls, 4 * 16);
    }

    #[test]
    fn y_min_skips_lower_blocks() {
        let mut raw = RawChunk::new();
        raw.set(2, 5, 2, STONE);
        raw.set(2, 50, 2, STONE);
        let quads = scan(&raw, ScanOptions { greedy: true, y_min: 10 });
        assert_eq!(quads.len(), 6);
        assert!(quads.iter().all(|q| q.vertices.iter().all(|v| v.y >= 50)));
    }

    #[test]
    fn floor_of_world_is_exposed() {
        let raw = RawChunk::from_fn(|_, y, _| if y == 0 { STONE } else { AIR });
        let quads = scan(&raw, ScanOptions::default());
        assert_eq!(count_on_plane(&quads, 1, 0), 256);
        assert_eq!(count_on_plane(&quads, 1, 1), 256);
    }
}
