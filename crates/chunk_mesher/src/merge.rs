//! Run-length merging of wall faces along a column.
//!
//! While a column is scanned bottom to top, each of the four wall directions
//! keeps one pending quad. A new boundary quad of the same material stretches
//! the pending one upward. Anything else pushes it to the face sink.

use crate::core::Quad;
use crate::faces::AddFace;

/// Pending-run state for one wall direction of one column.
#[derive(Clone, Copy, Debug, Default)]
pub struct RunMerger {
    pending: Option<Quad>,
    disabled: bool,
}

impl RunMerger {
    /// `greedy == false` turns every update into an immediate emit.
    pub const fn new(greedy: bool) -> Self {
        Self { pending: None, disabled: !greedy }
    }

    /// Feed the boundary quad for the next block up the column.
    ///
    /// `extend_high` picks which edge grows when materials match
    /// (see [`Quad::extend_to`]).
    pub fn update<F: AddFace + ?Sized>(&mut self, quad: Quad, extend_high: bool, faces: &mut F) {
        if self.disabled {
            faces.add_quad(&quad);
            return;
        }

        let Some(run) = self.pending.as_mut() else {
            self.pending = Some(quad);
            return;
        };

        if run.block == quad.block {
            run.extend_to(&quad, extend_high);
        } else {
            let finished = std::mem::replace(run, quad);
            faces.add_quad(&finished);
        }
    }

    /// Emit the pending quad, if any.
    pub fn flush<F: AddFace + ?Sized>(&mut self, faces: &mut F) {
        if let Some(run) = self.pending.take() {
            faces.add_quad(&run);
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending(&self) -> Option<&Quad> {
        self.pending.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BlockId, Direction, Vertex};
    use glam::IVec3;

    #[derive(Default)]
    struct Collect(Vec<Quad>);

    impl AddFace for Collect {
        fn add_face(&mut self, block: BlockId, v1: Vertex, v2: Vertex, v3: Vertex, v4: Vertex) {
            self.0.push(Quad { block, vertices: [v1, v2, v3, v4] });
        }
    }

    fn feed(dir: Direction, blocks: &[BlockId], greedy: bool) -> Vec<Quad> {
        let mut out = Collect::default();
        let mut run = RunMerger::new(greedy);
        for (y, &block) in blocks.iter().enumerate() {
            let quad = dir.quad(IVec3::new(0, y as i32, 0), block);
            run.update(quad, dir.extends_high(), &mut out);
        }
        run.flush(&mut out);
        out.0
    }

    #[test]
    fn same_material_column_merges_to_one() {
        for dir in Direction::WALLS {
            let quads = feed(dir, &[3; 5], true);
            assert_eq!(quads.len(), 1, "{dir:?}");

            let ys: Vec<i32> = quads[0].vertices.iter().map(|v| v.y).collect();
            assert_eq!(ys.iter().min(), Some(&0));
            assert_eq!(ys.iter().max(), Some(&5));
        }
    }

    #[test]
    fn merged_quad_spans_first_and_last_block() {
        let dir = Direction::PosX;
        let quads = feed(dir, &[3, 3], true);
        let first = dir.quad(IVec3::new(0, 0, 0), 3);
        let last = dir.quad(IVec3::new(0, 1, 0), 3);
        assert_eq!(
            quads[0].vertices,
            [first.vertices[0], last.vertices[1], last.vertices[2], first.vertices[3]]
        );
    }

    #[test]
    fn disabled_emits_every_quad() {
        let quads = feed(Direction::NegZ, &[3; 5], false);
        assert_eq!(quads.len(), 5);
    }

    #[test]
    fn material_change_splits_run() {
        let quads = feed(Direction::NegX, &[3, 3, 4, 4, 4, 3], true);
        let blocks: Vec<BlockId> = quads.iter().map(|q| q.block).collect();
        assert_eq!(blocks, vec![3, 4, 3]);
    }

    #[test]
    fn disabled_keeps_no_state() {
        let mut out = Collect::default();
        let mut run = RunMerger::new(false);
        run.update(Direction::PosZ.quad(IVec3::ZERO, 1), true, &mut out);
        assert!(!run.is_pending());
        run.flush(&mut out);
        assert_eq!(out.0.len(), 1);
    }

    #[test]
    fn flush_is_idempotent() {
        let mut out = Collect::default();
        let mut run = RunMerger::new(true);
        run.update(Direction::PosZ.quad(IVec3::ZERO, 1), true, &mut out);
        assert!(out.0.is_empty());
        run.flush(&mut out);
        run.flush(&mut out);
        assert_eq!(out.0.len(), 1);
        assert!(run.pending().is_none());
    }
}
