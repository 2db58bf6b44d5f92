//! Per-chunk face accumulation.

use crate::chunk::ChunkCoord;
use crate::core::{BlockId, Quad, Vertex};
use crate::vertex::{VertexHandle, VertexRegistry};

/// Sink for finished quads.
///
/// The column scan and the run mergers only ever push faces, so anything
/// that can take a quad (the accumulator, a counter in tests) can sit
/// behind them.
pub trait AddFace {
    fn add_face(&mut self, block: BlockId, v1: Vertex, v2: Vertex, v3: Vertex, v4: Vertex);

    #[inline]
    fn add_quad(&mut self, quad: &Quad) {
        let [v1, v2, v3, v4] = quad.vertices;
        self.add_face(quad.block, v1, v2, v3, v4);
    }
}

/// A registered face: material plus four vertex handles in winding order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Face {
    pub block: BlockId,
    pub handles: [VertexHandle; 4],
}

/// Faces and vertices collected for the chunk currently being meshed.
///
/// Reused across chunks: [`Faces::reset`] clears it without giving back the
/// allocations.
pub struct Faces {
    coord: ChunkCoord,
    vertices: VertexRegistry,
    faces: Vec<Face>,
}

impl Faces {
    pub fn new() -> Self {
        Self {
            coord: ChunkCoord::ZERO,
            vertices: VertexRegistry::new(),
            faces: Vec::with_capacity(8192),
        }
    }

    /// Start collecting for the chunk at `coord`.
    pub fn reset(&mut self, coord: ChunkCoord) {
        self.coord = coord;
        self.vertices.clear();
        self.faces.clear();
    }

    /// Chunk the faces belong to.
    pub fn coord(&self) -> ChunkCoord {
        self.coord
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    pub fn len(&self) -> usize {
        self.faces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    pub fn vertices(&self) -> &VertexRegistry {
        &self.vertices
    }

    pub fn vertices_mut(&mut self) -> &mut VertexRegistry {
        &mut self.vertices
    }

    /// Distinct materials in the order they first appear.
    pub fn materials(&self) -> Vec<BlockId> {
        let mut seen = [false; 256];
        let mut order = Vec::with_capacity(16);
        for face in &self.faces {
            if !seen[face.block as usize] {
                seen[face.block as usize] = true;
                order.push(face.block);
            }
        }
        order
    }

    /// Faces using `block`, in insertion order.
    pub fn faces_of(&self, block: BlockId) -> impl Iterator<Item = &Face> + '_ {
        self.faces.iter().filter(move |f| f.block == block)
    }
}

impl Default for Faces {
    fn default() -> Self {
        Self::new()
    }
}

impl AddFace for Faces {
    fn add_face(&mut self, block: BlockId, v1: Vertex, v2: Vertex, v3: Vertex, v4: Vertex) {
        let handles = [
            self.vertices.use_vertex(v1),
            self.vertices.use_vertex(v2),
            self.vertices.use_vertex(v3),
            self.vertices.use_vertex(v4),
        ];
        self.faces.push(Face { block, handles });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Direction;
    use glam::IVec3;

    #[test]
    fn add_face_registers_vertices() {
        let mut faces = Faces::new();
        faces.add_quad(&Direction::PosY.quad(IVec3::ZERO, 1));

        assert_eq!(faces.len(), 1);
        for h in faces.faces()[0].handles {
            assert_eq!(faces.vertices().reference_count(h), 1);
        }
    }

    #[test]
    fn identical_faces_stay_distinct() {
        let mut faces = Faces::new();
        let quad = Direction::NegX.quad(IVec3::new(2, 3, 4), 7);
        faces.add_quad(&quad);
        faces.add_quad(&quad);

        assert_eq!(faces.len(), 2);
        assert_eq!(faces.faces()[0], faces.faces()[1]);
        assert_eq!(faces.vertices().reference_count(faces.faces()[0].handles[0]), 2);
    }

    #[test]
    fn materials_in_first_seen_order() {
        let mut faces = Faces::new();
        for block in [4, 2, 4, 9, 2] {
            faces.add_quad(&Direction::PosY.quad(IVec3::ZERO, block));
        }
        assert_eq!(faces.materials(), vec![4, 2, 9]);
        assert_eq!(faces.faces_of(4).count(), 2);
    }

    #[test]
    fn reset_clears_faces_and_vertices() {
        let mut faces = Faces::new();
        faces.add_quad(&Direction::PosY.quad(IVec3::ZERO, 1));
        let handle = faces.faces()[0].handles[0];

        faces.reset(ChunkCoord::new(3, -2));
        assert!(faces.is_empty());
        assert_eq!(faces.coord(), ChunkCoord::new(3, -2));
        assert_eq!(faces.vertices().reference_count(handle), 0);
    }
}
