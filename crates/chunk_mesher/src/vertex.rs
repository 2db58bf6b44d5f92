//! Vertex deduplication and numbering for one chunk.
//!
//! Every corner of the 17 × 129 × 17 lattice has a slot in a flat buffer.
//! Faces bump a reference count on each corner they use; [`VertexRegistry::number`]
//! then hands out 1-based output numbers to the used corners in buffer order,
//! which is also the order positions are written in.
//!
//! There is no release operation: counts only grow until the next `clear`.

use std::io::{self, Write};

use crate::core::{
    Vertex, CHUNK_WIDTH, UNIT_SCALE, VERTEX_HEIGHT, VERTEX_VOLUME, VERTEX_WIDTH, Y_OFFSET,
};

/// Number stored for corners no face referenced.
const UNUSED: u32 = 0;

/// Stable handle to a lattice corner (its linear index).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexHandle(usize);

impl VertexHandle {
    /// Linear index into the lattice.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Linear index of a lattice corner: x outermost, then z, y innermost.
#[inline]
pub const fn vertex_index(x: usize, y: usize, z: usize) -> usize {
    y + z * VERTEX_HEIGHT + x * VERTEX_HEIGHT * VERTEX_WIDTH
}

/// Inverse of [`vertex_index`], returns `(x, y, z)`.
#[inline]
pub const fn vertex_coords(index: usize) -> (usize, usize, usize) {
    let column = index / VERTEX_HEIGHT;
    (column / VERTEX_WIDTH, index % VERTEX_HEIGHT, column % VERTEX_WIDTH)
}

/// Reference counts and output numbers for one chunk's vertex lattice.
#[derive(Clone)]
pub struct VertexRegistry {
    refs: Vec<u32>,
    numbers: Vec<u32>,
    numbered: usize,
}

impl VertexRegistry {
    pub fn new() -> Self {
        Self {
            refs: vec![0; VERTEX_VOLUME],
            numbers: vec![UNUSED; VERTEX_VOLUME],
            numbered: 0,
        }
    }

    /// Reference a corner and return its handle.
    ///
    /// # Panics
    /// Debug panics if the corner lies outside the lattice.
    #[inline]
    pub fn use_vertex(&mut self, v: Vertex) -> VertexHandle {
        debug_assert!(
            (0..=CHUNK_WIDTH as i32).contains(&v.x)
                && (0..VERTEX_HEIGHT as i32).contains(&v.y)
                && (0..=CHUNK_WIDTH as i32).contains(&v.z),
            "Vertex {v:?} outside lattice"
        );
        let i = vertex_index(v.x as usize, v.y as usize, v.z as usize);
        self.refs[i] += 1;
        VertexHandle(i)
    }

    /// How many faces reference the corner.
    #[inline]
    pub fn reference_count(&self, handle: VertexHandle) -> u32 {
        self.refs[handle.0]
    }

    /// Reset for the next chunk.
    pub fn clear(&mut self) {
        self.refs.fill(0);
        self.numbers.fill(UNUSED);
        self.numbered = 0;
    }

    /// Assign 1-based numbers to every referenced corner in lattice order.
    ///
    /// Returns how many corners were numbered.
    pub fn number(&mut self) -> usize {
        let mut count = 0u32;
        for (number, &refs) in self.numbers.iter_mut().zip(&self.refs) {
            *number = if refs != 0 {
                count += 1;
                count
            } else {
                UNUSED
            };
        }
        self.numbered = count as usize;
        self.numbered
    }

    /// Output number of a corner, `None` if it was not referenced.
    ///
    /// Only meaningful after [`number`](Self::number).
    #[inline]
    pub fn number_of(&self, handle: VertexHandle) -> Option<u32> {
        match self.numbers[handle.0] {
            UNUSED => None,
            n => Some(n),
        }
    }

    /// Corners numbered by the last call to [`number`](Self::number).
    pub fn numbered_count(&self) -> usize {
        self.numbered
    }

    /// Write one `v x y z` record per numbered corner, in numbering order.
    ///
    /// Local corners are shifted by the chunk's block origin, lowered by
    /// [`Y_OFFSET`] and scaled by [`UNIT_SCALE`]. Returns the record count.
    pub fn write_positions<W: Write + ?Sized>(
        &self,
        out: &mut W,
        chunk_x: i32,
        chunk_z: i32,
    ) -> io::Result<usize> {
        let base_x = chunk_x as i64 * CHUNK_WIDTH as i64;
        let base_z = chunk_z as i64 * CHUNK_WIDTH as i64;

        let mut written = 0;
        for (i, &number) in self.numbers.iter().enumerate() {
            if number == UNUSED {
                continue;
            }
            let (x, y, z) = vertex_coords(i);
            let wx = (x as i64 + base_x) as f64 * UNIT_SCALE;
            let wy = (y as i64 - Y_OFFSET as i64) as f64 * UNIT_SCALE;
            let wz = (z as i64 + base_z) as f64 * UNIT_SCALE;
            writeln!(out, "v {wx:.2} {wy:.2} {wz:.2}")?;
            written += 1;
        }
        Ok(written)
    }
}

impl Default for VertexRegistry {
    fn default() -> Self {
        Self::new()
    }
}
