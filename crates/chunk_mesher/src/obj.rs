//! Wavefront OBJ output for one chunk.
//!
//! Each chunk writes its `v` block first, then one `usemtl` group per
//! material. Face indices are negative offsets from the end of that chunk's
//! `v` block, so chunks can be appended one after another without knowing
//! how many vertices came before.

use std::io::{self, Write};

use crate::chunk::ChunkStats;
use crate::core::BlockId;
use crate::faces::Faces;

/// Writes the material-selection record for a block.
pub trait MaterialWriter {
    fn write_material(&self, out: &mut dyn Write, block: BlockId) -> io::Result<()>;
}

/// [`MaterialWriter`] producing `usemtl <prefix><id>`.
#[derive(Clone, Debug)]
pub struct UsemtlWriter {
    prefix: String,
}

impl UsemtlWriter {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self { prefix: prefix.into() }
    }

    /// Material name used for `block`.
    pub fn material_name(&self, block: BlockId) -> String {
        format!("{}{}", self.prefix, block)
    }
}

impl Default for UsemtlWriter {
    fn default() -> Self {
        Self::new("block_")
    }
}

impl MaterialWriter for UsemtlWriter {
    fn write_material(&self, out: &mut dyn Write, block: BlockId) -> io::Result<()> {
        writeln!(out, "usemtl {}{}", self.prefix, block)
    }
}

/// Write the file preamble, optionally referencing a material library.
pub fn write_header<W: Write + ?Sized>(out: &mut W, mtllib: Option<&str>) -> io::Result<()> {
    if let Some(lib) = mtllib {
        writeln!(out, "mtllib {lib}")?;
    }
    Ok(())
}

/// Number the vertices of `faces` and write the chunk's geometry.
///
/// Must be called once per chunk, after the scan.
pub fn write_chunk<W: Write, M: MaterialWriter + ?Sized>(
    faces: &mut Faces,
    out: &mut W,
    materials: &M,
) -> io::Result<ChunkStats> {
    let coord = faces.coord();
    faces.vertices_mut().number();
    let vertex_count = faces.vertices().write_positions(out, coord.x, coord.z)?;
    let end = vertex_count as i64 + 1;

    let groups = faces.materials();
    let vertices = faces.vertices();
    let mut face_count = 0;
    for &block in &groups {
        materials.write_material(out, block)?;
        for face in faces.faces_of(block) {
            let [a, b, c, d] = face.handles.map(|h| {
                let number = vertices.number_of(h).unwrap_or_default();
                debug_assert!(number != 0, "face references an unnumbered vertex");
                number as i64 - end
            });
            writeln!(out, "f {a} {b} {c} {d}")?;
            face_count += 1;
        }
    }

    Ok(ChunkStats {
        coord,
        vertices: vertex_count,
        faces: face_count,
        materials: groups.len(),
    })
}
