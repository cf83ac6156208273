//! Picotron Lua mesh export
//!
//! Serializes a [`MeshData`] into the Lua table literal loaded by the
//! Picotron 3D Engine: a `mesh_verts` table of `vec(x, y, z)` calls, a
//! `mesh_faces` table of fixed-arity tuples, and a returned table with
//! `verts`, `faces`, and a constant `name` field. Vertex and UV indices
//! stay 1-based; Lua tables index from 1.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::mesh::MeshData;
use crate::{Error, Result};

/// Picotron texture-atlas tile scale: UVs are emitted in atlas units,
/// 16 units per tile. Not user-configurable.
const ATLAS_SCALE: f32 = 16.0;

/// Export a mesh to a Lua file
///
/// `source_name` is the input file's basename, recorded in the header
/// comment. Creates or overwrites `path`.
pub fn export_lua(mesh: &MeshData, path: &Path, source_name: &str) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_lua(mesh, source_name, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Write a mesh as a Lua table literal to the given writer
///
/// Entry lines are indented with a single tab. Vertex coordinates carry
/// 4 decimal digits, UV coordinates 2. Each face tuple is three vertex
/// indices, a constant `0` material slot, and three UV `vec`s.
pub fn write_lua<W: Write>(mesh: &MeshData, source_name: &str, writer: &mut W) -> Result<()> {
    writeln!(writer, "-- Auto-generated from: {source_name}")?;
    writeln!(writer, "-- Picotron 3D Engine mesh format")?;
    writeln!(writer)?;

    writeln!(writer, "local mesh_verts = {{")?;
    for v in &mesh.positions {
        writeln!(writer, "\tvec({:.4}, {:.4}, {:.4}),", v.x, v.y, v.z)?;
    }
    writeln!(writer, "}}")?;
    writeln!(writer)?;

    writeln!(writer, "local mesh_faces = {{")?;
    for tri in &mesh.triangles {
        let [i0, i1, i2] = tri.verts;
        write!(writer, "\t{{{i0}, {i1}, {i2}, 0, ")?;
        match tri.uvs {
            Some(indices) if !mesh.uvs.is_empty() => {
                for (slot, &index) in indices.iter().enumerate() {
                    let uv = mesh.uv(index).ok_or_else(|| {
                        Error::Export(format!(
                            "UV index {index} out of range (1..={})",
                            mesh.uvs.len()
                        ))
                    })?;
                    // Atlas units with the V axis flipped
                    let u = uv.x * ATLAS_SCALE;
                    let v = (1.0 - uv.y) * ATLAS_SCALE;
                    if slot > 0 {
                        write!(writer, ", ")?;
                    }
                    write!(writer, "vec({u:.2},{v:.2})")?;
                }
                writeln!(writer, "}},")?;
            }
            // Untextured: default unit-scale mapping over one atlas tile
            _ => writeln!(writer, "vec(0,0), vec(16,0), vec(16,16)}},")?,
        }
    }
    writeln!(writer, "}}")?;
    writeln!(writer)?;

    writeln!(writer, "return {{")?;
    writeln!(writer, "\tverts = mesh_verts,")?;
    writeln!(writer, "\tfaces = mesh_faces,")?;
    writeln!(writer, "\tname = \"mesh\"")?;
    writeln!(writer, "}}")?;

    Ok(())
}
