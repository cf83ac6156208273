//! End-to-end OBJ-to-Lua conversion

use std::path::{Path, PathBuf};

use crate::export::export_lua;
use crate::import::load_obj;
use crate::Result;

/// Geometry counts from a completed conversion, for status output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertStats {
    pub vertices: usize,
    pub triangles: usize,
}

/// Default output path: the input path with a `.lua` extension
pub fn default_output_path(input: &Path) -> PathBuf {
    input.with_extension("lua")
}

/// Convert an OBJ file to a Picotron Lua mesh file
///
/// Reads `input` to completion, then writes `output` in one pass.
/// The in-memory mesh is discarded afterwards; nothing persists across
/// invocations.
pub fn convert_obj_to_lua(input: &Path, output: &Path) -> Result<ConvertStats> {
    let mesh = load_obj(input)?;

    let source_name = input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    export_lua(&mesh, output, &source_name)?;

    tracing::info!("Converted {} -> {}", input.display(), output.display());

    Ok(ConvertStats {
        vertices: mesh.vertex_count(),
        triangles: mesh.triangle_count(),
    })
}
