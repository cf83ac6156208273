//! In-memory mesh model accumulated from an OBJ file
//!
//! All three sequences are append-only and built in a single parsing
//! pass. Indices follow the OBJ convention: 1-based, resolving into the
//! sequences as they stood when the face line was read.

use glam::{Vec2, Vec3};

/// A triangle produced by fan triangulation
///
/// Vertex and UV indices are 1-based OBJ indices, carried through to the
/// Lua output unchanged. `uvs` is `None` when the source face carried no
/// texture coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Triangle {
    pub verts: [u32; 3],
    pub uvs: Option<[u32; 3]>,
}

/// Geometry accumulated from a single OBJ file
#[derive(Debug, Clone, Default)]
pub struct MeshData {
    pub positions: Vec<Vec3>,
    pub uvs: Vec<Vec2>,
    pub triangles: Vec<Triangle>,
}

impl MeshData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get number of vertex positions
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Get number of triangles
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Look up a UV coordinate by its 1-based OBJ index
    pub fn uv(&self, index: u32) -> Option<Vec2> {
        if index == 0 {
            return None;
        }
        self.uvs.get(index as usize - 1).copied()
    }
}
