//! Mesh import: format dispatch and the OBJ reader

mod obj;

use std::path::Path;

pub use obj::{load_obj, parse_obj};

/// Recognized input formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Obj,
    /// Recognized but not convertible; see [`crate::Error::FbxUnsupported`]
    Fbx,
}

impl SourceFormat {
    /// Detect format from file extension (case-insensitive)
    pub fn from_extension(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "obj" => Some(Self::Obj),
            "fbx" => Some(Self::Fbx),
            _ => None,
        }
    }

}
