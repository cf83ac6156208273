//! Error types for Picomesh

use thiserror::Error;

/// Result type alias using Picomesh's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during mesh conversion
#[derive(Error, Debug)]
pub enum Error {
    /// A malformed OBJ line (bad float, bad index, empty face)
    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    /// Serialization failed (e.g. a UV index outside the UV table)
    #[error("Export failed: {0}")]
    Export(String),

    /// FBX input is recognized but conversion is not implemented
    #[error(
        "FBX conversion is not supported; export your model as OBJ instead \
         (Blender, Maya, 3DS Max, and most 3D software can export OBJ)"
    )]
    FbxUnsupported,

    /// Input extension is neither .obj nor .fbx
    #[error("Unsupported file format: {0} (supported: .obj, .fbx)")]
    UnsupportedFormat(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Shorthand for a parse error at a 1-based line number.
    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fbx_guidance_text() {
        let msg = Error::FbxUnsupported.to_string();
        assert!(msg.contains("FBX conversion is not supported"));
        assert!(msg.contains("export your model as OBJ"));
    }

    #[test]
    fn test_unsupported_format_names_extension() {
        let msg = Error::UnsupportedFormat(".gltf".into()).to_string();
        assert!(msg.contains(".gltf"));
        assert!(msg.contains(".obj"));
    }

    #[test]
    fn test_parse_error_carries_line_number() {
        let msg = Error::parse(7, "invalid float 'x' in 'v' directive").to_string();
        assert!(msg.contains("line 7"));
        assert!(msg.contains("invalid float"));
    }
}
