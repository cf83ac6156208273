//! # Picomesh Core
//!
//! Converts Wavefront OBJ meshes into the Lua table literal consumed by
//! the Picotron 3D Engine's mesh loader.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use picomesh_core::convert::convert_obj_to_lua;
//!
//! let stats = convert_obj_to_lua("model.obj".as_ref(), "model.lua".as_ref())?;
//! println!("Vertices: {}, Faces: {}", stats.vertices, stats.triangles);
//! ```
//!
//! ## Conventions
//!
//! - OBJ indices are **1-based** and pass through to the output unchanged;
//!   the Picotron loader indexes Lua tables from 1.
//! - Faces are fan-triangulated with the winding order inverted, matching
//!   the engine's backface-culling convention.
//! - UVs are emitted in texture-atlas units (16 units per tile) with the
//!   V axis flipped.

pub mod convert;
pub mod export;
pub mod import;
pub mod mesh;

mod error;

pub use error::{Error, Result};
