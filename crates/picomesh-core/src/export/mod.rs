//! Mesh export to the Picotron Lua mesh format

mod lua;

pub use lua::{export_lua, write_lua};
