//! Picomesh CLI - convert OBJ meshes to Picotron Lua tables

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use picomesh_core::Error;
use picomesh_core::convert::{convert_obj_to_lua, default_output_path};
use picomesh_core::import::SourceFormat;

#[derive(Parser)]
#[command(name = "picomesh")]
#[command(about = "Convert OBJ mesh files to Picotron 3D Engine Lua tables", long_about = None)]
#[command(version)]
struct Cli {
    /// Input mesh file (.obj; .fbx is recognized but not supported)
    input: PathBuf,

    /// Output Lua file (defaults to the input path with a .lua extension)
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    // clap exits with status 2 on usage errors; this tool exits 1.
    // Help and version output are not errors.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            let code = match err.kind() {
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            std::process::exit(code);
        }
    };

    if !cli.input.exists() {
        anyhow::bail!("File not found: {}", cli.input.display());
    }

    match SourceFormat::from_extension(&cli.input) {
        Some(SourceFormat::Obj) => {
            let output = cli
                .output
                .unwrap_or_else(|| default_output_path(&cli.input));
            let stats = convert_obj_to_lua(&cli.input, &output)?;
            println!(
                "Converted {} -> {}",
                cli.input.display(),
                output.display()
            );
            println!("Vertices: {}, Faces: {}", stats.vertices, stats.triangles);
            Ok(())
        }
        Some(SourceFormat::Fbx) => Err(Error::FbxUnsupported.into()),
        None => {
            let extension = cli
                .input
                .extension()
                .map(|ext| format!(".{}", ext.to_string_lossy()))
                .unwrap_or_default();
            Err(Error::UnsupportedFormat(extension).into())
        }
    }
}
