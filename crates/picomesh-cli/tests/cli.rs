//! CLI-level scenarios: exit codes and user-facing messages.

use std::fs;
use std::path::PathBuf;
use std::process::Command;

fn picomesh() -> Command {
    Command::new(env!("CARGO_BIN_EXE_picomesh"))
}

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("picomesh_cli_{name}"))
}

#[test]
fn test_fbx_input_always_fails_with_guidance() {
    let input = temp_path("building.fbx");
    fs::write(&input, "any content at all").unwrap();

    let output = picomesh().arg(&input).output().unwrap();
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains("FBX conversion is not supported"));
    assert!(stderr.contains("export your model as OBJ"));

    let _ = fs::remove_file(&input);
}

#[test]
fn test_unsupported_extension_exits_one() {
    let input = temp_path("scene.gltf");
    fs::write(&input, "{}").unwrap();

    let output = picomesh().arg(&input).output().unwrap();
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains("Unsupported file format: .gltf"));

    let _ = fs::remove_file(&input);
}

#[test]
fn test_missing_argument_exits_one_with_usage() {
    let output = picomesh().output().unwrap();
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains("Usage"));
}

#[test]
fn test_help_exits_zero() {
    let output = picomesh().arg("--help").output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout.contains("Usage"));
}

#[test]
fn test_nonexistent_input_exits_one() {
    let input = temp_path("no_such_model.obj");

    let output = picomesh().arg(&input).output().unwrap();
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains("File not found"));
}

#[test]
fn test_obj_conversion_reports_counts_and_derives_output() {
    let input = temp_path("tri.obj");
    let derived = temp_path("tri.lua");
    fs::write(&input, "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n").unwrap();

    let output = picomesh().arg(&input).output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout.contains("Converted"));
    assert!(stdout.contains("Vertices: 3, Faces: 1"));
    assert!(derived.exists());

    let text = fs::read_to_string(&derived).unwrap();
    assert!(text.contains("\t{1, 3, 2, 0, vec(0,0), vec(16,0), vec(16,16)},\n"));

    let _ = fs::remove_file(&input);
    let _ = fs::remove_file(&derived);
}
