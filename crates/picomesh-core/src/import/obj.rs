//! Wavefront OBJ import
//!
//! Line-oriented, single-pass reader for the subset of OBJ the Picotron
//! pipeline needs: vertex positions (`v`), texture coordinates (`vt`),
//! and faces (`f`). Unrecognized directives (comments, objects, groups,
//! materials, normals) are skipped without error; malformed geometry
//! lines are fatal.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use glam::{Vec2, Vec3};

use crate::mesh::{MeshData, Triangle};
use crate::{Error, Result};

/// Load and parse an OBJ file from disk
pub fn load_obj(path: &Path) -> Result<MeshData> {
    let file = File::open(path)?;
    let mesh = parse_obj(BufReader::new(file))?;
    tracing::debug!(
        "Parsed {}: {} vertices, {} triangles",
        path.display(),
        mesh.vertex_count(),
        mesh.triangle_count()
    );
    Ok(mesh)
}

/// Parse OBJ text from a buffered reader
///
/// Faces are fan-triangulated as they are read, with the winding order
/// inverted relative to the source polygon (the Picotron renderer culls
/// the opposite face). Triangulation is mechanical: convexity and
/// planarity are assumed, not checked.
pub fn parse_obj<R: BufRead>(reader: R) -> Result<MeshData> {
    let mut mesh = MeshData::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let number = index + 1;
        let mut tokens = line.split_whitespace();
        let Some(keyword) = tokens.next() else {
            continue;
        };

        match keyword {
            "v" => {
                let x = parse_float(tokens.next(), "v", number)?;
                let y = parse_float(tokens.next(), "v", number)?;
                let z = parse_float(tokens.next(), "v", number)?;
                mesh.positions.push(Vec3::new(x, y, z));
            }
            "vt" => {
                let u = parse_float(tokens.next(), "vt", number)?;
                let v = parse_float(tokens.next(), "vt", number)?;
                mesh.uvs.push(Vec2::new(u, v));
            }
            "f" => {
                let face = tokens
                    .map(|token| parse_face_vertex(token, number))
                    .collect::<Result<Vec<_>>>()?;
                if face.is_empty() {
                    return Err(Error::parse(number, "face without vertex descriptors"));
                }
                triangulate(&face, &mut mesh.triangles);
            }
            // comment, object, group, material, normal, ...
            _ => {}
        }
    }

    Ok(mesh)
}

/// One `f`-line descriptor: `v`, `v/vt`, or `v/vt/vn`
struct FaceVertex {
    position: u32,
    uv: Option<u32>,
}

fn parse_face_vertex(token: &str, line: usize) -> Result<FaceVertex> {
    let mut fields = token.split('/');
    let position = match fields.next() {
        Some(field) if !field.is_empty() => parse_index(field, line)?,
        _ => {
            return Err(Error::parse(
                line,
                format!("face descriptor '{token}' has no vertex index"),
            ));
        }
    };

    // An empty middle field (`v//vn`) means this vertex has no UV
    let uv = match fields.next() {
        Some("") | None => None,
        Some(field) => Some(parse_index(field, line)?),
    };

    // Normal index: parsed for validity, never stored
    if let Some(field) = fields.next() {
        if !field.is_empty() {
            parse_index(field, line)?;
        }
    }

    Ok(FaceVertex { position, uv })
}

/// Fan-triangulate a face with the winding order inverted
///
/// Emits `(V[0], V[i+2], V[i+1])` instead of the natural fan order.
/// UV indices carry through (under the same permutation) only when every
/// descriptor on the face supplied one; a face mixing textured and
/// untextured descriptors is treated as untextured.
fn triangulate(face: &[FaceVertex], triangles: &mut Vec<Triangle>) {
    let textured = face.iter().all(|fv| fv.uv.is_some());

    for i in 0..face.len().saturating_sub(2) {
        let (a, b, c) = (&face[0], &face[i + 2], &face[i + 1]);
        let uvs = match (a.uv, b.uv, c.uv) {
            (Some(ua), Some(ub), Some(uc)) if textured => Some([ua, ub, uc]),
            _ => None,
        };
        triangles.push(Triangle {
            verts: [a.position, b.position, c.position],
            uvs,
        });
    }
}

fn parse_float(token: Option<&str>, keyword: &str, line: usize) -> Result<f32> {
    let token = token.ok_or_else(|| {
        Error::parse(line, format!("'{keyword}' directive is missing a coordinate"))
    })?;
    token.parse().map_err(|_| {
        Error::parse(
            line,
            format!("invalid float '{token}' in '{keyword}' directive"),
        )
    })
}

fn parse_index(field: &str, line: usize) -> Result<u32> {
    field
        .parse()
        .map_err(|_| Error::parse(line, format!("invalid index '{field}'")))
}
