//! OFF (Object File Format) mesh support.
//!
//! The output side of the pipeline: an indexed triangle mesh as a plain
//! text file. Header line `OFF`, a counts line
//! `<vertices> <faces> <edges>`, then one `x y z` line per vertex and
//! one `3 i0 i1 i2` line per triangle (0-based indices). The edge count
//! is written as 0 and ignored on load, as is customary.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use nalgebra::Point3;

use crate::error::{CrustError, Result};
use crate::extract::SurfaceMesh;

/// Save a mesh to an OFF file.
///
/// Coordinates are written with 10 decimal digits; vertex order and
/// triangle winding round-trip exactly as held in the mesh.
///
/// # Example
///
/// ```no_run
/// use crust::extract::SurfaceMesh;
/// use crust::io::off;
///
/// let mesh = SurfaceMesh::default();
/// off::save(&mesh, "output.off").unwrap();
/// ```
pub fn save<P: AsRef<Path>>(mesh: &SurfaceMesh, path: P) -> Result<()> {
    let file = File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "OFF")?;
    writeln!(writer, "{} {} 0", mesh.vertices.len(), mesh.triangles.len())?;

    for v in &mesh.vertices {
        writeln!(writer, "{:.10} {:.10} {:.10}", v.x, v.y, v.z)?;
    }
    for t in &mesh.triangles {
        writeln!(writer, "3 {} {} {}", t[0], t[1], t[2])?;
    }

    writer.flush()?;
    Ok(())
}

/// Load a mesh from an OFF file.
///
/// Blank lines and `#` comments are skipped. Only triangular faces are
/// accepted; the complex is simplicial, so nothing this tool writes
/// contains larger polygons.
pub fn load<P: AsRef<Path>>(path: P) -> Result<SurfaceMesh> {
    let path = path.as_ref();
    let file = File::open(path)?;
    parse(BufReader::new(file), path)
}

fn parse<R: BufRead>(reader: R, path: &Path) -> Result<SurfaceMesh> {
    let err = |message: String| CrustError::LoadError {
        path: path.to_path_buf(),
        message,
    };

    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        lines.push(trimmed.to_string());
    }
    let mut it = lines.into_iter();

    match it.next() {
        Some(header) if header == "OFF" => {}
        _ => return Err(err("missing OFF header".to_string())),
    }

    let counts = it.next().ok_or_else(|| err("missing element counts".to_string()))?;
    let counts: Vec<usize> = counts
        .split_whitespace()
        .map(|t| t.parse().map_err(|_| err(format!("bad count '{}'", t))))
        .collect::<Result<_>>()?;
    if counts.len() != 3 {
        return Err(err("expected three element counts".to_string()));
    }
    let (num_vertices, num_faces) = (counts[0], counts[1]);

    let mut mesh = SurfaceMesh::default();

    for k in 0..num_vertices {
        let line = it
            .next()
            .ok_or_else(|| err(format!("expected {} vertices, found {}", num_vertices, k)))?;
        let coords: Vec<f64> = line
            .split_whitespace()
            .map(|t| t.parse().map_err(|_| err(format!("bad coordinate '{}'", t))))
            .collect::<Result<_>>()?;
        if coords.len() != 3 {
            return Err(err(format!("vertex {} does not have three coordinates", k)));
        }
        mesh.vertices.push(Point3::new(coords[0], coords[1], coords[2]));
    }

    for k in 0..num_faces {
        let line = it
            .next()
            .ok_or_else(|| err(format!("expected {} faces, found {}", num_faces, k)))?;
        let fields: Vec<usize> = line
            .split_whitespace()
            .map(|t| t.parse().map_err(|_| err(format!("bad face index '{}'", t))))
            .collect::<Result<_>>()?;
        if fields.len() != 4 || fields[0] != 3 {
            return Err(err(format!("face {} is not a triangle", k)));
        }
        let triangle = [fields[1], fields[2], fields[3]];
        for &i in &triangle {
            if i >= num_vertices {
                return Err(err(format!("face {} references vertex {} of {}", k, i, num_vertices)));
            }
        }
        mesh.triangles.push(triangle);
    }

    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn parse_str(text: &str) -> Result<SurfaceMesh> {
        parse(Cursor::new(text), Path::new("test.off"))
    }

    fn sample_mesh() -> SurfaceMesh {
        SurfaceMesh {
            vertices: vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(0.5, 1.0, 0.25),
            ],
            triangles: vec![[0, 1, 2]],
        }
    }

    #[test]
    fn test_roundtrip() {
        let mesh = sample_mesh();
        let path = std::env::temp_dir().join("crust_off_roundtrip.off");
        save(&mesh, &path).unwrap();
        let loaded = load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(loaded.num_vertices(), mesh.num_vertices());
        assert_eq!(loaded.triangles, mesh.triangles);
        for (a, b) in mesh.vertices.iter().zip(loaded.vertices.iter()) {
            assert!((a - b).norm() < 1e-9);
        }
    }

    #[test]
    fn test_empty_mesh_roundtrip() {
        let path = std::env::temp_dir().join("crust_off_empty.off");
        save(&SurfaceMesh::default(), &path).unwrap();
        let loaded = load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert!(loaded.is_empty());
        assert_eq!(loaded.num_vertices(), 0);
    }

    #[test]
    fn test_comments_and_blank_lines() {
        let mesh = parse_str(
            "# a comment\nOFF\n\n3 1 0\n0 0 0\n1 0 0\n0 1 0\n# faces\n3 0 1 2\n",
        )
        .unwrap();
        assert_eq!(mesh.num_vertices(), 3);
        assert_eq!(mesh.num_triangles(), 1);
    }

    #[test]
    fn test_missing_header() {
        assert!(matches!(
            parse_str("3 1 0\n0 0 0\n1 0 0\n0 1 0\n3 0 1 2\n"),
            Err(CrustError::LoadError { .. })
        ));
    }

    #[test]
    fn test_truncated_vertices() {
        assert!(parse_str("OFF\n3 1 0\n0 0 0\n1 0 0\n").is_err());
    }

    #[test]
    fn test_non_triangle_face() {
        assert!(parse_str("OFF\n4 1 0\n0 0 0\n1 0 0\n0 1 0\n0 0 1\n4 0 1 2 3\n").is_err());
    }

    #[test]
    fn test_face_index_out_of_range() {
        assert!(parse_str("OFF\n3 1 0\n0 0 0\n1 0 0\n0 1 0\n3 0 1 7\n").is_err());
    }
}
