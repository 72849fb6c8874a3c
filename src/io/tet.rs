//! TET classified-complex interchange format.
//!
//! The input seam of the pipeline: whatever computes the triangulation
//! and the alpha classification dumps its result as a TET file, and this
//! tool rebuilds the complex from it. Only finite cells are stored:
//! adjacency and the unbounded closure are rederived by
//! [`ComplexBuilder`] on load, so producers need not export neighbor
//! links.
//!
//! Header line `TET`, a counts line `<vertices> <cells>`, then one
//! `x y z` line per vertex and one cell line per tetrahedron:
//!
//! ```text
//! v0 v1 v2 v3 c0 c1 c2 c3
//! ```
//!
//! with four 0-based vertex indices followed by four one-letter facet
//! classifications (`E`, `R` or `I`; `ci` classifies the facet opposite
//! `vi`). Blank lines and `#` comments are skipped.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use nalgebra::Point3;

use crate::complex::{ComplexBuilder, FacetClass, TetComplex, VertexId};
use crate::error::{CrustError, Result};

/// Load a classified complex from a TET file.
///
/// # Example
///
/// ```no_run
/// use crust::io::tet;
///
/// let complex = tet::load("shape.tet").unwrap();
/// ```
pub fn load<P: AsRef<Path>>(path: P) -> Result<TetComplex> {
    let path = path.as_ref();
    let file = File::open(path)?;
    parse(BufReader::new(file), path)
}

fn parse<R: BufRead>(reader: R, path: &Path) -> Result<TetComplex> {
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
        Some(header) if header == "TET" => {}
        _ => return Err(err("missing TET header".to_string())),
    }

    let counts = it.next().ok_or_else(|| err("missing element counts".to_string()))?;
    let counts: Vec<usize> = counts
        .split_whitespace()
        .map(|t| t.parse().map_err(|_| err(format!("bad count '{}'", t))))
        .collect::<Result<_>>()?;
    if counts.len() != 2 {
        return Err(err("expected vertex and cell counts".to_string()));
    }
    let (num_vertices, num_cells) = (counts[0], counts[1]);

    let mut builder = ComplexBuilder::new();

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
        builder.add_vertex(Point3::new(coords[0], coords[1], coords[2]));
    }

    for k in 0..num_cells {
        let line = it
            .next()
            .ok_or_else(|| err(format!("expected {} cells, found {}", num_cells, k)))?;
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != 8 {
            return Err(err(format!("cell {} does not have 4 vertices and 4 classes", k)));
        }

        let mut vertices = [VertexId::invalid(); 4];
        for (slot, t) in vertices.iter_mut().zip(&fields[..4]) {
            let index: usize = t
                .parse()
                .map_err(|_| err(format!("bad vertex index '{}'", t)))?;
            *slot = VertexId::new(index);
        }

        let mut classes = [FacetClass::Exterior; 4];
        for (slot, t) in classes.iter_mut().zip(&fields[4..]) {
            let mut chars = t.chars();
            *slot = match (chars.next().and_then(FacetClass::from_code), chars.next()) {
                (Some(class), None) => class,
                _ => return Err(err(format!("bad facet class '{}'", t))),
            };
        }

        builder.add_cell(vertices, classes);
    }

    builder.build()
}

/// Save a classified complex to a TET file.
///
/// Only finite cells are written; the unbounded closure is rebuilt on
/// load.
pub fn save<P: AsRef<Path>>(complex: &TetComplex, path: P) -> Result<()> {
    let file = File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);

    let finite: Vec<_> = complex.cells().filter(|c| !c.is_unbounded()).collect();

    writeln!(writer, "TET")?;
    writeln!(writer, "{} {}", complex.num_vertices(), finite.len())?;

    for p in complex.positions() {
        writeln!(writer, "{:.10} {:.10} {:.10}", p.x, p.y, p.z)?;
    }
    for cell in finite {
        for v in &cell.vertices {
            write!(writer, "{} ", v.index())?;
        }
        let codes: Vec<String> = cell.classes.iter().map(|c| c.code().to_string()).collect();
        writeln!(writer, "{}", codes.join(" "))?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::complex::AlphaComplex;
    use std::io::Cursor;

    const SINGLE_TET: &str = "\
TET
4 1
0 0 0
1 0 0
0 1 0
0 0 1
0 1 2 3 R R R R
";

    fn parse_str(text: &str) -> Result<TetComplex> {
        parse(Cursor::new(text), Path::new("test.tet"))
    }

    #[test]
    fn test_parse_single_tet() {
        let complex = parse_str(SINGLE_TET).unwrap();
        assert_eq!(complex.num_vertices(), 4);
        assert_eq!(complex.num_cells(), 5); // closure adds 4 unbounded cells
        assert_eq!(complex.regular_facets().len(), 4);
    }

    #[test]
    fn test_roundtrip() {
        let complex = parse_str(SINGLE_TET).unwrap();
        let path = std::env::temp_dir().join("crust_tet_roundtrip.tet");
        save(&complex, &path).unwrap();
        let loaded = load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(loaded.num_vertices(), complex.num_vertices());
        assert_eq!(loaded.num_cells(), complex.num_cells());
        for (a, b) in complex.cells().zip(loaded.cells()) {
            assert_eq!(a.vertices, b.vertices);
            assert_eq!(a.classes, b.classes);
        }
    }

    #[test]
    fn test_missing_header() {
        assert!(matches!(
            parse_str("4 1\n0 0 0\n1 0 0\n0 1 0\n0 0 1\n0 1 2 3 R R R R\n"),
            Err(CrustError::LoadError { .. })
        ));
    }

    #[test]
    fn test_bad_class_code() {
        let text = SINGLE_TET.replace("R R R R", "R R R Q");
        assert!(matches!(
            parse_str(&text),
            Err(CrustError::LoadError { .. })
        ));
    }

    #[test]
    fn test_vertex_out_of_range() {
        let text = SINGLE_TET.replace("0 1 2 3 R", "0 1 2 9 R");
        assert!(matches!(
            parse_str(&text),
            Err(CrustError::InvalidVertexIndex { cell: 0, vertex: 9 })
        ));
    }

    #[test]
    fn test_truncated_cells() {
        assert!(parse_str("TET\n4 2\n0 0 0\n1 0 0\n0 1 0\n0 0 1\n0 1 2 3 R R R R\n").is_err());
    }
}
