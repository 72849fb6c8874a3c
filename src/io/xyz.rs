//! XYZ point-cloud support.
//!
//! One `x y z` line per point, whitespace separated. Blank lines are
//! skipped. This is the raw input the whole chain starts from; the tool
//! itself only inspects point files, extraction begins at the classified
//! complex.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use nalgebra::Point3;

use crate::error::{CrustError, Result};

/// Load points from an XYZ file.
///
/// # Example
///
/// ```no_run
/// use crust::io::xyz;
///
/// let points = xyz::load("scan.xyz").unwrap();
/// println!("{} points", points.len());
/// ```
pub fn load<P: AsRef<Path>>(path: P) -> Result<Vec<Point3<f64>>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    parse(BufReader::new(file), path)
}

fn parse<R: BufRead>(reader: R, path: &Path) -> Result<Vec<Point3<f64>>> {
    let mut points = Vec::new();

    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let coords: Vec<f64> = trimmed
            .split_whitespace()
            .map(|t| {
                t.parse().map_err(|_| CrustError::LoadError {
                    path: path.to_path_buf(),
                    message: format!("line {}: bad coordinate '{}'", number + 1, t),
                })
            })
            .collect::<Result<_>>()?;
        if coords.len() != 3 {
            return Err(CrustError::LoadError {
                path: path.to_path_buf(),
                message: format!("line {}: expected three coordinates", number + 1),
            });
        }

        points.push(Point3::new(coords[0], coords[1], coords[2]));
    }

    Ok(points)
}

/// Save points to an XYZ file.
pub fn save<P: AsRef<Path>>(points: &[Point3<f64>], path: P) -> Result<()> {
    let file = File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);

    for p in points {
        writeln!(writer, "{} {} {}", p.x, p.y, p.z)?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn parse_str(text: &str) -> Result<Vec<Point3<f64>>> {
        parse(Cursor::new(text), Path::new("test.xyz"))
    }

    #[test]
    fn test_parse_points() {
        let points = parse_str("0 0 0\n1.5 2 -3\n\n0.25 0 1\n").unwrap();
        assert_eq!(points.len(), 3);
        assert_eq!(points[1], Point3::new(1.5, 2.0, -3.0));
    }

    #[test]
    fn test_empty_file() {
        assert!(parse_str("").unwrap().is_empty());
    }

    #[test]
    fn test_malformed_line() {
        let result = parse_str("0 0 0\n1 2\n");
        match result {
            Err(CrustError::LoadError { message, .. }) => {
                assert!(message.starts_with("line 2"));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_roundtrip() {
        let points = vec![Point3::new(0.0, -1.25, 3.5), Point3::new(2.0, 0.0, 0.125)];
        let path = std::env::temp_dir().join("crust_xyz_roundtrip.xyz");
        save(&points, &path).unwrap();
        let loaded = load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(points, loaded);
    }
}
