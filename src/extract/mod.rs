//! Surface extraction.
//!
//! The pipeline that turns a classified complex into an indexed triangle
//! mesh, in three stages:
//!
//! 1. [`exterior_cells`]: flood fill marking every cell reachable from
//!    the unbounded region across EXTERIOR facets.
//! 2. [`boundary_facets`]: keep the REGULAR facets with exactly one
//!    marked side, oriented toward the marked cell.
//! 3. [`index_facets`]: deduplicate vertices and emit index triples.
//!
//! [`extract_surface`] runs all three. Each stage is also usable on its
//! own, against anything implementing
//! [`AlphaComplex`](crate::complex::AlphaComplex).

mod boundary;
mod flood;
mod indexer;
mod progress;

pub use boundary::boundary_facets;
pub use flood::{exterior_cells, MarkedCells};
pub use indexer::{index_facets, SurfaceMesh};
pub use progress::Progress;

use crate::complex::AlphaComplex;

/// Extract the outer boundary surface of a classified complex.
///
/// Equivalent to running flood fill, boundary selection and vertex
/// indexing in sequence. A complex whose shape is empty (or that has no
/// cells at all) yields an empty mesh.
///
/// # Example
///
/// ```
/// use crust::prelude::*;
/// use nalgebra::Point3;
///
/// let mut builder = ComplexBuilder::new();
/// let v0 = builder.add_vertex(Point3::new(0.0, 0.0, 0.0));
/// let v1 = builder.add_vertex(Point3::new(1.0, 0.0, 0.0));
/// let v2 = builder.add_vertex(Point3::new(0.0, 1.0, 0.0));
/// let v3 = builder.add_vertex(Point3::new(0.0, 0.0, 1.0));
/// builder.add_cell([v0, v1, v2, v3], [FacetClass::Regular; 4]);
///
/// let mesh = extract_surface(&builder.build().unwrap());
/// assert_eq!(mesh.num_vertices(), 4);
/// assert_eq!(mesh.num_triangles(), 4);
/// ```
pub fn extract_surface<C: AlphaComplex>(complex: &C) -> SurfaceMesh {
    extract_surface_with_progress(complex, &Progress::none())
}

/// Extract the outer boundary surface, reporting stage progress.
pub fn extract_surface_with_progress<C: AlphaComplex>(
    complex: &C,
    progress: &Progress,
) -> SurfaceMesh {
    progress.report(0, 3, "Marking exterior cells");
    let marked = exterior_cells(complex);

    progress.report(1, 3, "Selecting boundary facets");
    let facets = boundary_facets(complex, &marked);

    progress.report(2, 3, "Indexing vertices");
    let mesh = index_facets(complex, &facets);

    progress.report(3, 3, "Done");
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::complex::{ComplexBuilder, FacetClass, TetComplex};
    use nalgebra::Point3;
    use std::collections::HashSet;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn single_tet() -> TetComplex {
        let mut builder = ComplexBuilder::new();
        let v0 = builder.add_vertex(Point3::new(0.0, 0.0, 0.0));
        let v1 = builder.add_vertex(Point3::new(1.0, 0.0, 0.0));
        let v2 = builder.add_vertex(Point3::new(0.0, 1.0, 0.0));
        let v3 = builder.add_vertex(Point3::new(0.0, 0.0, 1.0));
        builder.add_cell([v0, v1, v2, v3], [FacetClass::Regular; 4]);
        builder.build().unwrap()
    }

    /// A unit cube as five tetrahedra: four corner tets around one
    /// central tet of face diagonals. All twelve surface facets are
    /// REGULAR; the four internal facets are INTERIOR.
    fn solid_box() -> TetComplex {
        let mut builder = ComplexBuilder::new();
        let v: Vec<_> = [
            (0.0, 0.0, 0.0),
            (1.0, 0.0, 0.0),
            (0.0, 1.0, 0.0),
            (1.0, 1.0, 0.0),
            (0.0, 0.0, 1.0),
            (1.0, 0.0, 1.0),
            (0.0, 1.0, 1.0),
            (1.0, 1.0, 1.0),
        ]
        .iter()
        .map(|&(x, y, z)| builder.add_vertex(Point3::new(x, y, z)))
        .collect();

        let corner = [
            FacetClass::Interior,
            FacetClass::Regular,
            FacetClass::Regular,
            FacetClass::Regular,
        ];
        builder.add_cell([v[1], v[0], v[5], v[3]], corner);
        builder.add_cell([v[2], v[0], v[3], v[6]], corner);
        builder.add_cell([v[4], v[0], v[6], v[5]], corner);
        builder.add_cell([v[7], v[3], v[5], v[6]], corner);
        builder.add_cell([v[0], v[3], v[6], v[5]], [FacetClass::Interior; 4]);
        builder.build().unwrap()
    }

    /// In a closed, consistently wound triangle mesh every directed edge
    /// appears exactly once.
    fn assert_consistent_winding(mesh: &SurfaceMesh) {
        let mut edges = HashSet::new();
        for t in &mesh.triangles {
            for k in 0..3 {
                let edge = (t[k], t[(k + 1) % 3]);
                assert!(edges.insert(edge), "directed edge {:?} repeated", edge);
            }
        }
        for &(a, b) in &edges {
            assert!(edges.contains(&(b, a)), "edge ({}, {}) has no opposite", a, b);
        }
    }

    #[test]
    fn test_single_tet_surface() {
        let mesh = extract_surface(&single_tet());
        assert_eq!(mesh.num_vertices(), 4);
        assert_eq!(mesh.num_triangles(), 4);
        assert_consistent_winding(&mesh);
    }

    #[test]
    fn test_box_surface() {
        let complex = solid_box();
        assert_eq!(complex.num_cells(), 17); // 5 finite + 12 hull

        let mesh = extract_surface(&complex);
        assert_eq!(mesh.num_vertices(), 8);
        assert_eq!(mesh.num_triangles(), 12);
        assert_consistent_winding(&mesh);
    }

    #[test]
    fn test_box_marks_only_the_outside() {
        let complex = solid_box();
        let marked = exterior_cells(&complex);
        assert_eq!(marked.len(), 12);

        let kept = boundary_facets(&complex, &marked);
        assert_eq!(kept.len(), 12);
        for facet in &kept {
            assert!(marked.is_marked(facet.cell));
        }
    }

    #[test]
    fn test_empty_complex_yields_empty_mesh() {
        let complex = ComplexBuilder::new().build().unwrap();
        let mesh = extract_surface(&complex);
        assert!(mesh.is_empty());
        assert_eq!(mesh.num_vertices(), 0);
    }

    #[test]
    fn test_extraction_is_deterministic() {
        let complex = solid_box();
        assert_eq!(extract_surface(&complex), extract_surface(&complex));
    }

    #[test]
    fn test_progress_reports_all_stages() {
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&calls);
        let progress = Progress::new(move |_, total, _| {
            assert_eq!(total, 3);
            seen.fetch_add(1, Ordering::Relaxed);
        });

        extract_surface_with_progress(&single_tet(), &progress);
        assert_eq!(calls.load(Ordering::Relaxed), 4);
    }
}
