//! Boundary facet selection.
//!
//! A REGULAR facet belongs to the outer skin exactly when one of its two
//! incident cells is in the exterior-reachable set. Facets with neither
//! side reachable bound internal cavities (or unreachable components)
//! and are excluded from the output.

use crate::complex::{AlphaComplex, Facet};

use super::flood::MarkedCells;

/// Select the REGULAR facets that bound the outer shape, each oriented
/// so that its incident cell is on the marked (exterior) side.
///
/// Output order follows the oracle's
/// [`regular_facets`](AlphaComplex::regular_facets) enumeration, so
/// repeated runs over the same complex produce identical facet lists.
pub fn boundary_facets<C: AlphaComplex>(complex: &C, marked: &MarkedCells) -> Vec<Facet> {
    let mut kept = Vec::new();

    for facet in complex.regular_facets() {
        if marked.is_marked(facet.cell) {
            kept.push(facet);
        } else {
            let mirror = complex.mirror_facet(facet);
            if marked.is_marked(mirror.cell) {
                kept.push(mirror);
            }
            // Neither side reachable: a cavity facet, not the outer skin.
        }
    }

    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::complex::{CellId, ComplexBuilder, FacetClass, TetComplex, VertexId};
    use crate::extract::flood::exterior_cells;
    use nalgebra::Point3;

    fn five_points(builder: &mut ComplexBuilder) -> [VertexId; 5] {
        [
            builder.add_vertex(Point3::new(0.0, 0.0, 0.0)),
            builder.add_vertex(Point3::new(1.0, 0.0, 0.0)),
            builder.add_vertex(Point3::new(0.0, 1.0, 0.0)),
            builder.add_vertex(Point3::new(0.0, 0.0, 1.0)),
            builder.add_vertex(Point3::new(1.0, 1.0, 1.0)),
        ]
    }

    /// Two tets glued on one facet, both solid: the glue facet is
    /// classified REGULAR but has no reachable side, like the shell of
    /// an internal cavity.
    fn solid_pair() -> TetComplex {
        let mut builder = ComplexBuilder::new();
        let [v0, v1, v2, v3, v4] = five_points(&mut builder);
        let classes = [
            FacetClass::Regular,
            FacetClass::Regular,
            FacetClass::Regular,
            FacetClass::Regular,
        ];
        builder.add_cell([v0, v1, v2, v3], classes);
        builder.add_cell([v4, v1, v3, v2], classes);
        builder.build().unwrap()
    }

    /// Tet A solid, tet B outside the shape: the glue facet's reachable
    /// side is the finite cell B rather than an unbounded cell.
    fn solid_and_empty_pair() -> (TetComplex, CellId, CellId) {
        let mut builder = ComplexBuilder::new();
        let [v0, v1, v2, v3, v4] = five_points(&mut builder);
        let a = builder.add_cell(
            [v0, v1, v2, v3],
            [FacetClass::Regular; 4],
        );
        let b = builder.add_cell(
            [v4, v1, v3, v2],
            [
                FacetClass::Regular,
                FacetClass::Exterior,
                FacetClass::Exterior,
                FacetClass::Exterior,
            ],
        );
        let complex = builder.build().unwrap();
        (complex, a, b)
    }

    #[test]
    fn test_kept_facets_face_the_marked_side() {
        let complex = solid_pair();
        let marked = exterior_cells(&complex);
        let kept = boundary_facets(&complex, &marked);

        // 6 hull facets kept, the glue facet dropped.
        assert_eq!(kept.len(), 6);
        for facet in &kept {
            assert!(marked.is_marked(facet.cell));
            assert!(!marked.is_marked(complex.mirror_facet(*facet).cell));
        }
    }

    #[test]
    fn test_unreachable_facet_is_dropped() {
        let complex = solid_pair();
        let marked = exterior_cells(&complex);
        let kept = boundary_facets(&complex, &marked);

        // The glue facet separates the two finite cells; neither is
        // reachable, so neither orientation may appear in the output.
        let glue = Facet::new(CellId::new(0), 0);
        assert!(!kept.contains(&glue));
        assert!(!kept.contains(&complex.mirror_facet(glue)));
    }

    #[test]
    fn test_at_most_one_orientation_kept() {
        let complex = solid_pair();
        let marked = exterior_cells(&complex);
        let kept = boundary_facets(&complex, &marked);

        for facet in complex.regular_facets() {
            let as_is = kept.contains(&facet) as usize;
            let mirrored = kept.contains(&complex.mirror_facet(facet)) as usize;
            assert!(as_is + mirrored <= 1);
        }
    }

    #[test]
    fn test_mirror_kept_through_finite_cell() {
        let (complex, a, b) = solid_and_empty_pair();
        let marked = exterior_cells(&complex);

        // The fill crosses B's EXTERIOR hull facets into B itself.
        assert!(marked.is_marked(b));
        assert!(!marked.is_marked(a));

        let kept = boundary_facets(&complex, &marked);
        assert_eq!(kept.len(), 4); // the surface of tet A

        // The glue facet is kept from the B side.
        let from_b: Vec<_> = kept.iter().filter(|f| f.cell == b).collect();
        assert_eq!(from_b.len(), 1);
    }

    #[test]
    fn test_output_order_is_stable() {
        let complex = solid_pair();
        let marked = exterior_cells(&complex);
        assert_eq!(
            boundary_facets(&complex, &marked),
            boundary_facets(&complex, &marked)
        );
    }
}
