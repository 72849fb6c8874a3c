//! Exterior flood fill over the cell-adjacency graph.
//!
//! Starting from the unbounded cell, the traversal crosses only facets
//! classified EXTERIOR, so it covers exactly the region connected to the
//! outside of the shape. REGULAR and INTERIOR facets are never crossed:
//! the fill cannot leak into the solid interior, nor into cavities whose
//! surrounding shell is fully REGULAR.

use crate::complex::{AlphaComplex, CellId, Facet, FacetClass};

/// The set of cells reachable from the unbounded cell across EXTERIOR
/// facets, produced by [`exterior_cells`].
#[derive(Debug, Clone)]
pub struct MarkedCells {
    marked: Vec<bool>,
    count: usize,
}

impl MarkedCells {
    fn with_cells(num_cells: usize) -> Self {
        Self {
            marked: vec![false; num_cells],
            count: 0,
        }
    }

    /// Mark a cell; returns `false` if it was already marked.
    fn mark(&mut self, cell: CellId) -> bool {
        let slot = &mut self.marked[cell.index()];
        if *slot {
            return false;
        }
        *slot = true;
        self.count += 1;
        true
    }

    /// Check whether a cell is in the exterior-reachable set.
    #[inline]
    pub fn is_marked(&self, cell: CellId) -> bool {
        self.marked[cell.index()]
    }

    /// Number of marked cells.
    pub fn len(&self) -> usize {
        self.count
    }

    /// Check if no cell is marked.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Compute the set of cells transitively reachable from the unbounded
/// cell through EXTERIOR facets.
///
/// Traversal order does not affect the result; a plain stack serves as
/// the work list. A complex without cells yields an empty set.
pub fn exterior_cells<C: AlphaComplex>(complex: &C) -> MarkedCells {
    let mut marked = MarkedCells::with_cells(complex.num_cells());

    let seed = complex.unbounded_cell();
    if complex.num_cells() == 0 || !seed.is_valid() {
        return marked;
    }

    let mut stack = vec![seed];
    while let Some(cell) = stack.pop() {
        if !marked.mark(cell) {
            continue; // already visited
        }

        for i in 0..4 {
            if complex.classify(Facet::new(cell, i)) != FacetClass::Exterior {
                continue;
            }
            let neighbor = complex.neighbor(cell, i);
            if !marked.is_marked(neighbor) {
                stack.push(neighbor);
            }
        }
    }

    marked
}
