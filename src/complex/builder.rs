//! Complex construction.
//!
//! [`ComplexBuilder`] assembles a [`TetComplex`] from vertices, cells and
//! per-facet classifications. Neighbor links are derived by matching
//! facet vertex triples, so a producer only has to list its tetrahedra;
//! the builder then closes the convex hull by synthesizing an unbounded
//! cell behind every facet that has a single incident cell, and links
//! those unbounded cells to each other across the hull edges.

use std::collections::HashMap;

use nalgebra::Point3;

use super::index::{CellId, VertexId, VERTEX_TRIPLE};
use super::tet::{Cell, FacetClass, TetComplex};
use crate::error::{CrustError, Result};

/// Builder for a classified tetrahedral complex.
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
/// let complex = builder.build().unwrap();
/// assert_eq!(complex.num_cells(), 5); // one finite cell, four unbounded
/// ```
#[derive(Debug, Default)]
pub struct ComplexBuilder {
    positions: Vec<Point3<f64>>,
    cells: Vec<Cell>,
}

/// Sorted vertex triple of facet `i`, used as an orientation-independent
/// matching key.
fn facet_key(cell: &Cell, i: usize) -> [u32; 3] {
    let mut key = VERTEX_TRIPLE[i].map(|k| cell.vertices[k].index() as u32);
    key.sort_unstable();
    key
}

/// Sorted finite vertex pair of facet `j` (j in 1..4) of an unbounded
/// cell: the hull edge that facet straddles.
fn edge_key(cell: &Cell, j: usize) -> [u32; 2] {
    let mut key = [0u32; 2];
    let mut n = 0;
    for s in 1..4 {
        if s != j {
            key[n] = cell.vertices[s].index() as u32;
            n += 1;
        }
    }
    key.sort_unstable();
    key
}

impl ComplexBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a vertex and return its id.
    pub fn add_vertex(&mut self, position: Point3<f64>) -> VertexId {
        let id = VertexId::new(self.positions.len());
        self.positions.push(position);
        id
    }

    /// Add a finite cell with its four facet classifications.
    ///
    /// `classes[i]` classifies the facet opposite `vertices[i]`. Facets
    /// shared between two cells must be given the same classification by
    /// both; [`build`](Self::build) rejects the complex otherwise.
    pub fn add_cell(&mut self, vertices: [VertexId; 4], classes: [FacetClass; 4]) -> CellId {
        let id = CellId::new(self.cells.len());
        self.cells.push(Cell {
            vertices,
            neighbors: [CellId::invalid(); 4],
            classes,
        });
        id
    }

    /// Number of vertices added so far.
    pub fn num_vertices(&self) -> usize {
        self.positions.len()
    }

    /// Number of cells added so far.
    pub fn num_cells(&self) -> usize {
        self.cells.len()
    }

    /// Derive adjacency, close the hull and produce the complex.
    ///
    /// Fails if a cell references a missing vertex or repeats one, if a
    /// facet is shared by more than two cells, if the two sides of a
    /// facet disagree on its classification, or if a hull edge is not
    /// shared by exactly two hull facets (non-manifold boundary).
    pub fn build(mut self) -> Result<TetComplex> {
        let num_finite = self.cells.len();

        for (c, cell) in self.cells.iter().enumerate() {
            for &v in &cell.vertices {
                if !v.is_finite() || v.index() >= self.positions.len() {
                    return Err(CrustError::InvalidVertexIndex {
                        cell: c,
                        vertex: v.index(),
                    });
                }
            }
            for a in 0..4 {
                for b in a + 1..4 {
                    if cell.vertices[a] == cell.vertices[b] {
                        return Err(CrustError::DegenerateCell { cell: c });
                    }
                }
            }
        }

        // Match facets by sorted vertex triple.
        let mut incidence: HashMap<[u32; 3], Vec<(usize, usize)>> = HashMap::new();
        for (c, cell) in self.cells.iter().enumerate() {
            for i in 0..4 {
                incidence.entry(facet_key(cell, i)).or_default().push((c, i));
            }
        }

        // Link mirrored facets; collect hull facets in scan order.
        let mut hull: Vec<(usize, usize)> = Vec::new();
        for c in 0..num_finite {
            for i in 0..4 {
                let key = facet_key(&self.cells[c], i);
                let entries = &incidence[&key];
                match entries.len() {
                    1 => hull.push((c, i)),
                    2 => {
                        let (oc, oi) = if entries[0] == (c, i) {
                            entries[1]
                        } else {
                            entries[0]
                        };
                        self.cells[c].neighbors[i] = CellId::new(oc);
                        if (c, i) < (oc, oi)
                            && self.cells[c].classes[i] != self.cells[oc].classes[oi]
                        {
                            return Err(CrustError::MirrorClassMismatch {
                                v0: key[0] as usize,
                                v1: key[1] as usize,
                                v2: key[2] as usize,
                            });
                        }
                    }
                    _ => {
                        return Err(CrustError::NonManifoldFacet {
                            v0: key[0] as usize,
                            v1: key[1] as usize,
                            v2: key[2] as usize,
                        })
                    }
                }
            }
        }

        // Close the hull: one unbounded cell behind each hull facet.
        // Facet 0 of the new cell is the shared triangle; its vertex
        // order reverses the winding seen from the finite side. Facets
        // containing the infinite vertex are EXTERIOR.
        let unbounded = if hull.is_empty() {
            CellId::invalid()
        } else {
            CellId::new(num_finite)
        };
        for &(c, i) in &hull {
            let id = CellId::new(self.cells.len());
            let [p, q, r] = VERTEX_TRIPLE[i].map(|k| self.cells[c].vertices[k]);
            let class = self.cells[c].classes[i];
            self.cells[c].neighbors[i] = id;
            self.cells.push(Cell {
                vertices: [VertexId::INFINITE, p, q, r],
                neighbors: [CellId::new(c), CellId::invalid(), CellId::invalid(), CellId::invalid()],
                classes: [
                    class,
                    FacetClass::Exterior,
                    FacetClass::Exterior,
                    FacetClass::Exterior,
                ],
            });
        }

        // Link unbounded cells across hull edges. Facet j (j > 0) of an
        // unbounded cell contains the infinite vertex and one hull edge;
        // on a manifold boundary each hull edge is straddled by exactly
        // two hull facets.
        let mut edges: HashMap<[u32; 2], Vec<(usize, usize)>> = HashMap::new();
        for h in 0..hull.len() {
            let id = num_finite + h;
            for j in 1..4 {
                let key = edge_key(&self.cells[id], j);
                edges.entry(key).or_default().push((id, j));
            }
        }
        for h in 0..hull.len() {
            let id = num_finite + h;
            for j in 1..4 {
                let key = edge_key(&self.cells[id], j);
                let entries = &edges[&key];
                if entries.len() != 2 {
                    return Err(CrustError::NonManifoldEdge {
                        v0: key[0] as usize,
                        v1: key[1] as usize,
                    });
                }
                let (oid, _) = if entries[0] == (id, j) {
                    entries[1]
                } else {
                    entries[0]
                };
                self.cells[id].neighbors[j] = CellId::new(oid);
            }
        }

        debug_assert!(self
            .cells
            .iter()
            .all(|cell| cell.neighbors.iter().all(|n| n.is_valid())));

        Ok(TetComplex::new(self.positions, self.cells, unbounded))
    }
}
