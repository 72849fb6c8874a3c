//! Arena-backed tetrahedral complex and the classification oracle.
//!
//! A [`TetComplex`] stores cells in a flat arena with neighbor links held
//! as ids rather than owning references, which keeps the mutually
//! referential cell graph cycle-free from an ownership point of view.
//!
//! The complex is closed over the outside of the convex hull: every hull
//! facet has an unbounded cell on its far side, each containing the
//! reserved [`VertexId::INFINITE`] sentinel. All cells therefore own
//! exactly four neighbor links, and the flood fill never has to
//! special-case the hull. [`TetComplex::unbounded_cell`] returns a
//! designated representative of the unbounded region.
//!
//! The [`AlphaComplex`] trait is the seam between the extraction
//! algorithms and whatever produced the classified complex; `TetComplex`
//! is its concrete implementation.

use nalgebra::Point3;

use super::index::{vertex_triple_index, CellId, Facet, VertexId};

/// Classification of a facet relative to the alpha shape.
///
/// The classification is a property of the geometric triangle and is the
/// same for both (cell, index) representations of a facet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FacetClass {
    /// Outside the shape; the flood fill crosses these.
    Exterior,
    /// On the shape boundary; candidates for the output surface.
    Regular,
    /// Fully inside a solid region.
    Interior,
}

impl FacetClass {
    /// One-letter code used by the TET interchange format.
    pub fn code(self) -> char {
        match self {
            FacetClass::Exterior => 'E',
            FacetClass::Regular => 'R',
            FacetClass::Interior => 'I',
        }
    }

    /// Parse a one-letter classification code.
    pub fn from_code(code: char) -> Option<FacetClass> {
        match code.to_ascii_uppercase() {
            'E' => Some(FacetClass::Exterior),
            'R' => Some(FacetClass::Regular),
            'I' => Some(FacetClass::Interior),
            _ => None,
        }
    }
}

/// A tetrahedron in the complex.
#[derive(Debug, Clone)]
pub struct Cell {
    /// The four corner vertices. Unbounded cells hold
    /// [`VertexId::INFINITE`] in one slot.
    pub vertices: [VertexId; 4],

    /// The cell across facet `i`, for each of the four facets.
    pub neighbors: [CellId; 4],

    /// Classification of each facet, stored mirrored on both incident
    /// cells.
    pub classes: [FacetClass; 4],
}

impl Cell {
    /// Check if this cell contains the infinite vertex.
    #[inline]
    pub fn is_unbounded(&self) -> bool {
        self.vertices.iter().any(|v| !v.is_finite())
    }
}

/// The classification oracle: everything the extraction pipeline needs to
/// know about a classified tetrahedral complex.
///
/// Implementations must keep neighbor links reciprocal (if `b` is the
/// neighbor of `a` across some facet, then `a` is a neighbor of `b`) and
/// classifications consistent between the two representations of each
/// facet. [`TetComplex`] enforces both at construction time.
pub trait AlphaComplex {
    /// Total number of cells, unbounded cells included.
    fn num_cells(&self) -> usize;

    /// A designated cell of the unbounded region, used to seed the flood
    /// fill. Returns [`CellId::INVALID`] if the complex has no cells.
    fn unbounded_cell(&self) -> CellId;

    /// The cell across facet `index` of `cell`.
    fn neighbor(&self, cell: CellId, index: usize) -> CellId;

    /// The vertex of `cell` at local position `corner` (0..4).
    fn cell_vertex(&self, cell: CellId, corner: usize) -> VertexId;

    /// Classification of the given facet.
    fn classify(&self, facet: Facet) -> FacetClass;

    /// All REGULAR facets, one representative orientation per geometric
    /// triangle, in a deterministic enumeration order.
    fn regular_facets(&self) -> Vec<Facet>;

    /// Position of a finite vertex.
    fn position(&self, vertex: VertexId) -> Point3<f64>;

    /// The other (cell, index) representation of the same geometric
    /// triangle.
    fn mirror_facet(&self, facet: Facet) -> Facet {
        let other = self.neighbor(facet.cell, facet.index);
        let index = (0..4)
            .find(|&i| self.neighbor(other, i) == facet.cell)
            .expect("neighbor links are reciprocal");
        Facet::new(other, index)
    }

    /// The three vertices of a facet, in canonical winding order as seen
    /// from its cell.
    fn facet_vertices(&self, facet: Facet) -> [VertexId; 3] {
        let mut triple = [VertexId::invalid(); 3];
        for (k, slot) in triple.iter_mut().enumerate() {
            *slot = self.cell_vertex(facet.cell, vertex_triple_index(facet.index, k));
        }
        triple
    }
}

/// A classified tetrahedral complex over a 3D point set.
///
/// Read-only after construction; build one with
/// [`ComplexBuilder`](super::ComplexBuilder) or load one with
/// [`io::tet`](crate::io::tet).
#[derive(Debug, Clone)]
pub struct TetComplex {
    positions: Vec<Point3<f64>>,
    cells: Vec<Cell>,
    unbounded: CellId,
}

impl TetComplex {
    pub(crate) fn new(positions: Vec<Point3<f64>>, cells: Vec<Cell>, unbounded: CellId) -> Self {
        Self {
            positions,
            cells,
            unbounded,
        }
    }

    /// Number of finite vertices.
    pub fn num_vertices(&self) -> usize {
        self.positions.len()
    }

    /// Get a cell by id.
    pub fn cell(&self, id: CellId) -> &Cell {
        &self.cells[id.index()]
    }

    /// Iterate over all cells in arena order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// All finite vertex positions, indexed by vertex id.
    pub fn positions(&self) -> &[Point3<f64>] {
        &self.positions
    }
}

impl AlphaComplex for TetComplex {
    fn num_cells(&self) -> usize {
        self.cells.len()
    }

    fn unbounded_cell(&self) -> CellId {
        self.unbounded
    }

    fn neighbor(&self, cell: CellId, index: usize) -> CellId {
        self.cells[cell.index()].neighbors[index]
    }

    fn cell_vertex(&self, cell: CellId, corner: usize) -> VertexId {
        self.cells[cell.index()].vertices[corner]
    }

    fn classify(&self, facet: Facet) -> FacetClass {
        self.cells[facet.cell.index()].classes[facet.index]
    }

    fn regular_facets(&self) -> Vec<Facet> {
        let mut facets = Vec::new();
        for (c, cell) in self.cells.iter().enumerate() {
            for i in 0..4 {
                if cell.classes[i] != FacetClass::Regular {
                    continue;
                }
                // One representative per geometric triangle: the lower
                // cell id owns it.
                if cell.neighbors[i].index() > c {
                    facets.push(Facet::new(CellId::new(c), i));
                }
            }
        }
        facets
    }

    fn position(&self, vertex: VertexId) -> Point3<f64> {
        debug_assert!(vertex.is_finite(), "position of non-finite vertex {:?}", vertex);
        self.positions[vertex.index()]
    }
}
