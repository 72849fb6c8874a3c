//! Typed identifiers for complex elements.
//!
//! Cells and vertices live in arenas and are addressed by integer ids
//! wrapped in type-safe newtypes, so a cell index can never be mistaken
//! for a vertex index. A [`Facet`] is a (cell, local index) pair: the
//! triangular face of that cell opposite its vertex at that local index.

use std::fmt::{self, Debug};

macro_rules! impl_id_type {
    ($name:ident, $display:literal) => {
        impl $name {
            /// A sentinel value representing an invalid/null id.
            pub const INVALID: $name = $name(u32::MAX);

            /// Create a new id from a raw index.
            #[inline]
            pub fn new(index: usize) -> Self {
                debug_assert!(index < u32::MAX as usize, "index {} too large", index);
                Self(index as u32)
            }

            /// Create an invalid/null id.
            #[inline]
            pub fn invalid() -> Self {
                Self::INVALID
            }

            /// Get the raw index value.
            #[inline]
            pub fn index(self) -> usize {
                self.0 as usize
            }

            /// Check if this is a valid (non-null) id.
            #[inline]
            pub fn is_valid(self) -> bool {
                self != Self::INVALID
            }
        }

        impl Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                if self.is_valid() {
                    write!(f, "{}({})", $display, self.index())
                } else {
                    write!(f, "{}(INVALID)", $display)
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::invalid()
            }
        }
    };
}

/// A type-safe cell (tetrahedron) id.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct CellId(u32);

/// A type-safe vertex id.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct VertexId(u32);

impl_id_type!(CellId, "C");
impl_id_type!(VertexId, "V");

impl VertexId {
    /// The infinite vertex: a reserved sentinel with no position.
    ///
    /// Cells containing this vertex are the unbounded cells that close
    /// the complex over the outside of the convex hull.
    pub const INFINITE: VertexId = VertexId(u32::MAX - 1);

    /// Check if this is a finite vertex (valid and not the infinite vertex).
    #[inline]
    pub fn is_finite(self) -> bool {
        self.is_valid() && self != Self::INFINITE
    }
}

/// A facet of a cell: the triangular face opposite the cell's vertex at
/// `index` (0..4).
///
/// Every finite facet is shared by exactly two cells, so the same
/// geometric triangle has two `Facet` representations with opposite
/// orientation; see [`AlphaComplex::mirror_facet`](super::AlphaComplex::mirror_facet).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Facet {
    /// The cell owning this representation of the facet.
    pub cell: CellId,
    /// The local facet index within the cell (0..4).
    pub index: usize,
}

impl Facet {
    /// Create a facet from a cell and a local index.
    #[inline]
    pub fn new(cell: CellId, index: usize) -> Self {
        debug_assert!(index < 4, "facet index {} out of range", index);
        Self { cell, index }
    }
}

/// Canonical vertex order of each facet.
///
/// Row `i` lists the three local vertex positions of the facet opposite
/// vertex `i`, in an order chosen so that the triple read from one cell
/// winds opposite to the triple read from the mirror cell. All emitted
/// triangles use the same convention, so a surface assembled from facets
/// kept on one side has consistent winding throughout.
pub const VERTEX_TRIPLE: [[usize; 3]; 4] = [[1, 3, 2], [0, 2, 3], [0, 3, 1], [0, 1, 2]];

/// Local vertex position `k` (0..3) of the facet at local index `facet`.
#[inline]
pub fn vertex_triple_index(facet: usize, k: usize) -> usize {
    VERTEX_TRIPLE[facet][k]
}
