//! # Crust
//!
//! Outer-surface extraction for 3D alpha shapes.
//!
//! Given a tetrahedral complex over a point cloud whose facets have been
//! classified as EXTERIOR, REGULAR or INTERIOR by an alpha-shape
//! predicate, crust determines which REGULAR facets form the *outer*
//! skin of the shape (the boundary reachable from the unbounded
//! exterior, as opposed to the walls of internal cavities) and emits
//! that skin as a deduplicated, indexed triangle mesh.
//!
//! ## Features
//!
//! - **Arena-backed complex**: cells addressed by stable ids, neighbor
//!   links derived automatically from shared facets
//! - **Oracle trait**: plug in any complex representation through
//!   [`AlphaComplex`](complex::AlphaComplex)
//! - **Exterior flood fill**: reachability that cannot leak through the
//!   shape boundary or into sealed cavities
//! - **Indexed output**: identity-based vertex deduplication with
//!   deterministic, first-seen index assignment
//! - **File formats**: OFF meshes out, TET complexes and XYZ point
//!   clouds in
//!
//! ## Quick Start
//!
//! ```
//! use crust::prelude::*;
//! use nalgebra::Point3;
//!
//! // Describe a classified complex: here a single solid tetrahedron,
//! // every facet on the shape boundary.
//! let mut builder = ComplexBuilder::new();
//! let v0 = builder.add_vertex(Point3::new(0.0, 0.0, 0.0));
//! let v1 = builder.add_vertex(Point3::new(1.0, 0.0, 0.0));
//! let v2 = builder.add_vertex(Point3::new(0.0, 1.0, 0.0));
//! let v3 = builder.add_vertex(Point3::new(0.0, 0.0, 1.0));
//! builder.add_cell([v0, v1, v2, v3], [FacetClass::Regular; 4]);
//! let complex = builder.build().unwrap();
//!
//! // Extract the outer skin.
//! let mesh = extract_surface(&complex);
//! assert_eq!(mesh.num_vertices(), 4);
//! assert_eq!(mesh.num_triangles(), 4);
//! ```
//!
//! ## Pipeline Stages
//!
//! The stages compose but are individually accessible:
//!
//! ```
//! # use crust::prelude::*;
//! # use nalgebra::Point3;
//! # let mut builder = ComplexBuilder::new();
//! # let v0 = builder.add_vertex(Point3::new(0.0, 0.0, 0.0));
//! # let v1 = builder.add_vertex(Point3::new(1.0, 0.0, 0.0));
//! # let v2 = builder.add_vertex(Point3::new(0.0, 1.0, 0.0));
//! # let v3 = builder.add_vertex(Point3::new(0.0, 0.0, 1.0));
//! # builder.add_cell([v0, v1, v2, v3], [FacetClass::Regular; 4]);
//! # let complex = builder.build().unwrap();
//! use crust::extract::{boundary_facets, exterior_cells, index_facets};
//!
//! let marked = exterior_cells(&complex);
//! let facets = boundary_facets(&complex, &marked);
//! let mesh = index_facets(&complex, &facets);
//! assert_eq!(facets.len(), mesh.num_triangles());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod complex;
pub mod error;
pub mod extract;
pub mod io;

/// Prelude module for convenient imports.
///
/// This module re-exports the most commonly used types and functions:
///
/// ```
/// use crust::prelude::*;
/// ```
pub mod prelude {
    pub use crate::complex::{
        AlphaComplex, CellId, ComplexBuilder, Facet, FacetClass, TetComplex, VertexId,
    };
    pub use crate::error::{CrustError, Result};
    pub use crate::extract::{extract_surface, MarkedCells, SurfaceMesh};
}

// Re-export nalgebra types for convenience
pub use nalgebra;
