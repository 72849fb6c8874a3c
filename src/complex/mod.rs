//! Classified tetrahedral complexes.
//!
//! This module provides the data model the extraction pipeline runs on:
//!
//! - [`TetComplex`]: an arena of tetrahedra with derived adjacency,
//!   closed over the outside of the convex hull by unbounded cells.
//! - [`AlphaComplex`]: the oracle trait answering classification and
//!   adjacency queries; implement it to plug in a different complex
//!   representation.
//! - [`ComplexBuilder`]: validating construction from vertices, cells
//!   and facet classifications.
//!
//! # Identity
//!
//! Cells and vertices are addressed by [`CellId`] / [`VertexId`] arena
//! ids. A [`Facet`] is a `(cell, local index)` pair; the same geometric
//! triangle has two such representations with opposite orientation.

mod builder;
mod index;
mod tet;

pub use builder::ComplexBuilder;
pub use index::{vertex_triple_index, CellId, Facet, VertexId, VERTEX_TRIPLE};
pub use tet::{AlphaComplex, Cell, FacetClass, TetComplex};
