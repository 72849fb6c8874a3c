//! Error types for crust.
//!
//! This module defines all error types used throughout the library.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using [`CrustError`].
pub type Result<T> = std::result::Result<T, CrustError>;

/// Errors that can occur while building a complex or doing file I/O.
///
/// The extraction pipeline itself is total: once a complex has been
/// constructed, flood fill, facet selection and vertex indexing cannot
/// fail, and an empty result is a valid degenerate output.
#[derive(Error, Debug)]
pub enum CrustError {
    /// A cell references a vertex index that was never added.
    #[error("cell {cell} references invalid vertex index {vertex}")]
    InvalidVertexIndex {
        /// The cell index.
        cell: usize,
        /// The invalid vertex index.
        vertex: usize,
    },

    /// A cell has repeated vertex indices (degenerate tetrahedron).
    #[error("cell {cell} is degenerate (has repeated vertices)")]
    DegenerateCell {
        /// The cell index.
        cell: usize,
    },

    /// A facet is shared by more than two cells.
    #[error("facet ({v0}, {v1}, {v2}) is shared by more than two cells")]
    NonManifoldFacet {
        /// First vertex of the facet (sorted order).
        v0: usize,
        /// Second vertex of the facet.
        v1: usize,
        /// Third vertex of the facet.
        v2: usize,
    },

    /// A hull edge is not shared by exactly two hull facets.
    #[error("hull edge ({v0}, {v1}) is not shared by exactly two hull facets")]
    NonManifoldEdge {
        /// First vertex of the edge (sorted order).
        v0: usize,
        /// Second vertex of the edge.
        v1: usize,
    },

    /// The two incident cells of a facet disagree on its classification.
    #[error("facet ({v0}, {v1}, {v2}) has mismatched classifications on its two sides")]
    MirrorClassMismatch {
        /// First vertex of the facet (sorted order).
        v0: usize,
        /// Second vertex of the facet.
        v1: usize,
        /// Third vertex of the facet.
        v2: usize,
    },

    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error loading a file.
    #[error("failed to load {path}: {message}")]
    LoadError {
        /// The file path.
        path: PathBuf,
        /// Error message.
        message: String,
    },

    /// Error saving a file.
    #[error("failed to save {path}: {message}")]
    SaveError {
        /// The file path.
        path: PathBuf,
        /// Error message.
        message: String,
    },

    /// Unsupported file format.
    #[error("unsupported file format: {extension}")]
    UnsupportedFormat {
        /// The file extension.
        extension: String,
    },
}
