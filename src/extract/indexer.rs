//! Vertex deduplication and indexed-mesh assembly.
//!
//! Turns a list of kept facets into a compact indexed triangle mesh.
//! Vertices are deduplicated by complex identity, not by coordinate
//! comparison, and receive dense indices in first-seen order, so the
//! assignment is deterministic for a given facet list.

use std::collections::HashMap;

use nalgebra::Point3;

use crate::complex::{AlphaComplex, Facet, VertexId};

/// An indexed triangle mesh: deduplicated vertex positions plus index
/// triples into them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SurfaceMesh {
    /// Vertex positions, in first-seen order.
    pub vertices: Vec<Point3<f64>>,

    /// Triangles as vertex-index triples, all wound with the same
    /// convention.
    pub triangles: Vec<[usize; 3]>,
}

impl SurfaceMesh {
    /// Number of vertices.
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Number of triangles.
    pub fn num_triangles(&self) -> usize {
        self.triangles.len()
    }

    /// Check if the mesh has no triangles.
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Axis-aligned bounding box of the vertices, or `None` for an
    /// empty vertex set.
    pub fn bounding_box(&self) -> Option<(Point3<f64>, Point3<f64>)> {
        let first = *self.vertices.first()?;
        let mut min = first;
        let mut max = first;
        for v in &self.vertices[1..] {
            for k in 0..3 {
                min[k] = min[k].min(v[k]);
                max[k] = max[k].max(v[k]);
            }
        }
        Some((min, max))
    }
}

/// Assemble an indexed mesh from kept facets.
///
/// Each facet contributes one triangle whose vertices are listed in the
/// facet's canonical winding order. A vertex seen for the first time is
/// appended to the vertex array and assigned the next dense index; later
/// references reuse that index. An empty facet list yields an empty
/// mesh.
pub fn index_facets<C: AlphaComplex>(complex: &C, facets: &[Facet]) -> SurfaceMesh {
    let mut ids: HashMap<VertexId, usize> = HashMap::new();
    let mut mesh = SurfaceMesh {
        vertices: Vec::new(),
        triangles: Vec::with_capacity(facets.len()),
    };

    for &facet in facets {
        let mut triangle = [0usize; 3];
        for (k, vertex) in complex.facet_vertices(facet).into_iter().enumerate() {
            triangle[k] = match ids.get(&vertex) {
                Some(&id) => id,
                None => {
                    let id = mesh.vertices.len();
                    ids.insert(vertex, id);
                    mesh.vertices.push(complex.position(vertex));
                    id
                }
            };
        }
        mesh.triangles.push(triangle);
    }

    mesh
}
