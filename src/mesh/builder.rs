//! Mesh construction utilities.
//!
//! This module holds the face-list validation shared by every operator
//! builder, plus a few small planar meshes that are handy for tests and
//! benchmarks.

use nalgebra::Point2;

use super::face_vertex::Mesh;
use crate::error::{InvalidMeshError, Result};

/// Validate a face-vertex list.
///
/// Fails if there are no vertices, no faces, or a face references an index
/// `>= num_vertices`. Repeated indices and zero-area faces are accepted.
///
/// # Example
/// ```
/// use cotlap::mesh::validate_triangles;
///
/// assert!(validate_triangles(3, &[[0, 1, 2]]).is_ok());
/// assert!(validate_triangles(3, &[[0, 1, 3]]).is_err());
/// assert!(validate_triangles(3, &[]).is_err());
/// ```
pub fn validate_triangles(num_vertices: usize, faces: &[[usize; 3]]) -> Result<()> {
    if num_vertices == 0 {
        return Err(InvalidMeshError::NoVertices);
    }
    if faces.is_empty() {
        return Err(InvalidMeshError::NoFaces);
    }

    for (fi, face) in faces.iter().enumerate() {
        for &vi in face {
            if vi >= num_vertices {
                return Err(InvalidMeshError::InvalidVertexIndex {
                    face: fi,
                    vertex: vi,
                    num_vertices,
                });
            }
        }
    }

    Ok(())
}

/// The unit square split along its `(0,0)-(1,1)` diagonal.
///
/// Vertices `(0,0), (1,0), (1,1), (0,1)`; triangles `[0,1,2]`, `[0,2,3]`.
pub fn unit_square() -> Mesh {
    Mesh::planar(
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ],
        vec![[0, 1, 2], [0, 2, 3]],
    )
}

/// A single equilateral triangle with unit edges.
pub fn equilateral_triangle() -> Mesh {
    Mesh::planar(
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.5, 3.0_f64.sqrt() / 2.0),
        ],
        vec![[0, 1, 2]],
    )
}

/// An `n × n` grid of unit squares, each split into two triangles.
///
/// Produces `(n + 1)^2` vertices and `2 n^2` triangles. `n = 0` yields a
/// single vertex and no faces.
pub fn planar_grid(n: usize) -> Mesh {
    let mut vertices = Vec::with_capacity((n + 1) * (n + 1));
    let mut faces = Vec::with_capacity(n * n * 2);

    for j in 0..=n {
        for i in 0..=n {
            vertices.push(Point2::new(i as f64, j as f64));
        }
    }

    for j in 0..n {
        for i in 0..n {
            let v00 = j * (n + 1) + i;
            let v10 = v00 + 1;
            let v01 = v00 + (n + 1);
            let v11 = v01 + 1;

            faces.push([v00, v10, v11]);
            faces.push([v00, v11, v01]);
        }
    }

    Mesh::planar(vertices, faces)
}
