//! Face-vertex triangle mesh.

use nalgebra::{DMatrix, Point2, Point3};

use super::builder::validate_triangles;
use crate::error::Result;

/// Number of coordinates a mesh was built with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    /// Two coordinates per vertex, stored with `z = 0`.
    Planar,
    /// Three coordinates per vertex.
    Spatial,
}

impl Dimension {
    /// Number of coordinates per vertex.
    #[inline]
    pub fn coords(self) -> usize {
        match self {
            Dimension::Planar => 2,
            Dimension::Spatial => 3,
        }
    }
}

/// An immutable triangle mesh given as vertex positions and index triples.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    vertices: Vec<Point3<f64>>,
    triangles: Vec<[usize; 3]>,
    dimension: Dimension,
}

impl Mesh {
    /// Create a spatial mesh.
    ///
    /// Indices are not checked here; see [`Mesh::validate`].
    pub fn new(vertices: Vec<Point3<f64>>, triangles: Vec<[usize; 3]>) -> Self {
        Self {
            vertices,
            triangles,
            dimension: Dimension::Spatial,
        }
    }

    /// Create a planar mesh from 2D positions.
    ///
    /// # Example
    ///
    /// ```
    /// use cotlap::mesh::{Dimension, Mesh};
    /// use nalgebra::Point2;
    ///
    /// let mesh = Mesh::planar(
    ///     vec![Point2::new(0.0, 0.0), Point2::new(1.0, 0.0), Point2::new(0.0, 1.0)],
    ///     vec![[0, 1, 2]],
    /// );
    /// assert_eq!(mesh.dimension(), Dimension::Planar);
    /// assert_eq!(mesh.position_matrix().ncols(), 2);
    /// ```
    pub fn planar(vertices: Vec<Point2<f64>>, triangles: Vec<[usize; 3]>) -> Self {
        Self {
            vertices: vertices.iter().map(|p| Point3::new(p.x, p.y, 0.0)).collect(),
            triangles,
            dimension: Dimension::Planar,
        }
    }

    /// Vertex positions.
    #[inline]
    pub fn vertices(&self) -> &[Point3<f64>] {
        &self.vertices
    }

    /// Triangles as index triples into [`Mesh::vertices`].
    #[inline]
    pub fn triangles(&self) -> &[[usize; 3]] {
        &self.triangles
    }

    /// Number of vertices.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Number of triangles.
    #[inline]
    pub fn num_faces(&self) -> usize {
        self.triangles.len()
    }

    /// Whether the mesh was built from 2D or 3D positions.
    #[inline]
    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// Positions of the three corners of face `f`.
    ///
    /// # Panics
    ///
    /// Panics if `f` is out of range or the face references a missing vertex.
    /// Call [`Mesh::validate`] first for untrusted input.
    #[inline]
    pub fn triangle_positions(&self, f: usize) -> [Point3<f64>; 3] {
        let [a, b, c] = self.triangles[f];
        [self.vertices[a], self.vertices[b], self.vertices[c]]
    }

    /// Check that the mesh is non-empty and every triangle index is in range.
    pub fn validate(&self) -> Result<()> {
        validate_triangles(self.vertices.len(), &self.triangles)
    }

    /// Vertex positions as a dense `V × d` matrix, `d` being
    /// [`Dimension::coords`].
    pub fn position_matrix(&self) -> DMatrix<f64> {
        let cols = self.dimension.coords();
        DMatrix::from_fn(self.vertices.len(), cols, |i, j| self.vertices[i][j])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InvalidMeshError;

    #[test]
    fn test_planar_lifts_to_zero_z() {
        let mesh = Mesh::planar(
            vec![Point2::new(1.0, 2.0), Point2::new(3.0, 4.0), Point2::new(5.0, 6.0)],
            vec![[0, 1, 2]],
        );
        assert_eq!(mesh.vertices()[1], Point3::new(3.0, 4.0, 0.0));
        assert_eq!(mesh.dimension().coords(), 2);
    }

    #[test]
    fn test_position_matrix_shape() {
        let mesh = Mesh::new(
            vec![
                Point3::new(0.0, 0.0, 1.0),
                Point3::new(1.0, 0.0, 2.0),
                Point3::new(0.0, 1.0, 3.0),
            ],
            vec![[0, 1, 2]],
        );
        let v = mesh.position_matrix();
        assert_eq!(v.shape(), (3, 3));
        assert_eq!(v[(2, 2)], 3.0);
        assert_eq!(v[(1, 0)], 1.0);
    }

    #[test]
    fn test_triangle_positions() {
        let mesh = Mesh::new(
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(0.0, 1.0, 0.0),
            ],
            vec![[2, 0, 1]],
        );
        let [a, b, c] = mesh.triangle_positions(0);
        assert_eq!(a, Point3::new(0.0, 1.0, 0.0));
        assert_eq!(b, Point3::origin());
        assert_eq!(c, Point3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_validate_reports_bad_index() {
        let mesh = Mesh::new(vec![Point3::origin()], vec![[0, 1, 2]]);
        assert_eq!(
            mesh.validate(),
            Err(InvalidMeshError::InvalidVertexIndex {
                face: 0,
                vertex: 1,
                num_vertices: 1,
            })
        );
    }
}
