//! Error types for cotlap.
//!
//! Operator assembly has a single failure mode: the input mesh is not a
//! usable face-vertex list. The variants of [`InvalidMeshError`] say why.

use thiserror::Error;

/// Result type alias using [`InvalidMeshError`].
pub type Result<T> = std::result::Result<T, InvalidMeshError>;

/// The mesh handed to an operator builder cannot be assembled.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidMeshError {
    /// The mesh has no vertices.
    #[error("mesh has no vertices")]
    NoVertices,

    /// The mesh has no faces.
    #[error("mesh has no faces")]
    NoFaces,

    /// A face references a vertex index outside the vertex list.
    #[error("face {face} references invalid vertex index {vertex} (mesh has {num_vertices} vertices)")]
    InvalidVertexIndex {
        /// The face index.
        face: usize,
        /// The invalid vertex index.
        vertex: usize,
        /// Number of vertices in the mesh.
        num_vertices: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_face_and_vertex() {
        let err = InvalidMeshError::InvalidVertexIndex {
            face: 3,
            vertex: 7,
            num_vertices: 4,
        };
        let msg = err.to_string();
        assert!(msg.contains("face 3"));
        assert!(msg.contains("index 7"));
        assert!(msg.contains("4 vertices"));
    }

    #[test]
    fn test_empty_variants() {
        assert_eq!(InvalidMeshError::NoFaces.to_string(), "mesh has no faces");
        assert_eq!(InvalidMeshError::NoVertices.to_string(), "mesh has no vertices");
    }
}
