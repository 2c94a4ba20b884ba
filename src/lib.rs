//! # cotlap
//!
//! Cotangent-weighted discrete Laplace–Beltrami operators for triangle meshes.
//!
//! Given vertex positions and triangle index triples, cotlap assembles the
//! `V × V` sparse symmetric matrix whose off-diagonal entry for an edge is
//! half the sum of the cotangents of the angles opposite that edge, and whose
//! diagonal is the negated row sum.
//!
//! ## Features
//!
//! - **Planar and spatial meshes**: build from `Point2` or `Point3` positions
//! - **CSR output**: symmetric sparse operator with dense views via nalgebra
//! - **Parallel assembly**: per-face contributions on the rayon pool,
//!   bit-identical to sequential assembly
//! - **Validation up front**: empty meshes and out-of-range indices are
//!   rejected before anything is assembled
//!
//! ## Quick Start
//!
//! ```
//! use cotlap::prelude::*;
//! use nalgebra::Point2;
//!
//! let mesh = Mesh::planar(
//!     vec![
//!         Point2::new(0.0, 0.0),
//!         Point2::new(1.0, 0.0),
//!         Point2::new(1.0, 1.0),
//!         Point2::new(0.0, 1.0),
//!     ],
//!     vec![[0, 1, 2], [0, 2, 3]],
//! );
//!
//! let l = cotangent_laplacian(&mesh).unwrap();
//! assert!(l.is_symmetric(1e-12));
//! assert!(l.row_sums().amax() < 1e-10);
//!
//! // Apply the operator to the vertex positions
//! let lv = l.mul_matrix(&mesh.position_matrix());
//! assert_eq!(lv.shape(), (4, 2));
//! println!("{}", l);
//! ```
//!
//! ## Invalid Input
//!
//! ```
//! use cotlap::prelude::*;
//! use nalgebra::Point3;
//!
//! let mesh = Mesh::new(vec![Point3::origin()], vec![[0, 1, 2]]);
//! assert!(matches!(
//!     cotangent_laplacian(&mesh),
//!     Err(InvalidMeshError::InvalidVertexIndex { face: 0, vertex: 1, .. })
//! ));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

pub mod algo;
pub mod error;
pub mod mesh;
pub mod sparse;

/// Prelude module for convenient imports.
///
/// This module re-exports the most commonly used types and functions:
///
/// ```
/// use cotlap::prelude::*;
/// ```
pub mod prelude {
    pub use crate::algo::laplacian::{
        cotangent_laplacian, cotangent_laplacian_with_options, LaplacianBuilder, LaplacianOptions,
    };
    pub use crate::algo::Progress;
    pub use crate::error::{InvalidMeshError, Result};
    pub use crate::mesh::{Dimension, Mesh};
    pub use crate::sparse::SparseOperator;
}

// Re-export nalgebra types for convenience
pub use nalgebra;
