//! Discrete differential operators on triangle meshes.
//!
//! - **Laplacian**: cotangent-weighted Laplace–Beltrami operator
//!   ([`laplacian::cotangent_laplacian`])
//!
//! Builders validate the mesh up front and return a
//! [`SparseOperator`](crate::sparse::SparseOperator).

pub mod laplacian;
pub mod progress;

pub use laplacian::{cotangent_laplacian, LaplacianBuilder, LaplacianOptions};
pub use progress::Progress;
