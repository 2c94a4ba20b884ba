//! Cotangent-weighted discrete Laplace–Beltrami operator.
//!
//! For every triangle `(i, j, k)` and every corner angle θ, the edge opposite
//! θ receives `0.5 * cot(θ)` on both off-diagonal entries and `-0.5 * cot(θ)`
//! on the diagonal entries of its endpoints. An interior edge therefore ends
//! up with `(cot α + cot β) / 2`, a boundary edge with `cot α / 2`, and every
//! row sums to zero.
//!
//! The sign convention makes the operator negative semi-definite: off-diagonal
//! entries are positive for non-obtuse meshes and diagonals are negative.
//!
//! # Example
//!
//! ```
//! use cotlap::algo::laplacian::cotangent_laplacian;
//! use cotlap::mesh::unit_square;
//!
//! let mesh = unit_square();
//! let l = cotangent_laplacian(&mesh).unwrap();
//!
//! assert_eq!(l.nrows(), 4);
//! assert!(l.is_symmetric(1e-12));
//! assert!((l.get(0, 1) - 0.5).abs() < 1e-12);
//! assert!((l.get(0, 0) + 1.0).abs() < 1e-12);
//!
//! let lv = l.mul_matrix(&mesh.position_matrix());
//! assert_eq!(lv.shape(), (4, 2));
//! ```

use nalgebra::Point3;
use rayon::prelude::*;
use tracing::{debug, warn};

use crate::error::Result;
use crate::mesh::Mesh;
use crate::sparse::SparseOperator;

use super::Progress;

/// Triplets contributed by one triangle: three edges, four entries each.
type FaceTriplets = [(usize, usize, f64); 12];

/// Faces accumulated between sequential progress reports.
const PROGRESS_CHUNK: usize = 4096;

/// Options for Laplacian assembly.
#[derive(Debug, Clone)]
pub struct LaplacianOptions {
    /// Whether to compute per-face contributions in parallel (default: true).
    ///
    /// Contributions are merged in face order either way, so the result does
    /// not depend on this flag.
    pub parallel: bool,

    /// Receives phase updates during [`LaplacianBuilder::build`] (default: none).
    pub progress: Option<Progress>,
}

impl Default for LaplacianOptions {
    fn default() -> Self {
        Self {
            parallel: true,
            progress: None,
        }
    }
}

impl LaplacianOptions {
    /// Set whether to use parallel execution.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Create options for single-threaded execution.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Report assembly progress to `progress`.
    pub fn with_progress(mut self, progress: Progress) -> Self {
        self.progress = Some(progress);
        self
    }
}

/// Assembles cotangent Laplacians.
#[derive(Debug, Clone, Default)]
pub struct LaplacianBuilder {
    options: LaplacianOptions,
}

impl LaplacianBuilder {
    /// Create a builder with the given options.
    pub fn new(options: LaplacianOptions) -> Self {
        Self { options }
    }

    /// The options this builder assembles with.
    pub fn options(&self) -> &LaplacianOptions {
        &self.options
    }

    /// Build the `V × V` cotangent Laplacian of `mesh`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMeshError`](crate::error::InvalidMeshError) if the
    /// mesh has no vertices, no faces, or a face index out of range. Nothing
    /// is assembled in that case.
    ///
    /// Degenerate faces are not errors: a zero-area corner has a non-finite
    /// cotangent and the affected entries come out as `inf` or `NaN`.
    pub fn build(&self, mesh: &Mesh) -> Result<SparseOperator> {
        match &self.options.progress {
            Some(progress) => self.assemble(mesh, progress),
            None => self.assemble(mesh, &Progress::none()),
        }
    }

    /// Like [`LaplacianBuilder::build`], reporting to `progress` instead of
    /// [`LaplacianOptions::progress`].
    pub fn build_with_progress(&self, mesh: &Mesh, progress: &Progress) -> Result<SparseOperator> {
        self.assemble(mesh, progress)
    }

    fn assemble(&self, mesh: &Mesh, progress: &Progress) -> Result<SparseOperator> {
        const PHASES: usize = 3;

        progress.phase(0, PHASES, "Validating mesh");
        mesh.validate()?;

        let n = mesh.num_vertices();
        let num_faces = mesh.num_faces();
        debug!(
            vertices = n,
            faces = num_faces,
            parallel = self.options.parallel,
            "Assembling cotangent Laplacian"
        );

        progress.phase(1, PHASES, "Accumulating cotangent weights");
        let triplets: Vec<(usize, usize, f64)> = if self.options.parallel {
            (0..num_faces)
                .into_par_iter()
                .flat_map_iter(|f| face_triplets(mesh, f))
                .collect()
        } else {
            let mut triplets = Vec::with_capacity(num_faces * 12);
            for f in 0..num_faces {
                if f % PROGRESS_CHUNK == 0 {
                    progress.faces(f, num_faces, 1, PHASES, "Accumulating cotangent weights");
                }
                triplets.extend(face_triplets(mesh, f));
            }
            triplets
        };

        progress.phase(2, PHASES, "Compressing operator");
        let laplacian = SparseOperator::from_triplets(n, n, triplets);

        let non_finite = laplacian.iter().filter(|(_, _, v)| !v.is_finite()).count();
        if non_finite > 0 {
            warn!(
                entries = non_finite,
                "Cotangent Laplacian has non-finite entries; mesh contains degenerate faces"
            );
        }

        debug!(nnz = laplacian.nnz(), "Cotangent Laplacian assembled");
        progress.phase(PHASES, PHASES, "Done");

        Ok(laplacian)
    }
}

/// Build the cotangent Laplacian of `mesh` with default options.
pub fn cotangent_laplacian(mesh: &Mesh) -> Result<SparseOperator> {
    LaplacianBuilder::default().build(mesh)
}

/// Build the cotangent Laplacian of `mesh` with the given options.
pub fn cotangent_laplacian_with_options(
    mesh: &Mesh,
    options: &LaplacianOptions,
) -> Result<SparseOperator> {
    LaplacianBuilder::new(options.clone()).build(mesh)
}

/// Cotangent of the angle at vertex `a` in triangle (a, b, c).
///
/// Not guarded: if `a` coincides with `b` or `c`, or the three points are
/// collinear, the result is non-finite.
#[inline]
pub fn cotangent(a: &Point3<f64>, b: &Point3<f64>, c: &Point3<f64>) -> f64 {
    let ab = b - a;
    let ac = c - a;

    ab.dot(&ac) / ab.cross(&ac).norm()
}

/// Contributions of face `f`, in a fixed order.
fn face_triplets(mesh: &Mesh, f: usize) -> FaceTriplets {
    let [v0, v1, v2] = mesh.triangles()[f];
    let [p0, p1, p2] = mesh.triangle_positions(f);

    // cotN is the angle at vertex N, opposite the edge between the other two
    let cot0 = cotangent(&p0, &p1, &p2);
    let cot1 = cotangent(&p1, &p2, &p0);
    let cot2 = cotangent(&p2, &p0, &p1);

    let [a, b, c, d] = edge_triplets(v1, v2, 0.5 * cot0);
    let [e, g, h, i] = edge_triplets(v2, v0, 0.5 * cot1);
    let [j, k, l, m] = edge_triplets(v0, v1, 0.5 * cot2);
    [a, b, c, d, e, g, h, i, j, k, l, m]
}

/// Off-diagonal `+w`, diagonal `-w` for edge (i, j).
#[inline]
fn edge_triplets(i: usize, j: usize, w: f64) -> [(usize, usize, f64); 4] {
    [(i, j, w), (j, i, w), (i, i, -w), (j, j, -w)]
}
