//! Property-based tests for cotangent Laplacian assembly.
//!
//! These tests use proptest to generate random meshes and verify the
//! operator invariants.
//!
//! Run with: cargo test --test proptest_laplacian

use cotlap::prelude::*;
use nalgebra::Point3;
use proptest::prelude::*;

// =============================================================================
// Strategies for generating random meshes
// =============================================================================

/// Generate a random vertex position in a bounded range.
fn arb_position() -> impl Strategy<Value = Point3<f64>> {
    prop::array::uniform3(-10.0..10.0f64).prop_map(|[x, y, z]| Point3::new(x, y, z))
}

/// Generate a mesh whose faces all have three distinct indices and a
/// corner angle bounded away from zero, so every cotangent is finite and of
/// moderate size.
fn arb_mesh(max_vertices: usize, max_faces: usize) -> impl Strategy<Value = Mesh> {
    (3..=max_vertices).prop_flat_map(move |num_vertices| {
        let vertices = prop::collection::vec(arb_position(), num_vertices);
        let face = prop::array::uniform3(0..num_vertices);
        let faces = prop::collection::vec(face, 1..=max_faces);

        (vertices, faces).prop_filter_map("degenerate face", |(vertices, faces)| {
            let faces: Vec<[usize; 3]> = faces
                .into_iter()
                .filter(|&[a, b, c]| a != b && b != c && a != c)
                .filter(|&[a, b, c]| well_shaped(&vertices[a], &vertices[b], &vertices[c]))
                .collect();
            if faces.is_empty() {
                None
            } else {
                Some(Mesh::new(vertices, faces))
            }
        })
    })
}

fn well_shaped(a: &Point3<f64>, b: &Point3<f64>, c: &Point3<f64>) -> bool {
    [(a, b, c), (b, c, a), (c, a, b)].iter().all(|(p, q, r)| {
        let u = *q - *p;
        let v = *r - *p;
        let sin = u.cross(&v).norm() / (u.norm() * v.norm());
        sin > 0.05
    })
}

// =============================================================================
// Property Tests: Operator structure
// =============================================================================

proptest! {
    /// Every row sums to zero.
    #[test]
    fn rows_sum_to_zero(mesh in arb_mesh(12, 30)) {
        let l = cotangent_laplacian(&mesh).unwrap();
        for (i, s) in l.row_sums().iter().enumerate() {
            prop_assert!(s.abs() < 1e-10, "row {} sums to {}", i, s);
        }
    }

    /// The operator is exactly symmetric.
    #[test]
    fn operator_is_symmetric(mesh in arb_mesh(12, 30)) {
        let l = cotangent_laplacian(&mesh).unwrap();
        prop_assert!(l.is_symmetric(0.0));
    }

    /// The operator is square with one row per vertex.
    #[test]
    fn operator_is_vertex_sized(mesh in arb_mesh(12, 30)) {
        let l = cotangent_laplacian(&mesh).unwrap();
        prop_assert_eq!(l.nrows(), mesh.num_vertices());
        prop_assert_eq!(l.ncols(), mesh.num_vertices());
    }

    /// Parallel and sequential assembly agree bit for bit.
    #[test]
    fn parallel_is_deterministic(mesh in arb_mesh(20, 60)) {
        let par = cotangent_laplacian_with_options(&mesh, &LaplacianOptions::default()).unwrap();
        let seq = cotangent_laplacian_with_options(
            &mesh,
            &LaplacianOptions::default().sequential(),
        )
        .unwrap();
        prop_assert_eq!(par, seq);
    }

    /// Constant functions are in the kernel.
    #[test]
    fn constants_in_kernel(mesh in arb_mesh(12, 30), value in -5.0..5.0f64) {
        let l = cotangent_laplacian(&mesh).unwrap();
        let ones = nalgebra::DVector::from_element(mesh.num_vertices(), value);
        prop_assert!(l.mul_vec(&ones).amax() < 1e-8);
    }
}

// =============================================================================
// Property Tests: Validation
// =============================================================================

proptest! {
    /// Any out-of-range index is rejected before assembly.
    #[test]
    fn out_of_range_rejected(mesh in arb_mesh(8, 10), extra in 0usize..5) {
        let n = mesh.num_vertices();
        let mut faces = mesh.triangles().to_vec();
        faces.push([0, 1, n + extra]);
        let bad = Mesh::new(mesh.vertices().to_vec(), faces);

        let is_invalid_index = matches!(
            cotangent_laplacian(&bad),
            Err(InvalidMeshError::InvalidVertexIndex { .. })
        );
        prop_assert!(is_invalid_index);
    }
}
