//! Core mesh data structures.
//!
//! This module provides the face-vertex triangle mesh consumed by the
//! operator builders in [`crate::algo`].
//!
//! # Overview
//!
//! The primary type is [`Mesh`], an immutable list of vertex positions plus a
//! list of triangles given as index triples into the vertex list. Meshes are
//! either planar (built from [`nalgebra::Point2`]) or spatial (built from
//! [`nalgebra::Point3`]); planar meshes are stored lifted to `z = 0` and
//! remember their [`Dimension`] so that [`Mesh::position_matrix`] returns
//! the coordinates the caller supplied.
//!
//! # Construction
//!
//! ```
//! use cotlap::mesh::Mesh;
//! use nalgebra::Point3;
//!
//! let vertices = vec![
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(0.5, 1.0, 0.0),
//! ];
//! let triangles = vec![[0, 1, 2]];
//!
//! let mesh = Mesh::new(vertices, triangles);
//! assert!(mesh.validate().is_ok());
//! ```
//!
//! Construction never fails; index checks happen in [`Mesh::validate`],
//! which every operator builder runs before assembly.

mod builder;
mod face_vertex;

pub use builder::{equilateral_triangle, planar_grid, unit_square, validate_triangles};
pub use face_vertex::{Dimension, Mesh};
