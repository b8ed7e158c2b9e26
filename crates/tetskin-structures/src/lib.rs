//! Structure implementations for tetskin.
//!
//! This crate provides the in-memory meshes a conversion works on:
//! - Volume meshes (blocks of cells with per-cell data)
//! - Surface meshes (triangles with an optional per-face field)
//! - Boundary extraction from tetrahedral volume meshes to surface meshes

// Mesh code intentionally uses casts between u32 indices and usize
#![allow(clippy::cast_possible_truncation)]
// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod surface_mesh;
pub mod volume_mesh;

pub use surface_mesh::{SurfaceMesh, SurfaceMeshFaceScalarQuantity};
pub use volume_mesh::{
    BoundaryExtractor, BoundaryStats, VolumeMesh, VolumeMeshCellScalarQuantity,
    VolumeMeshVertexScalarQuantity, TET_FACE_STENCIL,
};
