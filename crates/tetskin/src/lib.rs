//! tetskin: boundary surfaces of tetrahedral meshes.
//!
//! A tetrahedral volume mesh is read from disk, the triangles that belong to
//! exactly one tetrahedron are extracted, and the resulting surface is written as
//! PLY with one per-cell field carried onto its faces.
//!
//! # Quick Start
//!
//! ```no_run
//! use tetskin_rs::*;
//!
//! fn main() -> Result<()> {
//!     init_logging();
//!
//!     let mesh = read_volume_mesh("part.mesh")?;
//!     let surface = mesh.extract_boundary(None)?;
//!     write_surface_mesh("part.ply", &surface, MeshFormat::Ply, PlyEncoding::Ascii)?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Crates
//!
//! - `tetskin-core` - errors, options, cell kinds, quantities
//! - `tetskin-structures` - [`VolumeMesh`], [`SurfaceMesh`], [`BoundaryExtractor`]
//! - `tetskin-io` - Medit reader, PLY and OBJ writers

pub mod cli;
mod convert;
mod init;

pub use convert::{convert_to_obj, convert_to_ply};
pub use init::init_logging;

// Re-export core types
pub use tetskin_core::{
    CellBlock, CellKind, ConvertOptions, DVec3, PlyEncoding, Quantity, Result, TetskinError,
};

// Re-export structures
pub use tetskin_structures::{
    BoundaryExtractor, BoundaryStats, SurfaceMesh, SurfaceMeshFaceScalarQuantity, VolumeMesh,
    VolumeMeshCellScalarQuantity, VolumeMeshVertexScalarQuantity,
};

// Re-export I/O
pub use tetskin_io::{
    read_volume_mesh, write_surface_mesh, write_volume_mesh, MeshFormat, MEDIT_REF,
};
