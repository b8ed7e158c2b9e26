//! Mesh file input and output for tetskin.
//!
//! - [`read_volume_mesh`] reads a volume mesh, choosing the reader from the file extension
//! - [`write_surface_mesh`] writes a surface mesh as PLY or OBJ
//! - [`write_volume_mesh`] writes a volume mesh's surface cells as OBJ

#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod format;
pub mod medit;
pub mod obj;
pub mod ply;

use std::path::Path;

pub use format::MeshFormat;
pub use medit::MEDIT_REF;

use tetskin_core::{PlyEncoding, Result, TetskinError};
use tetskin_structures::{SurfaceMesh, VolumeMesh};

/// Reads a volume mesh file.
pub fn read_volume_mesh(path: impl AsRef<Path>) -> Result<VolumeMesh> {
    let path = path.as_ref();
    match MeshFormat::from_path(path)? {
        MeshFormat::Medit => medit::read_medit(path),
        format => Err(TetskinError::UnsupportedFormat(format!(
            "{} ({format} files cannot be read)",
            path.display()
        ))),
    }
}

/// Writes a surface mesh file in the given format.
///
/// `encoding` only applies to PLY output.
pub fn write_surface_mesh(
    path: impl AsRef<Path>,
    mesh: &SurfaceMesh,
    format: MeshFormat,
    encoding: PlyEncoding,
) -> Result<()> {
    let path = path.as_ref();
    log::info!(
        "writing {} ({} vertices, {} faces) to {}",
        mesh.name(),
        mesh.num_vertices(),
        mesh.num_faces(),
        path.display()
    );
    match format {
        MeshFormat::Ply => ply::write_ply(path, mesh, encoding),
        MeshFormat::Obj => obj::write_surface_obj(path, mesh),
        MeshFormat::Medit => Err(TetskinError::UnsupportedFormat(format!(
            "{} (medit files cannot be written)",
            path.display()
        ))),
    }
}

/// Writes a volume mesh file in the given format, without geometric processing.
pub fn write_volume_mesh(path: impl AsRef<Path>, mesh: &VolumeMesh, format: MeshFormat) -> Result<()> {
    let path = path.as_ref();
    match format {
        MeshFormat::Obj => obj::write_volume_obj(path, mesh),
        format => Err(TetskinError::UnsupportedFormat(format!(
            "{} ({format} output of volume meshes is not supported)",
            path.display()
        ))),
    }
}
