//! Conversion entry points.
//!
//! # Example
//!
//! ```no_run
//! use tetskin_rs::*;
//!
//! fn main() -> Result<()> {
//!     let options = ConvertOptions::new("part.mesh", "part.ply").with_data_label("medit:ref");
//!     let stats = convert_to_ply(&options)?;
//!     println!("{} boundary faces", stats.boundary_faces);
//!     Ok(())
//! }
//! ```

use std::path::Path;

use tetskin_core::{ConvertOptions, Quantity, Result};
use tetskin_io::{read_volume_mesh, write_surface_mesh, write_volume_mesh, MeshFormat};
use tetskin_structures::{BoundaryExtractor, BoundaryStats};

/// Reads a tetrahedral mesh, extracts its boundary surface and writes it as PLY.
///
/// The output is always PLY, whatever the extension of `output_path`.
pub fn convert_to_ply(options: &ConvertOptions) -> Result<BoundaryStats> {
    log::info!(
        "converting {} to {}",
        options.input_path.display(),
        options.output_path.display()
    );
    let mesh = read_volume_mesh(&options.input_path)?;

    let extractor = match &options.data_label {
        Some(label) => BoundaryExtractor::new().with_data_label(label.as_str()),
        None => BoundaryExtractor::new(),
    };
    let (surface, stats) = extractor.extract_with_stats(&mesh)?;
    log::info!(
        "{} of {} candidate faces are on the boundary, {} of {} points kept",
        stats.boundary_faces,
        stats.candidate_faces,
        stats.boundary_points,
        mesh.num_vertices()
    );
    match surface.face_quantity() {
        Some(q) => match q.data_range() {
            Some((min, max)) => log::info!(
                "carrying cell field '{}' onto {} faces (range {min} to {max})",
                q.name(),
                q.data_size()
            ),
            None => log::info!("carrying cell field '{}' onto {} faces", q.name(), q.data_size()),
        },
        None => log::info!("no cell data to carry"),
    }

    write_surface_mesh(
        &options.output_path,
        &surface,
        MeshFormat::Ply,
        options.ply_encoding,
    )?;
    Ok(stats)
}

/// Reads a mesh and writes it as OBJ with no geometric processing.
pub fn convert_to_obj(input_path: impl AsRef<Path>, output_path: impl AsRef<Path>) -> Result<()> {
    let (input_path, output_path) = (input_path.as_ref(), output_path.as_ref());
    log::info!(
        "converting {} to {}",
        input_path.display(),
        output_path.display()
    );
    let mesh = read_volume_mesh(input_path)?;
    write_volume_mesh(output_path, &mesh, MeshFormat::Obj)
}
