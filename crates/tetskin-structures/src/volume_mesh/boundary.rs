//! Boundary surface extraction for tetrahedral meshes.
//!
//! Each tetrahedron contributes 4 candidate triangles. A candidate lies on the
//! boundary when its sorted vertex triple occurs exactly once among all
//! candidates: interior faces are shared by two tetrahedra and occur twice.
//!
//! Keys that occur 3 or more times only appear in non-manifold input. They are
//! dropped like interior faces, counted in [`BoundaryStats::non_manifold_faces`]
//! and reported with a warning.

use std::collections::HashMap;

use tetskin_core::quantity::Quantity;
use tetskin_core::{CellKind, Result, TetskinError};

use super::VolumeMesh;
use crate::SurfaceMesh;

/// Face stencil for tetrahedra: local vertex triples of the 4 faces.
pub const TET_FACE_STENCIL: [[usize; 3]; 4] = [[0, 1, 2], [0, 3, 1], [1, 3, 2], [0, 2, 3]];

/// Generates a canonical (sorted) face key for hashing.
fn canonical_face_key(face: [u32; 3]) -> [u32; 3] {
    let mut key = face;
    key.sort_unstable();
    key
}

/// Counters collected while extracting a boundary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoundaryStats {
    /// Number of input tetrahedra.
    pub tets: usize,
    /// Candidate faces enumerated (4 per tetrahedron).
    pub candidate_faces: usize,
    /// Candidates kept as boundary faces.
    pub boundary_faces: usize,
    /// Distinct faces shared by exactly two tetrahedra.
    pub interior_faces: usize,
    /// Distinct faces shared by three or more tetrahedra.
    pub non_manifold_faces: usize,
    /// Points referenced by the boundary.
    pub boundary_points: usize,
}

/// Extracts the boundary triangles of a tetrahedral [`VolumeMesh`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoundaryExtractor {
    data_label: Option<String>,
}

impl BoundaryExtractor {
    /// Creates an extractor that propagates the first cell field, if any.
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects the cell field to carry onto the boundary faces.
    #[must_use]
    pub fn with_data_label(mut self, label: impl Into<String>) -> Self {
        self.data_label = Some(label.into());
        self
    }

    /// Returns the explicitly selected field, if any.
    pub fn data_label(&self) -> Option<&str> {
        self.data_label.as_deref()
    }

    /// Extracts the boundary surface of `mesh`.
    pub fn extract(&self, mesh: &VolumeMesh) -> Result<SurfaceMesh> {
        self.extract_with_stats(mesh).map(|(surface, _)| surface)
    }

    /// Extracts the boundary surface of `mesh` together with face statistics.
    pub fn extract_with_stats(&self, mesh: &VolumeMesh) -> Result<(SurfaceMesh, BoundaryStats)> {
        let tets = mesh.tets();
        if tets.is_empty() {
            let found = mesh
                .cell_kinds()
                .iter()
                .map(|kind| kind.tag())
                .collect::<Vec<_>>()
                .join(", ");
            return Err(TetskinError::UnsupportedCellType {
                found: if found.is_empty() { "none".to_string() } else { found },
            });
        }

        let num_points = mesh.num_vertices();
        for (cell, tet) in tets.iter().enumerate() {
            if let Some(&index) = tet.iter().find(|&&i| i as usize >= num_points) {
                return Err(TetskinError::InvalidPointIndex {
                    cell,
                    index,
                    num_points,
                });
            }
        }

        let field = self.select_field(mesh)?;
        if let Some((_, values)) = &field {
            if values.len() != tets.len() {
                return Err(TetskinError::SizeMismatch {
                    expected: tets.len(),
                    actual: values.len(),
                });
            }
        }

        // Candidate faces, 4 per tet, in tet order then stencil order
        let candidates: Vec<[u32; 3]> = tets
            .iter()
            .flat_map(|tet| TET_FACE_STENCIL.map(|[a, b, c]| [tet[a], tet[b], tet[c]]))
            .collect();

        let mut face_counts: HashMap<[u32; 3], usize> = HashMap::with_capacity(candidates.len());
        for face in &candidates {
            *face_counts.entry(canonical_face_key(*face)).or_insert(0) += 1;
        }

        let is_boundary: Vec<bool> = candidates
            .iter()
            .map(|face| face_counts[&canonical_face_key(*face)] == 1)
            .collect();

        let mut stats = BoundaryStats {
            tets: tets.len(),
            candidate_faces: candidates.len(),
            interior_faces: face_counts.values().filter(|&&count| count == 2).count(),
            non_manifold_faces: face_counts.values().filter(|&&count| count > 2).count(),
            ..BoundaryStats::default()
        };
        if stats.non_manifold_faces > 0 {
            log::warn!(
                "{}: {} faces are shared by more than two tetrahedra and are left out of the boundary",
                mesh.name(),
                stats.non_manifold_faces
            );
        }

        let boundary_faces: Vec<[u32; 3]> = candidates
            .iter()
            .zip(&is_boundary)
            .filter_map(|(face, &keep)| keep.then_some(*face))
            .collect();
        if boundary_faces.is_empty() {
            return Err(TetskinError::EmptyBoundary {
                candidates: candidates.len(),
            });
        }
        stats.boundary_faces = boundary_faces.len();

        // Restrict to the points the boundary touches, keeping their relative order
        let mut points: Vec<u32> = boundary_faces.iter().flatten().copied().collect();
        points.sort_unstable();
        points.dedup();
        stats.boundary_points = points.len();

        let mut lut = vec![u32::MAX; num_points];
        for (new_index, &old_index) in points.iter().enumerate() {
            lut[old_index as usize] = new_index as u32;
        }

        let vertices = points
            .iter()
            .map(|&i| mesh.vertices()[i as usize])
            .collect();
        let faces = boundary_faces
            .iter()
            .map(|face| face.map(|i| lut[i as usize]))
            .collect();

        let mut surface = SurfaceMesh::new(format!("{} boundary", mesh.name()), vertices, faces);

        if let Some((name, values)) = field {
            // One value per candidate face, filtered with the same mask as the faces
            let face_values: Vec<f64> = values
                .iter()
                .flat_map(|&v| [v; 4])
                .zip(&is_boundary)
                .filter_map(|(v, &keep)| keep.then_some(v))
                .collect();
            surface.add_face_scalar_quantity(name, face_values)?;
        }

        log::debug!("{}: {stats:?}", mesh.name());
        Ok((surface, stats))
    }

    /// Resolves the field to propagate and its per-tet values.
    fn select_field<'a>(&self, mesh: &'a VolumeMesh) -> Result<Option<(&'a str, Vec<f64>)>> {
        let quantity = match &self.data_label {
            Some(label) => Some(
                mesh.get_cell_quantity(label)
                    .ok_or_else(|| TetskinError::FieldNotFound(label.clone()))?,
            ),
            None => mesh.cell_quantities().first(),
        };

        let Some(quantity) = quantity else {
            return Ok(None);
        };
        let values = quantity
            .values_for(CellKind::Tetra)
            .ok_or_else(|| TetskinError::FieldNotFound(quantity.name().to_string()))?;
        Ok(Some((quantity.name(), values)))
    }
}
