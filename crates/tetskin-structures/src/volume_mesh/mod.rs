//! Volume mesh structure.
//!
//! # Overview
//!
//! `VolumeMesh` stores points and an ordered list of [`CellBlock`]s. Boundary
//! extraction only looks at tetrahedra (every `tetra` block, concatenated in block
//! order), but other blocks are kept so that a mesh read from disk can be written
//! back unchanged.
//!
//! # Boundary Faces
//!
//! Exterior faces (not shared between tetrahedra) are found by hashing sorted face
//! vertex indices and counting occurrences. See [`BoundaryExtractor`].
//!
//! # Quantities
//!
//! Supported quantities:
//! - `VolumeMeshVertexScalarQuantity` - scalar per vertex
//! - `VolumeMeshCellScalarQuantity` - scalar per cell, one array per cell block
//!
//! # Example
//!
//! ```rust
//! use glam::DVec3;
//! use tetskin_structures::VolumeMesh;
//!
//! // Create a single tetrahedron
//! let vertices = vec![
//!     DVec3::new(0.0, 0.0, 0.0),
//!     DVec3::new(1.0, 0.0, 0.0),
//!     DVec3::new(0.0, 1.0, 0.0),
//!     DVec3::new(0.0, 0.0, 1.0),
//! ];
//! let mut mesh = VolumeMesh::new_tet_mesh("my_tet", vertices, vec![[0, 1, 2, 3]]);
//! mesh.add_cell_scalar_quantity("density", vec![2.5]).unwrap();
//!
//! let surface = mesh.extract_boundary(None).unwrap();
//! assert_eq!(surface.num_faces(), 4);
//! ```

mod boundary;
mod scalar_quantity;

pub use boundary::{BoundaryExtractor, BoundaryStats, TET_FACE_STENCIL};
pub use scalar_quantity::*;

use glam::DVec3;
use tetskin_core::quantity::Quantity;
use tetskin_core::{CellBlock, CellKind, Result, TetskinError};

use crate::SurfaceMesh;

/// A volume mesh structure made of cell blocks.
#[derive(Debug, Clone, PartialEq)]
pub struct VolumeMesh {
    name: String,

    // Geometry
    vertices: Vec<DVec3>,
    cells: Vec<CellBlock>,

    // Data fields, in insertion order
    cell_quantities: Vec<VolumeMeshCellScalarQuantity>,
    vertex_quantities: Vec<VolumeMeshVertexScalarQuantity>,
}

impl VolumeMesh {
    /// Creates a new volume mesh from vertices and cell blocks.
    pub fn new(name: impl Into<String>, vertices: Vec<DVec3>, cells: Vec<CellBlock>) -> Self {
        Self {
            name: name.into(),
            vertices,
            cells,
            cell_quantities: Vec::new(),
            vertex_quantities: Vec::new(),
        }
    }

    /// Creates a tetrahedral mesh with a single `tetra` block.
    pub fn new_tet_mesh(name: impl Into<String>, vertices: Vec<DVec3>, tets: Vec<[u32; 4]>) -> Self {
        Self::new(name, vertices, vec![CellBlock::from_tets(&tets)])
    }

    /// Returns the name of the mesh.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the number of vertices.
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of cells across all blocks.
    pub fn num_cells(&self) -> usize {
        self.cells.iter().map(CellBlock::len).sum()
    }

    /// Returns the vertices.
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns the cell blocks.
    pub fn cell_blocks(&self) -> &[CellBlock] {
        &self.cells
    }

    /// Returns the distinct cell kinds present, in first-seen order.
    pub fn cell_kinds(&self) -> Vec<CellKind> {
        let mut kinds = Vec::new();
        for block in &self.cells {
            if !kinds.contains(&block.kind()) {
                kinds.push(block.kind());
            }
        }
        kinds
    }

    /// Returns all tetrahedra, concatenated over every `tetra` block.
    pub fn tets(&self) -> Vec<[u32; 4]> {
        self.cells
            .iter()
            .filter(|block| block.kind() == CellKind::Tetra)
            .flat_map(CellBlock::cells)
            .map(|c| [c[0], c[1], c[2], c[3]])
            .collect()
    }

    /// Returns the number of tetrahedra.
    pub fn num_tets(&self) -> usize {
        self.cells
            .iter()
            .filter(|block| block.kind() == CellKind::Tetra)
            .map(CellBlock::len)
            .sum()
    }

    /// Returns the axis-aligned bounding box, or `None` for an empty mesh.
    pub fn bounding_box(&self) -> Option<(DVec3, DVec3)> {
        bounding_box(&self.vertices)
    }

    /// Adds a cell scalar quantity with one value per cell, across all blocks in
    /// block order.
    pub fn add_cell_scalar_quantity(
        &mut self,
        name: impl Into<String>,
        values: Vec<f64>,
    ) -> Result<&mut Self> {
        let expected = self.num_cells();
        if values.len() != expected {
            return Err(TetskinError::SizeMismatch {
                expected,
                actual: values.len(),
            });
        }
        let mut rest = values.as_slice();
        let blocks = self
            .cells
            .iter()
            .map(|block| {
                let (head, tail) = rest.split_at(block.len());
                rest = tail;
                (block.kind(), head.to_vec())
            })
            .collect();
        self.cell_quantities
            .push(VolumeMeshCellScalarQuantity::new(name, blocks));
        Ok(self)
    }

    /// Adds a cell scalar quantity with one value array per cell block.
    pub fn add_cell_scalar_quantity_blocks(
        &mut self,
        name: impl Into<String>,
        block_values: Vec<Vec<f64>>,
    ) -> Result<&mut Self> {
        if block_values.len() != self.cells.len() {
            return Err(TetskinError::SizeMismatch {
                expected: self.cells.len(),
                actual: block_values.len(),
            });
        }
        let mut blocks = Vec::with_capacity(block_values.len());
        for (block, values) in self.cells.iter().zip(block_values) {
            if values.len() != block.len() {
                return Err(TetskinError::SizeMismatch {
                    expected: block.len(),
                    actual: values.len(),
                });
            }
            blocks.push((block.kind(), values));
        }
        self.cell_quantities
            .push(VolumeMeshCellScalarQuantity::new(name, blocks));
        Ok(self)
    }

    /// Adds a vertex scalar quantity.
    pub fn add_vertex_scalar_quantity(
        &mut self,
        name: impl Into<String>,
        values: Vec<f64>,
    ) -> Result<&mut Self> {
        if values.len() != self.vertices.len() {
            return Err(TetskinError::SizeMismatch {
                expected: self.vertices.len(),
                actual: values.len(),
            });
        }
        self.vertex_quantities
            .push(VolumeMeshVertexScalarQuantity::new(name, values));
        Ok(self)
    }

    /// Returns the cell quantities in insertion order.
    pub fn cell_quantities(&self) -> &[VolumeMeshCellScalarQuantity] {
        &self.cell_quantities
    }

    /// Returns the vertex quantities in insertion order.
    pub fn vertex_quantities(&self) -> &[VolumeMeshVertexScalarQuantity] {
        &self.vertex_quantities
    }

    /// Looks up a cell quantity by name.
    pub fn get_cell_quantity(&self, name: &str) -> Option<&VolumeMeshCellScalarQuantity> {
        self.cell_quantities.iter().find(|q| q.name() == name)
    }

    /// Extracts the boundary surface, carrying `data_label` (or the first cell
    /// field when `None`) onto the faces.
    pub fn extract_boundary(&self, data_label: Option<&str>) -> Result<SurfaceMesh> {
        let extractor = match data_label {
            Some(label) => BoundaryExtractor::new().with_data_label(label),
            None => BoundaryExtractor::new(),
        };
        extractor.extract(self)
    }
}

/// Computes the axis-aligned bounding box of a point set.
pub(crate) fn bounding_box(points: &[DVec3]) -> Option<(DVec3, DVec3)> {
    let first = *points.first()?;
    Some(
        points
            .iter()
            .fold((first, first), |(min, max), &p| (min.min(p), max.max(p))),
    )
}
