//! Scalar quantities for volume meshes.

use tetskin_core::quantity::{compute_range, Quantity};
use tetskin_core::CellKind;

/// A scalar quantity defined at mesh vertices.
#[derive(Debug, Clone, PartialEq)]
pub struct VolumeMeshVertexScalarQuantity {
    name: String,
    values: Vec<f64>,
}

impl VolumeMeshVertexScalarQuantity {
    /// Creates a new vertex scalar quantity.
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// Returns the values.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

impl Quantity for VolumeMeshVertexScalarQuantity {
    fn name(&self) -> &str {
        &self.name
    }
    fn data_size(&self) -> usize {
        self.values.len()
    }
    fn data_range(&self) -> Option<(f64, f64)> {
        compute_range(&self.values)
    }
}

/// A scalar quantity defined on mesh cells.
///
/// Values are stored per cell block, parallel to the mesh's blocks, so a
/// single field can span tetrahedra, boundary triangles and anything else the
/// mesh file declared.
#[derive(Debug, Clone, PartialEq)]
pub struct VolumeMeshCellScalarQuantity {
    name: String,
    blocks: Vec<(CellKind, Vec<f64>)>,
}

impl VolumeMeshCellScalarQuantity {
    /// Creates a new cell scalar quantity from one value array per cell block.
    pub fn new(name: impl Into<String>, blocks: Vec<(CellKind, Vec<f64>)>) -> Self {
        Self {
            name: name.into(),
            blocks,
        }
    }

    /// Returns the per-block value arrays.
    #[must_use]
    pub fn blocks(&self) -> &[(CellKind, Vec<f64>)] {
        &self.blocks
    }

    /// Returns the values of every block of `kind`, concatenated in block order.
    ///
    /// Returns `None` if the quantity has no block of that kind.
    pub fn values_for(&self, kind: CellKind) -> Option<Vec<f64>> {
        let mut found = false;
        let mut values = Vec::new();
        for (block_kind, block_values) in &self.blocks {
            if *block_kind == kind {
                found = true;
                values.extend_from_slice(block_values);
            }
        }
        found.then_some(values)
    }
}

impl Quantity for VolumeMeshCellScalarQuantity {
    fn name(&self) -> &str {
        &self.name
    }
    fn data_size(&self) -> usize {
        self.blocks.iter().map(|(_, values)| values.len()).sum()
    }
    fn data_range(&self) -> Option<(f64, f64)> {
        self.blocks
            .iter()
            .filter_map(|(_, values)| compute_range(values))
            .reduce(|(a_min, a_max), (b_min, b_max)| (a_min.min(b_min), a_max.max(b_max)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_for_concatenates_matching_blocks() {
        let q = VolumeMeshCellScalarQuantity::new(
            "ref",
            vec![
                (CellKind::Tetra, vec![1.0, 2.0]),
                (CellKind::Triangle, vec![9.0]),
                (CellKind::Tetra, vec![3.0]),
            ],
        );
        assert_eq!(q.values_for(CellKind::Tetra), Some(vec![1.0, 2.0, 3.0]));
        assert_eq!(q.values_for(CellKind::Hexahedron), None);
        assert_eq!(q.data_size(), 4);
        assert_eq!(q.data_range(), Some((1.0, 9.0)));
    }

    #[test]
    fn test_empty_block_still_counts_as_present() {
        let q = VolumeMeshCellScalarQuantity::new("ref", vec![(CellKind::Tetra, vec![])]);
        assert_eq!(q.values_for(CellKind::Tetra), Some(vec![]));
        assert_eq!(q.data_range(), None);
    }

    #[test]
    fn test_vertex_quantity() {
        let q = VolumeMeshVertexScalarQuantity::new("height", vec![0.0, 0.5, 1.0]);
        assert_eq!(q.data_size(), 3);
        assert_eq!(q.data_range(), Some((0.0, 1.0)));
    }
}
