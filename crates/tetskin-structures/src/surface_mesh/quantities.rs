//! Surface mesh quantity implementations.

use tetskin_core::quantity::{compute_range, Quantity};

/// A scalar quantity defined on mesh faces.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceMeshFaceScalarQuantity {
    name: String,
    values: Vec<f64>,
}

impl SurfaceMeshFaceScalarQuantity {
    /// Creates a new face scalar quantity.
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

impl Quantity for SurfaceMeshFaceScalarQuantity {
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
