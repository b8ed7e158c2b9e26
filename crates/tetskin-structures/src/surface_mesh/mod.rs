//! Surface mesh structure.

mod quantities;
pub use quantities::*;

use glam::DVec3;
use tetskin_core::{Result, TetskinError};

use crate::volume_mesh::bounding_box;

/// A triangular surface mesh with at most one per-face scalar field.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceMesh {
    name: String,
    vertices: Vec<DVec3>,
    faces: Vec<[u32; 3]>,
    face_quantity: Option<SurfaceMeshFaceScalarQuantity>,
}

impl SurfaceMesh {
    /// Creates a new surface mesh from vertices and triangle faces.
    pub fn new(name: impl Into<String>, vertices: Vec<DVec3>, faces: Vec<[u32; 3]>) -> Self {
        Self {
            name: name.into(),
            vertices,
            faces,
            face_quantity: None,
        }
    }

    /// Returns the name of the mesh.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the number of vertices.
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of faces.
    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }

    /// Returns the vertices.
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns the triangle faces.
    pub fn faces(&self) -> &[[u32; 3]] {
        &self.faces
    }

    /// Returns the axis-aligned bounding box, or `None` for an empty mesh.
    pub fn bounding_box(&self) -> Option<(DVec3, DVec3)> {
        bounding_box(&self.vertices)
    }

    /// Sets the per-face scalar field, replacing any previous one.
    pub fn add_face_scalar_quantity(
        &mut self,
        name: impl Into<String>,
        values: Vec<f64>,
    ) -> Result<&mut Self> {
        if values.len() != self.faces.len() {
            return Err(TetskinError::SizeMismatch {
                expected: self.faces.len(),
                actual: values.len(),
            });
        }
        self.face_quantity = Some(SurfaceMeshFaceScalarQuantity::new(name, values));
        Ok(self)
    }

    /// Returns the per-face scalar field, if any.
    pub fn face_quantity(&self) -> Option<&SurfaceMeshFaceScalarQuantity> {
        self.face_quantity.as_ref()
    }

    /// Computes the unit normal of each face (zero for degenerate faces).
    pub fn face_normals(&self) -> Vec<DVec3> {
        self.faces
            .iter()
            .map(|&[a, b, c]| {
                let p0 = self.vertices[a as usize];
                let p1 = self.vertices[b as usize];
                let p2 = self.vertices[c as usize];
                (p1 - p0).cross(p2 - p0).normalize_or_zero()
            })
            .collect()
    }

    /// Total surface area.
    pub fn area(&self) -> f64 {
        self.faces
            .iter()
            .map(|&[a, b, c]| {
                let p0 = self.vertices[a as usize];
                let p1 = self.vertices[b as usize];
                let p2 = self.vertices[c as usize];
                0.5 * (p1 - p0).cross(p2 - p0).length()
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tetskin_core::Quantity;

    fn right_triangle() -> SurfaceMesh {
        SurfaceMesh::new(
            "tri",
            vec![DVec3::ZERO, DVec3::X, DVec3::Y],
            vec![[0, 1, 2]],
        )
    }

    #[test]
    fn test_face_quantity_size_checked() {
        let mut mesh = right_triangle();
        assert!(mesh.add_face_scalar_quantity("bad", vec![1.0, 2.0]).is_err());
        assert!(mesh.face_quantity().is_none());

        mesh.add_face_scalar_quantity("ok", vec![3.0]).unwrap();
        let q = mesh.face_quantity().unwrap();
        assert_eq!(q.name(), "ok");
        assert_eq!(q.data_size(), 1);
    }

    #[test]
    fn test_face_quantity_replaced() {
        let mut mesh = right_triangle();
        mesh.add_face_scalar_quantity("a", vec![1.0]).unwrap();
        mesh.add_face_scalar_quantity("b", vec![2.0]).unwrap();
        assert_eq!(mesh.face_quantity().unwrap().name(), "b");
    }

    #[test]
    fn test_geometry_helpers() {
        let mesh = right_triangle();
        assert_eq!(mesh.face_normals(), vec![DVec3::Z]);
        assert!((mesh.area() - 0.5).abs() < 1e-12);
        assert_eq!(mesh.bounding_box(), Some((DVec3::ZERO, DVec3::new(1.0, 1.0, 0.0))));
    }
}
