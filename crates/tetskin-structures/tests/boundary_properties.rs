//! Property tests for boundary extraction.
//!
//! Random tetrahedra soups exercise the re-indexing invariants, and Kuhn
//! subdivisions of cube grids give meshes whose boundary is known in closed form.

use std::collections::HashMap;

use glam::DVec3;
use proptest::prelude::*;
use tetskin_core::{Quantity, TetskinError};
use tetskin_structures::{BoundaryExtractor, VolumeMesh, TET_FACE_STENCIL};

/// Splits an `n x n x n` grid of unit cubes into 6 tets per cube.
fn cube_grid(n: u32) -> VolumeMesh {
    let side = n + 1;
    let index = |x: u32, y: u32, z: u32| x + side * (y + side * z);

    let mut vertices = Vec::new();
    for z in 0..side {
        for y in 0..side {
            for x in 0..side {
                vertices.push(DVec3::new(f64::from(x), f64::from(y), f64::from(z)));
            }
        }
    }

    const AXIS_ORDERS: [[usize; 3]; 6] = [
        [0, 1, 2],
        [0, 2, 1],
        [1, 0, 2],
        [1, 2, 0],
        [2, 0, 1],
        [2, 1, 0],
    ];
    let mut tets = Vec::new();
    for z in 0..n {
        for y in 0..n {
            for x in 0..n {
                for order in AXIS_ORDERS {
                    let mut corner = [x, y, z];
                    let mut tet = [index(x, y, z); 4];
                    for (step, axis) in order.iter().enumerate() {
                        corner[*axis] += 1;
                        tet[step + 1] = index(corner[0], corner[1], corner[2]);
                    }
                    tets.push(tet);
                }
            }
        }
    }
    VolumeMesh::new_tet_mesh("grid", vertices, tets)
}

/// Counts canonical face occurrences independently of the extractor.
fn occurrence_counts(tets: &[[u32; 4]]) -> HashMap<[u32; 3], usize> {
    let mut counts = HashMap::new();
    for tet in tets {
        for [a, b, c] in TET_FACE_STENCIL {
            let mut key = [tet[a], tet[b], tet[c]];
            key.sort_unstable();
            *counts.entry(key).or_insert(0) += 1;
        }
    }
    counts
}

fn arb_tet_mesh() -> impl Strategy<Value = VolumeMesh> {
    (4u32..24).prop_flat_map(|num_points| {
        let tet = proptest::sample::subsequence((0..num_points).collect::<Vec<_>>(), 4)
            .prop_shuffle()
            .prop_map(|v| [v[0], v[1], v[2], v[3]]);
        (Just(num_points), prop::collection::vec(tet, 1..40))
    })
    .prop_map(|(num_points, tets)| {
        let vertices = (0..num_points)
            .map(|i| DVec3::new(f64::from(i), f64::from(i * i), f64::from(i % 3)))
            .collect();
        let cell_ids = (0..tets.len()).map(|i| i as f64).collect();
        let mut mesh = VolumeMesh::new_tet_mesh("soup", vertices, tets);
        mesh.add_cell_scalar_quantity("cell_id", cell_ids)
            .expect("one value per tet");
        mesh
    })
}

proptest! {
    #[test]
    fn boundary_invariants_hold(mesh in arb_tet_mesh()) {
        let tets = mesh.tets();
        let counts = occurrence_counts(&tets);
        let expected_faces = tets
            .iter()
            .flat_map(|tet| TET_FACE_STENCIL.map(|[a, b, c]| {
                let mut key = [tet[a], tet[b], tet[c]];
                key.sort_unstable();
                key
            }))
            .filter(|key| counts[key] == 1)
            .count();

        match BoundaryExtractor::new().extract(&mesh) {
            Ok(surface) => {
                // Face-count parity
                prop_assert_eq!(surface.num_faces(), expected_faces);

                // Every face index is in range
                let n = surface.num_vertices();
                prop_assert!(surface.faces().iter().flatten().all(|&i| (i as usize) < n));

                // No orphan points
                let mut used = vec![false; n];
                for &i in surface.faces().iter().flatten() {
                    used[i as usize] = true;
                }
                prop_assert!(used.iter().all(|&u| u));

                // Output points keep the input order
                let positions: Vec<usize> = surface
                    .vertices()
                    .iter()
                    .map(|p| mesh.vertices().iter().position(|q| q == p).unwrap())
                    .collect();
                prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));

                // Face data comes from the owning tet
                let values = surface.face_quantity().unwrap().values();
                prop_assert_eq!(values.len(), surface.num_faces());
                for (face, &value) in surface.faces().iter().zip(values) {
                    let tet = tets[value as usize];
                    let original = face.map(|i| positions[i as usize] as u32);
                    prop_assert!(original.iter().all(|v| tet.contains(v)));
                }
            }
            Err(TetskinError::EmptyBoundary { .. }) => prop_assert_eq!(expected_faces, 0),
            Err(e) => prop_assert!(false, "unexpected error: {}", e),
        }
    }

    #[test]
    fn cube_grid_boundary_is_closed_form(n in 1u32..5) {
        let mesh = cube_grid(n);
        let (surface, stats) = BoundaryExtractor::new().extract_with_stats(&mesh).unwrap();

        let n = n as usize;
        // Two triangles per unit square on the 6 sides
        prop_assert_eq!(surface.num_faces(), 12 * n * n);
        // Every grid point except the strictly interior ones
        prop_assert_eq!(surface.num_vertices(), (n + 1).pow(3) - (n - 1).pow(3));
        prop_assert_eq!(stats.non_manifold_faces, 0);
        prop_assert_eq!(
            stats.candidate_faces,
            stats.boundary_faces + 2 * stats.interior_faces
        );
        prop_assert!((surface.area() - 6.0 * (n * n) as f64).abs() < 1e-9);
    }
}

#[test]
fn test_single_tet_keeps_all_points_and_faces() {
    let vertices = vec![
        DVec3::new(0.0, 0.0, 0.0),
        DVec3::new(1.0, 0.0, 0.0),
        DVec3::new(0.0, 1.0, 0.0),
        DVec3::new(0.0, 0.0, 1.0),
    ];
    let mesh = VolumeMesh::new_tet_mesh("tet", vertices, vec![[0, 1, 2, 3]]);
    let surface = mesh.extract_boundary(None).unwrap();

    assert_eq!(surface.num_vertices(), 4);
    assert_eq!(surface.num_faces(), 4);
}

#[test]
fn test_single_field_is_default() {
    let mut mesh = cube_grid(1);
    let ids = (0..mesh.num_tets()).map(|i| i as f64).collect();
    mesh.add_cell_scalar_quantity("only", ids).unwrap();

    let surface = mesh.extract_boundary(None).unwrap();
    let q = surface.face_quantity().unwrap();
    assert_eq!(q.name(), "only");
    assert_eq!(q.data_size(), 12);
}
