//! Wavefront OBJ output.
//!
//! OBJ only describes polygon faces, so volume meshes are written with their
//! triangle and quad blocks. Other blocks are skipped with a warning.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use glam::DVec3;
use tetskin_core::Result;
use tetskin_structures::{SurfaceMesh, VolumeMesh};

/// Writes `v` and `f` records. Face indices are 0-based on input.
fn write_records<'a, W: Write>(
    out: &mut W,
    header: &str,
    vertices: &[DVec3],
    faces: impl Iterator<Item = &'a [u32]>,
) -> Result<usize> {
    writeln!(out, "# {header}")?;
    for v in vertices {
        writeln!(out, "v {} {} {}", v.x, v.y, v.z)?;
    }
    let mut count = 0;
    for face in faces {
        write!(out, "f")?;
        for &i in face {
            write!(out, " {}", u64::from(i) + 1)?;
        }
        writeln!(out)?;
        count += 1;
    }
    Ok(count)
}

/// Writes a surface mesh as OBJ to any writer. Returns the number of faces written.
pub fn write_surface_obj_to<W: Write>(out: &mut W, mesh: &SurfaceMesh) -> Result<usize> {
    write_records(
        out,
        &format!("{} written by tetskin", mesh.name()),
        mesh.vertices(),
        mesh.faces().iter().map(<[u32; 3]>::as_slice),
    )
}

/// Writes the surface cells of a volume mesh as OBJ to any writer.
/// Returns the number of faces written.
pub fn write_volume_obj_to<W: Write>(out: &mut W, mesh: &VolumeMesh) -> Result<usize> {
    for block in mesh.cell_blocks() {
        if !block.kind().is_surface() {
            log::warn!(
                "{}: skipping {} {} cells, OBJ has no volume elements",
                mesh.name(),
                block.len(),
                block.kind()
            );
        }
    }
    let faces = mesh
        .cell_blocks()
        .iter()
        .filter(|block| block.kind().is_surface())
        .flat_map(|block| block.cells());
    write_records(
        out,
        &format!("{} written by tetskin", mesh.name()),
        mesh.vertices(),
        faces,
    )
}

/// Writes a surface mesh to an OBJ file.
pub fn write_surface_obj(path: &Path, mesh: &SurfaceMesh) -> Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    let faces = write_surface_obj_to(&mut out, mesh)?;
    out.flush()?;
    log::debug!("wrote {faces} faces to {}", path.display());
    Ok(())
}

/// Writes the surface cells of a volume mesh to an OBJ file.
pub fn write_volume_obj(path: &Path, mesh: &VolumeMesh) -> Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    let faces = write_volume_obj_to(&mut out, mesh)?;
    out.flush()?;
    log::debug!("wrote {faces} faces to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tetskin_core::CellBlock;

    #[test]
    fn test_surface_records() {
        let mesh = SurfaceMesh::new("tri", vec![DVec3::ZERO, DVec3::X, DVec3::Y], vec![[0, 1, 2]]);
        let mut buf = Vec::new();
        assert_eq!(write_surface_obj_to(&mut buf, &mesh).unwrap(), 1);

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "# tri written by tetskin");
        assert_eq!(lines[1], "v 0 0 0");
        assert_eq!(lines[2], "v 1 0 0");
        assert_eq!(lines[4], "f 1 2 3");
    }

    #[test]
    fn test_volume_blocks_filtered() {
        let vertices = vec![DVec3::ZERO, DVec3::X, DVec3::Y, DVec3::Z];
        let cells = vec![
            CellBlock::from_tets(&[[0, 1, 2, 3]]),
            CellBlock::from_triangles(&[[0, 1, 2], [0, 1, 3]]),
            CellBlock::new(tetskin_core::CellKind::Quad, vec![0, 1, 2, 3]).unwrap(),
        ];
        let mesh = VolumeMesh::new("mixed", vertices, cells);

        let mut buf = Vec::new();
        assert_eq!(write_volume_obj_to(&mut buf, &mesh).unwrap(), 3);

        let text = String::from_utf8(buf).unwrap();
        let faces: Vec<&str> = text.lines().filter(|l| l.starts_with("f ")).collect();
        assert_eq!(faces, vec!["f 1 2 3", "f 1 2 4", "f 1 2 3 4"]);
    }
}
