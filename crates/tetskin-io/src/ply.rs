//! PLY output for surface meshes.
//!
//! Vertices are written as `x y z` doubles. Faces carry a `vertex_indices` list
//! and, when the mesh has a face field, one `double` property named after it.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use ply_rs::ply::{
    Addable, DefaultElement, ElementDef, Encoding, Ply, Property, PropertyDef, PropertyType,
    ScalarType,
};
use ply_rs::writer::Writer;
use tetskin_core::{PlyEncoding, Quantity, Result, TetskinError};
use tetskin_structures::SurfaceMesh;

/// Turns a field name into a valid PLY property name.
///
/// Characters outside `[A-Za-z0-9_]` become `_`, so `medit:ref` is written as
/// `medit_ref`.
pub fn property_name(label: &str) -> String {
    let name: String = label
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect();
    if name.is_empty() {
        "data".to_string()
    } else {
        name
    }
}

/// Builds the in-memory PLY document for a surface mesh.
fn build_ply(mesh: &SurfaceMesh, encoding: PlyEncoding) -> Result<Ply<DefaultElement>> {
    let mut ply = Ply::<DefaultElement>::new();
    ply.header.encoding = match encoding {
        PlyEncoding::Ascii => Encoding::Ascii,
        PlyEncoding::BinaryLittleEndian => Encoding::BinaryLittleEndian,
    };
    ply.header
        .comments
        .push(format!("{} written by tetskin", mesh.name()));

    let mut vertex_element = ElementDef::new("vertex".to_string());
    for axis in ["x", "y", "z"] {
        vertex_element.properties.add(PropertyDef::new(
            axis.to_string(),
            PropertyType::Scalar(ScalarType::Double),
        ));
    }
    ply.header.elements.add(vertex_element);

    let data_property = mesh.face_quantity().map(|q| property_name(q.name()));
    let mut face_element = ElementDef::new("face".to_string());
    face_element.properties.add(PropertyDef::new(
        "vertex_indices".to_string(),
        PropertyType::List(ScalarType::UChar, ScalarType::UInt),
    ));
    if let Some(name) = &data_property {
        face_element.properties.add(PropertyDef::new(
            name.clone(),
            PropertyType::Scalar(ScalarType::Double),
        ));
    }
    ply.header.elements.add(face_element);

    let vertices = mesh
        .vertices()
        .iter()
        .map(|p| {
            let mut element = DefaultElement::new();
            element.insert("x".to_string(), Property::Double(p.x));
            element.insert("y".to_string(), Property::Double(p.y));
            element.insert("z".to_string(), Property::Double(p.z));
            element
        })
        .collect();
    ply.payload.insert("vertex".to_string(), vertices);

    let face_values = mesh.face_quantity().map(|q| q.values());
    let faces = mesh
        .faces()
        .iter()
        .enumerate()
        .map(|(i, face)| {
            let mut element = DefaultElement::new();
            element.insert("vertex_indices".to_string(), Property::ListUInt(face.to_vec()));
            if let (Some(name), Some(values)) = (&data_property, face_values) {
                element.insert(name.clone(), Property::Double(values[i]));
            }
            element
        })
        .collect();
    ply.payload.insert("face".to_string(), faces);

    ply.make_consistent()
        .map_err(|e| TetskinError::Ply(format!("{e:?}")))?;
    Ok(ply)
}

/// Writes the binary little endian body in header property order.
///
/// `ply-rs` writes the element count as the length of every list in binary
/// mode, so the body is encoded here and only the header goes through its writer.
fn write_binary_body<W: Write>(out: &mut W, mesh: &SurfaceMesh) -> Result<usize> {
    let mut written = 0;
    for p in mesh.vertices() {
        for c in [p.x, p.y, p.z] {
            out.write_all(&c.to_le_bytes())?;
            written += 8;
        }
    }

    let face_values = mesh.face_quantity().map(|q| q.values());
    for (i, face) in mesh.faces().iter().enumerate() {
        out.write_all(&[3])?;
        written += 1;
        for index in face {
            out.write_all(&index.to_le_bytes())?;
            written += 4;
        }
        if let Some(values) = face_values {
            out.write_all(&values[i].to_le_bytes())?;
            written += 8;
        }
    }
    Ok(written)
}

/// Writes a surface mesh as PLY to any writer. Returns the number of bytes written.
pub fn write_ply_to<W: Write>(out: &mut W, mesh: &SurfaceMesh, encoding: PlyEncoding) -> Result<usize> {
    let mut ply = build_ply(mesh, encoding)?;
    let writer = Writer::<DefaultElement>::new();
    let written = match encoding {
        PlyEncoding::Ascii => writer.write_ply(out, &mut ply)?,
        PlyEncoding::BinaryLittleEndian => {
            writer.write_header(out, &ply.header)? + write_binary_body(out, mesh)?
        }
    };
    Ok(written)
}

/// Writes a surface mesh to a PLY file.
pub fn write_ply(path: &Path, mesh: &SurfaceMesh, encoding: PlyEncoding) -> Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    let written = write_ply_to(&mut out, mesh, encoding)?;
    out.flush()?;
    log::debug!("wrote {written} bytes to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;
    use ply_rs::parser::Parser;

    fn triangle_with_data() -> SurfaceMesh {
        let mut mesh = SurfaceMesh::new(
            "tri",
            vec![DVec3::ZERO, DVec3::X, DVec3::new(0.0, 1.5, 0.0)],
            vec![[0, 1, 2]],
        );
        mesh.add_face_scalar_quantity("medit:ref", vec![7.0]).unwrap();
        mesh
    }

    #[test]
    fn test_property_name() {
        assert_eq!(property_name("medit:ref"), "medit_ref");
        assert_eq!(property_name("density"), "density");
        assert_eq!(property_name(""), "data");
    }

    #[test]
    fn test_ascii_header_and_body() {
        let mut buf = Vec::new();
        write_ply_to(&mut buf, &triangle_with_data(), PlyEncoding::Ascii).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().map(str::trim).collect();

        assert_eq!(lines[0], "ply");
        assert!(lines.contains(&"format ascii 1.0"));
        assert!(lines.contains(&"element vertex 3"));
        assert!(lines.contains(&"element face 1"));
        assert!(lines.contains(&"property list uchar uint vertex_indices"));
        assert!(lines.contains(&"property double medit_ref"));
        assert!(lines.iter().any(|l| l.starts_with("3 0 1 2 7")));
    }

    #[test]
    fn test_binary_parses_back() {
        let mut buf = Vec::new();
        write_ply_to(&mut buf, &triangle_with_data(), PlyEncoding::BinaryLittleEndian).unwrap();

        let parser = Parser::<DefaultElement>::new();
        let ply = parser.read_ply(&mut buf.as_slice()).unwrap();
        assert!(matches!(ply.header.encoding, Encoding::BinaryLittleEndian));

        let vertices = &ply.payload["vertex"];
        assert_eq!(vertices.len(), 3);
        assert!(matches!(vertices[2]["y"], Property::Double(y) if (y - 1.5).abs() < 1e-12));

        let faces = &ply.payload["face"];
        assert!(matches!(&faces[0]["vertex_indices"], Property::ListUInt(v) if v == &[0, 1, 2]));
        assert!(matches!(faces[0]["medit_ref"], Property::Double(v) if (v - 7.0).abs() < 1e-12));
    }

    #[test]
    fn test_binary_lists_carry_their_own_length() {
        let mut mesh = SurfaceMesh::new(
            "pair",
            vec![DVec3::ZERO, DVec3::X, DVec3::Y, DVec3::Z],
            vec![[0, 1, 2], [0, 3, 1]],
        );
        mesh.add_face_scalar_quantity("medit:ref", vec![7.0, 9.0]).unwrap();

        let mut buf = Vec::new();
        let written =
            write_ply_to(&mut buf, &mesh, PlyEncoding::BinaryLittleEndian).unwrap();
        assert_eq!(written, buf.len());

        // 4 vertices of 3 doubles, then 2 faces of (uchar, 3 uint, double)
        let header_end = buf
            .windows(b"end_header\n".len())
            .position(|w| w == b"end_header\n")
            .unwrap()
            + b"end_header\n".len();
        let body = &buf[header_end..];
        assert_eq!(body.len(), 4 * 24 + 2 * 21);
        let faces = &body[4 * 24..];
        assert_eq!(faces[0], 3);
        assert_eq!(faces[21], 3);
        assert_eq!(&faces[22..26], &0u32.to_le_bytes());
        assert_eq!(&faces[26..30], &3u32.to_le_bytes());

        let ply = Parser::<DefaultElement>::new()
            .read_ply(&mut buf.as_slice())
            .unwrap();
        let faces = &ply.payload["face"];
        assert_eq!(faces.len(), 2);
        assert!(matches!(&faces[1]["vertex_indices"], Property::ListUInt(v) if v == &[0, 3, 1]));
        assert!(matches!(faces[1]["medit_ref"], Property::Double(v) if (v - 9.0).abs() < 1e-12));
    }

    #[test]
    fn test_no_face_field() {
        let mesh = SurfaceMesh::new("tri", vec![DVec3::ZERO, DVec3::X, DVec3::Y], vec![[0, 1, 2]]);
        let mut buf = Vec::new();
        write_ply_to(&mut buf, &mesh, PlyEncoding::Ascii).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(!text.contains("medit_ref"));
        assert!(text.lines().any(|l| l.trim() == "3 0 1 2"));
    }
}
