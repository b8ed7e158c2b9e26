//! Medit ASCII `.mesh` reader.
//!
//! The file is a sequence of keyword sections:
//!
//! ```text
//! MeshVersionFormatted 1
//! Dimension 3
//! Vertices
//! 4
//! 0 0 0 1
//! ...
//! Tetrahedra
//! 1
//! 1 2 3 4 7
//! End
//! ```
//!
//! Every vertex and element line ends with an integer reference. Element
//! references become the `medit:ref` cell field (one array per element section),
//! vertex references the `medit:ref` vertex field. Indices in the file are 1-based.
//!
//! Required entities, normals and tangents are skipped.

use std::path::Path;
use std::str::FromStr;

use glam::DVec3;
use tetskin_core::{CellBlock, CellKind, Result, TetskinError};
use tetskin_structures::VolumeMesh;

/// Name of the field holding Medit entity references.
pub const MEDIT_REF: &str = "medit:ref";

/// Maps a Medit element keyword to a cell kind.
fn element_kind(keyword: &str) -> Option<CellKind> {
    match keyword {
        "Edges" => Some(CellKind::Line),
        "Triangles" => Some(CellKind::Triangle),
        "Quadrilaterals" => Some(CellKind::Quad),
        "Tetrahedra" => Some(CellKind::Tetra),
        "Prisms" => Some(CellKind::Wedge),
        "Hexahedra" => Some(CellKind::Hexahedron),
        _ => None,
    }
}

/// Values per record of the sections that carry no geometry and are skipped.
fn skipped_record_width(keyword: &str, dimension: usize) -> Option<usize> {
    match keyword {
        "Corners" | "RequiredVertices" | "Ridges" | "RequiredEdges" | "RequiredTriangles"
        | "RequiredQuadrilaterals" => Some(1),
        "Normals" | "Tangents" => Some(dimension),
        "NormalAtVertices" | "TangentAtVertices" => Some(2),
        _ => None,
    }
}

/// Whitespace tokens with the line they came from.
struct Tokens<'a> {
    tokens: Vec<(usize, &'a str)>,
    pos: usize,
    last_line: usize,
}

impl<'a> Tokens<'a> {
    fn new(source: &'a str) -> Self {
        let mut tokens = Vec::new();
        let mut last_line = 1;
        for (i, line) in source.lines().enumerate() {
            let content = line.split('#').next().unwrap_or_default();
            tokens.extend(content.split_whitespace().map(|t| (i + 1, t)));
            last_line = i + 1;
        }
        Self {
            tokens,
            pos: 0,
            last_line,
        }
    }

    /// Tokens not consumed yet. Bounds allocations sized from file counts.
    fn remaining(&self) -> usize {
        self.tokens.len().saturating_sub(self.pos)
    }

    fn next_token(&mut self) -> Option<(usize, &'a str)> {
        let token = self.tokens.get(self.pos).copied();
        self.pos += 1;
        token
    }

    fn expect(&mut self, what: &str) -> Result<(usize, &'a str)> {
        self.next_token().ok_or_else(|| TetskinError::Parse {
            line: self.last_line,
            message: format!("unexpected end of file while reading {what}"),
        })
    }

    fn parse<T: FromStr>(&mut self, what: &str) -> Result<T> {
        let (line, token) = self.expect(what)?;
        token.parse().map_err(|_| TetskinError::Parse {
            line,
            message: format!("invalid {what}: '{token}'"),
        })
    }
}

/// Reads a Medit mesh file. The mesh is named after the file stem.
pub fn read_medit(path: &Path) -> Result<VolumeMesh> {
    let source = std::fs::read_to_string(path)?;
    let name = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    parse_medit(name, &source)
}

/// Parses Medit ASCII source.
pub fn parse_medit(name: impl Into<String>, source: &str) -> Result<VolumeMesh> {
    let mut tokens = Tokens::new(source);
    let mut dimension = 3;
    let mut vertices = Vec::new();
    let mut vertex_refs = Vec::new();
    let mut blocks = Vec::new();
    let mut block_refs = Vec::new();

    while let Some((line, keyword)) = tokens.next_token() {
        match keyword {
            "MeshVersionFormatted" => {
                let _version: u32 = tokens.parse("mesh version")?;
            }
            "Dimension" => {
                dimension = tokens.parse("dimension")?;
                if dimension != 2 && dimension != 3 {
                    return Err(TetskinError::Parse {
                        line,
                        message: format!("unsupported dimension {dimension}"),
                    });
                }
            }
            "Vertices" => {
                let count: usize = tokens.parse("vertex count")?;
                vertices.reserve(count.min(tokens.remaining()));
                vertex_refs.reserve(count.min(tokens.remaining()));
                for _ in 0..count {
                    let mut coords = [0.0; 3];
                    for c in coords.iter_mut().take(dimension) {
                        *c = tokens.parse("vertex coordinate")?;
                    }
                    vertices.push(DVec3::from_array(coords));
                    vertex_refs.push(tokens.parse::<f64>("vertex reference")?);
                }
            }
            "End" => break,
            keyword => {
                if let Some(width) = skipped_record_width(keyword, dimension) {
                    let count: usize = tokens.parse("record count")?;
                    for _ in 0..count {
                        for _ in 0..width {
                            let _value: f64 = tokens.parse(keyword)?;
                        }
                    }
                    log::debug!("skipped {count} {keyword} records");
                    continue;
                }
                let Some(kind) = element_kind(keyword) else {
                    return Err(TetskinError::Parse {
                        line,
                        message: format!("unknown keyword '{keyword}'"),
                    });
                };
                let (block, refs) = parse_elements(&mut tokens, kind)?;
                log::debug!("read {} {} cells", block.len(), kind);
                blocks.push(block);
                block_refs.push(refs);
            }
        }
    }

    if let Some(index) = blocks
        .iter()
        .flat_map(|block| block.connectivity().iter().copied())
        .find(|&i| i as usize >= vertices.len())
    {
        return Err(TetskinError::Parse {
            line: tokens.last_line,
            message: format!(
                "element references vertex {} but only {} vertices are defined",
                u64::from(index) + 1,
                vertices.len()
            ),
        });
    }

    let mut mesh = VolumeMesh::new(name, vertices, blocks);
    if mesh.num_vertices() > 0 {
        mesh.add_vertex_scalar_quantity(MEDIT_REF, vertex_refs)?;
    }
    if !block_refs.is_empty() {
        mesh.add_cell_scalar_quantity_blocks(MEDIT_REF, block_refs)?;
    }
    log::info!(
        "parsed medit mesh '{}': {} vertices, {} cells",
        mesh.name(),
        mesh.num_vertices(),
        mesh.num_cells()
    );
    Ok(mesh)
}

/// Parses one element section after its keyword.
fn parse_elements(tokens: &mut Tokens<'_>, kind: CellKind) -> Result<(CellBlock, Vec<f64>)> {
    let (line, token) = tokens.expect("element count")?;
    let nodes = kind.nodes_per_cell();
    let (count, len) = token
        .parse::<usize>()
        .ok()
        .and_then(|count| Some((count, count.checked_mul(nodes)?)))
        .ok_or_else(|| TetskinError::Parse {
            line,
            message: format!("invalid {kind} count: '{token}'"),
        })?;
    let mut connectivity = Vec::with_capacity(len.min(tokens.remaining()));
    let mut refs = Vec::with_capacity(count.min(tokens.remaining()));

    for _ in 0..count {
        for _ in 0..nodes {
            let (line, token) = tokens.expect("element index")?;
            let index: u32 = token
                .parse()
                .ok()
                .and_then(|i: u32| i.checked_sub(1))
                .ok_or_else(|| TetskinError::Parse {
                    line,
                    message: format!("invalid element index '{token}' (indices are 1-based)"),
                })?;
            connectivity.push(index);
        }
        refs.push(tokens.parse::<f64>("element reference")?);
    }

    let block = CellBlock::new(kind, connectivity).ok_or_else(|| TetskinError::Parse {
        line: tokens.last_line,
        message: format!("ragged {kind} connectivity"),
    })?;
    Ok((block, refs))
}
