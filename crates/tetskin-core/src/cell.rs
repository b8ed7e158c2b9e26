//! Cell kinds and cell blocks.
//!
//! A volume mesh stores its connectivity as an ordered list of [`CellBlock`]s.
//! Each block holds cells of a single [`CellKind`] in a flat index buffer, so
//! several blocks of the same kind may appear (one per file section, for example).

use std::fmt;

/// Element type of a cell block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellKind {
    /// Line segment (2 vertices)
    Line,
    /// Triangle (3 vertices)
    Triangle,
    /// Quadrilateral (4 vertices)
    Quad,
    /// Tetrahedron (4 vertices)
    Tetra,
    /// Triangular prism (6 vertices)
    Wedge,
    /// Hexahedron (8 vertices)
    Hexahedron,
}

impl CellKind {
    /// Number of vertex indices per cell.
    pub fn nodes_per_cell(self) -> usize {
        match self {
            Self::Line => 2,
            Self::Triangle => 3,
            Self::Quad | Self::Tetra => 4,
            Self::Wedge => 6,
            Self::Hexahedron => 8,
        }
    }

    /// Element tag used to key cell blocks and cell data.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Line => "line",
            Self::Triangle => "triangle",
            Self::Quad => "quad",
            Self::Tetra => "tetra",
            Self::Wedge => "wedge",
            Self::Hexahedron => "hexahedron",
        }
    }

    /// Returns true for 2D cells that can be written as polygon faces.
    pub fn is_surface(self) -> bool {
        matches!(self, Self::Triangle | Self::Quad)
    }
}

impl fmt::Display for CellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A run of cells sharing one [`CellKind`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellBlock {
    kind: CellKind,
    connectivity: Vec<u32>,
}

impl CellBlock {
    /// Creates a block from a flat connectivity buffer.
    ///
    /// Returns `None` if the buffer length is not a multiple of the cell size.
    pub fn new(kind: CellKind, connectivity: Vec<u32>) -> Option<Self> {
        if connectivity.len() % kind.nodes_per_cell() != 0 {
            return None;
        }
        Some(Self { kind, connectivity })
    }

    /// Creates a tetrahedral block.
    pub fn from_tets(tets: &[[u32; 4]]) -> Self {
        Self {
            kind: CellKind::Tetra,
            connectivity: tets.iter().flatten().copied().collect(),
        }
    }

    /// Creates a triangle block.
    pub fn from_triangles(tris: &[[u32; 3]]) -> Self {
        Self {
            kind: CellKind::Triangle,
            connectivity: tris.iter().flatten().copied().collect(),
        }
    }

    /// Returns the kind of cells in this block.
    pub fn kind(&self) -> CellKind {
        self.kind
    }

    /// Returns the number of cells.
    pub fn len(&self) -> usize {
        self.connectivity.len() / self.kind.nodes_per_cell()
    }

    /// Returns true if the block holds no cells.
    pub fn is_empty(&self) -> bool {
        self.connectivity.is_empty()
    }

    /// Returns the flat connectivity buffer.
    pub fn connectivity(&self) -> &[u32] {
        &self.connectivity
    }

    /// Iterates over the cells, one index slice per cell.
    pub fn cells(&self) -> std::slice::ChunksExact<'_, u32> {
        self.connectivity.chunks_exact(self.kind.nodes_per_cell())
    }
}
