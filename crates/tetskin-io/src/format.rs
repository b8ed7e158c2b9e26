//! Mesh file format detection.

use std::fmt;
use std::path::Path;

use tetskin_core::{Result, TetskinError};

/// Mesh file formats known to tetskin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeshFormat {
    /// Medit ASCII `.mesh` (read only).
    Medit,
    /// Stanford `.ply` (write only).
    Ply,
    /// Wavefront `.obj` (write only).
    Obj,
}

impl MeshFormat {
    /// Detects the format from a file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "mesh" => Ok(Self::Medit),
            "ply" => Ok(Self::Ply),
            "obj" => Ok(Self::Obj),
            _ => Err(TetskinError::UnsupportedFormat(path.display().to_string())),
        }
    }

    /// Returns the canonical file extension.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Medit => "mesh",
            Self::Ply => "ply",
            Self::Obj => "obj",
        }
    }
}

impl fmt::Display for MeshFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}
