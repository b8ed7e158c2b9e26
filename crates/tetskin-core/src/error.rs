//! Error types for tetskin.

use thiserror::Error;

/// The main error type for tetskin operations.
#[derive(Error, Debug)]
pub enum TetskinError {
    /// The input mesh has no tetrahedral cells to extract a boundary from.
    #[error("unsupported cell type: mesh has no tetrahedral cells (found: {found})")]
    UnsupportedCellType { found: String },

    /// Every candidate face is shared, so the mesh has no boundary.
    #[error("mesh has no boundary faces ({candidates} candidate faces, all shared)")]
    EmptyBoundary { candidates: usize },

    /// The requested cell data field does not exist.
    #[error("cell data field '{0}' not found")]
    FieldNotFound(String),

    /// A cell references a point that does not exist.
    #[error("cell {cell} references point {index}, but mesh has {num_points} points")]
    InvalidPointIndex {
        cell: usize,
        index: u32,
        num_points: usize,
    },

    /// Data size mismatch.
    #[error("data size mismatch: expected {expected}, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    /// Malformed mesh file contents.
    #[error("parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    /// The file extension does not map to a supported format.
    #[error("unsupported mesh format: '{0}'")]
    UnsupportedFormat(String),

    /// PLY header/payload consistency error.
    #[error("PLY error: {0}")]
    Ply(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for tetskin operations.
pub type Result<T> = std::result::Result<T, TetskinError>;
