//! Configuration options for a conversion.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::Result;

/// Options for converting a volume mesh file into a surface mesh file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertOptions {
    /// Source volume mesh file.
    pub input_path: PathBuf,

    /// Destination surface mesh file.
    pub output_path: PathBuf,

    /// Cell data field to carry onto the surface faces.
    ///
    /// When `None`, the first field of the input mesh is used (if any).
    pub data_label: Option<String>,

    /// Encoding of the written PLY file.
    pub ply_encoding: PlyEncoding,
}

impl ConvertOptions {
    /// Creates options for the given input and output paths.
    pub fn new(input_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: output_path.into(),
            ..Self::default()
        }
    }

    /// Sets the cell data field to propagate.
    #[must_use]
    pub fn with_data_label(mut self, label: impl Into<String>) -> Self {
        self.data_label = Some(label.into());
        self
    }

    /// Sets the PLY encoding.
    #[must_use]
    pub fn with_ply_encoding(mut self, encoding: PlyEncoding) -> Self {
        self.ply_encoding = encoding;
        self
    }

    /// Parses options from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads options from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("loading conversion options from {}", path.display());
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Serializes the options as pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Encoding for PLY output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PlyEncoding {
    /// Human-readable ASCII.
    Ascii,
    /// Binary little endian (default).
    #[default]
    BinaryLittleEndian,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = ConvertOptions::new("in.mesh", "out.ply");
        assert_eq!(opts.input_path, PathBuf::from("in.mesh"));
        assert_eq!(opts.data_label, None);
        assert_eq!(opts.ply_encoding, PlyEncoding::BinaryLittleEndian);
    }

    #[test]
    fn test_empty_json_is_default() {
        let opts = ConvertOptions::from_json_str("{}").unwrap();
        assert_eq!(opts, ConvertOptions::default());
        assert_eq!(opts.input_path, PathBuf::new());
        assert_eq!(opts.ply_encoding, PlyEncoding::BinaryLittleEndian);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let opts = ConvertOptions::from_json_str(
            r#"{ "input_path": "a.mesh", "output_path": "b.ply", "data_label": "medit:ref" }"#,
        )
        .unwrap();
        assert_eq!(opts.output_path, PathBuf::from("b.ply"));
        assert_eq!(opts.data_label.as_deref(), Some("medit:ref"));
        assert_eq!(opts.ply_encoding, PlyEncoding::BinaryLittleEndian);
    }

    #[test]
    fn test_json_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("opts.json");
        let opts = ConvertOptions::new("a.mesh", "b.ply")
            .with_data_label("density")
            .with_ply_encoding(PlyEncoding::Ascii);
        std::fs::write(&path, opts.to_json_string().unwrap()).unwrap();

        let loaded = ConvertOptions::from_json_file(&path).unwrap();
        assert_eq!(loaded, opts);
    }

    #[test]
    fn test_invalid_json_is_error() {
        let err = ConvertOptions::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, crate::TetskinError::Json(_)));
    }
}
