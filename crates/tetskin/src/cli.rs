//! Command line interface of the `tetskin` binary.

use std::path::PathBuf;

use clap::{value_parser, Parser, Subcommand};
use tetskin_core::{ConvertOptions, PlyEncoding, Result};

use crate::{convert_to_obj, convert_to_ply};

/// Extract boundary surfaces from tetrahedral meshes.
#[derive(Debug, Parser)]
#[command(name = "tetskin", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract the boundary surface of a tetrahedral mesh and write it as PLY
    ToPly {
        /// Input volume mesh (.mesh)
        #[arg(value_parser = value_parser!(PathBuf))]
        input: PathBuf,
        /// Output surface mesh (.ply)
        #[arg(value_parser = value_parser!(PathBuf))]
        output: PathBuf,
        /// Cell data field to carry onto the faces (default: first field)
        #[arg(short = 'd', long)]
        data_label: Option<String>,
        /// Write ASCII PLY instead of binary little endian
        #[arg(long)]
        ascii: bool,
    },
    /// Write a mesh as OBJ without geometric processing
    ToObj {
        /// Input mesh (.mesh)
        #[arg(value_parser = value_parser!(PathBuf))]
        input: PathBuf,
        /// Output mesh (.obj)
        #[arg(value_parser = value_parser!(PathBuf))]
        output: PathBuf,
    },
    /// Run a PLY conversion configured by a JSON file
    Run {
        /// JSON file with `input_path`, `output_path`, `data_label` and `ply_encoding`
        #[arg(short, long, value_parser = value_parser!(PathBuf))]
        config: PathBuf,
    },
}

impl Command {
    /// Builds the PLY conversion options, if this is a PLY conversion.
    pub fn convert_options(&self) -> Result<Option<ConvertOptions>> {
        match self {
            Self::ToPly {
                input,
                output,
                data_label,
                ascii,
            } => {
                let mut options = ConvertOptions::new(input, output);
                options.data_label.clone_from(data_label);
                if *ascii {
                    options.ply_encoding = PlyEncoding::Ascii;
                }
                Ok(Some(options))
            }
            Self::Run { config } => ConvertOptions::from_json_file(config).map(Some),
            Self::ToObj { .. } => Ok(None),
        }
    }

    /// Runs the command.
    pub fn execute(&self) -> Result<()> {
        if let Some(options) = self.convert_options()? {
            convert_to_ply(&options)?;
        } else if let Self::ToObj { input, output } = self {
            convert_to_obj(input, output)?;
        }
        Ok(())
    }
}
