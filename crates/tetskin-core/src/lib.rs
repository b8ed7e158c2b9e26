//! Core abstractions for tetskin.
//!
//! This crate provides the fundamental types shared by the other tetskin crates:
//! - [`TetskinError`] and the crate-wide [`Result`] alias
//! - [`ConvertOptions`] for configuring a conversion
//! - [`CellKind`] and [`CellBlock`] for volume mesh connectivity
//! - [`Quantity`] trait for data attached to meshes

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]

pub mod cell;
pub mod error;
pub mod options;
pub mod quantity;

pub use cell::{CellBlock, CellKind};
pub use error::{Result, TetskinError};
pub use options::{ConvertOptions, PlyEncoding};
pub use quantity::Quantity;

// Re-export glam types for convenience
pub use glam::DVec3;
