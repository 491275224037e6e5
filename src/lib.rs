//! Tileset slicer that cuts sprite sheets into individual tile images
//!
//! The tool reads an INI configuration describing one or more tilesets
//! (grid geometry, margin, spacing, optional color key), slices each source
//! image into tiles in row-major order, and writes the tiles as sequentially
//! numbered PNG files into a directory per tileset.

#![forbid(unsafe_code)]

/// Input/output operations: configuration, CLI orchestration, and error handling
pub mod io;
/// The slicing core: grid scanning, cropping, and color-key transparency
pub mod slicer;

pub use io::error::{Result, SlicerError};
