//! Grid slicing core
//!
//! This module contains the slicing-related functionality:
//! - Row-major scanning of the tile grid
//! - Rectangular cropping with transparent padding
//! - Color-key transparency filtering

/// Color-key transparency filter
pub mod colorkey;
/// Rectangular crop with zero padding beyond the source extent
pub mod crop;
/// Tile grid scanning and region iteration
pub mod grid;

pub use grid::{GridSlicer, TileRegion};
