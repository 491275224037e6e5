//! Source image loading and numbered tile export

use crate::io::configuration::OUTPUT_EXTENSION;
use crate::io::error::{Result, SlicerError};
use image::RgbaImage;
use std::path::{Path, PathBuf};

/// Load a tileset image and normalize it to RGBA8
///
/// Any format the imaging backend can decode is accepted; an alpha channel
/// is added when the source has none.
///
/// # Errors
///
/// Returns [`SlicerError::ImageNotFound`] when the path does not exist and
/// [`SlicerError::ImageLoad`] when decoding fails.
pub fn load_rgba(path: &Path) -> Result<RgbaImage> {
    if !path.exists() {
        return Err(SlicerError::ImageNotFound {
            path: path.to_path_buf(),
        });
    }

    let decoded = image::open(path).map_err(|source| SlicerError::ImageLoad {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(decoded.to_rgba8())
}

/// Create the output directory if it does not exist
///
/// Idempotent; an existing directory is reused without touching its
/// contents.
///
/// # Errors
///
/// Returns [`SlicerError::FileSystem`] when directory creation fails.
pub fn ensure_output_dir(path: &Path) -> Result<()> {
    std::fs::create_dir_all(path).map_err(|source| SlicerError::FileSystem {
        path: path.to_path_buf(),
        operation: "create directory",
        source,
    })
}

/// Write one tile as `<output_dir>/<index>.png` and return the path
///
/// Indices are 1-based with no zero padding.
///
/// # Errors
///
/// Returns [`SlicerError::ImageExport`] when the PNG cannot be written.
pub fn save_tile(tile: &RgbaImage, output_dir: &Path, index: usize) -> Result<PathBuf> {
    let path = output_dir.join(format!("{index}.{OUTPUT_EXTENSION}"));
    tile.save(&path).map_err(|source| SlicerError::ImageExport {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}
