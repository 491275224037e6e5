//! Error types for configuration parsing and slicing operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all slicing operations
#[derive(Debug)]
pub enum SlicerError {
    /// Configuration file does not exist
    ///
    /// Fatal for the whole run; no sections are processed. All other
    /// variants are confined to a single configuration section.
    ConfigMissing {
        /// Path to the missing configuration file
        path: PathBuf,
    },

    /// A required configuration key is absent from a section
    MissingParameter {
        /// Name of the configuration section
        section: String,
        /// The missing key
        key: &'static str,
    },

    /// A configuration value failed validation
    InvalidValue {
        /// Name of the configuration section
        section: String,
        /// The offending key
        key: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Tileset image path does not exist
    ImageNotFound {
        /// Path to the missing tileset image
        path: PathBuf,
    },

    /// Failed to decode a tileset image
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to save a tile to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for SlicerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConfigMissing { path } => {
                write!(f, "Configuration file not found: {}", path.display())
            }
            Self::MissingParameter { section, key } => {
                write!(f, "Missing required parameter '{key}' in section '{section}'")
            }
            Self::InvalidValue {
                section,
                key,
                value,
                reason,
            } => {
                write!(
                    f,
                    "Invalid value '{value}' for '{key}' in section '{section}': {reason}"
                )
            }
            Self::ImageNotFound { path } => {
                write!(f, "Tileset file not found: {}", path.display())
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for SlicerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for slicing results
pub type Result<T> = std::result::Result<T, SlicerError>;

/// Create a missing parameter error for a configuration section
pub fn missing_parameter(section: &impl ToString, key: &'static str) -> SlicerError {
    SlicerError::MissingParameter {
        section: section.to_string(),
        key,
    }
}

/// Create an invalid value error for a configuration section
pub fn invalid_value(
    section: &impl ToString,
    key: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> SlicerError {
    SlicerError::InvalidValue {
        section: section.to_string(),
        key,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
