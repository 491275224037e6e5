//! Input/output operations for configuration, images, and user feedback

/// Command-line interface and per-section processing orchestration
pub mod cli;
/// INI configuration parsing and tileset definitions
pub mod config;
/// Runtime constants and configuration key names
pub mod configuration;
/// Error types for all slicing operations
pub mod error;
/// Source image loading and tile export
pub mod image;
/// Progress display for batch runs
pub mod progress;
