//! Runtime constants and configuration key names

// Input settings
/// Default configuration file name, resolved against the working directory
pub const DEFAULT_CONFIG_FILE: &str = "config.ini";

// Configuration keys recognized inside each tileset section
/// Output directory name for the tileset
pub const KEY_TILESET_NAME: &str = "tileset_name";
/// Path to the tileset image
pub const KEY_TILESET_PATH: &str = "tileset_path";
/// Width of a single tile in pixels
pub const KEY_TILE_WIDTH: &str = "tile_width";
/// Height of a single tile in pixels
pub const KEY_TILE_HEIGHT: &str = "tile_height";
/// Offset from the image edge before the grid begins
pub const KEY_MARGIN: &str = "margin";
/// Gap between adjacent tiles in the grid
pub const KEY_SPACING: &str = "spacing";
/// Optional comma-separated R,G,B color to treat as transparent
pub const KEY_TRANSPARENT_COLOR: &str = "transparent_color_rgb";

// Output settings
/// File extension for exported tiles
pub const OUTPUT_EXTENSION: &str = "png";

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;
