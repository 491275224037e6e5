//! INI configuration parsing and validated tileset definitions
//!
//! The configuration file holds one `[section]` per tileset. Parsing is a
//! two-stage process: a raw scan into [`ConfigSection`] values, then a
//! fallible conversion into a validated [`TilesetDefinition`]. Section
//! failures are typed so the caller can report them and keep going.

use crate::io::configuration::{
    KEY_MARGIN, KEY_SPACING, KEY_TILE_HEIGHT, KEY_TILE_WIDTH, KEY_TILESET_NAME, KEY_TILESET_PATH,
    KEY_TRANSPARENT_COLOR,
};
use crate::io::error::{Result, invalid_value, missing_parameter};
use std::collections::HashMap;
use std::path::PathBuf;

/// One named section of the configuration file with its raw entries
///
/// Keys are lowercased and values trimmed during parsing. Lookup failures
/// are left to [`TilesetDefinition::from_section`] so they can carry the
/// section name in the error.
#[derive(Debug, Clone)]
pub struct ConfigSection {
    /// Section name as written between the brackets
    pub name: String,
    entries: HashMap<String, String>,
}

impl ConfigSection {
    /// Create an empty section with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: HashMap::new(),
        }
    }

    /// Add or replace an entry
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Look up an entry by key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

/// Parse the raw text of an INI file into its sections
///
/// Blank lines and lines starting with `;` or `#` are skipped. Both `=` and
/// `:` are accepted as key/value separators. Entries appearing before the
/// first section header are ignored.
pub fn parse_sections(text: &str) -> Vec<ConfigSection> {
    let mut sections: Vec<ConfigSection> = Vec::new();

    for raw_line in text.lines() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
            continue;
        }

        if let Some(name) = line
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
        {
            sections.push(ConfigSection::new(name.trim()));
        } else if let Some((key, value)) = split_entry(line) {
            if let Some(section) = sections.last_mut() {
                section.insert(key, value);
            }
        }
    }

    sections
}

fn split_entry(line: &str) -> Option<(String, String)> {
    let separator = line.find(['=', ':'])?;
    let (key, rest) = line.split_at(separator);
    let value = rest.get(1..).unwrap_or_default();
    Some((key.trim().to_ascii_lowercase(), value.trim().to_string()))
}

/// Validated description of one tileset to slice
///
/// Immutable once parsed; consumed once per run.
#[derive(Debug, Clone)]
pub struct TilesetDefinition {
    /// Tileset name, also used as the output directory
    pub name: String,
    /// Path to the source tileset image
    pub source_path: PathBuf,
    /// Width of a single tile in pixels (non-zero)
    pub tile_width: u32,
    /// Height of a single tile in pixels (non-zero)
    pub tile_height: u32,
    /// Offset from the image edges before the grid begins
    pub margin: u32,
    /// Gap between adjacent tiles, both horizontally and vertically
    pub spacing: u32,
    /// Color treated as transparent in the output, if any
    pub transparent_color: Option<[u8; 3]>,
}

impl TilesetDefinition {
    /// Build a validated definition from a raw configuration section
    ///
    /// # Errors
    ///
    /// Returns [`crate::SlicerError::MissingParameter`] when a required key
    /// is absent and [`crate::SlicerError::InvalidValue`] when a numeric
    /// field does not parse, a tile dimension is zero, or the transparent
    /// color is not three comma-separated channels in 0..=255.
    pub fn from_section(section: &ConfigSection) -> Result<Self> {
        let name = required(section, KEY_TILESET_NAME)?.to_string();
        let source_path = PathBuf::from(required(section, KEY_TILESET_PATH)?);
        let tile_width = dimension(section, KEY_TILE_WIDTH)?;
        let tile_height = dimension(section, KEY_TILE_HEIGHT)?;
        let margin = integer(section, KEY_MARGIN)?;
        let spacing = integer(section, KEY_SPACING)?;
        let transparent_color = color_key(section)?;

        Ok(Self {
            name,
            source_path,
            tile_width,
            tile_height,
            margin,
            spacing,
            transparent_color,
        })
    }
}

fn required<'a>(section: &'a ConfigSection, key: &'static str) -> Result<&'a str> {
    section
        .get(key)
        .ok_or_else(|| missing_parameter(&section.name, key))
}

fn integer(section: &ConfigSection, key: &'static str) -> Result<u32> {
    let raw = required(section, key)?;
    raw.parse()
        .map_err(|error| invalid_value(&section.name, key, &raw, &error))
}

fn dimension(section: &ConfigSection, key: &'static str) -> Result<u32> {
    let value = integer(section, key)?;
    if value == 0 {
        return Err(invalid_value(
            &section.name,
            key,
            &value,
            &"tile dimensions must be positive",
        ));
    }
    Ok(value)
}

// An empty value behaves like an absent key, matching configparser truthiness
fn color_key(section: &ConfigSection) -> Result<Option<[u8; 3]>> {
    let Some(raw) = section.get(KEY_TRANSPARENT_COLOR) else {
        return Ok(None);
    };
    if raw.is_empty() {
        return Ok(None);
    }

    let mut channels = [0u8; 3];
    let mut parts = raw.split(',');
    for channel in &mut channels {
        let part = parts.next().ok_or_else(|| {
            invalid_value(
                &section.name,
                KEY_TRANSPARENT_COLOR,
                &raw,
                &"expected three comma-separated channels",
            )
        })?;
        *channel = part
            .trim()
            .parse()
            .map_err(|error| invalid_value(&section.name, KEY_TRANSPARENT_COLOR, &raw, &error))?;
    }

    if parts.next().is_some() {
        return Err(invalid_value(
            &section.name,
            KEY_TRANSPARENT_COLOR,
            &raw,
            &"expected three comma-separated channels",
        ));
    }

    Ok(Some(channels))
}
