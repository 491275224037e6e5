//! Command-line interface for batch slicing of configured tilesets

use crate::io::config::{ConfigSection, TilesetDefinition, parse_sections};
use crate::io::configuration::DEFAULT_CONFIG_FILE;
use crate::io::error::{Result, SlicerError};
use crate::io::image::{ensure_output_dir, load_rgba, save_tile};
use crate::io::progress::ProgressManager;
use crate::slicer::colorkey::apply_color_key;
use crate::slicer::crop::crop_region;
use crate::slicer::grid::GridSlicer;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tilesplit")]
#[command(
    author,
    version,
    about = "Slice tileset images into individual tile files"
)]
/// Command-line arguments for the tileset slicing tool
pub struct Cli {
    /// INI configuration file describing the tilesets
    #[arg(value_name = "CONFIG", default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Suppress progress and summary output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Orchestrates slicing of every configured tileset
///
/// Sections are processed strictly in file order. A failing section is
/// reported and skipped; it never aborts the rest of the run.
pub struct TilesetProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl TilesetProcessor {
    /// Create a new processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process every configuration section in order
    ///
    /// # Errors
    ///
    /// Returns an error only when the configuration file itself is missing
    /// or unreadable; per-section failures are reported and swallowed.
    pub fn process(&mut self) -> Result<()> {
        if !self.cli.config.exists() {
            return Err(SlicerError::ConfigMissing {
                path: self.cli.config.clone(),
            });
        }

        let text =
            std::fs::read_to_string(&self.cli.config).map_err(|source| SlicerError::FileSystem {
                path: self.cli.config.clone(),
                operation: "read configuration",
                source,
            })?;

        let sections = parse_sections(&text);
        if sections.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(sections.len());
        }

        for section in &sections {
            if let Err(error) = self.process_section(section) {
                self.report_error(&section.name, &error);
            }
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn process_section(&mut self, section: &ConfigSection) -> Result<()> {
        let definition = TilesetDefinition::from_section(section)?;
        let output_dir = PathBuf::from(&definition.name);

        self.report(&format!(
            "Processing tileset: {} -> {}",
            definition.source_path.display(),
            output_dir.display()
        ));

        let source = load_rgba(&definition.source_path)?;
        ensure_output_dir(&output_dir)?;

        let slicer = GridSlicer::new(
            source.width(),
            source.height(),
            definition.tile_width,
            definition.tile_height,
            definition.margin,
            definition.spacing,
        );

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_tileset(&definition.name, slicer.tile_count());
        }

        let mut written = 0usize;
        for region in slicer {
            let mut tile = crop_region(&source, region);
            if let Some(key) = definition.transparent_color {
                apply_color_key(&mut tile, key);
            }
            written += 1;
            save_tile(&tile, &output_dir, written)?;
            if let Some(ref pm) = self.progress_manager {
                pm.tile_written();
            }
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_tileset();
        }

        self.report(&format!(
            "Saved {written} tiles to {}",
            output_dir.display()
        ));

        Ok(())
    }

    // Info messages follow the progress display and disappear with --quiet
    fn report(&self, message: &str) {
        if let Some(ref pm) = self.progress_manager {
            pm.println(message);
        }
    }

    // Section errors are always printed, even in quiet mode
    #[allow(clippy::print_stderr)]
    fn report_error(&self, section: &str, error: &SlicerError) {
        let message = format!("Error in section '{section}': {error}");
        if let Some(ref pm) = self.progress_manager {
            pm.println(&message);
        } else {
            eprintln!("{message}");
        }
    }
}
