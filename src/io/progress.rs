//! Progress display for batch slicing runs
//!
//! Shows a tile-level bar for the tileset currently being sliced, plus an
//! overall tileset bar when the configuration holds more than a handful of
//! sections.

use crate::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static TILE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg} [{bar:30.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Tilesets: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

/// Coordinates progress display for a slicing run
///
/// One bar tracks tiles within the current tileset; a batch bar tracks
/// sections once their count crosses the individual-bar threshold.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    tile_bar: Option<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            tile_bar: None,
        }
    }

    /// Set up the batch bar based on the number of configured sections
    pub fn initialize(&mut self, section_count: usize) {
        if section_count > MAX_INDIVIDUAL_PROGRESS_BARS {
            let batch_bar = ProgressBar::new(section_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }
    }

    /// Start a fresh tile bar for the named tileset
    pub fn start_tileset(&mut self, name: &str, tile_count: usize) {
        if let Some(previous) = self.tile_bar.take() {
            previous.finish_and_clear();
        }

        let bar = ProgressBar::new(tile_count as u64);
        bar.set_style(TILE_STYLE.clone());
        bar.set_message(name.to_string());
        self.tile_bar = Some(self.multi_progress.add(bar));
    }

    /// Record one written tile
    pub fn tile_written(&self) {
        if let Some(ref bar) = self.tile_bar {
            bar.inc(1);
        }
    }

    /// Mark the current tileset as completed
    pub fn complete_tileset(&mut self) {
        if let Some(bar) = self.tile_bar.take() {
            bar.finish_and_clear();
        }
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }
    }

    /// Print a message without clobbering active bars
    pub fn println(&self, message: &str) {
        let _ = self.multi_progress.println(message);
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All tilesets processed");
        }
        let _ = self.multi_progress.clear();
    }
}
