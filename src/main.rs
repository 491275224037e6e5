//! CLI entry point for the tileset slicing tool

use clap::Parser;
use tilesplit::io::cli::{Cli, TilesetProcessor};

// Errors are reported to the user; the run itself always exits cleanly
#[allow(clippy::print_stderr)]
fn main() {
    let cli = Cli::parse();
    let mut processor = TilesetProcessor::new(cli);
    if let Err(error) = processor.process() {
        eprintln!("Error: {error}");
    }
}
