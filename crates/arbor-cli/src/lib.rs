//! Arbor CLI library
//!
//! This module contains the core CLI logic: reading a tree description,
//! loading configuration and writing the rendered SVG.

pub mod error_adapter;
pub mod input;

mod args;
mod config;
mod error;

pub use args::Args;
pub use config::ConfigError;
pub use error::CliError;

use std::fs;

use log::{debug, info};

use arbor::TreePainter;

use input::TreeFile;

/// Run the Arbor CLI application
///
/// Reads the tree description named by `args.input`, lays it out and writes
/// the resulting SVG to `args.output`.
///
/// # Errors
///
/// Returns `CliError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Invalid tree descriptions
/// - Style and rendering errors
pub fn run(args: &Args) -> Result<(), CliError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing tree"
    );

    let app_config = config::load_config(args.config.as_ref())?;

    let source = fs::read_to_string(&args.input)?;
    let tree = TreeFile::parse(&source)?;
    debug!(present = tree.root().is_some(); "Tree description parsed");

    let painter = TreePainter::new(app_config);
    painter.save_svg(tree.root(), &args.output)?;

    info!(output_file = args.output; "SVG exported successfully");

    Ok(())
}
