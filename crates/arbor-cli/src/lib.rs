//! CLI logic for the Arbor layout tool.
//!
//! Reads domain records from a JSON file, lays them out, and writes the
//! resulting positions and edges as JSON.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::info;

use arbor::{
    ArborError, LayoutBuilder,
    config::{AppConfig, LayoutConfig},
    structure::Forest,
};

/// Run the Arbor CLI application
///
/// This function processes the input file through the Arbor pipeline
/// and writes the resulting layout to the output file.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `ArborError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Decoding errors
/// - Unresolved parents when `--deny-dangling` is set
pub fn run(args: &Args) -> Result<(), ArborError> {
    info!(
        input_path = args.input,
        output_path = args.output,
        nested = args.nested;
        "Processing records"
    );

    let app_config = apply_overrides(config::load_config(args.config.as_ref())?, args);

    let source = fs::read_to_string(&args.input)?;

    let builder = LayoutBuilder::new(app_config);
    let records = if args.nested {
        builder.parse_domains(&source)?
    } else {
        builder.parse_records(&source)?
    };

    let forest = Forest::from_records(&records);
    if args.deny_dangling {
        forest.ensure_resolved()?;
    }

    let layout = builder.compute_forest(&forest);

    fs::write(&args.output, layout.to_json_pretty()?)?;

    info!(output_file = args.output, nodes = layout.len(); "Layout exported successfully");

    Ok(())
}

/// Applies command-line overrides on top of the loaded configuration.
fn apply_overrides(config: AppConfig, args: &Args) -> AppConfig {
    let mut layout: LayoutConfig = config.into_layout();

    if let Some(direction) = args.direction {
        layout = layout.with_direction(direction);
    }

    if args.shared_levels {
        layout = layout.with_stack_roots_vertically(false);
    }

    AppConfig::new(layout)
}
