//! Command-line argument definitions for the Arbor CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, the input shape,
//! configuration overrides, and logging verbosity.

use clap::Parser;

use arbor::direction::Direction;

/// Command-line arguments for the Arbor layout tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input JSON file
    #[arg(help = "Path to the input file")]
    pub input: String,

    /// Path to the output layout JSON file
    #[arg(short, long, default_value = "layout.json")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Read nested domains with inline sub-domains instead of flat records
    #[arg(long)]
    pub nested: bool,

    /// Layout direction (top-to-bottom, left-to-right), overrides the config
    #[arg(long)]
    pub direction: Option<Direction>,

    /// Let all roots share level rows instead of stacking them
    #[arg(long)]
    pub shared_levels: bool,

    /// Fail when a record references a parent that does not exist
    #[arg(long)]
    pub deny_dangling: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Args {
    /// Creates arguments for `input` with every option at its default.
    pub fn new(input: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            config: None,
            nested: false,
            direction: None,
            shared_levels: false,
            deny_dangling: false,
            log_level: "info".to_string(),
        }
    }
}
