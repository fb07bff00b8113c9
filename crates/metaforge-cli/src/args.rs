//! Command-line argument definitions for the metaforge CLI.
//!
//! This module defines the [`Args`] structure parsed from the command
//! line using [`clap`]. All arguments have defaults reproducing the
//! original one-shot generator, which took no flags at all and worked on
//! fixed paths relative to its own location.

use clap::Parser;

/// Default input path: the diagram lives two levels above the sql/
/// directory the generator is run from.
pub const DEFAULT_INPUT: &str = "../省中心联网收费业务实体关系图.puml";

/// Default output path, next to the generator.
pub const DEFAULT_OUTPUT: &str = "省中心联网收费业务数据模型-属性补充.sql";

/// Command-line arguments for the metaforge SQL generator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input PlantUML diagram file
    #[arg(default_value = DEFAULT_INPUT, help = "Path to the input diagram file")]
    pub input: String,

    /// Path to the output SQL file
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
