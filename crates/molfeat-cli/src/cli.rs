use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "molfeat CLI - Builds atom- and orbital-level feature matrices from molecular structure files for partial-charge estimation methods.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build feature representations for every molecule in a structure file.
    Build(BuildArgs),
    /// Validate and summarize the reference tables.
    Tables(TablesArgs),
}

/// Feature representations selectable on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureKind {
    /// Typed atom entries with coordinates and an element histogram.
    Typed,
    /// Coarse atom-level bond/bond-count matrices.
    Adjacency,
    /// Orbital-expanded matrices with electronegativity/hardness columns.
    Orbital,
}

/// Arguments for the `build` subcommand.
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Path to the input molecular structure file (SDF).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Path to the main configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Feature representations to build, overriding the config file.
    #[arg(short, long, value_enum, value_name = "KIND", num_args(1..))]
    pub features: Vec<FeatureKind>,

    /// Key element histograms by element alone, ignoring bond types.
    #[arg(long)]
    pub element_only: bool,

    /// Override the element reference table.
    #[arg(long, value_name = "PATH")]
    pub elements: Option<PathBuf>,

    /// Override the valence-state reference table.
    #[arg(long, value_name = "PATH")]
    pub states: Option<PathBuf>,

    /// Load an electronegativity-equalization parameter file alongside the
    /// structures.
    #[arg(short, long, value_name = "PATH")]
    pub parameters: Option<PathBuf>,
}

/// Arguments for the `tables` subcommand.
#[derive(Args, Debug)]
pub struct TablesArgs {
    /// Path to the main configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the element reference table.
    #[arg(long, value_name = "PATH")]
    pub elements: Option<PathBuf>,

    /// Override the valence-state reference table.
    #[arg(long, value_name = "PATH")]
    pub states: Option<PathBuf>,
}
