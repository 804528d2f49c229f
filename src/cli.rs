use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Lunisol lunar anniversary converter.
#[derive(Parser)]
#[command(
    name = "lunisol",
    version,
    about = "Convert lunar anniversaries to solar dates with D-Day countdowns"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Resolve the anniversary over the year window and print the table.
    Convert(ConvertArgs),
    /// Resolve and export as calendar-importable CSV.
    Export(ExportArgs),
}

/// Arguments for the `convert` subcommand.
#[derive(clap::Args)]
pub struct ConvertArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "lunisol.toml")]
    pub config: PathBuf,

    /// Anniversary title.
    #[arg(short, long)]
    pub title: String,

    /// Lunar month (1-12).
    #[arg(short, long)]
    pub month: u8,

    /// Lunar day (1-30).
    #[arg(short, long)]
    pub day: u8,

    /// Override reference table path from config (default: bundled data).
    #[arg(long)]
    pub table: Option<PathBuf>,

    /// Fix "today" (YYYY-MM-DD) for deterministic output; defaults to the
    /// system date.
    #[arg(long)]
    pub today: Option<String>,
}

/// Arguments for the `export` subcommand.
#[derive(clap::Args)]
pub struct ExportArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "lunisol.toml")]
    pub config: PathBuf,

    /// Anniversary title.
    #[arg(short, long)]
    pub title: String,

    /// Lunar month (1-12).
    #[arg(short, long)]
    pub month: u8,

    /// Lunar day (1-30).
    #[arg(short, long)]
    pub day: u8,

    /// Override reference table path from config (default: bundled data).
    #[arg(long)]
    pub table: Option<PathBuf>,

    /// Fix "today" (YYYY-MM-DD) for deterministic output; defaults to the
    /// system date.
    #[arg(long)]
    pub today: Option<String>,

    /// Path for the CSV file (default: filename derived from the title).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Stream the CSV to stdout instead of a file (clipboard piping).
    #[arg(long)]
    pub stdout: bool,
}
