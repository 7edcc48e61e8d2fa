use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "ovl",
    about = "Overlay — layered JSON configuration merging",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Merge a base document with one or more overlays
    Merge(MergeArgs),
    /// Validate that documents parse as JSON objects
    Check(CheckArgs),
}

#[derive(Args)]
pub struct MergeArgs {
    /// The base document
    pub base: PathBuf,

    /// Overlay documents, applied in order; later overlays win
    #[arg(required = true)]
    pub overlays: Vec<PathBuf>,

    /// Write the merged document here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print merge statistics
    #[arg(long)]
    pub stats: bool,
}

#[derive(Args)]
pub struct CheckArgs {
    /// Documents to validate
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,
}
