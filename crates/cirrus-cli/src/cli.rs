use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Top-level CLI parser for the `cirrus` binary.
#[derive(Debug, Parser)]
#[command(
    name = "cirrus",
    version,
    about = "Cirrus - declarative organization and access manifests"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Compose the stack and emit the deployment manifest
    Synth(SynthArgs),
}

#[derive(Debug, Args)]
pub struct SynthArgs {
    /// Write the manifest to this path instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
