use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "agroadvisor",
    version,
    about = "Crop growth and risk advisory from farm telemetry"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config.yaml
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a farm telemetry snapshot (JSON)
    Analyze {
        /// Snapshot file, or an engine input record with --raw
        file: PathBuf,

        /// Crop to analyze, overriding the snapshot and config
        #[arg(long)]
        crop: Option<String>,

        /// Treat the file as an already-aggregated engine input
        #[arg(long)]
        raw: bool,

        /// Print a human-readable report instead of JSON
        #[arg(long)]
        text: bool,
    },
    /// List built-in crop thermal profiles
    Crops,
    /// Validate the config file
    Check,
}
