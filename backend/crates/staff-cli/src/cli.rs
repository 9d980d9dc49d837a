use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "staff")]
#[command(about = "Inspect, normalize and compare participation request bodies")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Pretty-print JSON output (overrides output.pretty)
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Log level override: off, error, warn, info, debug, trace
    #[arg(long, global = true)]
    pub log_level: Option<String>,
}
