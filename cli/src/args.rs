use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "counterkit")]
#[command(about = "counterkit CLI", long_about = None)]
pub struct Cli {
    /// Config file (defaults to ./counterkit.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    /// Log level: error, warn, info, debug or trace
    #[arg(long, global = true)]
    pub log_level: Option<String>,
    /// Log format: text or json
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Call counter(max_number=..., debug_enable=...) and report the outcome
    Run {
        /// Value for max_number (a literal: 10, 10.5, '10', ...)
        #[arg(long, allow_hyphen_values = true)]
        max_number: Option<String>,
        /// Enable debug output
        #[arg(long, conflicts_with = "no_debug")]
        debug: bool,
        /// Disable debug output
        #[arg(long)]
        no_debug: bool,
    },
    /// Call counter with loosely typed arguments
    Call {
        /// Positional literals or name=literal keywords, e.g. `10 debug_enable=1`
        #[arg(allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Show the package's public surface
    Inspect,
}
