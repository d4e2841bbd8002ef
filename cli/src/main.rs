use anyhow::Result;
use clap::Parser;
use std::io;

mod args;

use args::{Cli, Commands};
use cli::commands::{call, inspect, run};
use cli::config::Config;
use cli::logging::{self, LogOptions};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::discover(cli.config.as_deref())?;
    let log_options = LogOptions::resolve(
        &config.log,
        cli.log_level.as_deref(),
        cli.log_format.as_deref(),
    )?;
    logging::init_logging(&log_options);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &cli.command {
        Commands::Run {
            max_number,
            debug,
            no_debug,
        } => {
            let opts = run::RunOptions {
                max_number: max_number.clone(),
                debug: match (*debug, *no_debug) {
                    (true, _) => Some(true),
                    (_, true) => Some(false),
                    _ => None,
                },
            };
            run::run_counter(&config.call, &opts, &mut out)?;
        }
        Commands::Call { args } => {
            call::call_counter(args, &mut out)?;
        }
        Commands::Inspect => inspect::inspect(&mut out)?,
    }
    Ok(())
}
