use anyhow::{Context, Result};
use capital_gains::cli::Cli;
use capital_gains::{config, pipeline};
use clap::Parser;
use std::fs::File;
use std::io::{self, BufReader};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging on stderr; stdout carries results only
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let rules = config::load_rules(cli.config.as_deref())?;
    let stdout = io::stdout();

    match cli.input {
        Some(path) => {
            let file = File::open(&path)
                .with_context(|| format!("failed to open input file {}", path.display()))?;
            pipeline::run(BufReader::new(file), stdout.lock(), &rules)?;
        }
        None => {
            pipeline::run(io::stdin().lock(), stdout.lock(), &rules)?;
        }
    }

    Ok(())
}
