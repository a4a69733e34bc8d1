use clap::Parser;
use std::path::PathBuf;

pub mod formatters;

#[derive(Parser, Debug)]
#[command(name = "capital-gains")]
#[command(
    version,
    about = "Capital gains tax calculator for stock operations"
)]
#[command(
    long_about = "Reads one JSON list of buy/sell operations per line and prints the tax due on each operation, using weighted average cost, loss carryforward and the per-sale exemption threshold. Input ends at the first empty line."
)]
pub struct Cli {
    /// Read operations from this file instead of standard input
    pub input: Option<PathBuf>,

    /// TOML file overriding the tax rate and exemption threshold
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log calculation details to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["capital-gains"]).unwrap();
        assert!(cli.input.is_none());
        assert!(cli.config.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_cli_arguments() {
        let cli = Cli::try_parse_from([
            "capital-gains",
            "ops.txt",
            "--config",
            "rules.toml",
            "-v",
        ])
        .unwrap();
        assert_eq!(cli.input, Some(PathBuf::from("ops.txt")));
        assert_eq!(cli.config, Some(PathBuf::from("rules.toml")));
        assert!(cli.verbose);
    }
}
